use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Already-encoded JSON document.
    Json(String),
    /// Human-readable text. May be empty.
    Message(String),
}

/// The `(status, body)` pair produced for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: StatusCode,
    pub payload: Payload,
}

impl Outcome {
    pub fn json(status: StatusCode, body: String) -> Self {
        Self {
            status,
            payload: Payload::Json(body),
        }
    }

    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: Payload::Message(message.into()),
        }
    }

    pub fn text(&self) -> &str {
        match &self.payload {
            Payload::Json(body) | Payload::Message(body) => body,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self.payload {
            Payload::Json(body) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            // Headers only, zero content length.
            Payload::Message(message) if message.is_empty() => {
                (self.status, Body::empty()).into_response()
            }
            Payload::Message(message) => (
                self.status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
        }
    }
}
