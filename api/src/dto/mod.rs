mod requests;
mod responses;

pub use requests::CommentRequest;
pub use responses::{Outcome, Payload};
