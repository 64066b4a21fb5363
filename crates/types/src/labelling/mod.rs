//! Labelling service DTOs

mod request;
mod response;

pub use request::GenerateLabelRequest;
pub use response::GenerateLabelResponse;
