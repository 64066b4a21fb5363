//! Checkout service DTOs

mod request;
mod response;

pub use request::GetDeliveryInformationRequest;
pub use response::GetDeliveryInformationResponse;
