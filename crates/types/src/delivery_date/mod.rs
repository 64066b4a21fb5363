//! Delivery date service DTOs

mod request;
mod response;

pub use request::{CalculateDeliveryDateRequest, CalculateShippingDateRequest};
pub use response::{CalculateDeliveryDateResponse, CalculateShippingDateResponse};
