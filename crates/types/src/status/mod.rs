//! Shipping status (tracking) DTOs

mod request;
mod response;

pub use request::CurrentStatusRequest;
pub use response::{CurrentStatusResponse, ShipmentStatus, StatusDetail};
