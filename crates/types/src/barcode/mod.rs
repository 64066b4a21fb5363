//! Barcode service DTOs

mod request;
mod response;

pub use request::GenerateBarcodeRequest;
pub use response::GenerateBarcodeResponse;
