//! Timeframe service DTOs

mod request;
mod response;

pub use request::GetTimeframes;
pub use response::{ReasonNoTimeframes, ResponseTimeframes, Timeframes};
