//! Shared domain entities
//!
//! Value objects used across the service DTOs. Each entity is tagged at
//! construction with the owning [`Service`](crate::Service) and a
//! [`PropType`](crate::PropType) discriminator; the tags are construction
//! metadata and never serialize. Fields left unset are omitted from the wire
//! form, never sent as empty strings.

mod address;
mod checkout;
mod content;
mod coordinates;
mod customer;
mod cutoff;
mod message;
mod shipment;
mod timeframe;

pub use address::Address;
pub use checkout::{CheckoutTimeframe, DeliveryOption, PickupLocation, PickupOption, Warning};
pub use content::Content;
pub use coordinates::{Area, Coordinates};
pub use customer::Customer;
pub use cutoff::CutOffTime;
pub use message::Message;
pub use shipment::{Dimension, Label, ResponseShipment, Shipment};
pub use timeframe::{ReasonNoTimeframe, Timeframe, TimeframeTimeFrame, TimeframeTimeFrames};
