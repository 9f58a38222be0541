pub mod billing;
pub mod codec;
pub mod inventory;
pub mod persistence;

pub use crate::domain::model::{BoatRecord, PlacementPayload, PlacementType};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
