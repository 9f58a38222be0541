//! Marina boat inventory: placement-typed boat records, their CSV line
//! format, and the balance and monthly-charge operations over them.
//!
//! An [`Inventory`] is owned by a single caller and is not safe for
//! unsynchronised concurrent use.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::toml_config::MarinaConfig;
pub use crate::core::billing::RateTable;
pub use crate::core::inventory::Inventory;
pub use crate::core::persistence::{load, save, LoadReport};
pub use crate::domain::model::{BoatRecord, PlacementPayload, PlacementType};
pub use crate::utils::error::{MarinaError, Result};
