// Domain layer: boat records and the storage port. Nothing here touches the filesystem.

pub mod model;
pub mod ports;
