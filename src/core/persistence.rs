use crate::core::codec;
use crate::core::inventory::Inventory;
use crate::core::Storage;
use crate::utils::error::{MarinaError, Result};
use std::io::{Read, Write};
use std::path::Path;

/// What happened while loading a data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Lines that could not be turned into a record and were dropped.
    pub skipped: usize,
    /// The inventory filled up before the end of the file.
    pub full: bool,
}

/// Appends every record readable from `reader` to `inventory`.
///
/// Bad lines are skipped with a warning. Reading stops, keeping what was
/// already loaded, once the inventory is full. Only I/O failures abort.
pub fn read_into<R: Read>(inventory: &mut Inventory, reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, row) in codec::read_records(reader).enumerate() {
        if inventory.is_full() {
            tracing::warn!(
                "Marina is full, ignoring record {} and any after it",
                index + 1
            );
            report.full = true;
            break;
        }

        match row {
            Ok(record) => {
                inventory.insert(record)?;
                report.loaded += 1;
            }
            Err(MarinaError::CsvError(e)) if e.is_io_error() => {
                return Err(MarinaError::CsvError(e));
            }
            Err(e) => {
                tracing::warn!("Skipping record {}: {}", index + 1, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

pub fn write_inventory<W: Write>(inventory: &Inventory, writer: W) -> Result<()> {
    codec::write_records(writer, inventory.records())
}

/// Loads the data file at `path` into the empty `inventory` template.
pub fn load<S: Storage>(
    storage: &S,
    path: &Path,
    mut inventory: Inventory,
) -> Result<(Inventory, LoadReport)> {
    let data = storage.read_file(path)?;
    let report = read_into(&mut inventory, data.as_slice())?;

    tracing::info!(
        "Loaded {} boats from {} ({} skipped{})",
        report.loaded,
        path.display(),
        report.skipped,
        if report.full { ", marina full" } else { "" }
    );
    Ok((inventory, report))
}

/// Rewrites the data file with every record in storage order.
pub fn save<S: Storage>(storage: &S, path: &Path, inventory: &Inventory) -> Result<()> {
    let mut buffer = Vec::new();
    write_inventory(inventory, &mut buffer)?;
    storage.write_file(path, &buffer)?;

    tracing::info!("Saved {} boats to {}", inventory.len(), path.display());
    Ok(())
}
