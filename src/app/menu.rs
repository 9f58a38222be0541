//! Interactive single-letter command loop over an [`Inventory`].
//!
//! The menu only reads commands, calls inventory operations and prints their
//! outcome. Saving on exit is left to the caller.

use crate::core::inventory::Inventory;
use crate::core::{BoatRecord, PlacementPayload};
use crate::utils::error::{MarinaError, Result};
use crate::utils::lenient::lenient_f64;
use std::io::{BufRead, Write};

const PROMPT: &str = "\n(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it: ";

pub struct Menu<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Runs until `x` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let Some(choice) = line.chars().next() else {
                continue;
            };

            match choice.to_ascii_lowercase() {
                'i' => self.print_inventory()?,
                'a' => {
                    if !self.add_boat()? {
                        return Ok(());
                    }
                }
                'r' => {
                    if !self.remove_boat()? {
                        return Ok(());
                    }
                }
                'p' => {
                    if !self.accept_payment()? {
                        return Ok(());
                    }
                }
                'm' => {
                    self.inventory.apply_monthly_charges();
                }
                'x' => return Ok(()),
                _ => writeln!(self.output, "Invalid option '{}'", choice)?,
            }
        }
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    fn print_inventory(&mut self) -> Result<()> {
        for record in self.inventory.list_sorted_by_name() {
            writeln!(self.output, "{}", format_row(record))?;
        }
        Ok(())
    }

    // The command handlers return false when input ran out mid-command.

    fn add_boat(&mut self) -> Result<bool> {
        let Some(line) = self.prompt("Please enter the boat data in CSV format: ")? else {
            return Ok(false);
        };
        if let Err(e) = self.inventory.add(&line) {
            self.report(e)?;
        }
        Ok(true)
    }

    fn remove_boat(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Please enter the boat name: ")? else {
            return Ok(false);
        };
        if let Err(e) = self.inventory.remove(&name) {
            self.report(e)?;
        }
        Ok(true)
    }

    fn accept_payment(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Please enter the boat name: ")? else {
            return Ok(false);
        };
        if self.inventory.find(&name).is_none() {
            self.report(MarinaError::NotFound { name })?;
            return Ok(true);
        }

        let Some(amount) = self.prompt("Please enter the amount to be paid: ")? else {
            return Ok(false);
        };
        if let Err(e) = self.inventory.accept_payment(&name, lenient_f64(&amount)) {
            self.report(e)?;
        }
        Ok(true)
    }

    /// Prints a rejected operation. Storage failures are not expected here and propagate.
    fn report(&mut self, error: MarinaError) -> Result<()> {
        match error {
            MarinaError::IoError(_) | MarinaError::CsvError(_) => Err(error),
            other => {
                tracing::debug!("Menu operation rejected: {}", other);
                writeln!(self.output, "{}", other.user_friendly_message())?;
                Ok(())
            }
        }
    }
}

/// One inventory line, e.g. `Big Brother            20' slip    # 27    Owes $1200.00`.
pub fn format_row(record: &BoatRecord) -> String {
    let info = match &record.payload {
        PlacementPayload::Slip { number } => format!("# {:<3}   ", number),
        PlacementPayload::Land { bay } => format!("   {}    ", bay),
        PlacementPayload::Trailor { tag } => format!("{:<7} ", tag),
        PlacementPayload::Storage { space } => format!("# {:<3}   ", space),
        PlacementPayload::NoPlace => "N/A       ".to_string(),
    };

    format!(
        "{:<20} {:>4.0}' {:<7} {}Owes ${:>7.2}",
        record.name(),
        record.length,
        record.placement(),
        info,
        record.amount_owed
    )
}
