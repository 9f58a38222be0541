//! The in-memory marina inventory.
//!
//! An [`Inventory`] is a capacity-bounded, ordered list of [`BoatRecord`]s
//! keyed by case-insensitive boat name. It performs no synchronisation;
//! share it across threads only behind your own lock.

use crate::core::billing::RateTable;
use crate::core::codec;
use crate::core::BoatRecord;
use crate::utils::error::{MarinaError, Result};

pub const DEFAULT_CAPACITY: usize = 120;

#[derive(Debug, Clone)]
pub struct Inventory {
    records: Vec<BoatRecord>,
    capacity: usize,
    rates: RateTable,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            rates: RateTable::default(),
        }
    }

    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Records in storage order.
    pub fn records(&self) -> &[BoatRecord] {
        &self.records
    }

    /// Appends an already-built record.
    ///
    /// Duplicate names are accepted, but name lookups only ever see the first.
    pub fn insert(&mut self, record: BoatRecord) -> Result<&BoatRecord> {
        if self.is_full() {
            tracing::warn!(
                "Rejecting '{}': marina is full ({} boats)",
                record.name(),
                self.capacity
            );
            return Err(MarinaError::Full {
                capacity: self.capacity,
            });
        }
        if self.find(record.name()).is_some() {
            tracing::warn!("A boat named '{}' is already registered", record.name());
        }

        tracing::debug!("Adding boat '{}' ({})", record.name(), record.placement());
        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Decodes a CSV record line and appends it. Capacity is checked first.
    pub fn add(&mut self, line: &str) -> Result<&BoatRecord> {
        if self.is_full() {
            tracing::warn!("Rejecting new boat: marina is full ({} boats)", self.capacity);
            return Err(MarinaError::Full {
                capacity: self.capacity,
            });
        }
        let record = codec::decode_line(line)?;
        self.insert(record)
    }

    pub fn find(&self, name: &str) -> Option<&BoatRecord> {
        self.records.iter().find(|record| record.is_named(name))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut BoatRecord> {
        self.records
            .iter_mut()
            .find(|record| record.is_named(name))
            .ok_or_else(|| MarinaError::NotFound {
                name: name.to_string(),
            })
    }

    /// Removes the first boat with this name. The remaining order is kept.
    pub fn remove(&mut self, name: &str) -> Result<BoatRecord> {
        match self.records.iter().position(|record| record.is_named(name)) {
            Some(index) => {
                let removed = self.records.remove(index);
                tracing::debug!("Removed boat '{}'", removed.name());
                Ok(removed)
            }
            None => {
                tracing::debug!("No boat named '{}' to remove", name);
                Err(MarinaError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// All records ordered by name, ignoring case. Ties keep storage order.
    pub fn list_sorted_by_name(&self) -> Vec<&BoatRecord> {
        let mut sorted: Vec<&BoatRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_name(b));
        sorted
    }

    /// Subtracts `amount` from the named boat's balance and returns the new balance.
    ///
    /// A payment larger than the balance is rejected with
    /// [`MarinaError::ExceedsOwed`] and leaves the balance untouched, so the
    /// balance never goes negative through a payment.
    pub fn accept_payment(&mut self, name: &str, amount: f64) -> Result<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(MarinaError::InvalidAmount { amount });
        }

        let record = self.find_mut(name)?;
        if amount > record.amount_owed {
            tracing::debug!(
                "Payment of {:.2} for '{}' exceeds balance {:.2}",
                amount,
                record.name(),
                record.amount_owed
            );
            return Err(MarinaError::ExceedsOwed {
                owed: record.amount_owed,
            });
        }

        record.amount_owed -= amount;
        tracing::debug!(
            "Accepted {:.2} from '{}', now owes {:.2}",
            amount,
            record.name(),
            record.amount_owed
        );
        Ok(record.amount_owed)
    }

    /// Bills one month to every boat and returns the total charged.
    ///
    /// Each call bills another month.
    pub fn apply_monthly_charges(&mut self) -> f64 {
        let rates = self.rates;
        let mut total = 0.0;
        for record in &mut self.records {
            let charge = rates.monthly_charge(record);
            record.amount_owed += charge;
            total += charge;
        }
        tracing::info!(
            "Applied monthly charges of {:.2} across {} boats",
            total,
            self.records.len()
        );
        total
    }
}
