use crate::core::{BoatRecord, PlacementType};
use crate::utils::error::Result;
use crate::utils::validation::{validate_rate, Validate};
use serde::{Deserialize, Serialize};

/// Monthly charge per foot of boat length, by placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub slip: f64,
    pub land: f64,
    pub trailor: f64,
    pub storage: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            slip: 12.50,
            land: 14.00,
            trailor: 25.00,
            storage: 11.20,
        }
    }
}

impl RateTable {
    /// Boats without a placement are never charged.
    pub fn rate_for(&self, placement: PlacementType) -> f64 {
        match placement {
            PlacementType::Slip => self.slip,
            PlacementType::Land => self.land,
            PlacementType::Trailor => self.trailor,
            PlacementType::Storage => self.storage,
            PlacementType::NoPlace => 0.0,
        }
    }

    pub fn monthly_charge(&self, record: &BoatRecord) -> f64 {
        record.length * self.rate_for(record.placement())
    }
}

impl Validate for RateTable {
    fn validate(&self) -> Result<()> {
        validate_rate("rates.slip", self.slip)?;
        validate_rate("rates.land", self.land)?;
        validate_rate("rates.trailor", self.trailor)?;
        validate_rate("rates.storage", self.storage)?;
        Ok(())
    }
}
