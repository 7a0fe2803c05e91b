//! Investment pricing bands per complexity tier.

use crate::error::Result;
use crate::model::Level;
use serde::{Deserialize, Serialize};

/// Setup and monthly fee bounds for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub setup_min: f64,
    pub setup_max: f64,
    pub monthly_min: f64,
    pub monthly_max: f64,
    /// Lowest complexity score expected in this tier
    pub score_floor: u8,
}

impl PriceBand {
    pub fn contains_setup(&self, setup: f64) -> bool {
        (self.setup_min..=self.setup_max).contains(&setup)
    }

    pub fn contains_monthly(&self, monthly: f64) -> bool {
        (self.monthly_min..=self.monthly_max).contains(&monthly)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingBands {
    pub low: PriceBand,
    pub medium: PriceBand,
    pub high: PriceBand,
    /// Complexity points covered by one tier; the interpolation divisor
    pub score_span: f64,
}

impl Default for PricingBands {
    fn default() -> Self {
        Self {
            low: PriceBand {
                setup_min: 2_000.0,
                setup_max: 4_000.0,
                monthly_min: 1_500.0,
                monthly_max: 3_000.0,
                score_floor: 1,
            },
            medium: PriceBand {
                setup_min: 5_000.0,
                setup_max: 10_000.0,
                monthly_min: 3_500.0,
                monthly_max: 7_000.0,
                score_floor: 4,
            },
            high: PriceBand {
                setup_min: 10_000.0,
                setup_max: 25_000.0,
                monthly_min: 8_000.0,
                monthly_max: 15_000.0,
                score_floor: 7,
            },
            score_span: 3.0,
        }
    }
}

impl PricingBands {
    pub fn band(&self, tier: Level) -> &PriceBand {
        match tier {
            Level::Low => &self.low,
            Level::Medium => &self.medium,
            Level::High => &self.high,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for tier in Level::ALL {
            let band = self.band(*tier);
            if band.setup_min < 0.0 || band.monthly_min < 0.0 {
                return Err(super::invalid_config(
                    "pricing",
                    format!("{tier} band has a negative minimum"),
                ));
            }
            if band.setup_min > band.setup_max || band.monthly_min > band.monthly_max {
                return Err(super::invalid_config(
                    "pricing",
                    format!("{tier} band has min above max"),
                ));
            }
        }
        if self.score_span <= 0.0 {
            return Err(super::invalid_config(
                "pricing.score_span",
                "must be positive",
            ));
        }
        Ok(())
    }
}
