//! Coefficients for the ROI pipeline.

use super::{check_complete, check_non_negative};
use crate::error::Result;
use crate::model::{AutomationArea, CompanySize, Industry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category coefficients and scalar constants used by the potential,
/// complexity and value stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiTables {
    /// Automatable share of each area's manual work, in percent
    pub area_efficiency: BTreeMap<AutomationArea, f64>,
    /// Applied to the averaged area efficiency (1.10-1.40)
    pub industry_multiplier: BTreeMap<Industry, f64>,
    /// Value of freed time relative to its cost, by industry (1.5-4.0)
    pub industry_opportunity: BTreeMap<Industry, f64>,
    /// Organizational breadth multiplier for freed time (1.0-1.8)
    pub size_opportunity: BTreeMap<CompanySize, f64>,
    /// Representative headcount of each size band
    pub bucket_employees: BTreeMap<CompanySize, u32>,
    /// Added to the complexity score (0-2)
    pub industry_complexity_weight: BTreeMap<Industry, u8>,
    /// Added to the complexity score (0-3)
    pub size_complexity_weight: BTreeMap<CompanySize, u8>,

    pub efficiency_cap: f64,
    pub weeks_per_year: f64,
    pub weeks_per_month: f64,
    pub annual_hours_per_employee: f64,
    /// Revenue generated per dollar of labor cost
    pub revenue_per_labor_dollar: f64,
    pub productivity_base: f64,
    pub productivity_per_area: f64,
    pub productivity_cap: f64,
    /// Errors cost this much more to fix than to prevent
    pub error_cost_multiplier: f64,
    pub error_reduction_per_point: f64,
    pub max_error_reduction_percent: f64,
}

impl Default for RoiTables {
    fn default() -> Self {
        use AutomationArea::*;
        use CompanySize::*;
        use Industry::*;

        Self {
            area_efficiency: BTreeMap::from([
                (CustomerService, 60.0),
                (LeadManagement, 70.0),
                (DataEntry, 85.0),
                (Reporting, 75.0),
                (Scheduling, 85.0),
                (Billing, 70.0),
                (Inventory, 65.0),
                (HrProcesses, 60.0),
                (Marketing, 55.0),
                (Accounting, 70.0),
            ]),
            industry_multiplier: BTreeMap::from([
                (ProfessionalServices, 1.30),
                (Healthcare, 1.15),
                (Ecommerce, 1.35),
                (Manufacturing, 1.20),
                (Finance, 1.25),
                (Technology, 1.40),
                (Education, 1.10),
                (Other, 1.10),
            ]),
            industry_opportunity: BTreeMap::from([
                (ProfessionalServices, 3.0),
                (Healthcare, 2.5),
                (Ecommerce, 2.0),
                (Manufacturing, 1.8),
                (Finance, 3.5),
                (Technology, 4.0),
                (Education, 1.5),
                (Other, 2.0),
            ]),
            size_opportunity: BTreeMap::from([
                (Micro, 1.0),
                (Small, 1.2),
                (Medium, 1.4),
                (Large, 1.6),
                (Enterprise, 1.8),
            ]),
            bucket_employees: BTreeMap::from([
                (Micro, 5),
                (Small, 30),
                (Medium, 125),
                (Large, 600),
                (Enterprise, 1500),
            ]),
            industry_complexity_weight: BTreeMap::from([
                (ProfessionalServices, 1),
                (Healthcare, 2),
                (Ecommerce, 1),
                (Manufacturing, 1),
                (Finance, 2),
                (Technology, 0),
                (Education, 0),
                (Other, 1),
            ]),
            size_complexity_weight: BTreeMap::from([
                (Micro, 0),
                (Small, 1),
                (Medium, 1),
                (Large, 2),
                (Enterprise, 3),
            ]),
            efficiency_cap: 85.0,
            weeks_per_year: 52.0,
            weeks_per_month: 4.3,
            annual_hours_per_employee: 2000.0,
            revenue_per_labor_dollar: 2.5,
            productivity_base: 0.15,
            productivity_per_area: 0.03,
            productivity_cap: 0.30,
            error_cost_multiplier: 2.5,
            error_reduction_per_point: 8.0,
            max_error_reduction_percent: 90.0,
        }
    }
}

impl RoiTables {
    pub fn validate(&self) -> Result<()> {
        check_complete("area_efficiency", &self.area_efficiency, AutomationArea::ALL)?;
        check_complete("industry_multiplier", &self.industry_multiplier, Industry::ALL)?;
        check_complete("industry_opportunity", &self.industry_opportunity, Industry::ALL)?;
        check_complete("size_opportunity", &self.size_opportunity, CompanySize::ALL)?;
        check_complete("bucket_employees", &self.bucket_employees, CompanySize::ALL)?;
        check_complete(
            "industry_complexity_weight",
            &self.industry_complexity_weight,
            Industry::ALL,
        )?;
        check_complete(
            "size_complexity_weight",
            &self.size_complexity_weight,
            CompanySize::ALL,
        )?;

        for (name, values) in [
            ("area_efficiency", self.area_efficiency.values().copied().collect::<Vec<_>>()),
            ("industry_multiplier", self.industry_multiplier.values().copied().collect()),
            ("industry_opportunity", self.industry_opportunity.values().copied().collect()),
            ("size_opportunity", self.size_opportunity.values().copied().collect()),
        ] {
            check_non_negative(name, values)?;
        }

        if self.bucket_employees.values().any(|&count| count == 0) {
            return Err(super::invalid_config(
                "bucket_employees",
                "every size band needs a positive headcount",
            ));
        }
        if !(0.0..=100.0).contains(&self.efficiency_cap) {
            return Err(super::invalid_config(
                "efficiency_cap",
                "must be between 0 and 100",
            ));
        }
        if !(0.0..=100.0).contains(&self.max_error_reduction_percent) {
            return Err(super::invalid_config(
                "max_error_reduction_percent",
                "must be between 0 and 100",
            ));
        }
        check_non_negative(
            "scalar constants",
            [
                self.weeks_per_year,
                self.weeks_per_month,
                self.annual_hours_per_employee,
                self.revenue_per_labor_dollar,
                self.productivity_base,
                self.productivity_per_area,
                self.productivity_cap,
                self.error_cost_multiplier,
                self.error_reduction_per_point,
            ],
        )
    }
}

/// Rules for the additive confidence heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceRules {
    pub base_score: u8,
    /// Industries with enough past engagements to trust the coefficients
    pub well_understood_industries: Vec<Industry>,
    pub industry_bonus: u8,
    pub typical_area_count: (usize, usize),
    pub area_bonus: u8,
    pub typical_manual_hours: (f64, f64),
    pub hours_bonus: u8,
    pub high_threshold: u8,
    pub medium_threshold: u8,
}

impl Default for ConfidenceRules {
    fn default() -> Self {
        Self {
            base_score: 50,
            well_understood_industries: vec![
                Industry::ProfessionalServices,
                Industry::Ecommerce,
                Industry::Technology,
            ],
            industry_bonus: 15,
            typical_area_count: (2, 4),
            area_bonus: 20,
            typical_manual_hours: (5.0, 40.0),
            hours_bonus: 15,
            high_threshold: 80,
            medium_threshold: 60,
        }
    }
}

impl ConfidenceRules {
    pub fn validate(&self) -> Result<()> {
        let max_score = self.base_score as u32
            + self.industry_bonus as u32
            + self.area_bonus as u32
            + self.hours_bonus as u32;
        if max_score > 100 {
            return Err(super::invalid_config(
                "confidence",
                format!("base score plus bonuses reaches {max_score}, above 100"),
            ));
        }
        if self.medium_threshold > self.high_threshold {
            return Err(super::invalid_config(
                "confidence",
                "medium_threshold must not exceed high_threshold",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_defaults_validate() {
        assert!(RoiTables::default().validate().is_ok());
        assert!(ConfidenceRules::default().validate().is_ok());
    }

    #[test]
    fn test_default_multipliers_stay_in_documented_ranges() {
        let tables = RoiTables::default();
        assert!(tables
            .industry_multiplier
            .values()
            .all(|m| (1.10..=1.40).contains(m)));
        assert!(tables
            .industry_opportunity
            .values()
            .all(|m| (1.5..=4.0).contains(m)));
        assert!(tables
            .size_opportunity
            .values()
            .all(|m| (1.0..=1.8).contains(m)));
        assert!(tables.industry_complexity_weight.values().all(|w| *w <= 2));
        assert!(tables.size_complexity_weight.values().all(|w| *w <= 3));
    }

    #[test]
    fn test_missing_entry_fails_validation() {
        let mut tables = RoiTables::default();
        tables.industry_multiplier.remove(&Industry::Finance);
        let err = tables.validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().contains("finance"));
    }

    #[test]
    fn test_zero_headcount_rejected() {
        let mut tables = RoiTables::default();
        tables.bucket_employees.insert(CompanySize::Micro, 0);
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_confidence_bonus_overflow_rejected() {
        let rules = ConfidenceRules {
            base_score: 60,
            ..ConfidenceRules::default()
        };
        assert!(rules.validate().is_err());
    }
}
