//! The prospect's self-reported business profile.

use super::enums::{AutomationArea, CompanySize, Industry, PrimaryGoal, Timeframe};
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub const EMPLOYEE_COUNT_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const HOURLY_RATE_RANGE: RangeInclusive<f64> = 10.0..=200.0;
pub const MANUAL_HOURS_RANGE: RangeInclusive<f64> = 1.0..=168.0;
pub const ERROR_RATE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Input record for the ROI pipeline.
///
/// Upstream validation is expected to have normalized every field already;
/// [`BusinessProfile::validate`] re-checks the preconditions so a standalone
/// caller still gets a typed error instead of a nonsensical estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub company_size: CompanySize,
    pub industry: Industry,
    pub employee_count: u32,
    #[serde(default = "default_hourly_rate")]
    pub average_hourly_rate: f64,
    /// Hours per week spent on manual tasks
    pub manual_task_hours: f64,
    #[serde(default = "default_error_rate", alias = "errorRate")]
    pub error_rate_percent: f64,
    pub automation_areas: Vec<AutomationArea>,
    pub primary_goal: PrimaryGoal,
    #[serde(default)]
    pub timeframe: Timeframe,
}

fn default_hourly_rate() -> f64 {
    50.0
}

fn default_error_rate() -> f64 {
    5.0
}

impl BusinessProfile {
    /// Number of distinct automation areas selected.
    pub fn area_count(&self) -> usize {
        self.automation_areas.len()
    }

    /// Check every precondition, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_areas(&self.automation_areas)?;

        if !EMPLOYEE_COUNT_RANGE.contains(&self.employee_count) {
            return Err(out_of_range(
                "employee_count",
                self.employee_count as f64,
                1.0..=10_000.0,
            ));
        }
        check_range("average_hourly_rate", self.average_hourly_rate, HOURLY_RATE_RANGE)?;
        check_range("manual_task_hours", self.manual_task_hours, MANUAL_HOURS_RANGE)?;
        check_range("error_rate_percent", self.error_rate_percent, ERROR_RATE_RANGE)?;

        Ok(())
    }
}

fn validate_areas(areas: &[AutomationArea]) -> Result<()> {
    if areas.is_empty() {
        return Err(EngineError::invalid(
            "automation_areas",
            "at least one automation area is required",
        ));
    }

    let mut seen = BTreeSet::new();
    if let Some(duplicate) = areas.iter().find(|area| !seen.insert(**area)) {
        return Err(EngineError::invalid(
            "automation_areas",
            format!("'{duplicate}' is listed more than once"),
        ));
    }

    Ok(())
}

fn check_range(field: &'static str, value: f64, range: RangeInclusive<f64>) -> Result<()> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, value, range))
    }
}

fn out_of_range(field: &'static str, value: f64, range: RangeInclusive<f64>) -> EngineError {
    EngineError::invalid(
        field,
        format!(
            "{value} is outside the allowed range {}..={}",
            range.start(),
            range.end()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            company_size: CompanySize::Small,
            industry: Industry::Technology,
            employee_count: 25,
            average_hourly_rate: 50.0,
            manual_task_hours: 20.0,
            error_rate_percent: 5.0,
            automation_areas: vec![AutomationArea::DataEntry, AutomationArea::Reporting],
            primary_goal: PrimaryGoal::Efficiency,
            timeframe: Timeframe::SixMonths,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert_eq!(profile().validate(), Ok(()));
    }

    #[test]
    fn test_empty_areas_rejected() {
        let mut p = profile();
        p.automation_areas.clear();
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidProfile {
                field: "automation_areas",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_area_rejected() {
        let mut p = profile();
        p.automation_areas.push(AutomationArea::DataEntry);
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("data-entry"));
    }

    #[test]
    fn test_edge_values_accepted() {
        let mut p = profile();
        p.employee_count = 10_000;
        p.average_hourly_rate = 10.0;
        p.manual_task_hours = 168.0;
        p.error_rate_percent = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let cases: Vec<(fn(&mut BusinessProfile), &str)> = vec![
            (|p| p.employee_count = 0, "employee_count"),
            (|p| p.average_hourly_rate = 9.99, "average_hourly_rate"),
            (|p| p.manual_task_hours = 169.0, "manual_task_hours"),
            (|p| p.error_rate_percent = f64::NAN, "error_rate_percent"),
        ];

        for (mutate, expected_field) in cases {
            let mut p = profile();
            mutate(&mut p);
            match p.validate() {
                Err(EngineError::InvalidProfile { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected InvalidProfile for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = indoc! {r#"
            {
              "companySize": "11-50",
              "industry": "technology",
              "employeeCount": 25,
              "manualTaskHours": 20,
              "automationAreas": ["data-entry", "reporting"],
              "primaryGoal": "efficiency"
            }
        "#};
        let parsed: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, profile());
    }

    #[test]
    fn test_error_rate_alias() {
        let json = r#"{"companySize":"1-10","industry":"other","employeeCount":3,
            "manualTaskHours":5,"errorRate":12,"automationAreas":["billing"],
            "primaryGoal":"accuracy"}"#;
        let parsed: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error_rate_percent, 12.0);
    }
}
