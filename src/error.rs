//! Error types for the estimation engine.
//!
//! Every error is local to a single call. The computation is pure, so an
//! identical input always fails the same way and there is nothing to retry;
//! the caller decides whether to show a message or fall back to demo data.
//!
//! # Error Codes
//!
//! - E020: configuration errors
//! - E050: invalid profile or criteria
//! - E051: degenerate investment (total ≤ 0)
//! - E052: degenerate benefit (total annual value ≤ 0)
//! - E053: coefficient table lookup miss

use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A profile field violated its documented precondition
    #[error("Invalid profile: {field}: {message}")]
    InvalidProfile { field: &'static str, message: String },

    /// The first-year investment resolved to zero or less
    #[error("Degenerate investment: first-year total is {total}")]
    DegenerateInvestment { total: f64 },

    /// The annual benefit resolved to zero or less, or payback is unbounded
    #[error("Degenerate benefit: total annual value is {total_annual_value}")]
    DegenerateBenefit { total_annual_value: f64 },

    /// An enum value has no entry in an injected coefficient table
    #[error("Lookup miss: no entry for '{key}' in table '{table}'")]
    LookupMiss { table: &'static str, key: String },

    /// Configuration could not be read or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Create an invalid-profile error for a named field
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            message: message.into(),
        }
    }

    /// Create a lookup miss for a table and the display form of its key
    pub fn lookup_miss(table: &'static str, key: impl std::fmt::Display) -> Self {
        Self::LookupMiss {
            table,
            key: key.to_string(),
        }
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E020",
            Self::InvalidProfile { .. } => "E050",
            Self::DegenerateInvestment { .. } => "E051",
            Self::DegenerateBenefit { .. } => "E052",
            Self::LookupMiss { .. } => "E053",
        }
    }

    /// Whether the person supplying the input or config can fix this.
    ///
    /// Lookup misses and degenerate results point at drift between the enum
    /// definitions and the coefficient tables, which is a deployment problem.
    #[must_use]
    pub const fn is_user_fixable(&self) -> bool {
        matches!(self, Self::InvalidProfile { .. } | Self::Config(_))
    }
}

/// Result type alias using the engine error type
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            EngineError::Config("bad".into()),
            EngineError::invalid("automation_areas", "empty"),
            EngineError::DegenerateInvestment { total: 0.0 },
            EngineError::DegenerateBenefit {
                total_annual_value: 0.0,
            },
            EngineError::lookup_miss("industry_multiplier", "finance"),
        ];
        let mut codes: Vec<_> = errors.iter().map(EngineError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_field_and_table() {
        let err = EngineError::invalid("manual_task_hours", "must be between 1 and 168");
        assert_eq!(
            err.to_string(),
            "Invalid profile: manual_task_hours: must be between 1 and 168"
        );

        let miss = EngineError::lookup_miss("area_efficiency", "billing");
        assert!(miss.to_string().contains("area_efficiency"));
        assert!(miss.to_string().contains("billing"));
    }

    #[test]
    fn test_user_fixable_classification() {
        assert!(EngineError::invalid("industry", "x").is_user_fixable());
        assert!(EngineError::Config("x".into()).is_user_fixable());
        assert!(!EngineError::lookup_miss("t", "k").is_user_fixable());
        assert!(!EngineError::DegenerateInvestment { total: -1.0 }.is_user_fixable());
    }
}
