use crate::error::{EngineError, Result};
use crate::model::{InvestmentEstimate, RoiMetrics, ValueBreakdown};
use chrono::{Months, NaiveDate};

/// First-year ROI in percent.
pub fn roi_percentage(annual_value: f64, investment_total: f64) -> f64 {
    (annual_value - investment_total) / investment_total * 100.0
}

/// Derive the headline ratios from annual value against first-year investment.
///
/// The six-month figure sets half a year of benefit against the full
/// first-year investment. Setup is paid up front, so the number is
/// conservative on purpose and must not be prorated.
///
/// The break-even date comes only from `now`, which keeps the result
/// reproducible for identical inputs.
pub fn compose_roi(
    value: &ValueBreakdown,
    investment: &InvestmentEstimate,
    now: NaiveDate,
) -> Result<RoiMetrics> {
    let total_investment = investment.total;
    if !total_investment.is_finite() || total_investment <= 0.0 {
        return Err(EngineError::DegenerateInvestment {
            total: total_investment,
        });
    }

    let annual_value = value.total_annual_value;
    if !annual_value.is_finite() || annual_value <= 0.0 {
        return Err(EngineError::DegenerateBenefit {
            total_annual_value: annual_value,
        });
    }

    let payback_period_months = total_investment / (annual_value / 12.0);
    let break_even_date = break_even_date(now, payback_period_months).ok_or(
        EngineError::DegenerateBenefit {
            total_annual_value: annual_value,
        },
    )?;

    Ok(RoiMetrics {
        percentage: roi_percentage(annual_value, total_investment),
        six_month_roi: roi_percentage(annual_value / 2.0, total_investment),
        payback_period_months,
        break_even_date,
        three_year_value: annual_value * 3.0 - (total_investment + investment.monthly * 24.0),
    })
}

/// `now` plus the payback period rounded up to whole months, if representable.
pub fn break_even_date(now: NaiveDate, payback_months: f64) -> Option<NaiveDate> {
    let months = payback_months.ceil();
    if !months.is_finite() || months < 0.0 || months > u32::MAX as f64 {
        return None;
    }
    now.checked_add_months(Months::new(months as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;

    fn investment(setup: f64, monthly: f64) -> InvestmentEstimate {
        InvestmentEstimate {
            setup,
            monthly,
            total: setup + monthly * 12.0,
            range_label: String::new(),
            tier: Level::Low,
            complexity_score: 2,
        }
    }

    fn value(total: f64) -> ValueBreakdown {
        ValueBreakdown {
            direct_savings: total,
            opportunity_value: 0.0,
            productivity_gains: 0.0,
            error_reduction: 0.0,
            error_reduction_percent: 0.0,
            total_annual_value: total,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_basic_metrics() {
        // 20,000 invested, 60,000 a year back
        let roi = compose_roi(&value(60_000.0), &investment(8_000.0, 1_000.0), date(2026, 1, 15))
            .unwrap();
        assert_eq!(roi.percentage, 200.0);
        assert_eq!(roi.six_month_roi, 50.0);
        assert_eq!(roi.payback_period_months, 4.0);
        assert_eq!(roi.break_even_date, date(2026, 5, 15));
        // 180,000 - (20,000 + 24,000)
        assert_eq!(roi.three_year_value, 136_000.0);
    }

    #[test]
    fn test_six_month_uses_full_investment() {
        let roi = compose_roi(&value(30_000.0), &investment(6_000.0, 1_000.0), date(2026, 1, 1))
            .unwrap();
        // half of 30,000 against 18,000
        assert!((roi.six_month_roi - (15_000.0 - 18_000.0) / 18_000.0 * 100.0).abs() < 1e-9);
        assert!(roi.six_month_roi < 0.0);
        assert!(roi.percentage > 0.0);
    }

    #[test]
    fn test_zero_investment_is_degenerate() {
        let err = compose_roi(&value(10_000.0), &investment(0.0, 0.0), date(2026, 1, 1))
            .unwrap_err();
        assert_eq!(err, EngineError::DegenerateInvestment { total: 0.0 });
    }

    #[test]
    fn test_negative_investment_is_degenerate() {
        let err = compose_roi(&value(10_000.0), &investment(-500.0, 0.0), date(2026, 1, 1))
            .unwrap_err();
        assert_eq!(err.code(), "E051");
    }

    #[test]
    fn test_zero_value_is_degenerate() {
        let err = compose_roi(&value(0.0), &investment(1_000.0, 100.0), date(2026, 1, 1))
            .unwrap_err();
        assert_eq!(err.code(), "E052");
    }

    #[test]
    fn test_break_even_rounds_up_partial_months() {
        assert_eq!(break_even_date(date(2026, 1, 31), 0.2), Some(date(2026, 2, 28)));
        assert_eq!(break_even_date(date(2026, 3, 10), 12.0), Some(date(2027, 3, 10)));
        assert_eq!(break_even_date(date(2026, 3, 10), f64::INFINITY), None);
    }
}
