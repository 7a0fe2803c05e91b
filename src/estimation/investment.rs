use crate::model::{ComplexityAssessment, InvestmentEstimate};
use crate::report::format_currency;
use crate::tables::{PriceBand, PricingBands};

/// Position of the complexity score inside its tier, clamped to [0, 1].
///
/// The score and tier are computed independently, so a score can sit below
/// its tier's floor (three areas at a small company) or more than one span
/// above it. Returns the clamped factor and whether clamping was needed.
pub fn interpolation_factor(score: u8, band: &PriceBand, score_span: f64) -> (f64, bool) {
    let raw = (score as f64 - band.score_floor as f64) / score_span;
    let clamped = raw.clamp(0.0, 1.0);
    (clamped, clamped != raw)
}

fn interpolate(min: f64, max: f64, factor: f64) -> f64 {
    (min + (max - min) * factor).round()
}

/// Setup and monthly fees for the assessed tier, plus the first-year total.
pub fn estimate_investment(
    complexity: ComplexityAssessment,
    pricing: &PricingBands,
) -> InvestmentEstimate {
    let band = pricing.band(complexity.tier);
    let (factor, clamped) = interpolation_factor(complexity.score, band, pricing.score_span);
    if clamped {
        tracing::debug!(
            score = complexity.score,
            tier = %complexity.tier,
            floor = band.score_floor,
            "complexity score outside tier range, interpolation factor clamped"
        );
    }

    let setup = interpolate(band.setup_min, band.setup_max, factor);
    let monthly = interpolate(band.monthly_min, band.monthly_max, factor);

    InvestmentEstimate {
        setup,
        monthly,
        total: setup + monthly * 12.0,
        range_label: range_label(band),
        tier: complexity.tier,
        complexity_score: complexity.score,
    }
}

fn range_label(band: &PriceBand) -> String {
    format!(
        "{} - {} setup, {} - {}/month",
        format_currency(band.setup_min),
        format_currency(band.setup_max),
        format_currency(band.monthly_min),
        format_currency(band.monthly_max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;

    fn assessment(score: u8, tier: Level) -> ComplexityAssessment {
        ComplexityAssessment { score, tier }
    }

    #[test]
    fn test_low_tier_interpolation() {
        // factor (3 - 1) / 3
        let estimate = estimate_investment(assessment(3, Level::Low), &PricingBands::default());
        assert_eq!(estimate.setup, 3_333.0);
        assert_eq!(estimate.monthly, 2_500.0);
        assert_eq!(estimate.total, 3_333.0 + 2_500.0 * 12.0);
        assert_eq!(estimate.tier, Level::Low);
        assert_eq!(estimate.complexity_score, 3);
    }

    #[test]
    fn test_factor_clamped_above_band() {
        // Low tier with score 10 would be factor 3.0 unclamped
        let bands = PricingBands::default();
        let (factor, clamped) = interpolation_factor(10, &bands.low, bands.score_span);
        assert_eq!(factor, 1.0);
        assert!(clamped);

        let estimate = estimate_investment(assessment(10, Level::Low), &bands);
        assert_eq!(estimate.setup, 4_000.0);
        assert_eq!(estimate.monthly, 3_000.0);
    }

    #[test]
    fn test_factor_clamped_below_band() {
        // High tier floor is 7; a score of 5 would be negative unclamped
        let estimate = estimate_investment(assessment(5, Level::High), &PricingBands::default());
        assert_eq!(estimate.setup, 10_000.0);
        assert_eq!(estimate.monthly, 8_000.0);
    }

    #[test]
    fn test_factor_at_floor_is_zero_and_unclamped() {
        let bands = PricingBands::default();
        assert_eq!(
            interpolation_factor(4, &bands.medium, bands.score_span),
            (0.0, false)
        );
    }

    #[test]
    fn test_range_label() {
        let estimate = estimate_investment(assessment(5, Level::Medium), &PricingBands::default());
        assert_eq!(
            estimate.range_label,
            "$5,000 - $10,000 setup, $3,500 - $7,000/month"
        );
    }
}
