use crate::model::{
    BusinessProfile, CompanySize, Insights, PrimaryGoal, Recommendation, RecommendationKind,
    RoiEstimate,
};
use crate::report::format_currency;

const EXCELLENT_ROI_PERCENT: f64 = 200.0;
const PRIORITY_ROI_PERCENT: f64 = 150.0;
const SIGNIFICANT_WEEKLY_HOURS: f64 = 20.0;
const HIGH_ERROR_RATE_PERCENT: f64 = 10.0;
const PHASED_INVESTMENT_THRESHOLD: f64 = 50_000.0;
const SCALABILITY_MIN_SIZE: CompanySize = CompanySize::Medium;

/// Fixed caveats attached to every estimate.
pub fn calculation_assumptions() -> Vec<String> {
    [
        "Estimates based on industry averages and past client engagements",
        "Assumes dedicated implementation and training period",
        "ROI calculations include setup costs and first year operational costs",
        "Time savings assume 80-90% automation efficiency for selected processes",
        "Error reduction based on typical manual vs. automated process accuracy",
        "Actual results may vary based on specific implementation and adoption",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Bullet recommendations, talking points and next steps for an estimate.
///
/// Deterministic in the profile and the computed estimate; the estimate's own
/// `insights` field is ignored.
pub fn generate_insights(profile: &BusinessProfile, estimate: &RoiEstimate) -> Insights {
    Insights {
        recommendations: recommendations(profile, estimate),
        talking_points: talking_points(estimate),
        next_steps: next_steps(estimate),
    }
}

fn recommendation(kind: RecommendationKind, title: &str, description: String) -> Recommendation {
    Recommendation {
        kind,
        title: title.to_string(),
        description,
    }
}

fn recommendations(profile: &BusinessProfile, estimate: &RoiEstimate) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if estimate.roi.percentage > EXCELLENT_ROI_PERCENT {
        out.push(recommendation(
            RecommendationKind::Priority,
            "Excellent ROI Potential",
            "Your automation potential shows exceptional returns. We recommend starting \
             immediately with a phased approach."
                .to_string(),
        ));
    }

    if estimate.time_savings.hours_per_week > SIGNIFICANT_WEEKLY_HOURS {
        out.push(recommendation(
            RecommendationKind::Efficiency,
            "Significant Time Savings",
            format!(
                "Automating {} hours per week could free up substantial time for strategic work.",
                profile.manual_task_hours
            ),
        ));
    }

    if profile.error_rate_percent > HIGH_ERROR_RATE_PERCENT {
        out.push(recommendation(
            RecommendationKind::Quality,
            "Quality Improvement Opportunity",
            "Your current error rate suggests significant quality improvements through automation."
                .to_string(),
        ));
    }

    if profile.company_size >= SCALABILITY_MIN_SIZE {
        out.push(recommendation(
            RecommendationKind::Scalability,
            "Scalability Benefits",
            "At your company size, automation provides scalability benefits beyond direct \
             cost savings."
                .to_string(),
        ));
    }

    out.push(goal_recommendation(profile.primary_goal, estimate));
    out
}

fn goal_recommendation(goal: PrimaryGoal, estimate: &RoiEstimate) -> Recommendation {
    let value = &estimate.value;
    let (title, description) = match goal {
        PrimaryGoal::CostReduction => (
            "Lead With Direct Savings",
            format!(
                "Direct labor savings of {} a year address your cost-reduction goal first.",
                format_currency(value.direct_savings)
            ),
        ),
        PrimaryGoal::Efficiency => (
            "Reclaim Team Capacity",
            format!(
                "About {:.0} hours a year move from manual work to higher-value tasks.",
                estimate.time_savings.hours_per_year
            ),
        ),
        PrimaryGoal::Accuracy => (
            "Cut Error Costs",
            format!(
                "Removing {:.0}% of current errors is worth {} a year.",
                value.error_reduction_percent,
                format_currency(value.error_reduction)
            ),
        ),
        PrimaryGoal::Scalability => (
            "Grow Without Adding Headcount",
            format!(
                "Company-wide productivity gains of {} a year scale with your team.",
                format_currency(value.productivity_gains)
            ),
        ),
        PrimaryGoal::Compliance => (
            "Consistent, Auditable Processes",
            "Automated workflows run the same way every time and leave a record of each step."
                .to_string(),
        ),
    };
    recommendation(RecommendationKind::Goal, title, description)
}

fn talking_points(estimate: &RoiEstimate) -> Vec<String> {
    let mut points = vec![
        format!(
            "Frees about {:.1} hours every week ({:.0} hours a year).",
            estimate.time_savings.hours_per_week, estimate.time_savings.hours_per_year
        ),
        format!(
            "Total annual value of {} against a first-year investment of {}.",
            format_currency(estimate.value.total_annual_value),
            format_currency(estimate.investment.total)
        ),
        format!(
            "Pays back in {:.1} months, breaking even by {}.",
            estimate.roi.payback_period_months,
            estimate.roi.break_even_date.format("%B %Y")
        ),
        format!(
            "Three-year net value of {}.",
            format_currency(estimate.roi.three_year_value)
        ),
    ];

    if estimate.value.error_reduction > 0.0 {
        points.push(format!(
            "Error reduction of {:.0}% saves {} a year.",
            estimate.value.error_reduction_percent,
            format_currency(estimate.value.error_reduction)
        ));
    }

    points.push(format!(
        "Estimate confidence is {} ({}/100).",
        estimate.confidence, estimate.confidence_score
    ));
    points
}

fn next_steps(estimate: &RoiEstimate) -> Vec<String> {
    let mut steps: Vec<String> = [
        "Schedule a free consultation to discuss your specific needs",
        "Receive a detailed automation plan tailored to your business",
        "Review implementation timeline and resource requirements",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    if estimate.roi.percentage > PRIORITY_ROI_PERCENT {
        steps.push("Consider priority implementation for high-impact areas".to_string());
    }
    if estimate.investment.total > PHASED_INVESTMENT_THRESHOLD {
        steps.push("Explore phased implementation options to manage investment".to_string());
    }
    steps
}
