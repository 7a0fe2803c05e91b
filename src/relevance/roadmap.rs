//! Roadmap, budget and timeline synthesized from the top bucket.

use super::catalog::Service;
use super::criteria::{Challenge, RelevanceCriteria, ServiceCategory, ServiceGoal};
use crate::error::Result;
use crate::model::CompanySize;
use crate::tables::{lookup, CostModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    /// 1-based, contiguous over the phases actually present
    pub phase: u8,
    pub title: String,
    pub duration: String,
    pub services: Vec<String>,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub setup: CostRange,
    pub monthly: CostRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEstimate {
    pub weeks: u32,
    pub months: u32,
    pub description: String,
}

struct PhaseTemplate {
    title: &'static str,
    duration: &'static str,
    categories: &'static [ServiceCategory],
    deliverables: &'static [&'static str],
}

const PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        title: "Strategy & Planning",
        duration: "2-4 weeks",
        categories: &[ServiceCategory::Consulting],
        deliverables: &["Automation roadmap", "ROI projections", "Implementation plan"],
    },
    PhaseTemplate {
        title: "Core Implementation",
        duration: "4-8 weeks",
        categories: &[ServiceCategory::AiWorkforce, ServiceCategory::Automation],
        deliverables: &["Automated workflows", "AI agents", "System integrations"],
    },
    PhaseTemplate {
        title: "Optimization & Management",
        duration: "Ongoing",
        categories: &[ServiceCategory::ManagedOps],
        deliverables: &["24/7 monitoring", "Performance optimization", "Scaling support"],
    },
];

const QUICK_WEEKS: u32 = 8;
const STANDARD_WEEKS: u32 = 16;

/// Phases for the categories present in `services`, always in the order
/// strategy, core implementation, managed operations.
pub fn build_roadmap(services: &[&Service]) -> Vec<RoadmapPhase> {
    PHASES
        .iter()
        .filter_map(|template| {
            let titles: Vec<String> = services
                .iter()
                .filter(|s| template.categories.contains(&s.category))
                .map(|s| s.title.clone())
                .collect();
            (!titles.is_empty()).then_some((template, titles))
        })
        .zip(1u8..)
        .map(|((template, services), phase)| RoadmapPhase {
            phase,
            title: template.title.to_string(),
            duration: template.duration.to_string(),
            services,
            deliverables: template
                .deliverables
                .iter()
                .map(|d| d.to_string())
                .collect(),
        })
        .collect()
}

/// Setup and monthly cost ranges; recurring categories count toward the
/// monthly figure only.
pub fn estimate_budget(services: &[&Service], costs: &CostModel) -> Result<BudgetRange> {
    let mut setup = 0.0;
    let mut monthly = 0.0;
    for service in services {
        let base = lookup("costs.base_cost", &costs.base_cost, service.category)?;
        if costs.recurring.contains(&service.category) {
            monthly += base;
        } else {
            setup += base;
        }
    }

    let spread = |total: f64, (low, high): (f64, f64)| CostRange {
        min: (total * low).round(),
        max: (total * high).round(),
    };

    Ok(BudgetRange {
        setup: spread(setup, costs.setup_spread),
        monthly: spread(monthly, costs.monthly_spread),
    })
}

/// Summed durations, shortened by the parallel factor when more than one
/// service runs at once.
pub fn estimate_timeline(services: &[&Service], costs: &CostModel) -> Result<TimelineEstimate> {
    let mut total = 0.0;
    for service in services {
        total += lookup("costs.duration_weeks", &costs.duration_weeks, service.category)?;
    }

    let factor = if services.len() > 1 {
        costs.parallel_factor
    } else {
        1.0
    };
    let weeks = (total * factor).round().max(0.0) as u32;

    Ok(TimelineEstimate {
        weeks,
        months: weeks.div_ceil(4),
        description: timeline_description(weeks).to_string(),
    })
}

pub fn timeline_description(weeks: u32) -> &'static str {
    if weeks <= QUICK_WEEKS {
        "Quick implementation"
    } else if weeks <= STANDARD_WEEKS {
        "Standard timeline"
    } else {
        "Extended implementation"
    }
}

/// Short explanations for why a service fits the criteria.
pub fn recommendation_reasons(service: &Service, criteria: &RelevanceCriteria) -> Vec<String> {
    let mut reasons = Vec::new();

    match service.category {
        ServiceCategory::AiWorkforce if criteria.challenges.contains(&Challenge::ManualTasks) => {
            reasons.push("Perfect for eliminating repetitive manual tasks");
        }
        ServiceCategory::Automation if criteria.goals.contains(&ServiceGoal::Efficiency) => {
            reasons.push("Directly addresses efficiency improvement goals");
        }
        ServiceCategory::Consulting
            if matches!(
                criteria.company_size,
                Some(CompanySize::Micro | CompanySize::Small)
            ) =>
        {
            reasons.push("Ideal starting point for smaller organizations");
        }
        ServiceCategory::ManagedOps if criteria.company_size == Some(CompanySize::Enterprise) => {
            reasons.push("Enterprise-grade operation management");
        }
        _ => {}
    }

    reasons.into_iter().map(String::from).collect()
}
