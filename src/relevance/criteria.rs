//! Prospect criteria for service recommendations.

use crate::model::{string_enum, CompanySize, Industry};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Offering family; drives every relevance table.
    pub enum ServiceCategory {
        AiWorkforce => "ai-workforce",
        Automation => "automation",
        Consulting => "consulting",
        ManagedOps => "managed-ops",
    }
}

string_enum! {
    pub enum Challenge {
        ManualTasks => "manual-tasks",
        DataEntry => "data-entry",
        CustomerService => "customer-service",
        ScalingIssues => "scaling-issues",
        QualityControl => "quality-control",
        Reporting => "reporting",
        Integration => "integration",
        Strategy => "strategy",
    }
}

string_enum! {
    /// Goals offered by the recommendation form, a different list from the
    /// ROI calculator's primary goal.
    pub enum ServiceGoal {
        CostReduction => "cost-reduction",
        Efficiency => "efficiency",
        Scalability => "scalability",
        Quality => "quality",
        Strategy => "strategy",
        Compliance => "compliance",
    }
}

string_enum! {
    pub enum Budget {
        Under5k => "under-5k",
        From5kTo25k => "5k-25k",
        From25kTo100k => "25k-100k",
        Over100k => "over-100k",
    }
}

string_enum! {
    pub enum Timeline {
        Immediate => "immediate",
        OneToThreeMonths => "1-3-months",
        ThreeToSixMonths => "3-6-months",
        SixToTwelveMonths => "6-12-months",
    }
}

/// Input record for the relevance pipeline.
///
/// Every field is optional; an absent field contributes nothing to the score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelevanceCriteria {
    pub company_size: Option<CompanySize>,
    pub industry: Option<Industry>,
    pub challenges: Vec<Challenge>,
    pub goals: Vec<ServiceGoal>,
    pub budget: Option<Budget>,
    pub timeline: Option<Timeline>,
}
