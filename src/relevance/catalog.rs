use super::criteria::ServiceCategory;
use serde::{Deserialize, Serialize};

/// One offering in the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub featured: bool,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ServiceCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            featured: true,
        }
    }
}

/// The four standard offerings, in catalog order.
pub fn default_catalog() -> Vec<Service> {
    vec![
        Service::new(
            "ai-workforce",
            "AI Workforce Solutions",
            ServiceCategory::AiWorkforce,
            "AI teams that handle customer service, lead qualification, data processing \
             and administrative tasks around the clock.",
        ),
        Service::new(
            "automation-integration",
            "Automation & Integration",
            ServiceCategory::Automation,
            "Connected tools and automated workflows that eliminate manual data entry \
             and keep information flowing between business systems.",
        ),
        Service::new(
            "ai-consulting",
            "AI Consulting & Strategy",
            ServiceCategory::Consulting,
            "Guidance on implementation strategy, technology selection and ROI \
             optimization for automation investments.",
        ),
        Service::new(
            "managed-operations",
            "Managed AI Operations",
            ServiceCategory::ManagedOps,
            "Monitoring, maintenance and optimization of AI systems for uptime and \
             continuous improvement.",
        ),
    ]
}
