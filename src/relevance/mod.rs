//! Service relevance scoring and recommendation buckets.
//!
//! Every catalog service gets a 0-100 score against the prospect's criteria,
//! then lands in exactly one bucket. A roadmap, budget range and timeline
//! are synthesized from the highly-recommended bucket.

pub mod catalog;
pub mod criteria;
pub mod roadmap;
pub mod scoring;

pub use catalog::{default_catalog, Service};
pub use criteria::{Budget, Challenge, RelevanceCriteria, ServiceCategory, ServiceGoal, Timeline};
pub use roadmap::{
    build_roadmap, estimate_budget, estimate_timeline, recommendation_reasons, BudgetRange,
    CostRange, RoadmapPhase, TimelineEstimate,
};
pub use scoring::{score_service, MAX_RELEVANCE_SCORE};

use crate::error::Result;
use crate::tables::{validate_catalog, BucketThresholds, EngineConfig, RelevanceTables};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// A catalog entry with its score and the reasons it fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredService {
    #[serde(flatten)]
    pub service: Service,
    pub relevance_score: u8,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    HighlyRecommended,
    Recommended,
    ConsiderLater,
    Excluded,
}

impl Bucket {
    pub fn for_score(score: u8, thresholds: &BucketThresholds) -> Self {
        if score >= thresholds.highly_recommended {
            Self::HighlyRecommended
        } else if score >= thresholds.recommended {
            Self::Recommended
        } else if score >= thresholds.consider_later {
            Self::ConsiderLater
        } else {
            Self::Excluded
        }
    }
}

/// Scored catalog split into buckets, with a plan for the top bucket.
///
/// The four buckets partition the catalog. Within a bucket, services are
/// ordered by descending score and ties keep catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecommendations {
    pub highly_recommended: Vec<ScoredService>,
    pub recommended: Vec<ScoredService>,
    pub consider_later: Vec<ScoredService>,
    pub excluded: Vec<ScoredService>,
    pub roadmap: Vec<RoadmapPhase>,
    pub estimated_budget: BudgetRange,
    pub estimated_timeline: TimelineEstimate,
}

impl ServiceRecommendations {
    pub fn bucket(&self, bucket: Bucket) -> &[ScoredService] {
        match bucket {
            Bucket::HighlyRecommended => &self.highly_recommended,
            Bucket::Recommended => &self.recommended,
            Bucket::ConsiderLater => &self.consider_later,
            Bucket::Excluded => &self.excluded,
        }
    }

    /// Number of services across all buckets.
    pub fn total_services(&self) -> usize {
        self.highly_recommended.len()
            + self.recommended.len()
            + self.consider_later.len()
            + self.excluded.len()
    }
}

/// Scores a service catalog against injected relevance tables.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    tables: RelevanceTables,
    catalog: Vec<Service>,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self {
            tables: RelevanceTables::default(),
            catalog: default_catalog(),
        }
    }
}

impl RelevanceScorer {
    /// Build a scorer from validated tables and a catalog.
    pub fn new(tables: RelevanceTables, catalog: Vec<Service>) -> Result<Self> {
        tables.validate()?;
        validate_catalog(&catalog)?;
        Ok(Self { tables, catalog })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.relevance.clone(), config.catalog.clone())
    }

    pub fn catalog(&self) -> &[Service] {
        &self.catalog
    }

    pub fn tables(&self) -> &RelevanceTables {
        &self.tables
    }

    /// Score every catalog service and group the results.
    pub fn recommend(&self, criteria: &RelevanceCriteria) -> Result<ServiceRecommendations> {
        let _span = debug_span!("recommend", services = self.catalog.len()).entered();

        let mut scored = self
            .catalog
            .iter()
            .map(|service| {
                let relevance_score = score_service(service, criteria, &self.tables)?;
                debug!(service = %service.id, score = relevance_score, "scored service");
                Ok(ScoredService {
                    service: service.clone(),
                    relevance_score,
                    reasons: recommendation_reasons(service, criteria),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // sort_by is stable
        scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

        let thresholds = self.tables.thresholds;
        let mut highly_recommended = Vec::new();
        let mut recommended = Vec::new();
        let mut consider_later = Vec::new();
        let mut excluded = Vec::new();
        for entry in scored {
            match Bucket::for_score(entry.relevance_score, &thresholds) {
                Bucket::HighlyRecommended => highly_recommended.push(entry),
                Bucket::Recommended => recommended.push(entry),
                Bucket::ConsiderLater => consider_later.push(entry),
                Bucket::Excluded => excluded.push(entry),
            }
        }

        let top: Vec<&Service> = highly_recommended.iter().map(|s| &s.service).collect();
        let roadmap = build_roadmap(&top);
        let estimated_budget = estimate_budget(&top, &self.tables.costs)?;
        let estimated_timeline = estimate_timeline(&top, &self.tables.costs)?;
        debug!(
            highly_recommended = highly_recommended.len(),
            phases = roadmap.len(),
            weeks = estimated_timeline.weeks,
            "recommendations grouped"
        );

        Ok(ServiceRecommendations {
            highly_recommended,
            recommended,
            consider_later,
            excluded,
            roadmap,
            estimated_budget,
            estimated_timeline,
        })
    }
}
