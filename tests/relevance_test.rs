use indoc::indoc;
use pretty_assertions::assert_eq;
use roi_engine::relevance::{Budget, ServiceCategory, Timeline};
use roi_engine::{default_catalog, EngineConfig, RelevanceCriteria, RelevanceScorer, Service};

fn criteria(json: &str) -> RelevanceCriteria {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_small_professional_services_prospect() {
    let recs = RelevanceScorer::default()
        .recommend(&criteria(indoc! {r#"
            {
                "companySize": "1-10",
                "industry": "professional-services",
                "challenges": ["strategy", "manual-tasks"],
                "goals": ["strategy"],
                "budget": "under-5k",
                "timeline": "immediate"
            }
        "#}))
        .unwrap();

    // consulting: ((50 + 90) / 2 + 20 + 10 + 10) * 1.2 * 1.3 = 171.6 -> 100
    assert_eq!(recs.highly_recommended.len(), 1);
    let top = &recs.highly_recommended[0];
    assert_eq!(top.service.id, "ai-consulting");
    assert_eq!(top.relevance_score, 100);
    assert_eq!(
        top.reasons,
        vec!["Ideal starting point for smaller organizations".to_string()]
    );

    assert_eq!(recs.roadmap.len(), 1);
    assert_eq!(recs.roadmap[0].title, "Strategy & Planning");
    assert_eq!(recs.roadmap[0].services, vec!["AI Consulting & Strategy".to_string()]);
    assert_eq!(recs.estimated_budget.setup.min, 4_000.0);
    assert_eq!(recs.estimated_budget.setup.max, 7_500.0);
    assert_eq!(recs.estimated_budget.monthly.max, 0.0);
    assert_eq!(recs.estimated_timeline.weeks, 4);
    assert_eq!(recs.estimated_timeline.months, 1);
    assert_eq!(recs.estimated_timeline.description, "Quick implementation");
}

#[test]
fn test_enterprise_prospect_gets_full_roadmap() {
    let recs = RelevanceScorer::default()
        .recommend(&criteria(indoc! {r#"
            {
                "companySize": "1000+",
                "industry": "finance",
                "challenges": ["scaling-issues", "strategy", "customer-service"],
                "goals": ["compliance", "strategy", "efficiency"]
            }
        "#}))
        .unwrap();

    assert_eq!(recs.highly_recommended.len(), 4);
    let phases: Vec<_> = recs.roadmap.iter().map(|p| (p.phase, p.title.as_str())).collect();
    assert_eq!(
        phases,
        vec![
            (1, "Strategy & Planning"),
            (2, "Core Implementation"),
            (3, "Optimization & Management")
        ]
    );
    let managed = recs
        .highly_recommended
        .iter()
        .find(|s| s.service.category == ServiceCategory::ManagedOps)
        .unwrap();
    assert!(managed
        .reasons
        .contains(&"Enterprise-grade operation management".to_string()));

    // (4 + 8 + 12 + 2) * 0.7 = 18.2
    assert_eq!(recs.estimated_timeline.weeks, 18);
    assert_eq!(recs.estimated_timeline.months, 5);
    assert_eq!(recs.estimated_timeline.description, "Extended implementation");
}

#[test]
fn test_buckets_partition_catalog_and_are_sorted() {
    let recs = RelevanceScorer::default()
        .recommend(&RelevanceCriteria {
            budget: Some(Budget::Under5k),
            timeline: Some(Timeline::SixToTwelveMonths),
            ..Default::default()
        })
        .unwrap();

    let mut seen: Vec<String> = [
        &recs.highly_recommended,
        &recs.recommended,
        &recs.consider_later,
        &recs.excluded,
    ]
    .iter()
    .flat_map(|bucket| bucket.iter().map(|s| s.service.id.clone()))
    .collect();
    seen.sort();
    let mut expected: Vec<String> = default_catalog().into_iter().map(|s| s.id).collect();
    expected.sort();
    assert_eq!(seen, expected);

    for bucket in [&recs.highly_recommended, &recs.recommended, &recs.consider_later, &recs.excluded] {
        assert!(bucket
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }
}

#[test]
fn test_unknown_criteria_value_is_rejected_at_parse() {
    let result = serde_json::from_str::<RelevanceCriteria>(r#"{"budget": "a-lot"}"#);
    assert!(result.is_err());
}

#[test]
fn test_scorer_from_config_uses_custom_catalog() {
    let mut config = EngineConfig::default();
    config.catalog = vec![Service::new(
        "strategy-sprint",
        "Strategy Sprint",
        ServiceCategory::Consulting,
        "Two-week planning engagement.",
    )];
    config.relevance.thresholds.highly_recommended = 50;
    config.relevance.thresholds.recommended = 45;

    let scorer = RelevanceScorer::from_config(&config).unwrap();
    let recs = scorer.recommend(&RelevanceCriteria::default()).unwrap();
    assert_eq!(recs.highly_recommended.len(), 1);
    assert_eq!(recs.roadmap[0].services, vec!["Strategy Sprint".to_string()]);
}
