use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use roi_engine::relevance::{Budget, Challenge, ServiceGoal, Timeline};
use roi_engine::{
    AutomationArea, BusinessProfile, CompanySize, Industry, PrimaryGoal, RelevanceCriteria,
    RelevanceScorer, RoiCalculator, Timeframe,
};
use std::hint::black_box;

fn create_profiles(count: usize) -> Vec<BusinessProfile> {
    (0..count)
        .map(|i| BusinessProfile {
            company_size: CompanySize::ALL[i % CompanySize::ALL.len()],
            industry: Industry::ALL[i % Industry::ALL.len()],
            employee_count: 10 + (i as u32 * 37) % 5_000,
            average_hourly_rate: 20.0 + (i % 150) as f64,
            manual_task_hours: 1.0 + (i % 100) as f64,
            error_rate_percent: (i % 20) as f64,
            automation_areas: AutomationArea::ALL[..1 + i % AutomationArea::ALL.len()].to_vec(),
            primary_goal: PrimaryGoal::ALL[i % PrimaryGoal::ALL.len()],
            timeframe: Timeframe::ALL[i % Timeframe::ALL.len()],
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let calculator = RoiCalculator::default();
    let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let profiles = create_profiles(1_000);

    c.bench_function("estimate_single", |b| {
        b.iter(|| calculator.estimate(black_box(&profiles[7]), now))
    });

    let mut group = c.benchmark_group("estimate_batch");
    group.bench_function("sequential", |b| {
        b.iter(|| {
            profiles
                .iter()
                .map(|p| calculator.estimate(black_box(p), now))
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("parallel", |b| {
        b.iter(|| calculator.estimate_many(black_box(&profiles), now))
    });
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let scorer = RelevanceScorer::default();
    let criteria = RelevanceCriteria {
        company_size: Some(CompanySize::Medium),
        industry: Some(Industry::Manufacturing),
        challenges: vec![Challenge::ManualTasks, Challenge::Integration],
        goals: vec![ServiceGoal::Efficiency],
        budget: Some(Budget::From25kTo100k),
        timeline: Some(Timeline::ThreeToSixMonths),
    };

    c.bench_function("recommend", |b| {
        b.iter(|| scorer.recommend(black_box(&criteria)))
    });
}

criterion_group!(benches, bench_estimate, bench_recommend);
criterion_main!(benches);
