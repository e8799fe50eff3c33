use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strava_workout_proxy::models::{ActivityTotals, StravaActivity};
use strava_workout_proxy::services::strava::select_latest;
use strava_workout_proxy::config::ActivityOrder;

fn build_activities(count: usize) -> Vec<StravaActivity> {
    (0..count)
        .map(|i| {
            let json = format!(
                r#"{{"name": "Activity {i}", "distance": {}, "moving_time": {}, "total_elevation_gain": {}, "type": "Run", "start_date": "2024-01-{:02}T07:00:00Z"}}"#,
                5000.0 + i as f64,
                1800 + i,
                if i % 3 == 0 { "null".to_string() } else { format!("{}.5", i % 200) },
                1 + i % 28,
            );
            serde_json::from_str(&json).expect("Failed to parse activity")
        })
        .collect()
}

fn benchmark_summary(c: &mut Criterion) {
    let activities = build_activities(200);
    let raw = serde_json::to_string(
        &activities
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name,
                    "distance": a.distance,
                    "moving_time": a.moving_time,
                    "total_elevation_gain": a.total_elevation_gain,
                    "type": a.activity_type,
                    "start_date": a.start_date,
                })
            })
            .collect::<Vec<_>>(),
    )
    .expect("Failed to serialize fixture");

    let mut group = c.benchmark_group("weekly_summary");

    group.bench_function("parse_and_sum_200", |b| {
        b.iter(|| {
            let parsed: Vec<StravaActivity> =
                serde_json::from_str(black_box(&raw)).expect("parse");
            parsed.iter().collect::<ActivityTotals>().to_summary()
        })
    });

    group.bench_function("select_latest_by_start_date", |b| {
        b.iter(|| select_latest(black_box(&activities), ActivityOrder::StartDate).is_some())
    });

    group.finish();
}

criterion_group!(benches, benchmark_summary);
criterion_main!(benches);
