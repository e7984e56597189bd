// Criterion benchmarks for PitchFinder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pitchfinder::core::{build_catalog, haversine_km, RankQuery, Ranker};
use pitchfinder::models::{Coordinate, ElementKind, OverpassElement, PaidFilter, PitchType, ProfileName};
use std::collections::HashMap;

const ORIGIN: Coordinate = Coordinate { latitude: 44.8378, longitude: -0.5792 };

const SURFACES: [&str; 5] = ["grass", "artificial_turf", "clay", "sand", "synthetic"];

fn create_element(id: usize) -> OverpassElement {
    let lat_offset = (id as f64 * 0.0007) % 0.08;
    let lon_offset = (id as f64 * 0.0011) % 0.08;

    let mut tags = HashMap::new();
    tags.insert("surface".to_string(), SURFACES[id % SURFACES.len()].to_string());
    if id % 4 == 0 {
        tags.insert("fee".to_string(), "yes".to_string());
    }
    if id % 7 == 0 {
        tags.insert("name".to_string(), format!("UrbanSoccer {}", id));
    } else if id % 3 != 0 {
        tags.insert("name".to_string(), format!("Stade {}", id));
    }

    OverpassElement {
        kind: ElementKind::Node,
        id: id as u64,
        lat: Some(ORIGIN.latitude + lat_offset),
        lon: Some(ORIGIN.longitude + lon_offset),
        center: None,
        tags,
    }
}

fn create_query() -> RankQuery {
    RankQuery {
        origin: ORIGIN,
        radius_km: 8.0,
        profile: ProfileName::Car,
        pitch_type: PitchType::Grass,
        paid_filter: PaidFilter::ShowAll,
        top_n: 20,
    }
}

fn bench_haversine_km(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(44.8378),
                black_box(-0.5792),
                black_box(44.8386),
                black_box(-0.6436),
            )
        });
    });
}

fn bench_build_catalog(c: &mut Criterion) {
    let elements: Vec<OverpassElement> = (0..500).map(create_element).collect();

    c.bench_function("build_catalog_500_elements", |b| {
        b.iter(|| build_catalog(black_box(&elements), black_box(ORIGIN)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_rules();
    let query = create_query();

    let mut group = c.benchmark_group("ranking");

    for element_count in [10, 50, 100, 500, 1000].iter() {
        let elements: Vec<OverpassElement> = (0..*element_count).map(create_element).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", element_count),
            element_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&elements), black_box(&query)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_km, bench_build_catalog, bench_ranking);

criterion_main!(benches);
