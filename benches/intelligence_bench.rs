// ABOUTME: Criterion benchmarks for the product scoring intelligence
// ABOUTME: Measures similarity, goal scoring, hard filtering, and full alternative ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Criterion benchmarks for the product scoring intelligence.
//!
//! Measures single-product scorers and the end-to-end ranking pipeline on
//! both the sequential and the parallel scoring paths.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_catalog, generate_product, milk_allergic_dieter, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use grocery_guardian::config::ScoringConfig;
use grocery_guardian::intelligence::{
    FilterContext, HardFilters, NutritionOptimizer, RecommendationEngine, RecommendationRequest,
    SimilarityScorer,
};
use grocery_guardian::models::{NutritionGoal, Product};

/// Benchmark pairwise similarity
fn bench_similarity(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let scorer = SimilarityScorer::new(&config.similarity);
    let a = generate_product(1);
    let b = generate_product(2);

    c.bench_function("similarity_pair", |bench| {
        bench.iter(|| scorer.score(black_box(&a), black_box(&b)));
    });
}

/// Benchmark goal scoring for every goal
fn bench_nutrition_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrition_score");
    let config = ScoringConfig::default();
    let optimizer = NutritionOptimizer::new(&config);
    let product = generate_product(7);
    let profile = milk_allergic_dieter();

    for goal in NutritionGoal::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(goal), &goal, |b, &goal| {
            b.iter(|| optimizer.nutrition_score(black_box(&product), goal, Some(&profile)));
        });
    }

    group.finish();
}

/// Benchmark the hard filter pipeline over catalogs of varying size
fn bench_hard_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("hard_filters");
    let config = ScoringConfig::default();
    let Ok(filters) = HardFilters::new(&config) else {
        return;
    };
    let profile = milk_allergic_dieter();
    let ctx = FilterContext {
        user_allergens: &profile.allergens,
        target_category: Some("Snacks"),
        strict_category: true,
    };

    for size in [CatalogSize::Shelf, CatalogSize::Aisle] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("apply", size.count()),
            &catalog,
            |b, catalog| {
                b.iter(|| filters.apply(catalog.iter().collect(), black_box(&ctx)));
            },
        );
    }

    group.finish();
}

/// Benchmark full ranking on the sequential and parallel paths
fn bench_rank_alternatives(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_alternatives");
    let original = generate_product(0);
    let profile = milk_allergic_dieter();
    let request = RecommendationRequest::default();

    let sequential = ScoringConfig::default();
    let mut parallel = ScoringConfig::default();
    parallel.ranking.parallel_threshold = 1;

    for size in [CatalogSize::Shelf, CatalogSize::Aisle] {
        let catalog: Vec<Product> = generate_catalog(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        for (label, config) in [("sequential", &sequential), ("parallel", &parallel)] {
            let Ok(engine) = RecommendationEngine::new(config) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(label, size.count()),
                &catalog,
                |b, catalog| {
                    b.iter(|| {
                        engine.rank_alternatives(
                            black_box(&original),
                            black_box(catalog),
                            &profile,
                            &request,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_similarity,
    bench_nutrition_score,
    bench_hard_filters,
    bench_rank_alternatives,
);
criterion_main!(benches);
