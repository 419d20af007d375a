// ABOUTME: Criterion benchmarks for the nutrition aggregation and allocation engine
// ABOUTME: Measures item aggregation, parallel plan summaries, and macro target allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal-plan engine.
//!
//! Measures item-list aggregation, whole-plan summaries, and macro
//! target allocation across diet archetypes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealplan_engine::config::MealSplitConfig;
use mealplan_engine::intelligence::{
    aggregate, aggregate_plan, allocate_meal_targets, allocate_targets, normalize_vector,
};
use mealplan_engine::models::{
    DietArchetype, Food, MealItem, MealPlanDay, MealSlot, NutritionVector, UnitDefinition,
};

const ITEM_COUNTS: [usize; 3] = [10, 100, 1000];
const PLAN_LENGTHS: [u64; 3] = [7, 30, 365];

fn sample_food(index: usize) -> Food {
    #[allow(clippy::cast_precision_loss)]
    let offset = (index % 17) as f64;
    let nutrition = NutritionVector {
        calories: 50.0 + offset * 10.0,
        carbs: 10.0 + offset,
        proteins: 2.0 + offset * 0.5,
        fats: 1.0 + offset * 0.25,
        fiber: 1.5,
        sodium: 4.0,
        cholesterol: 0.0,
        sugar: 3.0,
    };
    Food::new(
        format!("food-{index}"),
        format!("Food {index}"),
        nutrition,
        vec![
            UnitDefinition::new(100.0, "100 g"),
            UnitDefinition::new(1.0, "g"),
            UnitDefinition::new(240.0, "1 cup"),
        ],
    )
}

#[allow(clippy::cast_precision_loss)]
fn generate_items(count: usize) -> Vec<MealItem> {
    (0..count)
        .map(|index| MealItem::new(sample_food(index), 0.5 + (index % 4) as f64, index % 3))
        .collect()
}

fn generate_plan(days: u64) -> Vec<MealPlanDay> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    (0..days)
        .map(|offset| {
            let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);
            MealPlanDay::new(date)
                .with_slot(MealSlot::Breakfast, generate_items(3))
                .with_slot(MealSlot::Lunch, generate_items(5))
                .with_slot(MealSlot::Dinner, generate_items(5))
                .with_slot(MealSlot::Snack, generate_items(2))
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in ITEM_COUNTS {
        let items = generate_items(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("items", count), &items, |b, items| {
            b.iter(|| aggregate(black_box(items)));
        });
    }

    group.finish();
}

fn bench_aggregate_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_plan");

    for days in PLAN_LENGTHS {
        let plan = generate_plan(days);
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::new("days", days), &plan, |b, plan| {
            b.iter(|| aggregate_plan(black_box(plan)));
        });
    }

    group.finish();
}

fn bench_allocate_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");

    group.throughput(Throughput::Elements(DietArchetype::ALL.len() as u64));
    group.bench_function("allocate_targets_all_archetypes", |b| {
        b.iter(|| {
            for archetype in DietArchetype::ALL {
                let _ = allocate_targets(black_box(2000.0), black_box(archetype));
            }
        });
    });

    let split = MealSplitConfig::default();
    group.bench_function("allocate_meal_targets", |b| {
        b.iter(|| {
            allocate_meal_targets(
                black_box(2400.0),
                black_box(DietArchetype::Mediterranean),
                black_box(&split),
            )
        });
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let noisy = NutritionVector {
        calories: 1234.000_000_000_2,
        carbs: 150.700_000_000_000_03,
        proteins: 1.0 / 3.0,
        fats: 66.666_666,
        fiber: 24.1,
        sodium: 1500.5,
        cholesterol: 0.0,
        sugar: 40.000_000_01,
    };

    c.bench_function("normalize_vector", |b| {
        b.iter(|| normalize_vector(black_box(&noisy)));
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_aggregate_plan,
    bench_allocate_targets,
    bench_normalize,
);

criterion_main!(benches);
