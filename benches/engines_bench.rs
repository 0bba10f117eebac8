//! Criterion benchmarks for the warehouse engines.
//!
//! Inventories are generated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_warehouse::allocation::SpaceAllocator;
use u_warehouse::knapsack::ValueOptimizer;
use u_warehouse::model::{Item, ItemField, Location, SpaceUnit};
use u_warehouse::routing::{RouteConfig, RoutePlanner};
use u_warehouse::search::{SearchConfig, SearchIndex};
use u_warehouse::sort::{SortConfig, SortEngine, SortStrategy};

const WORDS: [&str; 8] = [
    "cable", "mouse", "laptop", "chair", "lamp", "monitor", "desk", "stand",
];

fn random_location(rng: &mut StdRng) -> Location {
    Location::new(
        (b'A' + rng.random_range(0..8u8)) as char,
        rng.random_range(1..6),
        rng.random_range(1..10),
    )
}

fn inventory(n: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let word = WORDS[rng.random_range(0..WORDS.len())];
            Item::new(format!("ITM-{i:05}"), format!("{word} {i}"))
                .with_category(WORDS[i % WORDS.len()])
                .with_sku(format!("SKU-{}", rng.random_range(0..10_000)))
                .with_quantity(rng.random_range(1..50))
                .with_weight(rng.random_range(0.05..20.0))
                .with_value(rng.random_range(1.0..2000.0))
                .with_location(random_location(&mut rng))
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &n in &[100usize, 1_000, 10_000] {
        let items = inventory(n, 42);
        for strategy in [SortStrategy::Merge, SortStrategy::Quick] {
            let engine = SortEngine::new(SortConfig::default().with_strategy(strategy));
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &items,
                |b, items| b.iter(|| engine.sort(black_box(items), ItemField::Name)),
            );
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &n in &[1_000usize, 10_000] {
        let items = inventory(n, 7);
        let index = SearchIndex::new(&items, SearchConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("scan", n), &index, |b, index| {
            b.iter(|| index.scan(black_box("mouse"), ItemField::Name))
        });
        group.bench_with_input(BenchmarkId::new("prefix", n), &index, |b, index| {
            b.iter(|| index.lookup(black_box("mou")))
        });
    }
    group.finish();
}

fn bench_allocation(c: &mut Criterion) {
    let items = inventory(500, 11);
    let spaces: Vec<SpaceUnit> = (0..200)
        .map(|i| SpaceUnit::new(format!("S{i}"), 20 + (i % 40) as u32))
        .collect();
    let allocator = SpaceAllocator::default();
    c.bench_function("allocate_500x200", |b| {
        b.iter(|| {
            let mut spaces = spaces.clone();
            allocator.allocate(black_box(&items), &mut spaces).unwrap()
        })
    });
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    let items = inventory(100, 3);
    let optimizer = ValueOptimizer::default();
    for &capacity in &[50i64, 200, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            b.iter(|| optimizer.optimize(black_box(&items), cap).unwrap())
        });
    }
    group.finish();
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking_route");
    for &stops in &[5usize, 20, 50] {
        let items = inventory(stops + 1, 5);
        let locations: Vec<Location> = items.iter().map(|i| i.location).collect();
        let mut planner = RoutePlanner::new(RouteConfig::default()).unwrap();
        planner.initialize_graph(&locations);
        group.bench_with_input(BenchmarkId::from_parameter(stops), &locations, |b, locs| {
            b.iter(|| {
                planner
                    .find_optimal_picking_path(black_box(&locs[0]), &locs[1..])
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort,
    bench_search,
    bench_allocation,
    bench_knapsack,
    bench_routing
);
criterion_main!(benches);
