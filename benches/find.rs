use std::{convert::Infallible, hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use polyiter::{iter::First, prelude::*};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn find(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let mut nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    nums[400_000] = 0;
    let mut group = criterion.benchmark_group("find_found_late");
    bench_fn!(group.iter_find_0(&nums));
    bench_fn!(group.poly_find_0(&nums));
    bench_fn!(group.manual_first_0(&nums));
    group.finish();

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(500_000)
        .collect();
    let mut group = criterion.benchmark_group("find_not_found");
    bench_fn!(group.iter_find_0(&nums));
    bench_fn!(group.poly_find_0(&nums));
    bench_fn!(group.manual_first_0(&nums));
    group.finish();

    let table: IndexMap<_, _> = (0..100_000)
        .map(|i| (format!("key{i}"), rng.random_range(1..=i32::MAX)))
        .collect();
    let mut group = criterion.benchmark_group("index_of_mapping");
    bench_fn!(group.iter_position_0(&table));
    bench_fn!(group.poly_index_of_0(&table));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(30))
        .sample_size(300);
    targets = find
}
criterion_main!(benches);

fn iter_find_0(nums: &[i32]) -> Option<i32> {
    nums.iter().find(|&&num| num == 0).copied()
}

fn poly_find_0(nums: &[i32]) -> Option<i32> {
    polyiter::find(nums, |&&num, _| num == 0).copied()
}

// Drives the collector by hand, as `feed_into()` does.
fn manual_first_0(nums: &[i32]) -> Option<i32> {
    let mut collector = First::new(|&&num: &&i32, _: &usize| Ok::<_, Infallible>(num == 0));
    let mut cursor = nums.into_cursor();

    while let Some(element) = cursor.pull()
        && collector.collect(element).is_continue()
    {}

    match collector.finish() {
        Ok(found) => found.map(|(&num, _)| num),
    }
}

fn iter_position_0(table: &IndexMap<String, i32>) -> Option<&String> {
    table
        .iter()
        .find_map(|(key, &value)| (value == 0).then_some(key))
}

fn poly_index_of_0(table: &IndexMap<String, i32>) -> Option<&String> {
    polyiter::index_of(table, &0).ok().flatten()
}
