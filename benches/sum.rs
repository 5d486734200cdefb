use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn sum(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(500_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("sum");

    macro_rules! bench_fn {
        ($fn_name:ident) => {
            group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box(&nums)));
            });
        };
    }

    bench_fn!(iter_sum);
    bench_fn!(poly_sum);
    bench_fn!(poly_sum_from);
    bench_fn!(poly_lazy_sum);

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(30))
        .sample_size(300);
    targets = sum
}
criterion_main!(benches);

fn iter_sum(nums: &[i64]) -> i64 {
    nums.iter().sum()
}

fn poly_sum(nums: &[i64]) -> i64 {
    polyiter::sum(polyiter::imap(nums, |&num, _| num)).unwrap_or(0)
}

fn poly_sum_from(nums: &[i64]) -> i64 {
    polyiter::sum_from(nums, 0)
}

// Goes through two lazy adapters before summing.
fn poly_lazy_sum(nums: &[i64]) -> i64 {
    let evens = polyiter::ifilter(nums, |&&num, _| num % 2 == 0);
    polyiter::sum_from(polyiter::imap(evens, |&num, _| num * 2), 0)
}
