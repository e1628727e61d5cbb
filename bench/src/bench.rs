use std::time::Duration;

use criterion::{Bencher, Criterion, PlottingBackend};

mod date;
mod parse;

fn main() {
    // Benchmarks are registered by hand instead of through Criterion's
    // macros, so each module just exposes a `define` function.
    let mut c = Criterion::default()
        .configure_from_args()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .noise_threshold(0.01)
        .plotting_backend(PlottingBackend::None);
    date::define(&mut c);
    parse::define(&mut c);
    c.final_summary();
}

/// Registers a single benchmark.
///
/// Every benchmark goes through here, so settings that should apply to all
/// of them only need to change in one place.
fn benchmark(
    c: &mut Criterion,
    id: impl Into<String>,
    f: impl FnMut(&mut Bencher<'_>),
) {
    c.bench_function(&id.into(), f);
}
