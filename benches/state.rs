use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use gust86::{Gust86Orbit, Satellite, Trajectory};
use std::hint::black_box;

const POLL_ITERS: u64 = 1024;
const STEP_SEC: f64 = 456.789;

#[inline(always)]
fn poll_state(orbit: &Gust86Orbit) {
    for i in 0..POLL_ITERS {
        let time = i as f64 * STEP_SEC;
        let _ = black_box(orbit.state(black_box(time)));
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");
    group.throughput(Throughput::Elements(POLL_ITERS));

    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);
        group.bench_function(satellite.name(), |b| b.iter(|| poll_state(&orbit)));
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
