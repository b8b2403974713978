use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use graphseg_image::Field;
use graphseg_imgproc::{
    filter::{gaussian_smooth_with_strategy, HalfKernel},
    parallel::ExecutionStrategy,
};

fn half_kernel(radius: usize) -> HalfKernel<f32> {
    let weights = (0..=radius)
        .map(|i| {
            let x = i as f32 / (radius as f32 / 2.0).max(1.0);
            (-0.5 * x * x).exp()
        })
        .collect();
    HalfKernel::new(weights).unwrap().normalized().unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Smooth");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for radius in [1, 2, 4, 8].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * (2 * *radius + 1)) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, radius);

            let size = [*width, *height].into();
            let src = Field::from_size_fn(size, |x, y| ((x * 31 + y * 17) % 255) as f32).unwrap();
            let kernel = half_kernel(*radius);

            for (name, strategy) in [
                ("serial", ExecutionStrategy::Serial),
                ("parallel", ExecutionStrategy::Parallel),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(name, &parameter_string),
                    &(&src, &kernel),
                    |b, i| {
                        let (src, kernel) = *i;
                        let mut dst = Field::zeros(src.size()).unwrap();
                        let mut scratch = Field::zeros(src.size()).unwrap();
                        b.iter(|| {
                            black_box(gaussian_smooth_with_strategy(
                                src,
                                &mut dst,
                                &mut scratch,
                                kernel,
                                strategy,
                            ))
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
