use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use viskit_image::{ops::cast_and_scale, Image, ImageSize};
use viskit_nn::{conv::conv2d_valid, Filter};

fn bench_conv2d_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conv2dValid");

    let mut rng = rand::rng();

    for size in [28usize, 64, 128].iter() {
        let parameter_string = format!("{size}x{size}");

        let image_size = ImageSize {
            width: *size,
            height: *size,
        };
        let data = (0..size * size).map(|_| rng.random()).collect();
        let image_u8 = Image::<u8, 1>::new(image_size, data).unwrap();

        let mut image = Image::<f32, 1>::from_size_val(image_size, 0.0).unwrap();
        cast_and_scale(&image_u8, &mut image, 1.0 / 255.0).unwrap();

        let weights = (0..5 * 5 * 8).map(|_| rng.random_range(-1.0..1.0)).collect();
        let filter = Filter::<1, 8>::new(5, 5, weights).unwrap();

        let output = Image::<f32, 8>::from_size_val(
            ImageSize {
                width: size - 4,
                height: size - 4,
            },
            0.0,
        )
        .unwrap();

        group.throughput(criterion::Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::new("direct", &parameter_string),
            &(&image, &filter, &output),
            |b, i| {
                let (src, filt, mut dst) = (i.0, i.1, i.2.clone());
                b.iter(|| conv2d_valid(black_box(src), black_box(filt), black_box(&mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conv2d_valid);
criterion_main!(benches);
