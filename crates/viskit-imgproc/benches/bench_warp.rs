use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use viskit_image::{Image, ImageSize};
use viskit_imgproc::warp::warp_affine;

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");

    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = ImageSize {
            width: *width,
            height: *height,
        };
        let data = (0..width * height * 3).map(|_| rng.random()).collect();
        let image = Image::<u8, 3>::new(image_size, data).unwrap();

        let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

        // a mild rotation with a small shear
        let theta = [0.9f32, -0.2, 0.2, 0.9];

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &(&image, &output, theta),
            |b, i| {
                let (src, mut dst, theta) = (i.0, i.1.clone(), i.2);
                b.iter(|| {
                    warp_affine(
                        black_box(src),
                        black_box(&mut dst),
                        black_box(&theta),
                        black_box((8, 8)),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
