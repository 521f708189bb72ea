use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use evidence_photo::photo_pipeline::{
    EvidencePhotoPipeline, GrainSynthesizer, PhotoConfig, PixelFormat, PngPhotoWriter, RawFrame,
    StyleProfile,
};

fn generate_mock_frame(width: u32, height: u32, format: PixelFormat) -> RawFrame {
    let bytes_per_pixel = format.bytes_per_pixel().unwrap_or(4);
    let mut bytes = Vec::with_capacity(width as usize * height as usize * bytes_per_pixel);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            for _ in 0..bytes_per_pixel {
                bytes.push(value);
            }
        }
    }
    RawFrame::new(bytes, width, height, format)
}

fn bench_pipeline() -> EvidencePhotoPipeline<PngPhotoWriter> {
    let config = PhotoConfig::builder().output_dir(std::env::temp_dir()).build();
    EvidencePhotoPipeline::with_custom(PngPhotoWriter, GrainSynthesizer::with_seed(0), config)
        .expect("default profile is valid")
}

fn benchmark_develop_sizes(c: &mut Criterion) {
    let (_, timings) = bench_pipeline()
        .develop_with_timings(generate_mock_frame(1920, 1080, PixelFormat::Rgba8))
        .expect("mock frame develops");
    timings.print_summary();

    let mut group = c.benchmark_group("develop_by_size");

    let sizes = vec![
        (640, 360, "640x360"),
        (1280, 720, "1280x720"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_mock_frame(width, height, PixelFormat::Rgba8);
        let mut pipeline = bench_pipeline();

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| {
                let _ = pipeline.develop(black_box(frame.clone()));
            });
        });
    }

    group.finish();
}

fn benchmark_pixel_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("develop_by_format");

    let formats = vec![
        (PixelFormat::Rgba8, "rgba8"),
        (PixelFormat::Bgra8, "bgra8"),
        (PixelFormat::Rgba16F, "rgba16f"),
        (PixelFormat::Rgb10A2, "rgb10a2"),
        (PixelFormat::Rg11B10F, "rg11b10f"),
    ];

    for (format, label) in formats {
        let frame = generate_mock_frame(1280, 720, format);
        let mut pipeline = bench_pipeline();

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| {
                let _ = pipeline.develop(black_box(frame.clone()));
            });
        });
    }

    group.finish();
}

fn benchmark_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("develop_by_profile");
    let frame = generate_mock_frame(1280, 720, PixelFormat::Rgba8);

    for profile in [StyleProfile::camera(), StyleProfile::photo_mode()] {
        let label = profile.name.clone();
        let mut pipeline = bench_pipeline();
        pipeline.set_profile(profile).expect("preset is valid");

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| {
                let _ = pipeline.develop(black_box(frame.clone()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_develop_sizes, benchmark_pixel_formats, benchmark_profiles);
criterion_main!(benches);
