use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use pixelveil_core::embed;

fn prepare_carrier(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = (31 * x + 97 * y) as u8;
        Rgba([v, v.wrapping_add(40), v.wrapping_add(80), 255])
    })
}

/// Benchmark for encoding an image
pub fn image_encoding(c: &mut Criterion) {
    let carrier = prepare_carrier(512, 512);
    let secret_message = "The quick brown fox jumps over the lazy dog. ".repeat(16);

    c.bench_function("hide a message in a 512x512 image", |b| {
        b.iter(|| {
            embed(black_box(&carrier), black_box(&secret_message)).expect("Cannot embed message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
