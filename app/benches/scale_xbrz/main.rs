use criterion::{Criterion, criterion_group, criterion_main};
use image::{EncodableLayout, Rgba, RgbaImage};
use xbrz_scaler::{PixelFormat, Scaling, ThreadingPolicy, XbrzScaler};

/// Synthetic sprite sheet with circles over translucent diagonal stripes.
fn sprite_sheet_argb() -> (Vec<u8>, usize, usize) {
    let (width, height) = (320u32, 200u32);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = (x % 40) as i32 - 20;
        let dy = (y % 40) as i32 - 20;
        if dx * dx + dy * dy < 144 {
            Rgba([230, 40, 40, 255])
        } else if (x + y) % 16 < 5 {
            Rgba([20, 20, 90, 200])
        } else {
            Rgba([250, 240, 200, 255])
        }
    });
    let bytes = img
        .as_bytes()
        .chunks_exact(4)
        .flat_map(|px| u32::from_be_bytes([px[3], px[0], px[1], px[2]]).to_ne_bytes())
        .collect();
    (bytes, width as usize, height as usize)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (src, width, height) = sprite_sheet_argb();

    for (name, policy) in [
        ("Single", ThreadingPolicy::Single),
        ("4 threads", ThreadingPolicy::Fixed(4)),
        ("Adaptive", ThreadingPolicy::Adaptive),
    ] {
        for factor in [2usize, 4, 6] {
            c.bench_function(&format!("xBRZ ARGB8888 {factor}x: {name}"), |b| {
                let scaler = XbrzScaler::new(PixelFormat::argb8888(), policy).unwrap();
                scaler.set_factor(factor).unwrap();
                let dst_pitch = width * factor * 4;
                let mut dst = vec![0u8; dst_pitch * height * factor];
                b.iter(|| {
                    scaler
                        .scale(&src, width * 4, &mut dst, dst_pitch, width, height, 0, 0)
                        .unwrap();
                })
            });
        }
    }

    c.bench_function("xBRZ RGB565 3x: 4 threads", |b| {
        let format = PixelFormat::rgb565();
        let src: Vec<u8> = src
            .chunks_exact(4)
            .flat_map(|px| {
                let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                (format.from_packed_argb(argb) as u16).to_ne_bytes()
            })
            .collect();
        let scaler = XbrzScaler::new(format, ThreadingPolicy::Fixed(4)).unwrap();
        scaler.set_factor(3).unwrap();
        let dst_pitch = width * 3 * 2;
        let mut dst = vec![0u8; dst_pitch * height * 3];
        b.iter(|| {
            scaler
                .scale(&src, width * 2, &mut dst, dst_pitch, width, height, 0, 0)
                .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
