#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xbrz_scaler::{
    ColorFormat, PixelFormat, ScalingOptions, Scaling, ThreadingPolicy, XbrzScaler,
};

#[derive(Arbitrary, Debug)]
struct Frame {
    width: u8,
    height: u8,
    factor: u8,
    threads: u8,
    src_padding: u8,
    dst_padding: u8,
    ignore_alpha: bool,
    pixels: Vec<u32>,
}

fuzz_target!(|frame: Frame| {
    let width = frame.width as usize % 48 + 1;
    let height = frame.height as usize % 48 + 1;
    let factor = frame.factor as usize % 6 + 1;
    let threads = frame.threads as usize % 8 + 1;
    if frame.pixels.is_empty() {
        return;
    }

    let src_pitch = width * 4 + frame.src_padding as usize % 16;
    let dst_pitch = width * factor * 4 + frame.dst_padding as usize % 16;
    let mut src = vec![0u8; src_pitch * height];
    for (i, chunk) in src.chunks_exact_mut(4).enumerate() {
        chunk.copy_from_slice(&frame.pixels[i % frame.pixels.len()].to_ne_bytes());
    }

    let options = ScalingOptions {
        color_format: if frame.ignore_alpha {
            ColorFormat::Rgb
        } else {
            ColorFormat::Argb
        },
        ..ScalingOptions::default()
    };
    let single =
        XbrzScaler::with_options(PixelFormat::argb8888(), ThreadingPolicy::Single, options)
            .unwrap();
    let pooled = XbrzScaler::with_options(
        PixelFormat::argb8888(),
        ThreadingPolicy::Fixed(threads),
        options,
    )
    .unwrap();
    single.set_factor(factor).unwrap();
    pooled.set_factor(factor).unwrap();

    let mut expected = vec![0u8; dst_pitch * height * factor];
    let mut actual = vec![0u8; dst_pitch * height * factor];
    single
        .scale(&src, src_pitch, &mut expected, dst_pitch, width, height, 0, 0)
        .unwrap();
    pooled
        .scale(&src, src_pitch, &mut actual, dst_pitch, width, height, 0, 0)
        .unwrap();
    assert_eq!(expected, actual);
});
