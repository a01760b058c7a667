use std::time::Instant;

use image::{EncodableLayout, GenericImageView, ImageReader, RgbaImage};
use xbrz_scaler::{PixelFormat, Scaling, ScalerRegistry};

/// RGBA bytes from `image` into native ARGB8888 words and back.
fn rgba_to_argb(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(4)
        .flat_map(|px| {
            let argb = u32::from_be_bytes([px[3], px[0], px[1], px[2]]);
            argb.to_ne_bytes()
        })
        .collect()
}

fn argb_to_rgba(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(4)
        .flat_map(|px| {
            let [a, r, g, b] = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]).to_be_bytes();
            [r, g, b, a]
        })
        .collect()
}

fn main() {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "./assets/sprite.png".to_string());
    let output = args.next().unwrap_or_else(|| "./assets/sprite_xbrz.png".to_string());
    let plugin_name = args.next().unwrap_or_else(|| "xbrz4".to_string());
    let factor: usize = args.next().and_then(|v| v.parse().ok()).unwrap_or(4);

    let img = ImageReader::open(&input).unwrap().decode().unwrap();
    let dimensions = img.dimensions();
    let (width, height) = (dimensions.0 as usize, dimensions.1 as usize);
    let src = rgba_to_argb(img.to_rgba8().as_bytes());

    let registry = ScalerRegistry::new();
    let plugin = registry
        .find_plugin(&plugin_name)
        .unwrap_or_else(|| panic!("unknown scaler {plugin_name}"));
    let scaler = plugin.create_instance(PixelFormat::argb8888()).unwrap();
    scaler.set_factor(factor).unwrap();

    let dst_pitch = width * factor * 4;
    let mut dst = vec![0u8; dst_pitch * height * factor];

    let start_time = Instant::now();
    scaler
        .scale(&src, width * 4, &mut dst, dst_pitch, width, height, 0, 0)
        .unwrap();
    println!(
        "{} {factor}x: {:?}",
        plugin.pretty_name,
        start_time.elapsed()
    );

    let out = RgbaImage::from_raw(
        (width * factor) as u32,
        (height * factor) as u32,
        argb_to_rgba(&dst),
    )
    .unwrap();
    out.save(&output).unwrap();
}
