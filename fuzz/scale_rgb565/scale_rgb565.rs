#![no_main]

use libfuzzer_sys::fuzz_target;
use xbrz_scaler::{PixelFormat, ScalerRegistry};

fuzz_target!(|data: (u8, u8, u8, u8, Vec<u16>)| {
    let (width, height, factor, plugin, pixels) = data;
    let width = width as usize % 64;
    let height = height as usize % 64;
    let registry = ScalerRegistry::new();
    let plugin = &registry.plugins()[plugin as usize % registry.plugins().len()];
    let Ok(scaler) = plugin.create_instance(PixelFormat::rgb565()) else {
        return;
    };
    if scaler.set_factor(factor as usize % 8).is_err() {
        return;
    }
    let factor = scaler.factor();

    let mut src = Vec::with_capacity(width * height * 2);
    for i in 0..width * height {
        let color = pixels.get(i % pixels.len().max(1)).copied().unwrap_or(0);
        src.extend_from_slice(&color.to_ne_bytes());
    }
    let dst_pitch = width * factor * 2;
    let mut dst = vec![0u8; dst_pitch * height * factor];
    // empty frames are refused, never a panic
    let result = scaler.scale(&src, width * 2, &mut dst, dst_pitch, width, height, 0, 0);
    assert_eq!(result.is_ok(), width > 0 && height > 0);
});
