/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use xbrz_scaler::{
    ColorFormat, MAX_FACTOR, NormalScaler, PixelFormat, ScalerError, ScalerRegistry, Scaling,
    ScalingOptions, ThreadingPolicy, XbrzScaler,
};

/// Deterministic sprite-like noise: a few colors in blocky runs.
fn sprite(width: usize, height: usize, seed: u32) -> Vec<u32> {
    const PALETTE: [u32; 5] = [0xff000000, 0xffffffff, 0xffd03030, 0xff3050d0, 0x8020a020];
    let mut state = seed;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let pick = if (state >> 16) % 4 == 0 {
                (state >> 20) as usize % PALETTE.len()
            } else {
                (x / 3 + y / 2) % PALETTE.len()
            };
            pixels.push(PALETTE[pick]);
        }
    }
    pixels
}

fn to_bytes(pixels: &[u32]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
}

fn with_padding(tight: &[u8], row_bytes: usize, pitch: usize) -> Vec<u8> {
    let mut padded = vec![0x5au8; pitch * (tight.len() / row_bytes)];
    for (dst, src) in padded.chunks_exact_mut(pitch).zip(tight.chunks_exact(row_bytes)) {
        dst[..row_bytes].copy_from_slice(src);
    }
    padded
}

fn scale_argb(policy: ThreadingPolicy, factor: usize, src: &[u32], w: usize, h: usize) -> Vec<u8> {
    let scaler = XbrzScaler::new(PixelFormat::argb8888(), policy).unwrap();
    scaler.set_factor(factor).unwrap();
    let mut dst = vec![0u8; w * h * factor * factor * 4];
    scaler
        .scale(&to_bytes(src), w * 4, &mut dst, w * factor * 4, w, h, 0, 0)
        .unwrap();
    dst
}

#[test]
fn flat_block_doubles_to_flat_block() {
    let src = vec![0xff804020u32; 4 * 4];
    let dst = scale_argb(ThreadingPolicy::Single, 2, &src, 4, 4);
    assert_eq!(dst, to_bytes(&[0xff804020u32; 8 * 8]));
}

#[test]
fn result_does_not_depend_on_thread_count() {
    let src = sprite(16, 16, 7);
    let single = scale_argb(ThreadingPolicy::Single, 3, &src, 16, 16);
    assert_eq!(single.len(), 48 * 48 * 4);
    for threads in [2, 8] {
        let pooled = scale_argb(ThreadingPolicy::Fixed(threads), 3, &src, 16, 16);
        assert_eq!(single, pooled, "{threads} threads");
    }
}

#[test]
fn many_bands_match_single_pass() {
    let (w, h) = (37, 83);
    let src = sprite(w, h, 99);
    for factor in 2..=MAX_FACTOR {
        let single = scale_argb(ThreadingPolicy::Single, factor, &src, w, h);
        let pooled = scale_argb(ThreadingPolicy::Fixed(8), factor, &src, w, h);
        assert!(single == pooled, "factor {factor}");
    }
}

#[test]
fn pitch_does_not_change_pixels() {
    let (w, h, factor) = (13, 11, 4);
    let src = sprite(w, h, 3);
    let tight = scale_argb(ThreadingPolicy::Fixed(2), factor, &src, w, h);

    let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(2)).unwrap();
    scaler.set_factor(factor).unwrap();
    let src_pitch = w * 4 + 12;
    let dst_row = w * factor * 4;
    let dst_pitch = dst_row + 20;
    let src_padded = with_padding(&to_bytes(&src), w * 4, src_pitch);
    let mut dst = vec![0xa5u8; dst_pitch * h * factor];
    scaler
        .scale(&src_padded, src_pitch, &mut dst, dst_pitch, w, h, 7, 9)
        .unwrap();

    for (row, expected) in dst.chunks_exact(dst_pitch).zip(tight.chunks_exact(dst_row)) {
        assert_eq!(&row[..dst_row], expected);
        assert!(row[dst_row..].iter().all(|&v| v == 0xa5));
    }
}

#[test]
fn sixteen_bit_path_matches_expanded_source() {
    let format = PixelFormat::rgb565();
    let (w, h, factor) = (20, 18, 3);
    let colors: Vec<u16> = sprite(w, h, 11)
        .iter()
        .map(|&argb| format.from_packed_argb(argb) as u16)
        .collect();
    let expanded: Vec<u32> = colors
        .iter()
        .map(|&c| format.to_packed_argb(c as u32))
        .collect();

    let scaler = XbrzScaler::new(format, ThreadingPolicy::Fixed(4)).unwrap();
    scaler.set_factor(factor).unwrap();
    let src: Vec<u8> = colors.iter().flat_map(|c| c.to_ne_bytes()).collect();
    let mut dst = vec![0u8; w * h * factor * factor * 2];
    scaler
        .scale(&src, w * 2, &mut dst, w * factor * 2, w, h, 0, 0)
        .unwrap();

    let reference = scale_argb(ThreadingPolicy::Single, factor, &expanded, w, h);
    let narrowed: Vec<u16> = reference
        .chunks_exact(4)
        .map(|px| {
            let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            format.from_packed_argb(argb) as u16
        })
        .collect();
    let actual: Vec<u16> = dst
        .chunks_exact(2)
        .map(|px| u16::from_ne_bytes([px[0], px[1]]))
        .collect();
    assert_eq!(actual, narrowed);
}

#[test]
fn factor_stays_within_bounds() {
    let scaler = XbrzScaler::new(PixelFormat::rgb555(), ThreadingPolicy::Single).unwrap();
    assert_eq!(scaler.factor(), 1);
    assert_eq!(scaler.decrease_factor(), 1);
    for _ in 0..MAX_FACTOR * 2 {
        scaler.increase_factor();
    }
    assert_eq!(scaler.factor(), MAX_FACTOR);
    assert_eq!(
        scaler.set_factor(MAX_FACTOR + 1),
        Err(ScalerError::UnsupportedFactor(MAX_FACTOR + 1))
    );
    assert_eq!(scaler.factor(), MAX_FACTOR);
}

#[test]
fn factor_one_copies_and_matches_normal_scaler() {
    let (w, h) = (9, 5);
    let src = to_bytes(&sprite(w, h, 5));
    let xbrz = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(2)).unwrap();
    let normal = NormalScaler::new(PixelFormat::argb8888()).unwrap();
    let mut a = vec![0u8; src.len()];
    let mut b = vec![0u8; src.len()];
    xbrz.scale(&src, w * 4, &mut a, w * 4, w, h, 0, 0).unwrap();
    normal.scale(&src, w * 4, &mut b, w * 4, w, h, 0, 0).unwrap();
    assert_eq!(a, src);
    assert_eq!(b, src);
}

#[test]
fn flat_input_equals_replication_for_every_factor() {
    let src = to_bytes(&[0xff123456u32; 6 * 5]);
    let xbrz = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(3)).unwrap();
    let normal = NormalScaler::new(PixelFormat::argb8888()).unwrap();
    for factor in 2..=5 {
        xbrz.set_factor(factor).unwrap();
        normal.set_factor(factor).unwrap();
        let pitch = 6 * factor * 4;
        let mut a = vec![0u8; pitch * 5 * factor];
        let mut b = vec![0u8; pitch * 5 * factor];
        xbrz.scale(&src, 24, &mut a, pitch, 6, 5, 0, 0).unwrap();
        normal.scale(&src, 24, &mut b, pitch, 6, 5, 0, 0).unwrap();
        assert_eq!(a, b, "factor {factor}");
    }
}

#[test]
fn rgb_mode_is_deterministic_too() {
    let options = ScalingOptions {
        color_format: ColorFormat::Rgb,
        ..ScalingOptions::default()
    };
    let (w, h) = (24, 30);
    let src = to_bytes(&sprite(w, h, 21));
    let mut outputs = Vec::new();
    for policy in [ThreadingPolicy::Single, ThreadingPolicy::Fixed(4)] {
        let scaler = XbrzScaler::with_options(PixelFormat::argb8888(), policy, options).unwrap();
        scaler.set_factor(2).unwrap();
        let mut dst = vec![0u8; w * h * 16];
        scaler.scale(&src, w * 4, &mut dst, w * 8, w, h, 0, 0).unwrap();
        outputs.push(dst);
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn invalid_calls_are_rejected() {
    let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(2)).unwrap();
    let mut dst = vec![0u8; 64];
    assert_eq!(
        scaler.scale(&[], 0, &mut dst, 0, 0, 4, 0, 0),
        Err(ScalerError::ZeroImageDimensions)
    );
    assert_eq!(
        scaler.scale(&[0u8; 64], 8, &mut dst, 16, 4, 4, 0, 0),
        Err(ScalerError::InvalidStride(16, 8))
    );
    assert!(matches!(
        scaler.scale(&[0u8; 60], 16, &mut dst, 16, 4, 4, 0, 0),
        Err(ScalerError::BufferMismatch(_))
    ));
}

#[test]
fn registry_instances_scale() {
    let registry = ScalerRegistry::new();
    let plugin = registry.find_plugin("xbrz2").unwrap();
    let scaler = plugin.create_instance(PixelFormat::argb1555()).unwrap();
    assert_eq!(scaler.factor(), 2);
    let src: Vec<u8> = [0xfc00u16; 4].iter().flat_map(|c| c.to_ne_bytes()).collect();
    let mut dst = vec![0u8; 4 * 4 * 2];
    scaler.scale(&src, 4, &mut dst, 8, 2, 2, 0, 0).unwrap();
    assert!(
        dst.chunks_exact(2)
            .all(|px| u16::from_ne_bytes([px[0], px[1]]) == 0xfc00)
    );
}
