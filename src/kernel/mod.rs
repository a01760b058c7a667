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
mod blend;
mod color;
mod config;
mod matrix;
mod patterns;

use std::ops::Range;

use crate::kernel::blend::{BlendInfo, BlendResult, BlendType, ROTATIONS, Rotation};
use crate::kernel::color::{ArgbModel, ColorModel, RgbModel};
use crate::kernel::matrix::{Kernel3x3, Kernel4x4, KernelRows, OutputMatrix};
use crate::kernel::patterns::{
    BlendPattern, Pattern2x, Pattern3x, Pattern4x, Pattern5x, Pattern6x,
};
pub use config::{ColorFormat, ScalerConfig};

/// Decides which of the four corners between F, G, J and K get blended.
#[inline(always)]
fn pre_process_corners<C: ColorModel>(ker: &Kernel4x4, cfg: &ScalerConfig) -> BlendResult {
    let mut result = BlendResult::default();

    if (ker.f == ker.g && ker.j == ker.k) || (ker.f == ker.j && ker.g == ker.k) {
        return result;
    }

    let dist = |pix1: u32, pix2: u32| C::dist(pix1, pix2, cfg.luminance_weight);

    let jg = dist(ker.i, ker.f)
        + dist(ker.f, ker.c)
        + dist(ker.n, ker.k)
        + dist(ker.k, ker.h)
        + cfg.center_direction_bias * dist(ker.j, ker.g);
    let fk = dist(ker.e, ker.j)
        + dist(ker.j, ker.o)
        + dist(ker.b, ker.g)
        + dist(ker.g, ker.l)
        + cfg.center_direction_bias * dist(ker.f, ker.k);

    if jg < fk {
        let blend = if cfg.dominant_direction_threshold * jg < fk {
            BlendType::Dominant
        } else {
            BlendType::Normal
        };
        if ker.f != ker.g && ker.f != ker.j {
            result.f = blend;
        }
        if ker.k != ker.j && ker.k != ker.g {
            result.k = blend;
        }
    } else if fk < jg {
        let blend = if cfg.dominant_direction_threshold * fk < jg {
            BlendType::Dominant
        } else {
            BlendType::Normal
        };
        if ker.j != ker.f && ker.j != ker.k {
            result.j = blend;
        }
        if ker.g != ker.f && ker.g != ker.k {
            result.g = blend;
        }
    }
    result
}

/// Blends the bottom-right corner of the block at `offset`, as seen
/// through `rotation`.
#[inline(always)]
fn blend_pixel<P: BlendPattern, C: ColorModel>(
    ker: &Kernel3x3,
    out: &mut [u32],
    offset: usize,
    stride: usize,
    blend_info: BlendInfo,
    rotation: Rotation,
    cfg: &ScalerConfig,
) {
    let blend = blend_info.rotate(rotation);
    if blend.bottom_right() < BlendType::Normal {
        return;
    }

    let ker = ker.rotated(rotation);
    let dist = |pix1: u32, pix2: u32| C::dist(pix1, pix2, cfg.luminance_weight);
    let eq = |pix1: u32, pix2: u32| dist(pix1, pix2) < cfg.equal_color_tolerance;

    let do_line_blend = if blend.bottom_right() >= BlendType::Dominant {
        true
    } else if blend.top_right() != BlendType::None && !eq(ker.e, ker.g) {
        // no second blend in an adjacent rotation, except for 90 degree corners
        false
    } else if blend.bottom_left() != BlendType::None && !eq(ker.e, ker.c) {
        false
    } else {
        // L-shapes only get their corner blended
        !(!eq(ker.e, ker.i)
            && eq(ker.g, ker.h)
            && eq(ker.h, ker.i)
            && eq(ker.i, ker.f)
            && eq(ker.f, ker.c))
    };

    let px = if dist(ker.e, ker.f) <= dist(ker.e, ker.h) {
        ker.f
    } else {
        ker.h
    };

    let mut matrix = OutputMatrix::new(out, offset, stride, P::SCALE, rotation);

    if !do_line_blend {
        P::corner::<C>(px, &mut matrix);
        return;
    }

    let fg = dist(ker.f, ker.g);
    let hc = dist(ker.h, ker.c);

    let shallow_line =
        cfg.steep_direction_threshold * fg <= hc && ker.e != ker.g && ker.d != ker.g;
    let steep_line = cfg.steep_direction_threshold * hc <= fg && ker.e != ker.c && ker.b != ker.c;

    match (shallow_line, steep_line) {
        (true, true) => P::line_steep_and_shallow::<C>(px, &mut matrix),
        (true, false) => P::line_shallow::<C>(px, &mut matrix),
        (false, true) => P::line_steep::<C>(px, &mut matrix),
        (false, false) => P::line_diagonal::<C>(px, &mut matrix),
    }
}

#[inline(always)]
fn fill_block(out: &mut [u32], offset: usize, stride: usize, color: u32, scale: usize) {
    for row in 0..scale {
        let start = offset + row * stride;
        out[start..start + scale].fill(color);
    }
}

/// Scales source rows `rows` into `band`, which holds exactly the
/// `rows.len() * scale` output rows of that range.
fn scale_image<P: BlendPattern, C: ColorModel>(
    src: &[u32],
    band: &mut [u32],
    src_width: usize,
    src_height: usize,
    rows: Range<usize>,
    cfg: &ScalerConfig,
) {
    let scale = P::SCALE;
    let trg_width = src_width * scale;

    // Corner decisions carried from the previous row, one per column.
    let mut pre_proc = vec![BlendInfo::default(); src_width];

    // The row above the band is evaluated again so the first band row sees
    // the same top corners it would get in a single pass.
    if rows.start > 0 {
        let kernel_rows = KernelRows::new(src, src_width, src_height, rows.start - 1);
        for x in 0..src_width {
            let res = pre_process_corners::<C>(&kernel_rows.kernel(x), cfg);
            pre_proc[x].set_top_right(res.j);
            if x + 1 < src_width {
                pre_proc[x + 1].set_top_left(res.k);
            }
        }
    }

    for y in rows.clone() {
        let kernel_rows = KernelRows::new(src, src_width, src_height, y);
        let out_row = (y - rows.start) * scale * trg_width;

        // corner blending for (x, y + 1)
        let mut blend_xy1 = BlendInfo::default();

        for x in 0..src_width {
            let ker4 = kernel_rows.kernel(x);

            let res = pre_process_corners::<C>(&ker4, cfg);
            // all four corners of (x, y) are known at this point
            let mut blend_xy = pre_proc[x];
            blend_xy.set_bottom_right(res.f);

            blend_xy1.set_top_right(res.j);
            pre_proc[x] = blend_xy1;

            blend_xy1 = BlendInfo::default();
            blend_xy1.set_top_left(res.k);

            if x + 1 < src_width {
                pre_proc[x + 1].set_bottom_left(res.g);
            }

            let offset = out_row + x * scale;
            fill_block(band, offset, trg_width, ker4.f, scale);

            if blend_xy.needs_blending() {
                let ker3 = Kernel3x3::from_4x4(&ker4);
                for rotation in ROTATIONS {
                    blend_pixel::<P, C>(&ker3, band, offset, trg_width, blend_xy, rotation, cfg);
                }
            }
        }
    }
}

fn scale_with_model<C: ColorModel>(
    factor: usize,
    src: &[u32],
    band: &mut [u32],
    src_width: usize,
    src_height: usize,
    rows: Range<usize>,
    cfg: &ScalerConfig,
) {
    match factor {
        1 => band.copy_from_slice(&src[rows.start * src_width..rows.end * src_width]),
        2 => scale_image::<Pattern2x, C>(src, band, src_width, src_height, rows, cfg),
        3 => scale_image::<Pattern3x, C>(src, band, src_width, src_height, rows, cfg),
        4 => scale_image::<Pattern4x, C>(src, band, src_width, src_height, rows, cfg),
        5 => scale_image::<Pattern5x, C>(src, band, src_width, src_height, rows, cfg),
        6 => scale_image::<Pattern6x, C>(src, band, src_width, src_height, rows, cfg),
        _ => unreachable!("xBRZ factor {factor} is outside of 1..=6"),
    }
}

/// Runs the xBRZ kernel over source rows `rows`.
///
/// `src` is the whole tightly packed ARGB8888 source image, neighbourhood
/// reads are clamped to its borders. `band` receives exactly
/// `rows.len() * factor` rows of `src_width * factor` pixels, nothing
/// outside of it is touched. The output does not depend on how the image
/// is split into row ranges.
pub(crate) fn scale_rows(
    factor: usize,
    src: &[u32],
    band: &mut [u32],
    src_width: usize,
    src_height: usize,
    rows: Range<usize>,
    cfg: &ScalerConfig,
    color_format: ColorFormat,
) {
    debug_assert_eq!(src.len(), src_width * src_height);
    debug_assert_eq!(band.len(), rows.len() * factor * factor * src_width);
    if rows.is_empty() || src_width == 0 {
        return;
    }
    match color_format {
        ColorFormat::Rgb => scale_with_model::<RgbModel>(
            factor, src, band, src_width, src_height, rows, cfg,
        ),
        ColorFormat::Argb => scale_with_model::<ArgbModel>(
            factor, src, band, src_width, src_height, rows, cfg,
        ),
    }
}
