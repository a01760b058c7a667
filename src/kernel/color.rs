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
use crate::pixel_format::{pack_argb, unpack_argb};

/// Color distance and gradient policy used by the kernel.
pub(crate) trait ColorModel {
    fn dist(pix1: u32, pix2: u32, luminance_weight: f64) -> f64;

    /// Blends `front` with opacity `m / n` over `back`.
    fn alpha_grad(back: &mut u32, front: u32, m: u32, n: u32);
}

pub(crate) struct RgbModel;

pub(crate) struct ArgbModel;

// ITU-R BT.2020
const K_B: f64 = 0.0593;
const K_R: f64 = 0.2627;
const K_G: f64 = 1.0 - K_B - K_R;
const SCALE_B: f64 = 0.5 / (1.0 - K_B);
const SCALE_R: f64 = 0.5 / (1.0 - K_R);

/// YCbCr distance, computed on the channel differences since the
/// conversion is linear. Not divided by 255.
#[inline(always)]
pub(crate) fn dist_ycbcr(pix1: u32, pix2: u32, luminance_weight: f64) -> f64 {
    let (_, r1, g1, b1) = unpack_argb(pix1);
    let (_, r2, g2, b2) = unpack_argb(pix2);
    let r_diff = (r1 as i32 - r2 as i32) as f64;
    let g_diff = (g1 as i32 - g2 as i32) as f64;
    let b_diff = (b1 as i32 - b2 as i32) as f64;

    let y = K_R * r_diff + K_G * g_diff + K_B * b_diff;
    let c_b = SCALE_B * (b_diff - y);
    let c_r = SCALE_R * (r_diff - y);

    let luma = luminance_weight * y;
    (luma * luma + c_b * c_b + c_r * c_r).sqrt()
}

impl ColorModel for RgbModel {
    #[inline(always)]
    fn dist(pix1: u32, pix2: u32, luminance_weight: f64) -> f64 {
        dist_ycbcr(pix1, pix2, luminance_weight)
    }

    #[inline(always)]
    fn alpha_grad(back: &mut u32, front: u32, m: u32, n: u32) {
        let (a_f, r_f, g_f, b_f) = unpack_argb(front);
        let (a_b, r_b, g_b, b_b) = unpack_argb(*back);
        let calc = |f: u8, b: u8| ((f as u32 * m + b as u32 * (n - m)) / n) as u8;
        *back = pack_argb(
            calc(a_f, a_b),
            calc(r_f, r_b),
            calc(g_f, g_b),
            calc(b_f, b_b),
        );
    }
}

impl ColorModel for ArgbModel {
    #[inline(always)]
    fn dist(pix1: u32, pix2: u32, luminance_weight: f64) -> f64 {
        let a1 = (pix1 >> 24) as f64 / 255.0;
        let a2 = (pix2 >> 24) as f64 / 255.0;
        let d = dist_ycbcr(pix1, pix2, luminance_weight);
        if a1 < a2 {
            a1 * d + 255.0 * (a2 - a1)
        } else {
            a2 * d + 255.0 * (a1 - a2)
        }
    }

    #[inline(always)]
    fn alpha_grad(back: &mut u32, front: u32, m: u32, n: u32) {
        let (a_f, r_f, g_f, b_f) = unpack_argb(front);
        let (a_b, r_b, g_b, b_b) = unpack_argb(*back);
        let weight_front = a_f as u32 * m;
        let weight_back = a_b as u32 * (n - m);
        let weight_sum = weight_front + weight_back;
        if weight_sum == 0 {
            *back = 0;
            return;
        }
        let calc =
            |f: u8, b: u8| ((f as u32 * weight_front + b as u32 * weight_back) / weight_sum) as u8;
        *back = pack_argb(
            (weight_sum / n) as u8,
            calc(r_f, r_b),
            calc(g_f, g_b),
            calc(b_f, b_b),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_have_no_distance() {
        assert_eq!(dist_ycbcr(0xff123456, 0xff123456, 1.0), 0.0);
        assert_eq!(ArgbModel::dist(0x80123456, 0x80123456, 1.0), 0.0);
    }

    #[test]
    fn transparent_pixels_are_far_from_opaque() {
        let d = ArgbModel::dist(0x00000000, 0xff000000, 1.0);
        assert_eq!(d, 255.0);
    }

    #[test]
    fn half_gradient_of_black_and_white() {
        let mut back = 0xff000000u32;
        ArgbModel::alpha_grad(&mut back, 0xffffffff, 1, 2);
        assert_eq!(back, 0xff7f7f7f);

        let mut back = 0xff000000u32;
        RgbModel::alpha_grad(&mut back, 0xffffffff, 1, 2);
        assert_eq!(back, 0xff7f7f7f);
    }

    #[test]
    fn fully_transparent_gradient_is_zero() {
        let mut back = 0x00ffffffu32;
        ArgbModel::alpha_grad(&mut back, 0x00ffffff, 1, 4);
        assert_eq!(back, 0);
    }
}
