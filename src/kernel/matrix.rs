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
use crate::kernel::blend::Rotation;
use crate::kernel::color::ColorModel;

/// 4x4 source neighbourhood, the current pixel is `f`.
///
/// ```text
/// | A | B | C | D |
/// | E | F | G | H |
/// | I | J | K | L |
/// | M | N | O | P |
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Kernel4x4 {
    pub(crate) a: u32,
    pub(crate) b: u32,
    pub(crate) c: u32,
    pub(crate) d: u32,
    pub(crate) e: u32,
    pub(crate) f: u32,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) i: u32,
    pub(crate) j: u32,
    pub(crate) k: u32,
    pub(crate) l: u32,
    pub(crate) m: u32,
    pub(crate) n: u32,
    pub(crate) o: u32,
    pub(crate) p: u32,
}

/// 3x3 source neighbourhood, the current pixel is `e`.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Kernel3x3 {
    pub(crate) a: u32,
    pub(crate) b: u32,
    pub(crate) c: u32,
    pub(crate) d: u32,
    pub(crate) e: u32,
    pub(crate) f: u32,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) i: u32,
}

impl Kernel3x3 {
    #[inline(always)]
    pub(crate) fn from_4x4(ker: &Kernel4x4) -> Kernel3x3 {
        Kernel3x3 {
            a: ker.a,
            b: ker.b,
            c: ker.c,
            d: ker.e,
            e: ker.f,
            f: ker.g,
            g: ker.i,
            h: ker.j,
            i: ker.k,
        }
    }

    #[inline(always)]
    fn rotate_90(&self) -> Kernel3x3 {
        Kernel3x3 {
            a: self.g,
            b: self.d,
            c: self.a,
            d: self.h,
            e: self.e,
            f: self.b,
            g: self.i,
            h: self.f,
            i: self.c,
        }
    }

    /// Neighbourhood as seen after turning the image by `rotation`.
    #[inline(always)]
    pub(crate) fn rotated(&self, rotation: Rotation) -> Kernel3x3 {
        let mut ker = *self;
        for _ in 0..rotation as usize {
            ker = ker.rotate_90();
        }
        ker
    }
}

/// Clamped source rows around `y` feeding a [`Kernel4x4`].
pub(crate) struct KernelRows<'a> {
    above: &'a [u32],
    center: &'a [u32],
    below: &'a [u32],
    below2: &'a [u32],
    width: usize,
}

impl<'a> KernelRows<'a> {
    #[inline]
    pub(crate) fn new(src: &'a [u32], width: usize, height: usize, y: usize) -> KernelRows<'a> {
        let row = |y: usize| &src[y * width..(y + 1) * width];
        KernelRows {
            above: row(y.saturating_sub(1)),
            center: row(y),
            below: row((y + 1).min(height - 1)),
            below2: row((y + 2).min(height - 1)),
            width,
        }
    }

    #[inline(always)]
    pub(crate) fn kernel(&self, x: usize) -> Kernel4x4 {
        let x_m1 = x.saturating_sub(1);
        let x_p1 = (x + 1).min(self.width - 1);
        let x_p2 = (x + 2).min(self.width - 1);
        Kernel4x4 {
            a: self.above[x_m1],
            b: self.above[x],
            c: self.above[x_p1],
            d: self.above[x_p2],
            e: self.center[x_m1],
            f: self.center[x],
            g: self.center[x_p1],
            h: self.center[x_p2],
            i: self.below[x_m1],
            j: self.below[x],
            k: self.below[x_p1],
            l: self.below[x_p2],
            m: self.below2[x_m1],
            n: self.below2[x],
            o: self.below2[x_p1],
            p: self.below2[x_p2],
        }
    }
}

/// Rotated write access to the `scale x scale` output block of one pixel.
pub(crate) struct OutputMatrix<'a> {
    out: &'a mut [u32],
    offset: usize,
    stride: usize,
    scale: usize,
    rotation: Rotation,
}

impl<'a> OutputMatrix<'a> {
    #[inline(always)]
    pub(crate) fn new(
        out: &'a mut [u32],
        offset: usize,
        stride: usize,
        scale: usize,
        rotation: Rotation,
    ) -> OutputMatrix<'a> {
        OutputMatrix {
            out,
            offset,
            stride,
            scale,
            rotation,
        }
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        let (mut i, mut j) = (i, j);
        for _ in 0..self.rotation as usize {
            let old_i = self.scale - 1 - j;
            j = i;
            i = old_i;
        }
        self.offset + i * self.stride + j
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, i: usize, j: usize, color: u32) {
        let index = self.index(i, j);
        self.out[index] = color;
    }

    #[inline(always)]
    pub(crate) fn grad<C: ColorModel>(&mut self, i: usize, j: usize, color: u32, m: u32, n: u32) {
        let index = self.index(i, j);
        C::alpha_grad(&mut self.out[index], color, m, n);
    }
}
