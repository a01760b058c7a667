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
use crate::kernel::color::ColorModel;
use crate::kernel::matrix::OutputMatrix;

/// Sub-pixel blend shapes for one output scale. Every shape is drawn into
/// the bottom-right corner of the block, rotation is handled by
/// [`OutputMatrix`].
pub(crate) trait BlendPattern {
    const SCALE: usize;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix);

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix);

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix);

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix);

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix);
}

pub(crate) struct Pattern2x;
pub(crate) struct Pattern3x;
pub(crate) struct Pattern4x;
pub(crate) struct Pattern5x;
pub(crate) struct Pattern6x;

impl BlendPattern for Pattern2x {
    const SCALE: usize = 2;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern2x::SCALE;
        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
    }

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern2x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
    }

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(1, 0, col, 1, 4);
        out.grad::<C>(0, 1, col, 1, 4);
        out.grad::<C>(1, 1, col, 5, 6);
    }

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(1, 1, col, 1, 2);
    }

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        // 1 - pi/4
        out.grad::<C>(1, 1, col, 21, 100);
    }
}

impl BlendPattern for Pattern3x {
    const SCALE: usize = 3;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern3x::SCALE;
        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
        out.set(S - 1, 2, col);
    }

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern3x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
        out.set(2, S - 1, col);
    }

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(2, 0, col, 1, 4);
        out.grad::<C>(0, 2, col, 1, 4);
        out.grad::<C>(2, 1, col, 3, 4);
        out.grad::<C>(1, 2, col, 3, 4);
        out.set(2, 2, col);
    }

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(1, 2, col, 1, 8);
        out.grad::<C>(2, 1, col, 1, 8);
        out.grad::<C>(2, 2, col, 7, 8);
    }

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(2, 2, col, 45, 100);
    }
}

impl BlendPattern for Pattern4x {
    const SCALE: usize = 4;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern4x::SCALE;
        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
        out.grad::<C>(S - 2, 3, col, 3, 4);
        out.set(S - 1, 2, col);
        out.set(S - 1, 3, col);
    }

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern4x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
        out.grad::<C>(3, S - 2, col, 3, 4);
        out.set(2, S - 1, col);
        out.set(3, S - 1, col);
    }

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(3, 1, col, 3, 4);
        out.grad::<C>(1, 3, col, 3, 4);
        out.grad::<C>(3, 0, col, 1, 4);
        out.grad::<C>(0, 3, col, 1, 4);
        out.grad::<C>(2, 2, col, 1, 3);
        out.set(3, 3, col);
        out.set(3, 2, col);
        out.set(2, 3, col);
    }

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern4x::SCALE;
        out.grad::<C>(S - 1, S / 2, col, 1, 2);
        out.grad::<C>(S - 2, S / 2 + 1, col, 1, 2);
        out.set(S - 1, S - 1, col);
    }

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(3, 3, col, 68, 100);
        out.grad::<C>(3, 2, col, 9, 100);
        out.grad::<C>(2, 3, col, 9, 100);
    }
}

impl BlendPattern for Pattern5x {
    const SCALE: usize = 5;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern5x::SCALE;
        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 3, 4, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
        out.grad::<C>(S - 2, 3, col, 3, 4);
        out.set(S - 1, 2, col);
        out.set(S - 1, 3, col);
        out.set(S - 1, 4, col);
        out.set(S - 2, 4, col);
    }

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern5x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(4, S - 3, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
        out.grad::<C>(3, S - 2, col, 3, 4);
        out.set(2, S - 1, col);
        out.set(3, S - 1, col);
        out.set(4, S - 1, col);
        out.set(4, S - 2, col);
    }

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern5x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);

        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);

        out.grad::<C>(3, 3, col, 2, 3);

        out.set(2, S - 1, col);
        out.set(3, S - 1, col);
        out.set(4, S - 1, col);

        out.set(S - 1, 2, col);
        out.set(S - 1, 3, col);
    }

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern5x::SCALE;
        out.grad::<C>(S - 1, S / 2, col, 1, 8);
        out.grad::<C>(S - 2, S / 2 + 1, col, 1, 8);
        out.grad::<C>(S - 3, S / 2 + 2, col, 1, 8);
        out.grad::<C>(4, 3, col, 7, 8);
        out.grad::<C>(3, 4, col, 7, 8);
        out.set(4, 4, col);
    }

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(4, 4, col, 86, 100);
        out.grad::<C>(4, 3, col, 23, 100);
        out.grad::<C>(3, 4, col, 23, 100);
    }
}

impl BlendPattern for Pattern6x {
    const SCALE: usize = 6;

    fn line_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern6x::SCALE;
        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 3, 4, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
        out.grad::<C>(S - 2, 3, col, 3, 4);
        out.grad::<C>(S - 3, 5, col, 3, 4);
        out.set(S - 1, 2, col);
        out.set(S - 1, 3, col);
        out.set(S - 1, 4, col);
        out.set(S - 1, 5, col);
        out.set(S - 2, 4, col);
        out.set(S - 2, 5, col);
    }

    fn line_steep<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern6x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(4, S - 3, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
        out.grad::<C>(3, S - 2, col, 3, 4);
        out.grad::<C>(5, S - 3, col, 3, 4);
        out.set(2, S - 1, col);
        out.set(3, S - 1, col);
        out.set(4, S - 1, col);
        out.set(5, S - 1, col);
        out.set(4, S - 2, col);
        out.set(5, S - 2, col);
    }

    fn line_steep_and_shallow<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern6x::SCALE;
        out.grad::<C>(0, S - 1, col, 1, 4);
        out.grad::<C>(2, S - 2, col, 1, 4);
        out.grad::<C>(1, S - 1, col, 3, 4);
        out.grad::<C>(3, S - 2, col, 3, 4);

        out.grad::<C>(S - 1, 0, col, 1, 4);
        out.grad::<C>(S - 2, 2, col, 1, 4);
        out.grad::<C>(S - 1, 1, col, 3, 4);
        out.grad::<C>(S - 2, 3, col, 3, 4);

        out.set(2, S - 1, col);
        out.set(3, S - 1, col);
        out.set(4, S - 1, col);
        out.set(5, S - 1, col);

        out.set(4, S - 2, col);
        out.set(5, S - 2, col);

        out.set(S - 1, 2, col);
        out.set(S - 1, 3, col);
    }

    fn line_diagonal<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        const S: usize = Pattern6x::SCALE;
        out.grad::<C>(S - 1, S / 2, col, 1, 2);
        out.grad::<C>(S - 2, S / 2 + 1, col, 1, 2);
        out.grad::<C>(S - 3, S / 2 + 2, col, 1, 2);
        out.set(S - 2, S - 1, col);
        out.set(S - 1, S - 1, col);
        out.set(S - 1, S - 2, col);
    }

    fn corner<C: ColorModel>(col: u32, out: &mut OutputMatrix) {
        out.grad::<C>(5, 5, col, 97, 100);
        out.grad::<C>(4, 5, col, 42, 100);
        out.grad::<C>(5, 4, col, 42, 100);
        out.grad::<C>(5, 3, col, 6, 100);
        out.grad::<C>(3, 5, col, 6, 100);
    }
}
