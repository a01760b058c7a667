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
use crate::scaler_error::ScalerError;

/// Describes how color channels are packed into a 16 or 32 bit pixel word.
///
/// Channels narrower than 8 bits are expanded by bit replication so that the
/// largest representable value maps to `0xFF`. Formats without alpha bits are
/// treated as fully opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    pub bytes_per_pixel: usize,
    pub r_bits: u8,
    pub g_bits: u8,
    pub b_bits: u8,
    pub a_bits: u8,
    pub r_shift: u8,
    pub g_shift: u8,
    pub b_shift: u8,
    pub a_shift: u8,
}

impl PixelFormat {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        bytes_per_pixel: usize,
        r_bits: u8,
        g_bits: u8,
        b_bits: u8,
        a_bits: u8,
        r_shift: u8,
        g_shift: u8,
        b_shift: u8,
        a_shift: u8,
    ) -> PixelFormat {
        PixelFormat {
            bytes_per_pixel,
            r_bits,
            g_bits,
            b_bits,
            a_bits,
            r_shift,
            g_shift,
            b_shift,
            a_shift,
        }
    }

    /// 16-bit R5 G6 B5
    pub const fn rgb565() -> PixelFormat {
        PixelFormat::new(2, 5, 6, 5, 0, 11, 5, 0, 0)
    }

    /// 16-bit X1 R5 G5 B5
    pub const fn rgb555() -> PixelFormat {
        PixelFormat::new(2, 5, 5, 5, 0, 10, 5, 0, 0)
    }

    /// 16-bit A1 R5 G5 B5
    pub const fn argb1555() -> PixelFormat {
        PixelFormat::new(2, 5, 5, 5, 1, 10, 5, 0, 15)
    }

    /// 16-bit A4 R4 G4 B4
    pub const fn argb4444() -> PixelFormat {
        PixelFormat::new(2, 4, 4, 4, 4, 8, 4, 0, 12)
    }

    /// 32-bit A8 R8 G8 B8, the layout the xBRZ kernel works in
    pub const fn argb8888() -> PixelFormat {
        PixelFormat::new(4, 8, 8, 8, 8, 16, 8, 0, 24)
    }

    /// 32-bit R8 G8 B8 A8
    pub const fn rgba8888() -> PixelFormat {
        PixelFormat::new(4, 8, 8, 8, 8, 24, 16, 8, 0)
    }

    /// 32-bit A8 B8 G8 R8
    pub const fn abgr8888() -> PixelFormat {
        PixelFormat::new(4, 8, 8, 8, 8, 0, 8, 16, 24)
    }

    #[inline]
    pub fn bits_per_pixel(&self) -> usize {
        self.bytes_per_pixel * 8
    }

    /// True when pixels already are in the kernel's packed ARGB8888 layout.
    #[inline]
    pub fn is_native_argb(&self) -> bool {
        self.bytes_per_pixel == 4
            && self.r_bits == 8
            && self.g_bits == 8
            && self.b_bits == 8
            && self.a_bits == 8
            && self.a_shift == 24
            && self.r_shift == 16
            && self.g_shift == 8
            && self.b_shift == 0
    }

    /// Checks that the format describes a 16 or 32 bit packed layout
    /// with every channel fitting into the pixel word.
    pub fn validate(&self) -> Result<(), ScalerError> {
        if self.bytes_per_pixel != 2 && self.bytes_per_pixel != 4 {
            return Err(ScalerError::UnsupportedPixelFormat(self.bytes_per_pixel));
        }
        let word_bits = self.bits_per_pixel();
        let channels = [
            (self.r_bits, self.r_shift),
            (self.g_bits, self.g_shift),
            (self.b_bits, self.b_shift),
            (self.a_bits, self.a_shift),
        ];
        for (bits, shift) in channels {
            if bits > 8 || bits as usize + shift as usize > word_bits {
                return Err(ScalerError::UnsupportedPixelFormat(self.bytes_per_pixel));
            }
        }
        Ok(())
    }

    #[inline(always)]
    const fn expand(bits: u8, value: u32) -> u8 {
        let expanded = match bits {
            0 => 0,
            1 => (value & 0x1) * 0xff,
            2 => (value & 0x3) * 0x55,
            3 => ((value & 0x7) * 0x49) >> 1,
            4 => (value & 0xf) * 0x11,
            5 => ((value & 0x1f) << 3) | ((value & 0x1f) >> 2),
            6 => ((value & 0x3f) << 2) | ((value & 0x3f) >> 4),
            7 => ((value & 0x7f) << 1) | ((value & 0x7f) >> 6),
            _ => value & 0xff,
        };
        expanded as u8
    }

    #[inline(always)]
    const fn narrow(bits: u8, value: u8) -> u32 {
        if bits == 0 {
            0
        } else {
            (value as u32) >> (8 - bits as u32)
        }
    }

    /// Splits a packed color into `(a, r, g, b)`.
    #[inline]
    pub fn color_to_argb(&self, color: u32) -> (u8, u8, u8, u8) {
        let a = if self.a_bits == 0 {
            0xff
        } else {
            Self::expand(self.a_bits, color >> self.a_shift)
        };
        let (r, g, b) = self.color_to_rgb(color);
        (a, r, g, b)
    }

    /// Splits a packed color into `(r, g, b)`.
    #[inline]
    pub fn color_to_rgb(&self, color: u32) -> (u8, u8, u8) {
        (
            Self::expand(self.r_bits, color >> self.r_shift),
            Self::expand(self.g_bits, color >> self.g_shift),
            Self::expand(self.b_bits, color >> self.b_shift),
        )
    }

    /// Packs channels into this format, truncating the low bits
    /// the format cannot hold.
    #[inline]
    pub fn argb_to_color(&self, a: u8, r: u8, g: u8, b: u8) -> u32 {
        (Self::narrow(self.a_bits, a) << self.a_shift)
            | (Self::narrow(self.r_bits, r) << self.r_shift)
            | (Self::narrow(self.g_bits, g) << self.g_shift)
            | (Self::narrow(self.b_bits, b) << self.b_shift)
    }

    #[inline]
    pub fn rgb_to_color(&self, r: u8, g: u8, b: u8) -> u32 {
        self.argb_to_color(0xff, r, g, b)
    }

    /// Expands a pixel word into packed ARGB8888.
    #[inline]
    pub fn to_packed_argb(&self, color: u32) -> u32 {
        let (a, r, g, b) = self.color_to_argb(color);
        pack_argb(a, r, g, b)
    }

    /// Converts packed ARGB8888 into a pixel word of this format.
    #[inline]
    pub fn from_packed_argb(&self, argb: u32) -> u32 {
        let (a, r, g, b) = unpack_argb(argb);
        self.argb_to_color(a, r, g, b)
    }
}

#[inline(always)]
pub(crate) const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline(always)]
pub(crate) const fn unpack_argb(argb: u32) -> (u8, u8, u8, u8) {
    (
        (argb >> 24) as u8,
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
    )
}
