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
use crate::pixel_format::PixelFormat;
use crate::scaler_error::{ScalerError, try_vec};

const LOOKUP_SIZE: usize = 1 << 16;

/// Dense expansion of every 16-bit pixel word into packed ARGB8888.
///
/// Built once and never written afterwards, so workers may share it freely.
#[derive(Clone)]
pub struct ColorLookupTable {
    table: Box<[u32]>,
}

impl std::fmt::Debug for ColorLookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorLookupTable")
            .field("len", &self.table.len())
            .finish()
    }
}

impl ColorLookupTable {
    pub fn new(format: &PixelFormat) -> Result<ColorLookupTable, ScalerError> {
        if format.bytes_per_pixel != 2 {
            return Err(ScalerError::UnsupportedPixelFormat(format.bytes_per_pixel));
        }
        let mut table = try_vec![0u32; LOOKUP_SIZE];
        for (color, dst) in table.iter_mut().enumerate() {
            *dst = format.to_packed_argb(color as u32);
        }
        Ok(ColorLookupTable {
            table: table.into_boxed_slice(),
        })
    }

    #[inline(always)]
    pub fn lookup(&self, color: u16) -> u32 {
        self.table[color as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_matches_direct_conversion() {
        for format in [
            PixelFormat::rgb565(),
            PixelFormat::rgb555(),
            PixelFormat::argb1555(),
            PixelFormat::argb4444(),
        ] {
            let lookup = ColorLookupTable::new(&format).unwrap();
            assert_eq!(lookup.len(), 65536);
            for color in 0..=u16::MAX {
                let (a, r, g, b) = format.color_to_argb(color as u32);
                let expected =
                    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
                assert_eq!(lookup.lookup(color), expected, "color {color:#06x}");
            }
        }
    }

    #[test]
    fn opaque_for_formats_without_alpha() {
        let lookup = ColorLookupTable::new(&PixelFormat::rgb565()).unwrap();
        assert!(lookup.as_slice().iter().all(|&argb| argb >> 24 == 0xff));
    }

    #[test]
    fn refuses_32_bit_formats() {
        let result = ColorLookupTable::new(&PixelFormat::argb8888());
        assert_eq!(result.unwrap_err(), ScalerError::UnsupportedPixelFormat(4));
    }
}
