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

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
#[repr(u8)]
pub(crate) enum BlendType {
    #[default]
    None = 0,
    Normal = 1,
    Dominant = 2,
}

impl From<u8> for BlendType {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value & 0x3 {
            0 => BlendType::None,
            1 => BlendType::Normal,
            _ => BlendType::Dominant,
        }
    }
}

/// Blend decisions for the four corners between F, G, J and K
/// of a 4x4 neighbourhood.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlendResult {
    pub(crate) f: BlendType,
    pub(crate) g: BlendType,
    pub(crate) j: BlendType,
    pub(crate) k: BlendType,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Rotation {
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

pub(crate) const ROTATIONS: [Rotation; 4] = [
    Rotation::Deg0,
    Rotation::Deg90,
    Rotation::Deg180,
    Rotation::Deg270,
];

/// Four corner blend types of one source pixel packed into a byte,
/// two bits each: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlendInfo(u8);

impl BlendInfo {
    #[inline(always)]
    pub(crate) fn top_left(self) -> BlendType {
        BlendType::from(self.0)
    }

    #[inline(always)]
    pub(crate) fn top_right(self) -> BlendType {
        BlendType::from(self.0 >> 2)
    }

    #[inline(always)]
    pub(crate) fn bottom_right(self) -> BlendType {
        BlendType::from(self.0 >> 4)
    }

    #[inline(always)]
    pub(crate) fn bottom_left(self) -> BlendType {
        BlendType::from(self.0 >> 6)
    }

    // Setters only OR bits in, the slot must start out empty.
    #[inline(always)]
    pub(crate) fn set_top_left(&mut self, blend: BlendType) {
        self.0 |= blend as u8;
    }

    #[inline(always)]
    pub(crate) fn set_top_right(&mut self, blend: BlendType) {
        self.0 |= (blend as u8) << 2;
    }

    #[inline(always)]
    pub(crate) fn set_bottom_right(&mut self, blend: BlendType) {
        self.0 |= (blend as u8) << 4;
    }

    #[inline(always)]
    pub(crate) fn set_bottom_left(&mut self, blend: BlendType) {
        self.0 |= (blend as u8) << 6;
    }

    #[inline(always)]
    pub(crate) fn needs_blending(self) -> bool {
        self.0 != 0
    }

    #[inline(always)]
    pub(crate) fn rotate(self, rotation: Rotation) -> BlendInfo {
        let b = self.0;
        match rotation {
            Rotation::Deg0 => self,
            Rotation::Deg90 => BlendInfo((b << 2) | (b >> 6)),
            Rotation::Deg180 => BlendInfo((b << 4) | (b >> 4)),
            Rotation::Deg270 => BlendInfo((b << 6) | (b >> 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_packed_independently() {
        let mut info = BlendInfo::default();
        assert!(!info.needs_blending());
        info.set_top_left(BlendType::Normal);
        info.set_bottom_right(BlendType::Dominant);
        assert_eq!(info.top_left(), BlendType::Normal);
        assert_eq!(info.top_right(), BlendType::None);
        assert_eq!(info.bottom_right(), BlendType::Dominant);
        assert_eq!(info.bottom_left(), BlendType::None);
        assert!(info.needs_blending());
    }

    #[test]
    fn rotation_moves_corners_clockwise() {
        let mut info = BlendInfo::default();
        info.set_bottom_left(BlendType::Normal);
        // a quarter turn reads the bottom-left corner as top-left
        let rotated = info.rotate(Rotation::Deg90);
        assert_eq!(rotated.top_left(), BlendType::Normal);
        let mut info = BlendInfo::default();
        info.set_top_right(BlendType::Dominant);
        assert_eq!(info.rotate(Rotation::Deg90).bottom_right(), BlendType::Dominant);
        assert_eq!(info.rotate(Rotation::Deg180).bottom_left(), BlendType::Dominant);
        assert_eq!(info.rotate(Rotation::Deg270).top_left(), BlendType::Dominant);
    }
}
