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
use crate::image_store::{ImageStore, ImageStoreMut};

/// Integer factor nearest-neighbour replication, working directly on the
/// packed pixel bytes so no format conversion is involved.
pub(crate) fn scale_nearest<const BPP: usize>(
    src: &ImageStore,
    dst: &mut ImageStoreMut,
    factor: usize,
) {
    let dst_row_bytes = dst.row_bytes();
    let dst_stride = dst.stride;
    for y in 0..src.height {
        let src_row = src.row(y);

        let first_dst_row = y * factor;
        let dst_row = dst.row_mut(first_dst_row);
        for (dst_block, src_px) in dst_row
            .chunks_exact_mut(BPP * factor)
            .zip(src_row.chunks_exact(BPP))
        {
            for dst_px in dst_block.chunks_exact_mut(BPP) {
                dst_px.copy_from_slice(src_px);
            }
        }

        let filled = first_dst_row * dst_stride;
        for dy in 1..factor {
            let (head, tail) = dst.buffer.split_at_mut((first_dst_row + dy) * dst_stride);
            tail[..dst_row_bytes].copy_from_slice(&head[filled..filled + dst_row_bytes]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelFormat;

    #[test]
    fn replicates_blocks_with_padding() {
        // 2x1 image of 16-bit pixels, padded rows
        let src_data = [0x34u8, 0x12, 0x78, 0x56, 0xee, 0xee];
        let src = ImageStore::from_slice(&src_data, 2, 1, 6, PixelFormat::rgb565()).unwrap();
        let mut dst_data = vec![0u8; 14 * 3];
        let mut dst =
            ImageStoreMut::from_slice(&mut dst_data, 6, 3, 14, PixelFormat::rgb565()).unwrap();
        scale_nearest::<2>(&src, &mut dst, 3);
        for row in dst_data.chunks_exact(14) {
            assert_eq!(
                row,
                &[
                    0x34, 0x12, 0x34, 0x12, 0x34, 0x12, 0x78, 0x56, 0x78, 0x56, 0x78, 0x56, 0, 0
                ]
            );
        }
    }
}
