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
use std::ops::Range;

/// Bands never get thinner than this, however many workers are available.
pub(crate) const MIN_LINES_PER_BAND: usize = 8;

/// Half-open range of source rows handled by a single task.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct RowBand {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl RowBand {
    #[inline]
    pub(crate) fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

pub(crate) fn lines_per_band(height: usize, threads: usize) -> usize {
    (height / threads.max(1)).max(MIN_LINES_PER_BAND)
}

/// Splits `[0, height)` into consecutive bands of `lines_per_band` rows,
/// the last one clamped to `height`.
pub(crate) fn row_bands(height: usize, threads: usize) -> impl Iterator<Item = RowBand> {
    let step = lines_per_band(height, threads);
    (0..height).step_by(step).map(move |start| RowBand {
        start,
        end: (start + step).min(height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_rows() {
        for height in 1..200 {
            for threads in [1, 2, 3, 4, 7, 8, 16] {
                let bands: Vec<RowBand> = row_bands(height, threads).collect();
                assert_eq!(bands[0].start, 0);
                assert_eq!(bands.last().unwrap().end, height);
                for pair in bands.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
                assert!(bands.iter().all(|band| !band.rows().is_empty()));
                assert_eq!(bands.iter().map(|b| b.rows().len()).sum::<usize>(), height);
            }
        }
    }

    #[test]
    fn small_images_stay_in_one_band() {
        let bands: Vec<RowBand> = row_bands(5, 8).collect();
        assert_eq!(bands, vec![RowBand { start: 0, end: 5 }]);
    }

    #[test]
    fn band_height_follows_thread_count() {
        assert_eq!(lines_per_band(100, 4), 25);
        assert_eq!(lines_per_band(100, 16), 8);
        assert_eq!(lines_per_band(100, 0), 100);
        let bands: Vec<RowBand> = row_bands(30, 4).collect();
        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 8 },
                RowBand { start: 8, end: 16 },
                RowBand { start: 16, end: 24 },
                RowBand { start: 24, end: 30 },
            ]
        );
    }
}
