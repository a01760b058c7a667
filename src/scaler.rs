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
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use rayon::ThreadPool;

use crate::chunking::{RowBand, lines_per_band, row_bands};
use crate::color_lookup::ColorLookupTable;
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::kernel::{ColorFormat, ScalerConfig, scale_rows};
use crate::nearest_sampler::scale_nearest;
use crate::pixel_format::PixelFormat;
use crate::scaler_error::{ScalerError, try_vec};
use crate::threading_policy::ThreadingPolicy;

/// Largest factor the xBRZ scaler supports.
pub const MAX_FACTOR: usize = 6;

/// Largest factor of [`NormalScaler`].
pub const NORMAL_MAX_FACTOR: usize = 5;

/// Common surface of the pixel scalers.
///
/// `src_pitch` and `dst_pitch` are row strides in bytes. The destination
/// must hold `width * factor` by `height * factor` pixels. `x` and `y` are the
/// position of the rectangle on the caller's screen, they do not clip.
pub trait Scaling: Send + Sync {
    fn scale(
        &self,
        src: &[u8],
        src_pitch: usize,
        dst: &mut [u8],
        dst_pitch: usize,
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    ) -> Result<(), ScalerError>;

    fn factor(&self) -> usize;

    /// Sets the factor and returns the previous one.
    fn set_factor(&self, factor: usize) -> Result<usize, ScalerError>;

    /// Returns the factor after the step, unchanged at the upper bound.
    fn increase_factor(&self) -> usize;

    /// Returns the factor after the step, unchanged at 1.
    fn decrease_factor(&self) -> usize;
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScalingOptions {
    pub config: ScalerConfig,
    pub color_format: ColorFormat,
}

/// Factor shared between the scaling thread and whoever drives the UI.
/// A scale call reads it once, so changes apply from the next call on.
#[derive(Debug)]
struct ScaleFactor {
    value: AtomicUsize,
    max: usize,
}

impl ScaleFactor {
    fn new(max: usize) -> ScaleFactor {
        ScaleFactor {
            value: AtomicUsize::new(1),
            max,
        }
    }

    #[inline]
    fn get(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }

    fn set(&self, factor: usize) -> Result<usize, ScalerError> {
        if !(1..=self.max).contains(&factor) {
            return Err(ScalerError::UnsupportedFactor(factor));
        }
        Ok(self.value.swap(factor, Ordering::AcqRel))
    }

    fn step(&self, up: bool) -> usize {
        let max = self.max;
        let stepped = self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if up && current < max {
                    Some(current + 1)
                } else if !up && current > 1 {
                    Some(current - 1)
                } else {
                    None
                }
            });
        match stepped {
            Ok(previous) if up => previous + 1,
            Ok(previous) => previous - 1,
            Err(current) => current,
        }
    }
}

/// Rows of the source one worker scales, and where the result goes.
struct RowBandTask<'a> {
    band: RowBand,
    factor: usize,
    src: &'a [u32],
    src_width: usize,
    src_height: usize,
    options: &'a ScalingOptions,
}

impl RowBandTask<'_> {
    fn run(&self, out: &mut [u32]) {
        scale_rows(
            self.factor,
            self.src,
            out,
            self.src_width,
            self.src_height,
            self.band.rows(),
            &self.options.config,
            self.options.color_format,
        );
    }
}

/// xBRZ scaler splitting every frame into row bands that run on a pool
/// owned by the scaler.
///
/// The result does not depend on the number of workers.
///
/// # Example
///
/// ```
/// use xbrz_scaler::{PixelFormat, Scaling, ThreadingPolicy, XbrzScaler};
///
/// let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(2)).unwrap();
/// scaler.set_factor(2).unwrap();
/// let src = vec![0xffu8; 4 * 4 * 4];
/// let mut dst = vec![0u8; 8 * 8 * 4];
/// scaler.scale(&src, 16, &mut dst, 32, 4, 4, 0, 0).unwrap();
/// assert!(dst.iter().all(|&v| v == 0xff));
/// ```
#[derive(Debug)]
pub struct XbrzScaler {
    format: PixelFormat,
    options: ScalingOptions,
    lookup: Option<ColorLookupTable>,
    pool: Option<ThreadPool>,
    threads: usize,
    factor: ScaleFactor,
}

impl XbrzScaler {
    pub fn new(format: PixelFormat, policy: ThreadingPolicy) -> Result<XbrzScaler, ScalerError> {
        XbrzScaler::with_options(format, policy, ScalingOptions::default())
    }

    pub fn with_options(
        format: PixelFormat,
        policy: ThreadingPolicy,
        options: ScalingOptions,
    ) -> Result<XbrzScaler, ScalerError> {
        format.validate()?;
        let threads = policy.get_threads_count()?;
        let lookup = if format.bytes_per_pixel == 2 {
            Some(ColorLookupTable::new(&format)?)
        } else {
            None
        };
        let pool = policy.get_pool()?;
        debug!(
            "xbrz scaler: {} bpp, {threads} worker(s), {:?} mode, lookup table: {}",
            format.bits_per_pixel(),
            options.color_format,
            lookup.is_some()
        );
        Ok(XbrzScaler {
            format,
            options,
            lookup,
            pool,
            threads,
            factor: ScaleFactor::new(MAX_FACTOR),
        })
    }

    pub fn thread_count(&self) -> usize {
        self.threads
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn options(&self) -> ScalingOptions {
        self.options
    }

    fn run_bands(
        &self,
        factor: usize,
        src: &[u32],
        dst: &mut [u32],
        src_width: usize,
        src_height: usize,
    ) {
        let band_len = lines_per_band(src_height, self.threads) * factor * factor * src_width;
        let options = &self.options;
        let tasks = row_bands(src_height, self.threads)
            .map(move |band| RowBandTask {
                band,
                factor,
                src,
                src_width,
                src_height,
                options,
            })
            .zip(dst.chunks_mut(band_len));

        match &self.pool {
            Some(pool) => pool.scope(|scope| {
                for (task, out) in tasks {
                    scope.spawn(move |_| task.run(out));
                }
            }),
            None => {
                for (task, out) in tasks {
                    task.run(out);
                }
            }
        }
    }
}

impl Scaling for XbrzScaler {
    fn scale(
        &self,
        src: &[u8],
        src_pitch: usize,
        dst: &mut [u8],
        dst_pitch: usize,
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    ) -> Result<(), ScalerError> {
        let factor = self.factor.get();
        let source = ImageStore::from_slice(src, width, height, src_pitch, self.format)?;
        let dst_size = source
            .get_size()
            .scaled(factor)
            .ok_or(ScalerError::DestinationImageIsTooLarge)?;
        let mut target = ImageStoreMut::from_slice(
            dst,
            dst_size.width,
            dst_size.height,
            dst_pitch,
            self.format,
        )?;

        let working = source.to_working_argb(self.lookup.as_ref())?;
        trace!(
            "xbrz {factor}x: {width}x{height} at ({x}, {y}), {} rows per band, unpacked source: {}",
            lines_per_band(height, self.threads),
            working.is_owned()
        );

        if let Some(words) = target.argb_in_place() {
            self.run_bands(factor, working.borrow(), words, width, height);
        } else {
            let mut scratch = try_vec![0u32; dst_size.pixels()];
            self.run_bands(factor, working.borrow(), &mut scratch, width, height);
            target.store_argb(&scratch);
        }
        Ok(())
    }

    fn factor(&self) -> usize {
        self.factor.get()
    }

    fn set_factor(&self, factor: usize) -> Result<usize, ScalerError> {
        let previous = self.factor.set(factor)?;
        debug!("xbrz factor {previous} -> {factor}");
        Ok(previous)
    }

    fn increase_factor(&self) -> usize {
        let factor = self.factor.step(true);
        debug!("xbrz factor is now {factor}");
        factor
    }

    fn decrease_factor(&self) -> usize {
        let factor = self.factor.step(false);
        debug!("xbrz factor is now {factor}");
        factor
    }
}

/// Plain pixel replication, single threaded, factors 1 to 5.
#[derive(Debug)]
pub struct NormalScaler {
    format: PixelFormat,
    factor: ScaleFactor,
}

impl NormalScaler {
    pub fn new(format: PixelFormat) -> Result<NormalScaler, ScalerError> {
        format.validate()?;
        Ok(NormalScaler {
            format,
            factor: ScaleFactor::new(NORMAL_MAX_FACTOR),
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

impl Scaling for NormalScaler {
    fn scale(
        &self,
        src: &[u8],
        src_pitch: usize,
        dst: &mut [u8],
        dst_pitch: usize,
        width: usize,
        height: usize,
        _x: usize,
        _y: usize,
    ) -> Result<(), ScalerError> {
        let factor = self.factor.get();
        let source = ImageStore::from_slice(src, width, height, src_pitch, self.format)?;
        let dst_size = source
            .get_size()
            .scaled(factor)
            .ok_or(ScalerError::DestinationImageIsTooLarge)?;
        let mut target = ImageStoreMut::from_slice(
            dst,
            dst_size.width,
            dst_size.height,
            dst_pitch,
            self.format,
        )?;
        match self.format.bytes_per_pixel {
            2 => scale_nearest::<2>(&source, &mut target, factor),
            4 => scale_nearest::<4>(&source, &mut target, factor),
            bpp => return Err(ScalerError::UnsupportedPixelFormat(bpp)),
        }
        Ok(())
    }

    fn factor(&self) -> usize {
        self.factor.get()
    }

    fn set_factor(&self, factor: usize) -> Result<usize, ScalerError> {
        self.factor.set(factor)
    }

    fn increase_factor(&self) -> usize {
        self.factor.step(true)
    }

    fn decrease_factor(&self) -> usize {
        self.factor.step(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb_bytes(pixels: &[u32]) -> Vec<u8> {
        pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
    }

    #[test]
    fn factor_steps_are_clamped() {
        let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Single).unwrap();
        assert_eq!(scaler.factor(), 1);
        assert_eq!(scaler.decrease_factor(), 1);
        for expected in 2..=MAX_FACTOR {
            assert_eq!(scaler.increase_factor(), expected);
        }
        assert_eq!(scaler.increase_factor(), MAX_FACTOR);
        assert_eq!(scaler.decrease_factor(), MAX_FACTOR - 1);
        assert_eq!(scaler.set_factor(2), Ok(MAX_FACTOR - 1));
        assert_eq!(scaler.set_factor(0), Err(ScalerError::UnsupportedFactor(0)));
        assert_eq!(
            scaler.set_factor(MAX_FACTOR + 1),
            Err(ScalerError::UnsupportedFactor(MAX_FACTOR + 1))
        );
        assert_eq!(scaler.factor(), 2);
    }

    #[test]
    fn constructor_rejects_bad_configuration() {
        assert_eq!(
            XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(0)).unwrap_err(),
            ScalerError::InvalidThreadCount
        );
        let three_bytes = PixelFormat::new(3, 8, 8, 8, 0, 16, 8, 0, 0);
        assert_eq!(
            XbrzScaler::new(three_bytes, ThreadingPolicy::Single).unwrap_err(),
            ScalerError::UnsupportedPixelFormat(3)
        );
        let scaler = XbrzScaler::new(PixelFormat::rgb565(), ThreadingPolicy::Fixed(3)).unwrap();
        assert_eq!(scaler.thread_count(), 3);
        assert!(scaler.lookup.is_some());
    }

    #[test]
    fn undersized_destination_is_reported() {
        let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Single).unwrap();
        scaler.set_factor(2).unwrap();
        let src = argb_bytes(&[0xff112233; 4]);
        let mut dst = vec![0u8; 4 * 4 * 4 - 1];
        let err = scaler.scale(&src, 8, &mut dst, 16, 2, 2, 0, 0).unwrap_err();
        assert_eq!(err.code(), 3);
        let mut dst = vec![0u8; 4 * 4 * 4];
        assert_eq!(
            scaler.scale(&src, 8, &mut dst, 12, 2, 2, 0, 0),
            Err(ScalerError::InvalidStride(16, 12))
        );
    }

    #[test]
    fn padded_destination_goes_through_scratch() {
        let scaler = XbrzScaler::new(PixelFormat::argb8888(), ThreadingPolicy::Fixed(2)).unwrap();
        scaler.set_factor(3).unwrap();
        let src = argb_bytes(&[0xff336699; 2 * 2]);
        let dst_pitch = 6 * 4 + 8;
        let mut dst = vec![0xeeu8; dst_pitch * 6];
        scaler.scale(&src, 8, &mut dst, dst_pitch, 2, 2, 0, 0).unwrap();
        for row in dst.chunks_exact(dst_pitch) {
            let (pixels, padding) = row.split_at(24);
            assert_eq!(pixels, argb_bytes(&[0xff336699; 6]).as_slice());
            assert!(padding.iter().all(|&v| v == 0xee));
        }
    }

    #[test]
    fn normal_scaler_replicates() {
        let scaler = NormalScaler::new(PixelFormat::argb8888()).unwrap();
        assert_eq!(scaler.set_factor(2), Ok(1));
        assert_eq!(scaler.set_factor(6), Err(ScalerError::UnsupportedFactor(6)));
        let src = argb_bytes(&[1, 2, 3, 4]);
        let mut dst = vec![0u8; 16 * 4];
        scaler.scale(&src, 8, &mut dst, 16, 2, 2, 0, 0).unwrap();
        assert_eq!(
            dst,
            argb_bytes(&[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4])
        );
        for _ in 0..10 {
            scaler.increase_factor();
        }
        assert_eq!(scaler.factor(), NORMAL_MAX_FACTOR);
    }
}
