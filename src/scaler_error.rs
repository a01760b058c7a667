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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScalerBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalerError {
    ZeroImageDimensions,
    DestinationImageIsTooLarge,
    BufferMismatch(ScalerBufferMismatch),
    InvalidStride(usize, usize),
    UnsupportedFactor(usize),
    UnsupportedPixelFormat(usize),
    InvalidThreadCount,
    ThreadPool(String),
    OutOfMemory(usize),
}

impl ScalerError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            ScalerError::ZeroImageDimensions => 1,
            ScalerError::DestinationImageIsTooLarge => 2,
            ScalerError::BufferMismatch(_) => 3,
            ScalerError::InvalidStride(_, _) => 4,
            ScalerError::UnsupportedFactor(_) => 5,
            ScalerError::UnsupportedPixelFormat(_) => 6,
            ScalerError::InvalidThreadCount => 7,
            ScalerError::ThreadPool(_) => 8,
            ScalerError::OutOfMemory(_) => 9,
        }
    }
}

impl Display for ScalerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalerError::InvalidStride(min_stride, real_stride) => f.write_fmt(format_args!(
                "Stride must be at least {min_stride}, but received {real_stride}",
            )),
            ScalerError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            ScalerError::DestinationImageIsTooLarge => {
                f.write_str("Destination image larger than memory capabilities")
            }
            ScalerError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be at least {} [w({})*h({}) at stride({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.stride,
                buffer_mismatch.slice_len,
            )),
            ScalerError::UnsupportedFactor(factor) => f.write_fmt(format_args!(
                "Scale factor {factor} is not supported by this scaler"
            )),
            ScalerError::UnsupportedPixelFormat(bpp) => f.write_fmt(format_args!(
                "Only 2 and 4 bytes per pixel formats are supported, but got {bpp}"
            )),
            ScalerError::InvalidThreadCount => {
                f.write_str("Worker pool must have at least one thread")
            }
            ScalerError::ThreadPool(reason) => {
                f.write_fmt(format_args!("Failed to build worker pool: {reason}"))
            }
            ScalerError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} elements"
            )),
        }
    }
}

impl Error for ScalerError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::scaler_error::ScalerError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
