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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]

//! Pixel art upscaling with the xBRZ kernel, split into row bands that run
//! on a worker pool owned by the scaler.

mod chunking;
mod color_lookup;
mod image_size;
mod image_store;
mod kernel;
mod nearest_sampler;
mod pixel_format;
mod plugin;
mod scaler;
mod scaler_error;
mod threading_policy;

pub use color_lookup::ColorLookupTable;
pub use image_size::ImageSize;
pub use image_store::{ImageStore, ImageStoreMut};
pub use kernel::{ColorFormat, ScalerConfig};
pub use pixel_format::PixelFormat;
pub use plugin::{ScalerKind, ScalerPlugin, ScalerRegistry};
pub use scaler::{
    MAX_FACTOR, NORMAL_MAX_FACTOR, NormalScaler, Scaling, ScalingOptions, XbrzScaler,
};
pub use scaler_error::{ScalerBufferMismatch, ScalerError};
pub use threading_policy::ThreadingPolicy;
