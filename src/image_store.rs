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
use crate::ImageSize;
use crate::color_lookup::ColorLookupTable;
use crate::pixel_format::PixelFormat;
use crate::scaler_error::{ScalerBufferMismatch, ScalerError, try_vec};
use num_traits::AsPrimitive;

/// Borrowed, strided view over caller supplied pixels.
///
/// `stride` is in bytes and may exceed `width * bytes_per_pixel`.
/// The last row does not need to be padded.
#[derive(Debug, Copy, Clone)]
pub struct ImageStore<'a> {
    pub buffer: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub format: PixelFormat,
}

/// Mutable counterpart of [`ImageStore`].
#[derive(Debug)]
pub struct ImageStoreMut<'a> {
    pub buffer: &'a mut [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub format: PixelFormat,
}

/// Working pixels of one scale call, either the caller's memory or a scratch copy.
#[derive(Debug)]
pub(crate) enum BufferStore<'a, T> {
    Borrowed(&'a [T]),
    Owned(Vec<T>),
}

impl<T> BufferStore<'_, T> {
    pub(crate) fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

/// Pixel word stored in a caller buffer.
pub(crate) trait PackedPixel: AsPrimitive<u32> {
    const BYTES: usize;

    fn read_ne(bytes: &[u8]) -> Self;

    fn write_ne(value: u32, bytes: &mut [u8]);
}

impl PackedPixel for u16 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn read_ne(bytes: &[u8]) -> Self {
        u16::from_ne_bytes([bytes[0], bytes[1]])
    }

    #[inline(always)]
    fn write_ne(value: u32, bytes: &mut [u8]) {
        let value: u16 = value.as_();
        bytes.copy_from_slice(&value.to_ne_bytes());
    }
}

impl PackedPixel for u32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn read_ne(bytes: &[u8]) -> Self {
        u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline(always)]
    fn write_ne(value: u32, bytes: &mut [u8]) {
        bytes.copy_from_slice(&value.to_ne_bytes());
    }
}

fn check_layout(
    slice_len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bytes_per_pixel: usize,
) -> Result<(), ScalerError> {
    if width == 0 || height == 0 {
        return Err(ScalerError::ZeroImageDimensions);
    }
    let row_bytes = width
        .checked_mul(bytes_per_pixel)
        .ok_or(ScalerError::DestinationImageIsTooLarge)?;
    if stride < row_bytes {
        return Err(ScalerError::InvalidStride(row_bytes, stride));
    }
    let expected = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_bytes))
        .ok_or(ScalerError::DestinationImageIsTooLarge)?;
    if slice_len < expected {
        return Err(ScalerError::BufferMismatch(ScalerBufferMismatch {
            expected,
            width,
            height,
            stride,
            slice_len,
        }));
    }
    Ok(())
}

/// Reinterprets tightly packed native-endian bytes as pixel words when the
/// memory happens to be suitably aligned.
#[inline]
fn as_words(bytes: &[u8], count: usize) -> Option<&[u32]> {
    // SAFETY: every bit pattern is a valid u32
    let (prefix, words, _) = unsafe { bytes.align_to::<u32>() };
    if prefix.is_empty() && words.len() >= count {
        Some(&words[..count])
    } else {
        None
    }
}

#[inline]
fn as_words_mut(bytes: &mut [u8], count: usize) -> Option<&mut [u32]> {
    // SAFETY: every bit pattern is a valid u32
    let (prefix, words, _) = unsafe { bytes.align_to_mut::<u32>() };
    if prefix.is_empty() && words.len() >= count {
        Some(&mut words[..count])
    } else {
        None
    }
}

fn unpack_rows<T: PackedPixel>(store: &ImageStore, dst: &mut [u32], convert: impl Fn(u32) -> u32) {
    for (y, dst_row) in dst.chunks_exact_mut(store.width).enumerate() {
        for (dst, src) in dst_row
            .iter_mut()
            .zip(store.row(y).chunks_exact(T::BYTES))
        {
            *dst = convert(T::read_ne(src).as_());
        }
    }
}

fn pack_rows<T: PackedPixel>(src: &[u32], store: &mut ImageStoreMut, convert: impl Fn(u32) -> u32) {
    let width = store.width;
    for (y, src_row) in src.chunks_exact(width).enumerate() {
        for (dst, &argb) in store
            .row_mut(y)
            .chunks_exact_mut(T::BYTES)
            .zip(src_row.iter())
        {
            T::write_ne(convert(argb), dst);
        }
    }
}

impl<'a> ImageStore<'a> {
    pub fn from_slice(
        buffer: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> Result<ImageStore<'a>, ScalerError> {
        check_layout(buffer.len(), width, height, stride, format.bytes_per_pixel)?;
        Ok(ImageStore {
            buffer,
            width,
            height,
            stride,
            format,
        })
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    /// Bytes of pixel data in one row, without padding.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.format.bytes_per_pixel
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.buffer[start..start + self.row_bytes()]
    }

    /// Tightly packed ARGB8888 pixels for the kernel.
    ///
    /// Native ARGB8888 without row padding is used in place, everything else
    /// is expanded into a scratch buffer, through `lookup` for 16-bit formats.
    pub(crate) fn to_working_argb(
        &self,
        lookup: Option<&ColorLookupTable>,
    ) -> Result<BufferStore<'a, u32>, ScalerError> {
        let pixels = self.width * self.height;
        let format = self.format;
        if format.is_native_argb() && self.stride == self.row_bytes() {
            if let Some(words) = as_words(self.buffer, pixels) {
                return Ok(BufferStore::Borrowed(words));
            }
            log::trace!("source is not 4-byte aligned, unpacking into scratch");
        }

        let mut scratch = try_vec![0u32; pixels];
        match (format.bytes_per_pixel, lookup) {
            (2, Some(lookup)) => {
                unpack_rows::<u16>(self, &mut scratch, |color| lookup.lookup(color as u16))
            }
            (2, None) => unpack_rows::<u16>(self, &mut scratch, |color| {
                format.to_packed_argb(color)
            }),
            _ if format.is_native_argb() => unpack_rows::<u32>(self, &mut scratch, |color| color),
            _ => unpack_rows::<u32>(self, &mut scratch, |color| format.to_packed_argb(color)),
        }
        Ok(BufferStore::Owned(scratch))
    }
}

impl<'a> ImageStoreMut<'a> {
    pub fn from_slice(
        buffer: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> Result<ImageStoreMut<'a>, ScalerError> {
        check_layout(buffer.len(), width, height, stride, format.bytes_per_pixel)?;
        Ok(ImageStoreMut {
            buffer,
            width,
            height,
            stride,
            format,
        })
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.format.bytes_per_pixel
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let row_bytes = self.row_bytes();
        &mut self.buffer[start..start + row_bytes]
    }

    /// The destination as ARGB8888 words the kernel may write directly,
    /// when no format conversion or row padding is involved.
    pub(crate) fn argb_in_place(&mut self) -> Option<&mut [u32]> {
        if !self.format.is_native_argb() || self.stride != self.row_bytes() {
            return None;
        }
        let pixels = self.width * self.height;
        let words = as_words_mut(self.buffer, pixels);
        if words.is_none() {
            log::trace!("destination is not 4-byte aligned, packing from scratch");
        }
        words
    }

    /// Writes tightly packed ARGB8888 pixels into the strided destination,
    /// converting to the destination format. Alpha is dropped for formats
    /// that have no alpha bits.
    pub(crate) fn store_argb(&mut self, src: &[u32]) {
        let format = self.format;
        match format.bytes_per_pixel {
            2 => pack_rows::<u16>(src, self, |argb| format.from_packed_argb(argb)),
            _ if format.is_native_argb() => pack_rows::<u32>(src, self, |argb| argb),
            _ => pack_rows::<u32>(src, self, |argb| format.from_packed_argb(argb)),
        }
    }
}
