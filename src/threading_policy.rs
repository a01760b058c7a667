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
use rayon::ThreadPool;
use std::num::NonZeroUsize;

/// Upper bound for [`ThreadingPolicy::Adaptive`].
const MAX_ADAPTIVE_THREADS: usize = 16;

/// How many workers a scaler keeps for its whole lifetime.
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ThreadingPolicy {
    /// Bands run inline on the calling thread.
    #[default]
    Single,
    Fixed(usize),
    /// Available parallelism, at most 16 threads.
    Adaptive,
}

impl ThreadingPolicy {
    pub fn get_threads_count(&self) -> Result<usize, ScalerError> {
        match self {
            ThreadingPolicy::Single => Ok(1),
            ThreadingPolicy::Fixed(0) => Err(ScalerError::InvalidThreadCount),
            ThreadingPolicy::Fixed(thread_count) => Ok(*thread_count),
            ThreadingPolicy::Adaptive => Ok(std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
                .clamp(1, MAX_ADAPTIVE_THREADS)),
        }
    }

    /// Builds the pool once; `None` when a single worker is requested.
    pub(crate) fn get_pool(&self) -> Result<Option<ThreadPool>, ScalerError> {
        let threads_count = self.get_threads_count()?;
        if threads_count == 1 {
            return Ok(None);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads_count)
            .thread_name(|index| format!("xbrz-worker-{index}"))
            .build()
            .map_err(|e| ScalerError::ThreadPool(e.to_string()))?;
        Ok(Some(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_counts() {
        assert_eq!(ThreadingPolicy::Single.get_threads_count(), Ok(1));
        assert_eq!(ThreadingPolicy::Fixed(3).get_threads_count(), Ok(3));
        assert_eq!(
            ThreadingPolicy::Fixed(0).get_threads_count(),
            Err(ScalerError::InvalidThreadCount)
        );
        let adaptive = ThreadingPolicy::Adaptive.get_threads_count().unwrap();
        assert!((1..=MAX_ADAPTIVE_THREADS).contains(&adaptive));
    }

    #[test]
    fn single_worker_has_no_pool() {
        assert!(ThreadingPolicy::Single.get_pool().unwrap().is_none());
        assert!(ThreadingPolicy::Fixed(1).get_pool().unwrap().is_none());
        let pool = ThreadingPolicy::Fixed(2).get_pool().unwrap().unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }
}
