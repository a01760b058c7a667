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
use std::ops::RangeInclusive;

use crate::pixel_format::PixelFormat;
use crate::scaler::{MAX_FACTOR, NORMAL_MAX_FACTOR, NormalScaler, Scaling, ScalingOptions, XbrzScaler};
use crate::scaler_error::ScalerError;
use crate::threading_policy::ThreadingPolicy;

/// Which scaler a plugin instantiates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalerKind {
    Normal,
    /// xBRZ running on a pool of the given size.
    Xbrz { threads: usize },
}

/// Static description of a scaler the host can offer to the user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScalerPlugin {
    pub name: &'static str,
    pub pretty_name: &'static str,
    pub kind: ScalerKind,
    pub factors: RangeInclusive<usize>,
    /// Source pixels needed around the dirty rectangle.
    pub extra_pixels: usize,
    pub can_draw_cursor: bool,
}

impl ScalerPlugin {
    const fn xbrz(name: &'static str, pretty_name: &'static str, threads: usize) -> ScalerPlugin {
        ScalerPlugin {
            name,
            pretty_name,
            kind: ScalerKind::Xbrz { threads },
            factors: 1..=MAX_FACTOR,
            extra_pixels: 1,
            can_draw_cursor: true,
        }
    }

    pub fn has_factor(&self, factor: usize) -> bool {
        self.factors.contains(&factor)
    }

    /// 2x when available, otherwise the smallest factor.
    pub fn default_factor(&self) -> usize {
        if self.has_factor(2) {
            2
        } else {
            *self.factors.start()
        }
    }

    /// Creates a scaler already set to [`Self::default_factor`].
    pub fn create_instance(&self, format: PixelFormat) -> Result<Box<dyn Scaling>, ScalerError> {
        let scaler: Box<dyn Scaling> = match self.kind {
            ScalerKind::Normal => Box::new(NormalScaler::new(format)?),
            ScalerKind::Xbrz { threads } => Box::new(XbrzScaler::with_options(
                format,
                ThreadingPolicy::Fixed(threads),
                ScalingOptions::default(),
            )?),
        };
        scaler.set_factor(self.default_factor())?;
        Ok(scaler)
    }
}

/// Scalers known to the host, in menu order.
#[derive(Debug, Clone)]
pub struct ScalerRegistry {
    plugins: Vec<ScalerPlugin>,
}

impl Default for ScalerRegistry {
    fn default() -> Self {
        ScalerRegistry::new()
    }
}

impl ScalerRegistry {
    pub fn new() -> ScalerRegistry {
        ScalerRegistry {
            plugins: vec![
                ScalerPlugin {
                    name: "normal",
                    pretty_name: "Normal (no scaling)",
                    kind: ScalerKind::Normal,
                    factors: 1..=NORMAL_MAX_FACTOR,
                    extra_pixels: 0,
                    can_draw_cursor: true,
                },
                ScalerPlugin::xbrz("xbrz2", "xBRZ (2 threads)", 2),
                ScalerPlugin::xbrz("xbrz4", "xBRZ (4 threads)", 4),
                ScalerPlugin::xbrz("xbrz6", "xBRZ (6 threads)", 6),
                ScalerPlugin::xbrz("xbrz8", "xBRZ (8 threads)", 8),
            ],
        }
    }

    pub fn plugins(&self) -> &[ScalerPlugin] {
        &self.plugins
    }

    /// Case-insensitive lookup by short name.
    pub fn find_plugin_index(&self, name: &str) -> Option<usize> {
        self.plugins
            .iter()
            .position(|plugin| plugin.name.eq_ignore_ascii_case(name))
    }

    pub fn find_plugin(&self, name: &str) -> Option<&ScalerPlugin> {
        self.find_plugin_index(name).map(|index| &self.plugins[index])
    }

    /// Border every caller has to provide so that any plugin can be used.
    pub fn max_extra_pixels(&self) -> usize {
        self.plugins
            .iter()
            .map(|plugin| plugin.extra_pixels)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_known_scalers() {
        let registry = ScalerRegistry::new();
        let names: Vec<&str> = registry.plugins().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["normal", "xbrz2", "xbrz4", "xbrz6", "xbrz8"]);
        assert_eq!(registry.find_plugin_index("XBRZ4"), Some(2));
        assert_eq!(registry.find_plugin_index("hq3x"), None);
        assert_eq!(registry.max_extra_pixels(), 1);
    }

    #[test]
    fn xbrz_plugins_describe_their_pool() {
        let registry = ScalerRegistry::new();
        let plugin = registry.find_plugin("xbrz6").unwrap();
        assert_eq!(plugin.kind, ScalerKind::Xbrz { threads: 6 });
        assert!(plugin.has_factor(1) && plugin.has_factor(MAX_FACTOR));
        assert!(!plugin.has_factor(0) && !plugin.has_factor(MAX_FACTOR + 1));
        assert!(plugin.can_draw_cursor);
        assert_eq!(plugin.default_factor(), 2);
    }

    #[test]
    fn instances_start_at_default_factor() {
        let registry = ScalerRegistry::new();
        for plugin in registry.plugins() {
            let scaler = plugin.create_instance(PixelFormat::rgb565()).unwrap();
            assert_eq!(scaler.factor(), plugin.default_factor());
            assert_eq!(scaler.set_factor(*plugin.factors.end()), Ok(2));
        }
    }
}
