//! Format-to-compressor routing.
//!
//! Routing is a registry keyed by [`ImageFormat`] rather than inline
//! extension branching; a new format is supported by registering a new
//! compressor variant.

use std::collections::HashMap;
use std::path::Path;

use crate::core::Settings;
use crate::processing::{GifOptimizer, JpegEncoder, PngQuantizer, SvgMinifier};
use crate::utils::{ImageFormat, ShrinkerResult};

/// A compressor capability with the uniform `compress` contract.
#[derive(Debug, Clone)]
pub enum Compressor {
    Jpeg(JpegEncoder),
    Png(PngQuantizer),
    Gif(GifOptimizer),
    Svg(SvgMinifier),
}

impl Compressor {
    /// Compress `input` into `output`, creating exactly one new file on
    /// success and leaving the source untouched.
    pub async fn compress(
        &self,
        input: &Path,
        output: &Path,
        settings: &Settings,
    ) -> ShrinkerResult<()> {
        match self {
            Self::Jpeg(tool) => tool.compress(input, output, settings).await,
            Self::Png(tool) => tool.compress(input, output, settings).await,
            Self::Gif(tool) => tool.compress(input, output, settings).await,
            Self::Svg(tool) => tool.compress(input, output, settings).await,
        }
    }
}

/// Registry mapping each supported format to its compressor.
#[derive(Debug, Clone)]
pub struct CompressorRegistry {
    compressors: HashMap<ImageFormat, Compressor>,
}

impl Default for CompressorRegistry {
    fn default() -> Self {
        let mut registry = Self {
            compressors: HashMap::new(),
        };
        registry.register(ImageFormat::JPEG, Compressor::Jpeg(JpegEncoder));
        registry.register(ImageFormat::PNG, Compressor::Png(PngQuantizer));
        registry.register(ImageFormat::GIF, Compressor::Gif(GifOptimizer));
        registry.register(ImageFormat::SVG, Compressor::Svg(SvgMinifier));
        registry
    }
}

impl CompressorRegistry {
    /// Register (or replace) the compressor for a format.
    pub fn register(&mut self, format: ImageFormat, compressor: Compressor) {
        self.compressors.insert(format, compressor);
    }

    /// Look up the compressor for a format.
    ///
    /// The default registry covers every [`ImageFormat`] variant.
    pub fn get(&self, format: ImageFormat) -> Option<&Compressor> {
        self.compressors.get(&format)
    }
}
