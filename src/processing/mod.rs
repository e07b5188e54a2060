//! Compression dispatch and the per-format compressors.
//!
//! JPEG, PNG and GIF are delegated to external executables; SVG is minified
//! in-process.

mod dispatcher;
mod external;
mod gif;
mod jpeg;
mod png;
mod svg;

pub use dispatcher::{Compressor, CompressorRegistry};
pub use gif::GifOptimizer;
pub use jpeg::JpegEncoder;
pub use png::PngQuantizer;
pub use svg::{minify, SvgMinifier, SvgOptions, XML_DECLARATION};
