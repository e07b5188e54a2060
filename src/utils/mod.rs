pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ShrinkerError, ShrinkerResult};
pub use formats::{format_from_extension, ImageFormat};
pub use fs::{compute_output_path, file_size, OUTPUT_SUFFIX};
