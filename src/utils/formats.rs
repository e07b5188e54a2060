use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::ShrinkerError;

/// The supported image formats, keyed off the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
    GIF,
    SVG,
}

impl ImageFormat {
    /// Every supported format, in routing order.
    pub const ALL: [ImageFormat; 4] = [Self::JPEG, Self::PNG, Self::GIF, Self::SVG];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::GIF => &["gif"],
            Self::SVG => &["svg"],
        }
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }
}

impl FromStr for ImageFormat {
    type Err = ShrinkerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "gif" => Ok(Self::GIF),
            "svg" => Ok(Self::SVG),
            _ => Err(ShrinkerError::unsupported_format(ext)),
        }
    }
}

/// Get format from a file's extension
pub fn format_from_extension(path: &std::path::Path) -> Result<ImageFormat, ShrinkerError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            ShrinkerError::unsupported_format(format!("file has no extension: {}", path.display()))
        })?;

    ImageFormat::from_str(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn extensions_route_case_insensitively() {
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::JPEG);
        assert_eq!("Jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::JPEG);
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::PNG);
        assert_eq!("gif".parse::<ImageFormat>().unwrap(), ImageFormat::GIF);
        assert_eq!("SVG".parse::<ImageFormat>().unwrap(), ImageFormat::SVG);
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(matches!(
            "bmp".parse::<ImageFormat>(),
            Err(ShrinkerError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            format_from_extension(Path::new("/tmp/no_extension")),
            Err(ShrinkerError::UnsupportedFormat(_))
        ));
    }
}
