//! JPEG re-encoding through mozjpeg's `cjpeg`.

use std::ffi::OsStr;
use std::path::Path;

use crate::core::Settings;
use crate::processing::external::run_tool;
use crate::utils::ShrinkerResult;

const PROGRAM: &str = "cjpeg";

/// External JPEG re-encoder.
#[derive(Debug, Clone, Default)]
pub struct JpegEncoder;

impl JpegEncoder {
    /// Re-encode `input` into `output` with the configured quality and
    /// progressive flag.
    pub async fn compress(
        &self,
        input: &Path,
        output: &Path,
        settings: &Settings,
    ) -> ShrinkerResult<()> {
        let quality = settings.jpeg_quality().to_string();

        let mut args: Vec<&OsStr> = vec!["-quality".as_ref(), quality.as_ref()];
        if settings.jpegprogressive {
            args.push("-progressive".as_ref());
        }
        args.push("-outfile".as_ref());
        args.push(output.as_os_str());
        args.push(input.as_os_str());

        run_tool(PROGRAM, args).await
    }
}
