//! GIF optimization through `gifsicle`.

use std::ffi::OsStr;
use std::path::Path;

use crate::core::Settings;
use crate::processing::external::run_tool;
use crate::utils::ShrinkerResult;

const PROGRAM: &str = "gifsicle";

/// External GIF optimizer at a fixed optimization level.
#[derive(Debug, Clone, Default)]
pub struct GifOptimizer;

impl GifOptimizer {
    pub async fn compress(
        &self,
        input: &Path,
        output: &Path,
        _settings: &Settings,
    ) -> ShrinkerResult<()> {
        let args: [&OsStr; 5] = [
            "--optimize=2".as_ref(),
            "--interlace".as_ref(),
            "--output".as_ref(),
            output.as_os_str(),
            input.as_os_str(),
        ];
        run_tool(PROGRAM, args).await
    }
}
