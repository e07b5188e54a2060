//! PNG quantization through `pngquant`.

use std::ffi::OsStr;
use std::path::Path;

use crate::core::Settings;
use crate::processing::external::run_tool;
use crate::utils::ShrinkerResult;

const PROGRAM: &str = "pngquant";

/// External PNG quantizer, invoked with its default settings.
#[derive(Debug, Clone, Default)]
pub struct PngQuantizer;

impl PngQuantizer {
    pub async fn compress(
        &self,
        input: &Path,
        output: &Path,
        _settings: &Settings,
    ) -> ShrinkerResult<()> {
        let args: [&OsStr; 4] = [
            "--force".as_ref(),
            "--output".as_ref(),
            output.as_os_str(),
            input.as_os_str(),
        ];
        run_tool(PROGRAM, args).await
    }
}
