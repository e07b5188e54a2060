use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SAMPLE_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <!-- sample fixture -->\n  <rect width=\"10\" height=\"10\"/>\n</svg>\n";

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(contents).unwrap();
    path
}
