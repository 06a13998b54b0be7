// src/lib.rs
pub mod args;
pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Walk the tree under `config.root` and sum the line counts of every
/// matched file.
///
/// # Errors
///
/// Returns an error as soon as any matched file fails to open, read or
/// decode. The partial total accumulated up to that point is discarded.
pub fn run(config: &Config) -> Result<u64> {
    let mut total: u64 = 0;
    for path in filesystem::collect_matched_files(config) {
        total += counter::count_file_lines(&path)?;
    }
    Ok(total)
}
