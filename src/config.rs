// src/config.rs
use crate::args::Args;
use std::path::PathBuf;

/// File name suffixes whose lines contribute to the total. Matched
/// case-sensitively against the full file name, so `X.JSON` does not count.
pub const MATCHED_EXTENSIONS: &[&str] = &[".dart", ".yaml", ".json"];

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { root: args.root }
    }
}
