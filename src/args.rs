// src/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "loc_total", version = crate::VERSION, about = "プロジェクト配下のコード行数合計ツール")]
pub struct Args {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
