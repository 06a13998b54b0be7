// src/filesystem.rs
use crate::config::{Config, MATCHED_EXTENSIONS};
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Case-sensitive suffix match against the matched-extension set.
pub fn matches_extension(name: &str) -> bool {
    MATCHED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Sequential recursive directory walk.
///
/// Standard filters are disabled: hidden files and directories are visited,
/// no ignore files are honored, and nothing is pruned. Symlinks are not
/// followed, so a symlink cycle cannot loop.
///
/// Entries that cannot be enumerated (a nonexistent root, an unreadable
/// directory) are skipped; a nonexistent root therefore yields no files at
/// all. Read failures on the files returned here surface later, when the
/// files are opened for counting.
pub fn collect_matched_files(config: &Config) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(&config.root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if matches_extension(&name) {
            files.push(entry.into_path());
        }
    }
    files
}
