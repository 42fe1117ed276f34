#![allow(dead_code)]

use jobsite_filtergen::{Config, Console, Variant};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

pub fn config(dir: &TempDir, variant: Variant) -> Config {
    Config {
        variant,
        index_path: dir.path().join("Job_Company_Filter_INDEX.txt"),
        output_dir: dir.path().to_path_buf(),
        log_level: LevelFilter::OFF,
    }
}

/// Feeds `lines` to a console as operator input and returns everything it printed.
pub fn run_session(config: Config, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut console = Console::new(config, Cursor::new(input), Vec::new());
    console.run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

pub fn write_index(dir: &TempDir, entries: &[&str]) -> PathBuf {
    let path = dir.path().join("Job_Company_Filter_INDEX.txt");
    let mut content = entries.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Names of every file in `dir`, sorted.
pub fn listing(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
