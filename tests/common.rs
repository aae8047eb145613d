use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// 3x3 map: start 0, destination 8, one private road, no construction
#[allow(dead_code)]
pub const SAMPLE_MAP: &str = "1\n0\n8\n3\n3\n1\n0\n+P+V+\nCBPBB\n+P+P+\nPBBBC\n+V+P+\n";

pub fn roadpath() -> Command {
    let mut cmd = cargo_bin_cmd!("roadpath");
    cmd.env_remove("ROADPATH_CONFIG")
        .env_remove("ROADPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_map(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
