#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use healthdash::core::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home, data and working directories for one test.
///
/// Everything lives under a `TempDir`, removed when the env is dropped.
pub struct TestEnv {
    pub root: PathBuf,
    _temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().to_path_buf();
        fs::create_dir_all(root.join("home")).expect("create home");
        fs::create_dir_all(root.join("data")).expect("create data");
        fs::create_dir_all(root.join("work")).expect("create work");
        Self { root, _temp: temp }
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn data(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Working directory of the binary; default exports land here.
    pub fn work(&self) -> PathBuf {
        self.root.join("work")
    }

    pub fn store(&self) -> RecordStore {
        RecordStore::new(self.data())
    }

    /// The CLI binary with this env's home and working directory.
    pub fn hd_bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("healthdash");
        cmd.env("HOME", self.home())
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .current_dir(self.work());
        cmd
    }

    /// Same as `hd_bare`, with `--data-dir` pointing at this env's data.
    pub fn hd(&self) -> Command {
        let mut cmd = self.hd_bare();
        cmd.arg("--data-dir").arg(self.data());
        cmd
    }

    /// The CLI binary with `--user` / `--password` already set.
    pub fn hd_as(&self, user: &str, password: &str) -> Command {
        let mut cmd = self.hd();
        cmd.args(["--user", user, "--password", password]);
        cmd
    }

    pub fn signup(&self, user: &str, password: &str) {
        self.hd_as(user, password).arg("signup").assert().success();
    }
}

/// Write raw lines (each followed by `\n`) to a file.
pub fn write_lines(path: &Path, lines: &[&str]) {
    let mut content = String::new();
    for l in lines {
        content.push_str(l);
        content.push('\n');
    }
    fs::write(path, content).expect("write lines");
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Every file name in `dir`, sorted.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
