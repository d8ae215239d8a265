//! Fake speech engines on a private PATH

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A directory used as the whole of `PATH` for a `murmur` run.
pub struct FakePath {
    pub dir: TempDir,
}

impl FakePath {
    /// An empty PATH: no engine is installed.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Install a fake `program` that appends its arguments to `<program>.log`
    /// and exits with `speak_status` when asked to speak.
    pub fn with_engine(program: &str, voices: &str, speak_status: i32) -> Self {
        let path = Self::empty();
        let log = path.log_path(program);
        let voices_flag = if program == "spd-say" { "-L" } else { "--voices" };
        let script = format!(
            "#!/bin/sh\n\
             case \"$1\" in\n\
             --version) echo \"{program} 1.0\"; exit 0 ;;\n\
             {voices_flag}) printf '%s' '{voices}'; exit 0 ;;\n\
             esac\n\
             printf '%s\\n' \"$*\" >> '{log}'\n\
             if [ {speak_status} -ne 0 ]; then echo 'audio device busy' >&2; fi\n\
             exit {speak_status}\n",
            log = log.display(),
        );
        let bin = path.dir.path().join(program);
        fs::write(&bin, script).expect("Failed to write fake engine");
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake engine executable");
        path
    }

    pub fn log_path(&self, program: &str) -> PathBuf {
        self.dir.path().join(format!("{}.log", program))
    }

    pub fn spoken(&self, program: &str) -> Vec<String> {
        fs::read_to_string(self.log_path(program))
            .map(|s| s.lines().map(|l| l.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        run_murmur(self.dir.path(), args)
    }
}

pub fn run_murmur(path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_murmur"))
        .args(args)
        .env("PATH", path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run murmur")
}
