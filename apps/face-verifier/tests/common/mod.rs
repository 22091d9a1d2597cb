//! Shared fixtures for verification stub integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// A selfie and an identity document on disk, plus a path that never exists.
pub struct ImageFixtures {
    tmp: TempDir,
    pub selfie: PathBuf,
    pub id_doc: PathBuf,
    pub missing: PathBuf,
}

impl ImageFixtures {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let selfie = tmp.path().join("selfie.jpg");
        let id_doc = tmp.path().join("cedula.png");
        fs::write(&selfie, [0xFF, 0xD8, 0xFF, 0xE0]).expect("write selfie");
        fs::write(&id_doc, [0x89, b'P', b'N', b'G']).expect("write id document");
        let missing = tmp.path().join("not-uploaded.jpg");

        Self {
            tmp,
            selfie,
            id_doc,
            missing,
        }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn selfie_arg(&self) -> &str {
        self.selfie.to_str().expect("selfie path utf8")
    }

    pub fn id_doc_arg(&self) -> &str {
        self.id_doc.to_str().expect("id document path utf8")
    }

    pub fn missing_arg(&self) -> &str {
        self.missing.to_str().expect("missing path utf8")
    }
}

/// `verify-face` with no simulated delay and a clean environment.
pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("verify-face");
    cmd.env("VERIFY_FACE_DELAY_MS", "0")
        .env_remove("VERIFY_FACE_STRATEGY")
        .env_remove("LOG_FORMAT")
        .env_remove("OTEL_ENABLED")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT");
    cmd
}

/// Run and return trimmed stdout, asserting the exit code.
pub fn run_stdout(cmd: &mut Command, code: i32) -> String {
    let out = cmd.assert().code(code).get_output().stdout.clone();
    String::from_utf8(out).expect("stdout utf8")
}
