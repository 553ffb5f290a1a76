use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub conf: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let conf = tmp.path().join("conf.json");
        Self { _tmp: tmp, conf }
    }

    pub fn with_fixture() -> Self {
        let env = Self::new();
        env.write(sample_conf());
        env
    }

    pub fn write(&self, record: Value) {
        fs::write(
            &self.conf,
            serde_json::to_string_pretty(&record).expect("serialize record"),
        )
        .expect("write conf fixture");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("docconf").expect("binary under test");
        cmd.arg("--conf")
            .arg(self.conf.to_str().expect("conf path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn sample_conf() -> Value {
    serde_json::json!({
        "project": "Godot CMake",
        "copyright": "2020, Felix Morgner",
        "author": "Felix Morgner <felix.morgner@gmail.com>",
        "version": "1.0",
        "release": "1.0.0",
        "extensions": ["sphinxcontrib.moderncmakedomain"],
        "html_theme": "sphinx_material",
        "html_theme_options": {"globaltoc_depth": 0},
        "primary_domain": "cmake"
    })
}
