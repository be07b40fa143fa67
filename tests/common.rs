#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtracker::config::Config;
use rtracker::models::user::{Role, User};
use rtracker::session::{Session, SessionStore};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

pub const TOKEN: &str = "test-token";

pub fn rti() -> Command {
    cargo_bin_cmd!("rtracker")
}

/// Isolated config directory and session file for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("rtracker.conf")
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// Binary with the config dir pointed at the sandbox and no env overrides.
    pub fn cmd(&self) -> Command {
        let mut cmd = rti();
        cmd.env("RTRACKER_CONFIG_DIR", self.dir.path())
            .env_remove("RTRACKER_API")
            .env_remove("RTRACKER_LOG")
            .arg("--session")
            .arg(self.session_file());
        cmd
    }

    pub fn log_in(&self) {
        SessionStore::new(self.session_file())
            .save(&session())
            .unwrap();
    }
}

pub fn user() -> User {
    User {
        id: Some("u1".into()),
        name: "Ada".into(),
        email: "ada@example.test".into(),
        role: Role::User,
    }
}

pub fn session() -> Session {
    Session::authenticated(TOKEN, user())
}

/// Client configuration aimed at a mock server.
pub fn config_for(base: &str) -> Config {
    Config {
        api_base: format!("{base}/api/v1"),
        timeout_secs: 5,
        ..Config::default()
    }
}

pub fn habit_json(id: &str, name: &str, logs: Value) -> Value {
    json!({
        "_id": id,
        "userId": "u1",
        "name": name,
        "repeat": "daily",
        "habitLogs": logs,
    })
}

pub fn event_json(id: &str, name: &str, dates: &[&str], disabled: &[&str]) -> Value {
    json!({
        "_id": id,
        "name": name,
        "dates": dates,
        "color": "#b3d9ff",
        "disabledHabitIds": disabled,
    })
}

pub fn data(value: Value) -> Value {
    json!({ "data": value })
}
