//! Integration tests for the bootstrap flow
//!
//! A scripted stand-in for the ollama binary handles the `serve` and `pull`
//! subcommands, so each fail-fast property can be checked end to end without
//! a real daemon.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use preflight_config::{Settings, StartupSettings};
use preflight_launcher::{LaunchError, Launcher};
use preflight_ollama::OllamaError;

/// Write an executable script that plays the ollama binary
fn fake_ollama(dir: &Path, serve_body: &str, pull_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ollama");
    let script = format!(
        "#!/bin/sh\ncase \"$1\" in\n  serve)\n    {serve_body}\n    ;;\n  pull)\n    {pull_body}\n    ;;\nesac\n"
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn settings_for(bin: &Path, base_url: &str, timeout_secs: u64) -> Settings {
    Settings {
        model: "granite3.1-moe:1b".to_string(),
        base_url: base_url.to_string(),
        ollama_bin: bin.to_string_lossy().into_owned(),
        startup: StartupSettings {
            grace_secs: 0,
            timeout_secs,
        },
    }
}

async fn healthy_mock_server() -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .create_async()
        .await;
    (server, mock)
}

#[tokio::test]
async fn test_serve_failure_skips_pull() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("pulled");
    let bin = fake_ollama(
        dir.path(),
        "exit 7",
        &format!("echo \"$2\" > {}; exit 0", marker.display()),
    );

    // Unreachable probe endpoint: the daemon's death must win the race
    let settings = settings_for(&bin, "http://localhost:59997", 30);
    let launcher = Launcher::new(settings).unwrap();

    match launcher.run().await {
        Err(LaunchError::DaemonExited { status }) => {
            assert_eq!(status.code(), Some(7));
        }
        other => panic!("Expected DaemonExited, got {:?}", other.map(|_| ())),
    }
    assert!(!marker.exists(), "Pull must not run after serve failure");
}

#[tokio::test]
async fn test_pull_failure_aborts_before_supervision() {
    let dir = tempfile::tempdir().unwrap();
    let bin = fake_ollama(dir.path(), "sleep 30", "exit 1");

    let (server, _mock) = healthy_mock_server().await;
    let settings = settings_for(&bin, &server.url(), 30);
    let launcher = Launcher::new(settings).unwrap();

    // Returns instead of blocking forever: supervision never starts
    let result = tokio::time::timeout(Duration::from_secs(20), launcher.run())
        .await
        .expect("Launcher must fail fast on pull failure");

    match result {
        Err(LaunchError::Ollama(OllamaError::PullFailed { model, .. })) => {
            assert_eq!(model, "granite3.1-moe:1b");
        }
        other => panic!("Expected PullFailed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_readiness_budget_exhausted_skips_pull() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("pulled");
    let bin = fake_ollama(
        dir.path(),
        "sleep 30",
        &format!("echo \"$2\" > {}; exit 0", marker.display()),
    );

    let settings = settings_for(&bin, "http://localhost:59996", 1);
    let launcher = Launcher::new(settings).unwrap();

    match launcher.run().await {
        Err(LaunchError::Ollama(OllamaError::NotReady(_))) => {}
        other => panic!("Expected NotReady, got {:?}", other.map(|_| ())),
    }
    assert!(!marker.exists(), "Pull must not run when daemon never became ready");
}

#[tokio::test]
async fn test_success_path_pulls_model_and_stays_blocked() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("pulled");
    let bin = fake_ollama(
        dir.path(),
        "sleep 30",
        &format!("echo \"$2\" > {}; exit 0", marker.display()),
    );

    let (server, _mock) = healthy_mock_server().await;
    let mut settings = settings_for(&bin, &server.url(), 30);
    settings.model = "llama3:8b".to_string();
    let launcher = Launcher::new(settings).unwrap();

    // The launcher must still be supervising when the timeout fires
    let blocked = tokio::time::timeout(Duration::from_secs(3), launcher.run()).await;
    assert!(blocked.is_err(), "Launcher must stay blocked on the daemon");

    let pulled = std::fs::read_to_string(&marker).expect("Pull must have run");
    assert_eq!(pulled.trim(), "llama3:8b");
}

#[tokio::test]
async fn test_clean_daemon_exit_ends_supervision() {
    let dir = tempfile::tempdir().unwrap();
    let bin = fake_ollama(dir.path(), "sleep 1; exit 0", "exit 0");

    let (server, _mock) = healthy_mock_server().await;
    let settings = settings_for(&bin, &server.url(), 30);
    let launcher = Launcher::new(settings).unwrap();

    tokio::time::timeout(Duration::from_secs(20), launcher.run())
        .await
        .expect("Supervision must end when the daemon exits")
        .unwrap();
}

#[tokio::test]
async fn test_daemon_crash_during_supervision_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bin = fake_ollama(dir.path(), "sleep 1; exit 9", "exit 0");

    let (server, _mock) = healthy_mock_server().await;
    let settings = settings_for(&bin, &server.url(), 30);
    let launcher = Launcher::new(settings).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(20), launcher.run())
        .await
        .expect("Supervision must end when the daemon exits");

    match result {
        Err(LaunchError::DaemonFailed { status }) => {
            assert_eq!(status.code(), Some(9));
        }
        other => panic!("Expected DaemonFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_launcher_rejects_invalid_settings() {
    let settings = Settings {
        model: String::new(),
        ..Settings::default()
    };
    assert!(matches!(
        Launcher::new(settings),
        Err(LaunchError::Config(_))
    ));
}
