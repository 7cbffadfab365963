//! Command line tests for the name-sweep binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use tempfile::TempDir;

fn sweep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("name-sweep").unwrap();
    cmd.env_remove("NAME_SWEEP_URL_TEMPLATE")
        .env_remove("NAME_SWEEP_CHECKPOINT_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_length_is_required() {
    sweep_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--length"));
}

#[test]
fn test_corrupt_checkpoint_fails_before_probing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("twitnames_2"), "abc").unwrap();

    sweep_cmd()
        .args(["-l", "2", "--url-template", "http://127.0.0.1:9/{name}"])
        .arg("--checkpoint-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Checkpoint"));
}

#[test]
fn test_bad_template_rejected() {
    let dir = TempDir::new().unwrap();
    sweep_cmd()
        .args(["-l", "1", "--url-template", "https://example.com/"])
        .arg("--checkpoint-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("placeholder"));
}

#[test]
fn test_sweep_prints_one_line_per_handle() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        for stream in listener.incoming().take(3) {
            let mut stream = stream.unwrap();
            let mut buf = [0u8; 2048];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let code = if request.starts_with("GET /A ") {
                404
            } else if request.starts_with("GET /B ") {
                200
            } else {
                500
            };
            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                code
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    let dir = TempDir::new().unwrap();
    sweep_cmd()
        .args(["-l", "1", "--alphabet", "ABC", "--pause-secs", "0", "--sleep-frequency", "2"])
        .arg("--url-template")
        .arg(format!("http://{}/{{name}}", addr))
        .arg("--checkpoint-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("free A\nunavailable B\nError getting user \"C\": HTTP response 500\n")
        .stderr(predicate::str::contains("Sleeping for"));

    server.join().unwrap();
}
