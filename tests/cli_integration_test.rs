//! End-to-end tests for the egp-rates binary
//!
//! Each test points the binary at a one-shot HTTP server on loopback through a
//! temporary config file, then checks exit code, stdout and stderr.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tempfile::{tempdir, NamedTempFile};

const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Answer exactly one request with `status` and `body`
fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = match listener.accept() {
            Ok(conn) => conn,
            Err(_) => return,
        };

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&chunk[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    (addr, handle)
}

/// Accept one connection and never answer; returns once the client hangs up
fn serve_silently() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = match listener.accept() {
            Ok(conn) => conn,
            Err(_) => return,
        };
        let _ = stream.set_read_timeout(Some(Duration::from_secs(30)));

        let mut chunk = [0u8; 1024];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
    });

    (addr, handle)
}

fn config_with_timeout(addr: SocketAddr, timeout: f64) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "endpoint = \"http://{}/v6/latest/EGP\"", addr).unwrap();
    writeln!(file, "timeout = {:?}", timeout).unwrap();
    file
}

fn config_for(addr: SocketAddr) -> NamedTempFile {
    config_with_timeout(addr, 5.0)
}

fn run_binary(config: &NamedTempFile, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_egp-rates"));
    command
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG");
    for var in PROXY_VARS {
        command.env_remove(var);
    }
    command.output().unwrap()
}

const USD_EUR_BODY: &str =
    r#"{"result":"success","base_code":"EGP","rates":{"USD":48.5,"EUR":52.0}}"#;

#[test]
fn test_csv_to_stdout() {
    let (addr, server) = serve_once("200 OK", USD_EUR_BODY);
    let config = config_for(addr);

    let output = run_binary(&config, &["--amount", "2", "--csv", "-"]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "currency,egp_per_unit\r\nEGP,2.00000000\r\nEUR,0.03846154\r\nUSD,0.04123711\r\n"
    );
}

#[test]
fn test_table_to_stdout() {
    let (addr, server) = serve_once("200 OK", USD_EUR_BODY);
    let config = config_for(addr);

    let output = run_binary(&config, &[]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Currency  EGP per 1 unit");
    assert_eq!(lines[1], "--------  --------------");
    assert_eq!(lines[2], "EGP             1.000000");
    assert_eq!(lines[3], "EUR             0.019231");
    assert_eq!(lines[4], "USD             0.020619");
}

#[test]
fn test_csv_to_file() {
    let (addr, server) = serve_once("200 OK", USD_EUR_BODY);
    let config = config_for(addr);
    let dir = tempdir().unwrap();
    let path = dir.path().join("rates.csv");

    let output = run_binary(&config, &["--csv", path.to_str().unwrap()]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("currency,egp_per_unit\r\nEGP,1.00000000\r\n"));
}

#[test]
fn test_http_error_exits_two() {
    let (addr, server) = serve_once("500 Internal Server Error", "{}");
    let config = config_for(addr);

    let output = run_binary(&config, &[]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: HTTP 500 when fetching rates\n"
    );
}

#[test]
fn test_api_failure_exits_two() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"result":"error","error-type":"unsupported-code"}"#,
    );
    let config = config_for(addr);

    let output = run_binary(&config, &[]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: unsupported-code\n"
    );
}

#[test]
fn test_unreachable_host_exits_two() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = config_for(addr);

    let output = run_binary(&config, &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Network error fetching rates"));
}

#[test]
fn test_timeout_exits_two() {
    let (addr, server) = serve_silently();
    let config = config_with_timeout(addr, 0.2);

    let output = run_binary(&config, &[]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Network error fetching rates"));
}

#[test]
fn test_empty_csv_path_prints_table() {
    let (addr, server) = serve_once("200 OK", USD_EUR_BODY);
    let config = config_for(addr);

    let output = run_binary(&config, &["--csv", ""]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Currency  EGP per 1 unit\n"));
}

#[test]
fn test_unwritable_csv_exits_three() {
    let (addr, server) = serve_once("200 OK", USD_EUR_BODY);
    let config = config_for(addr);
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("rates.csv");

    let output = run_binary(&config, &["--csv", path.to_str().unwrap()]);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Failed writing CSV: "));
}
