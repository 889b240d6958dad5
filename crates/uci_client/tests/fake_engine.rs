//! End-to-end tests against scripted fake engines
//!
//! The fake engines are small `/bin/sh` scripts run through `sh` so the test
//! binary never executes a file it has just written.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;
use uci_client::{
    best_move, query_best_move, EngineConfig, EngineError, SearchLimits, UciPosition,
};

/// Engine that logs every command it receives and always answers e2e4
const ECHO_ENGINE: &str = r#"
while IFS= read -r line; do
  echo "$line" >> "$LOG"
  case "$line" in
    uci) echo "id name Fake Engine"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "info depth 1 score cp 20"; echo "bestmove e2e4 ponder e7e5" ;;
    quit) exit 0 ;;
  esac
done
"#;

/// Engine that is always checkmated
const MATED_ENGINE: &str = r#"
while IFS= read -r line; do
  case "$line" in
    uci) echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "bestmove (none)" ;;
    quit) exit 0 ;;
  esac
done
"#;

/// Engine that never answers a search
const SILENT_ENGINE: &str = r#"
while IFS= read -r line; do
  case "$line" in
    uci) echo "uciok" ;;
    isready) echo "readyok" ;;
    quit) exit 0 ;;
  esac
done
"#;

/// Silent engine that records its pid before the handshake
const SILENT_ENGINE_WITH_PID: &str = r#"
echo $$ > "$LOG.pid"
while IFS= read -r line; do
  case "$line" in
    uci) echo "uciok" ;;
    isready) echo "readyok" ;;
  esac
done
"#;

/// Engine that dies during the handshake
const CRASHING_ENGINE: &str = r#"
read -r line
exit 3
"#;

fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let log = dir.path().join(format!("{name}.log"));
    let script = dir.path().join(format!("{name}.sh"));
    let contents = format!("LOG='{}'\n{}", log.display(), body);
    std::fs::write(&script, contents).expect("write fake engine script");
    script
}

fn config_for(script: &Path) -> EngineConfig {
    EngineConfig {
        program: PathBuf::from("/bin/sh"),
        args: vec![script.display().to_string()],
        handshake_timeout: Duration::from_secs(2),
        grace: Duration::from_millis(300),
    }
}

/// Whether `pid` is still a live (non-zombie) process
#[cfg(target_os = "linux")]
fn is_running(pid: u32) -> bool {
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Ok(stat) => {
            let state = stat
                .rsplit(')')
                .next()
                .and_then(|rest| rest.split_whitespace().next());
            state != Some("Z")
        }
        Err(_) => false,
    }
}

#[cfg(target_os = "linux")]
async fn wait_until_gone(pid: u32) -> bool {
    for _ in 0..100 {
        if !is_running(pid) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[cfg(target_os = "linux")]
fn read_pid(dir: &TempDir, name: &str) -> Option<u32> {
    let path = dir.path().join(format!("{name}.log.pid"));
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

fn quick_limits() -> SearchLimits {
    SearchLimits::new(3, Duration::from_millis(100))
}

#[tokio::test]
async fn test_returns_engine_best_move() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo", ECHO_ENGINE);
    let position = UciPosition::with_moves(["e2e4", "e7e5"]);

    let reply = query_best_move(&config_for(&script), &position, &quick_limits())
        .await
        .expect("fake engine should answer");

    assert_eq!(reply.as_deref(), Some("e2e4"));
}

#[tokio::test]
async fn test_sends_position_and_budget() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo", ECHO_ENGINE);
    let position = UciPosition::with_moves(["e2e4", "e7e5", "g1f3"]);

    let reply = best_move(&config_for(&script), &position, &quick_limits()).await;
    assert!(reply.is_some());

    let log = std::fs::read_to_string(dir.path().join("echo.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.first(), Some(&"uci"));
    assert!(lines.contains(&"position startpos moves e2e4 e7e5 g1f3"));
    assert!(lines.contains(&"go depth 3 movetime 100"));
    assert_eq!(lines.last(), Some(&"quit"));
}

#[tokio::test]
async fn test_no_legal_move_is_ok_none() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "mated", MATED_ENGINE);

    let reply = query_best_move(&config_for(&script), &UciPosition::startpos(), &quick_limits())
        .await
        .expect("a mated engine still answers");

    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_missing_executable_is_launch_error() {
    let config = EngineConfig::new("/definitely/not/an/engine");

    let err = query_best_move(&config, &UciPosition::startpos(), &quick_limits())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Launch { .. }), "got {err:?}");

    assert_eq!(
        best_move(&config, &UciPosition::startpos(), &quick_limits()).await,
        None
    );
}

#[tokio::test]
async fn test_silent_engine_times_out() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "silent", SILENT_ENGINE);
    let config = EngineConfig {
        handshake_timeout: Duration::from_millis(500),
        ..config_for(&script)
    };

    let err = query_best_move(&config, &UciPosition::startpos(), &quick_limits())
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_engine_exiting_early_is_closed() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "crash", CRASHING_ENGINE);

    let err = query_best_move(&config_for(&script), &UciPosition::startpos(), &quick_limits())
        .await
        .unwrap_err();

    assert!(
        matches!(err, EngineError::Closed | EngineError::Io(_)),
        "got {err:?}"
    );
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_timed_out_engine_process_is_killed() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "stuck", SILENT_ENGINE_WITH_PID);
    let config = EngineConfig {
        handshake_timeout: Duration::from_millis(500),
        ..config_for(&script)
    };

    let err = query_best_move(&config, &UciPosition::startpos(), &quick_limits())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Timeout(_)), "got {err:?}");

    let pid = read_pid(&dir, "stuck").expect("engine wrote its pid");
    assert!(wait_until_gone(pid).await, "engine {pid} still running after timeout");
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_aborted_query_kills_engine_process() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "aborted", SILENT_ENGINE_WITH_PID);
    let config = EngineConfig {
        handshake_timeout: Duration::from_secs(30),
        ..config_for(&script)
    };

    let task = tokio::spawn(async move {
        query_best_move(&config, &UciPosition::startpos(), &quick_limits()).await
    });

    let mut pid = None;
    for _ in 0..100 {
        pid = read_pid(&dir, "aborted");
        if pid.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let pid = pid.expect("engine wrote its pid");
    assert!(is_running(pid));

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(wait_until_gone(pid).await, "engine {pid} still running after abort");
}
