//! Scoped handle around an engine child process
//!
//! The child is spawned with `kill_on_drop`, so every path that drops an
//! [`EngineProcess`] (early `?` return, timeout, task abort) also terminates
//! the OS process. [`EngineProcess::shutdown`] is the polite path.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::error::{EngineError, EngineResult};
use crate::protocol::{parse_bestmove, BestMove, SearchLimits, UciPosition};

const QUIT_GRACE: Duration = Duration::from_millis(500);

/// A running engine that has completed the UCI handshake
#[derive(Debug)]
pub struct EngineProcess {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    name: Option<String>,
}

impl EngineProcess {
    /// Spawn `program` and run `uci` / `isready` until the engine is ready
    pub async fn launch(program: &Path, args: &[String]) -> EngineResult<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Launch {
                program: program.display().to_string(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(EngineError::Closed)?;
        let stdout = child.stdout.take().ok_or(EngineError::Closed)?;

        let mut engine = Self {
            child,
            stdin,
            lines: BufReader::new(stdout).lines(),
            name: None,
        };
        engine.handshake().await?;

        log::debug!(
            "[UCI] engine ready: {}",
            engine.name.as_deref().unwrap_or("<unnamed>")
        );
        Ok(engine)
    }

    /// Name reported by `id name`, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn handshake(&mut self) -> EngineResult<()> {
        self.send("uci").await?;
        loop {
            let line = self.read_line().await?;
            let line = line.trim();
            if let Some(name) = line.strip_prefix("id name ") {
                self.name = Some(name.to_string());
            } else if line == "uciok" {
                break;
            }
        }
        self.sync().await
    }

    async fn sync(&mut self) -> EngineResult<()> {
        self.send("isready").await?;
        loop {
            if self.read_line().await?.trim() == "readyok" {
                return Ok(());
            }
        }
    }

    pub async fn send(&mut self, command: &str) -> EngineResult<()> {
        log::trace!("[UCI] >> {}", command);
        self.stdin.write_all(command.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> EngineResult<String> {
        match self.lines.next_line().await? {
            Some(line) => {
                log::trace!("[UCI] << {}", line);
                Ok(line)
            }
            None => Err(EngineError::Closed),
        }
    }

    /// Search `position` under `limits` and wait for the `bestmove` reply
    ///
    /// `info` lines are skipped.
    pub async fn search(
        &mut self,
        position: &UciPosition,
        limits: &SearchLimits,
    ) -> EngineResult<BestMove> {
        self.send("ucinewgame").await?;
        self.send(&position.command()).await?;
        self.sync().await?;
        self.send(&limits.go_command()).await?;

        loop {
            let line = self.read_line().await?;
            if line.starts_with("bestmove") {
                return parse_bestmove(&line).ok_or(EngineError::Protocol(line));
            }
        }
    }

    /// Send `quit` and reap the child
    ///
    /// If the engine does not exit within a short grace period it is killed
    /// when `self` drops at the end of this call.
    pub async fn shutdown(mut self) -> EngineResult<()> {
        self.send("quit").await?;
        match tokio::time::timeout(QUIT_GRACE, self.child.wait()).await {
            Ok(status) => {
                log::trace!("[UCI] engine exited: {:?}", status?);
            }
            Err(_) => {
                log::debug!("[UCI] engine ignored quit, killing it");
            }
        }
        Ok(())
    }
}
