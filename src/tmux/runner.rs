//! Process execution for tmux commands.

use std::io::Read;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::error::{TmuxError, TmuxResult};

/// Runs an external program and returns its stdout.
///
/// The seam between the bridge and the OS, replaced by a fake in tests.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> TmuxResult<String>;
}

/// Default runner backed by `std::process` with a wall-clock timeout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> TmuxResult<String> {
        debug!(program, ?args, "Running command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TmuxError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let output = wait_with_timeout(&mut child, self.timeout).map_err(|e| {
            if e.kind() == std::io::ErrorKind::TimedOut {
                TmuxError::Timeout(self.timeout)
            } else {
                TmuxError::Spawn {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                match output.status.code() {
                    Some(code) => format!("tmux exited {}", code),
                    None => "tmux terminated by signal".to_string(),
                }
            } else {
                stderr
            };
            return Err(TmuxError::Exit(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Wait for a child process, killing and reaping it on timeout.
///
/// stdout and stderr are drained on background threads so a chatty child
/// cannot block on a full pipe while we poll.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::io::Result<Output> {
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let start = Instant::now();
    let poll_interval = Duration::from_millis(20);

    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "Process timed out",
                    ));
                }
                thread::sleep(poll_interval);
            }
        }
    };

    let collect = |handle: Option<thread::JoinHandle<Vec<u8>>>| {
        handle
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default()
    };

    Ok(Output {
        status,
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).ok();
        buf
    })
}
