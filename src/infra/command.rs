//! # Command Execution Module / 命令执行模块
//!
//! Spawns a child process and captures its stdout and stderr as two
//! separate texts. Both pipes are drained concurrently so a chatty stderr
//! cannot block a process that is still writing stdout.
//!
//! 派生子进程并分别捕获其 stdout 和 stderr。两个管道被并发读取，
//! 避免 stderr 输出过多时阻塞仍在写 stdout 的进程。

use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Everything a finished child process left behind.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns `cmd`, waits for it to exit and returns its separated output.
///
/// Output is decoded lossily: invalid UTF-8 sequences become U+FFFD rather
/// than truncating the capture.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// The exit status and captured streams, or the I/O error raised while
/// spawning or waiting on the process.
///
/// 派生命令，等待其退出并返回分离的输出。无效的 UTF-8 会被替换而不是截断。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> std::io::Result<CapturedOutput> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture stderr"))?;

    let (status, stdout, stderr) =
        tokio::try_join!(child.wait(), read_lossy(stdout), read_lossy(stderr))?;

    Ok(CapturedOutput {
        status,
        stdout,
        stderr,
    })
}

async fn read_lossy<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Maps an exit status to an integer code.
///
/// On Unix a process killed by a signal has no exit code; it is reported as
/// the negated signal number.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    1
}
