// src/exec/launcher.rs

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{info, warn};

use crate::errors::{RegenError, Result};
use crate::task::ChildTask;

/// A task whose child process has been spawned and is (or was) running.
#[derive(Debug)]
pub struct LaunchedTask {
    pub task: ChildTask,
    child: Child,
}

/// Spawn one child process per task, in the order given.
///
/// Each child runs the task's program with its single distro flag and
/// inherits the parent's stdin/stdout/stderr. On the first spawn failure the
/// error is returned immediately; children launched before that point are
/// left running and are not cleaned up.
pub fn launch_all(tasks: &[ChildTask]) -> Result<Vec<LaunchedTask>> {
    let mut launched = Vec::with_capacity(tasks.len());

    for task in tasks {
        info!(distro = %task.distro, program = %task.program.display(), "starting generator");

        let child = Command::new(&task.program)
            .arg(task.distro.flag())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| classify_spawn_error(task, source))?;

        launched.push(LaunchedTask {
            task: task.clone(),
            child,
        });
    }

    Ok(launched)
}

/// Wait for every launched child, in launch order, and sum their termination
/// statuses.
///
/// The sum is the orchestrator's own exit status. Statuses are not inspected
/// individually, so mixed-sign statuses can cancel out; callers interpret the
/// combined sum themselves. A child killed by a signal has no exit code and
/// contributes -1.
pub async fn await_all(launched: Vec<LaunchedTask>) -> Result<i32> {
    let mut combined = 0;

    for mut entry in launched {
        let status = entry.child.wait().await.map_err(|source| {
            RegenError::Other(
                anyhow::Error::new(source)
                    .context(format!("waiting for {} generator", entry.task.distro)),
            )
        })?;

        let code = status.code().unwrap_or(-1);
        if status.code().is_none() {
            warn!(distro = %entry.task.distro, "generator terminated by signal");
        }
        info!(distro = %entry.task.distro, exit_code = code, "generator exited");

        combined += code;
    }

    Ok(combined)
}

/// `Command::spawn` reports both fork- and exec-style failures as a single
/// `io::Error` in the parent. A missing or non-executable program surfaces as
/// `NotFound`/`PermissionDenied`; anything else means the OS could not create
/// the process at all.
fn classify_spawn_error(task: &ChildTask, source: std::io::Error) -> RegenError {
    match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => RegenError::ExecFailed {
            distro: task.distro,
            program: task.program.display().to_string(),
            source,
        },
        _ => RegenError::SpawnFailed {
            distro: task.distro,
            source,
        },
    }
}
