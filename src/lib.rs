// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod task;

use tracing::info;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::task::ChildTask;

/// High-level entry point used by `main.rs`.
///
/// Spawns one generator process per distro in a fixed order, waits for all of
/// them in the same order, and returns the sum of their termination statuses
/// as the combined exit status.
pub async fn run(args: CliArgs) -> Result<i32> {
    let tasks = ChildTask::plan(&args.script);

    let launched = exec::launch_all(&tasks)?;
    let combined = exec::await_all(launched).await?;

    info!(combined, "all generators finished");
    Ok(combined)
}
