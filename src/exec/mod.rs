// src/exec/mod.rs

//! Process orchestration layer.
//!
//! This module is responsible for actually running the generator script,
//! using `tokio::process::Command`: [`launcher`] spawns one child per distro
//! in a fixed order, then waits on them in the same order and sums their
//! termination statuses.

pub mod launcher;

pub use launcher::{await_all, launch_all, LaunchedTask};
