// src/errors.rs

//! Crate-wide error types.
//!
//! The launch failures carry the failing distro so the process exit code can
//! encode *which* stage failed, not just that something did.

use thiserror::Error;

use crate::task::Distro;

#[derive(Error, Debug)]
pub enum RegenError {
    /// The OS could not create a child process for this stage.
    #[error("{distro}: failed to spawn child process: {source}")]
    SpawnFailed {
        distro: Distro,
        source: std::io::Error,
    },

    /// The child process could not start the target executable (missing or
    /// not executable).
    #[error("{distro}: failed to start {program}: {source}")]
    ExecFailed {
        distro: Distro,
        program: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RegenError {
    /// Process exit code for this error.
    ///
    /// Spawn failures map to 1/3/5 and exec failures to 2/4/6 for stages
    /// 1/2/3 respectively; setup errors fall back to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RegenError::SpawnFailed { distro, .. } => 2 * distro.stage() - 1,
            RegenError::ExecFailed { distro, .. } => 2 * distro.stage(),
            RegenError::Other(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegenError>;
