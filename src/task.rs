// src/task.rs

//! Task model: which distros get regenerated, and with what command.

use std::fmt;
use std::path::PathBuf;

/// ROS distro the generator script is invoked for.
///
/// The variants are ordered: `stage()` fixes both the launch order and the
/// per-stage failure exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Lunar,
    Kinetic,
    Indigo,
}

impl Distro {
    /// All distros, in launch order.
    pub const ALL: [Distro; 3] = [Distro::Lunar, Distro::Kinetic, Distro::Indigo];

    /// Flag passed to the generator script.
    pub fn flag(self) -> &'static str {
        match self {
            Distro::Lunar => "--lunar",
            Distro::Kinetic => "--kinetic",
            Distro::Indigo => "--indigo",
        }
    }

    /// 1-based launch stage.
    pub fn stage(self) -> i32 {
        match self {
            Distro::Lunar => 1,
            Distro::Kinetic => 2,
            Distro::Indigo => 3,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distro::Lunar => "lunar",
            Distro::Kinetic => "kinetic",
            Distro::Indigo => "indigo",
        };
        f.write_str(name)
    }
}

/// One planned invocation of the generator script.
#[derive(Debug, Clone)]
pub struct ChildTask {
    /// Path of the command to run, resolved relative to the current
    /// working directory.
    pub program: PathBuf,
    pub distro: Distro,
}

impl ChildTask {
    pub fn new(program: impl Into<PathBuf>, distro: Distro) -> Self {
        Self {
            program: program.into(),
            distro,
        }
    }

    /// The three tasks in launch order, all invoking `program`.
    pub fn plan(program: impl Into<PathBuf>) -> Vec<ChildTask> {
        let program = program.into();
        Distro::ALL
            .iter()
            .map(|&distro| ChildTask::new(program.clone(), distro))
            .collect()
    }
}
