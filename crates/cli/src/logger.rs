// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out logger over injected targets.
//!
//! `Logger::write` has no observable state of its own; the only way to check
//! it is to look at what its targets received.

use std::cell::RefCell;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Destination for log lines.
pub trait LogTarget {
    fn write(&self, level: Level, message: &str) -> Result<()>;
}

fn format_line(level: Level, message: &str) -> String {
    format!("[{}] {}\n", level, message)
}

/// Appends lines to a file, creating it on first write.
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogTarget for FileTarget {
    fn write(&self, level: Level, message: &str) -> Result<()> {
        let io_err = |source| Error::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(format_line(level, message).as_bytes())
            .map_err(io_err)
    }
}

/// Writes lines to any writer (stderr, stdout, an in-memory buffer).
pub struct StreamTarget<W: Write> {
    label: String,
    out: RefCell<W>,
}

impl<W: Write> StreamTarget<W> {
    /// `label` names the stream in error messages.
    pub fn new(label: impl Into<String>, out: W) -> Self {
        Self {
            label: label.into(),
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> LogTarget for StreamTarget<W> {
    fn write(&self, level: Level, message: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(format_line(level, message).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| Error::Io {
                path: PathBuf::from(&self.label),
                source,
            })
    }
}

/// Forwards every message to each registered target, in registration order.
#[derive(Default)]
pub struct Logger<'a> {
    targets: Vec<&'a dyn LogTarget>,
}

impl<'a> Logger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&mut self, target: &'a dyn LogTarget) {
        self.targets.push(target);
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Write to every target. Stops at, and returns, the first target error.
    pub fn write(&self, level: Level, message: &str) -> Result<()> {
        tracing::trace!("fan-out to {} target(s)", self.targets.len());
        for target in &self.targets {
            target.write(level, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
