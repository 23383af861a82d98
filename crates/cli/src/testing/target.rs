// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Doubles for [`LogTarget`].

use crate::double::{MockMethod, Recorder, Spy, Strictness};
use crate::error::Result;
use crate::logger::{Level, LogTarget};

/// Mock log target. Unconfigured writes succeed.
pub struct MockLogTarget {
    pub write: MockMethod<(Level, String), Result<()>>,
}

impl MockLogTarget {
    pub fn new() -> Self {
        Self::with_strictness(Strictness::default())
    }

    pub fn with_strictness(strictness: Strictness) -> Self {
        let mut write: MockMethod<(Level, String), Result<()>> =
            MockMethod::with_fallback("write", |_| Ok(()));
        write.set_strictness(strictness);
        Self { write }
    }
}

impl Default for MockLogTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTarget for MockLogTarget {
    fn write(&self, level: Level, message: &str) -> Result<()> {
        self.write.invoke((level, message.to_string()))
    }
}

/// Records every line it is given; writes always succeed.
#[derive(Debug)]
pub struct SpyLogTarget {
    pub write: Spy<(Level, String)>,
}

impl SpyLogTarget {
    pub fn new() -> Self {
        Self {
            write: Spy::new("write"),
        }
    }

    /// Spy ordered against every other spy on `recorder`.
    pub fn with_recorder(recorder: &Recorder) -> Self {
        Self {
            write: Spy::with_recorder(recorder, "write"),
        }
    }
}

impl Default for SpyLogTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTarget for SpyLogTarget {
    fn write(&self, level: Level, message: &str) -> Result<()> {
        self.write.record((level, message.to_string()));
        Ok(())
    }
}
