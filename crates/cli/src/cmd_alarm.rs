// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm command implementation.

use doubles::cli::AlarmArgs;
use doubles::error::ExitCode;
use doubles::scheduler::{FixedClock, Scheduler, SystemClock, Time};

/// Run the alarm command against the system clock or a pinned time.
pub fn run(args: &AlarmArgs) -> anyhow::Result<ExitCode> {
    let pinned = args.at.as_deref().map(FixedClock::parse).transpose()?;
    let clock: &dyn Time = match &pinned {
        Some(fixed) => fixed,
        None => &SystemClock,
    };

    let alarm = Scheduler::new(clock).alarm();
    tracing::debug!("alarm at {} is {}", clock.current_time(), alarm);
    println!("{}", alarm);

    Ok(ExitCode::Success)
}
