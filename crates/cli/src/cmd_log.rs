// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log command implementation.

use doubles::cli::LogArgs;
use doubles::config::{Config, TargetSpec};
use doubles::error::ExitCode;
use doubles::logger::{FileTarget, LogTarget, Logger, StreamTarget};

/// Open the real target a `TargetSpec` names.
fn open(spec: &TargetSpec) -> Box<dyn LogTarget> {
    match spec {
        TargetSpec::Stderr => Box::new(StreamTarget::new("stderr", std::io::stderr())),
        TargetSpec::Stdout => Box::new(StreamTarget::new("stdout", std::io::stdout())),
        TargetSpec::File(path) => Box::new(FileTarget::new(path)),
    }
}

/// Run the log command, fanning the message out to every target.
pub fn run(config: &Config, args: &LogArgs) -> anyhow::Result<ExitCode> {
    // Explicit --target flags replace the configured list.
    let specs = if args.targets.is_empty() {
        config.log.target_specs()?
    } else {
        args.targets
            .iter()
            .map(|s| s.parse())
            .collect::<doubles::Result<Vec<TargetSpec>>>()?
    };

    let targets: Vec<Box<dyn LogTarget>> = specs.iter().map(open).collect();
    let mut logger = Logger::new();
    for target in &targets {
        logger.add_target(target.as_ref());
    }
    tracing::debug!("writing to {} target(s)", logger.target_count());

    logger.write(args.level, &args.message)?;
    Ok(ExitCode::Success)
}
