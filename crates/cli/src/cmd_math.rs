// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calc and prime command implementations.

use doubles::calc;
use doubles::cli::{CalcArgs, PrimeArgs};
use doubles::error::ExitCode;
use doubles::prime::is_prime;

/// Press every key, then print the calculator display.
pub fn calc(args: &CalcArgs) -> anyhow::Result<ExitCode> {
    let display = calc::evaluate(&args.keys)?;
    println!("{}", display);
    Ok(ExitCode::Success)
}

pub fn prime(args: &PrimeArgs) -> anyhow::Result<ExitCode> {
    if is_prime(args.n) {
        println!("{} is prime", args.n);
    } else {
        println!("{} is not prime", args.n);
    }
    Ok(ExitCode::Success)
}
