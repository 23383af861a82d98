// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Primality check.

/// True if `value` has exactly two divisors.
pub fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }
    if value < 4 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }
    let mut divisor = 3u64;
    while divisor <= value / divisor {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
#[path = "prime_tests.rs"]
mod tests;
