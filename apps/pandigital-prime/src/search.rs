//! Search for the largest pandigital prime by walking digit permutations downward.

use std::fmt;

use log::{debug, trace};
use math::{
    checked_factorial, digits_of, factorial, from_digits, is_pandigital, is_prime,
    prev_permutation,
};

use crate::error::{Result, SearchError};

/// Longest pandigital length expressible with the single digits 1..9.
pub const MAX_DIGITS: usize = 9;

/// A pandigital prime together with the digit count it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PandigitalPrime {
    pub value: u64,
    pub digits: usize,
}

impl fmt::Display for PandigitalPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Largest pandigital prime is: {}", self.value)?;
        write!(f, "n = {}", self.digits)
    }
}

/// Number of candidates a full walk over n digits tests (n!).
///
/// Returns `None` once n! no longer fits in a `u64` (n > 20).
pub fn candidate_count(n: usize) -> Option<u64> {
    checked_factorial(u64::try_from(n).ok()?)
}

/// Find the largest prime that uses each digit 1..n exactly once.
///
/// Returns `Ok(None)` when no permutation of 1..n is prime, including the
/// degenerate n = 0. Digit counts above [`MAX_DIGITS`] are rejected.
///
/// # Example
///
/// ```
/// use pandigital_prime::largest_with_digits;
///
/// assert_eq!(largest_with_digits(4), Ok(Some(4231)));
/// assert_eq!(largest_with_digits(3), Ok(None));
/// ```
pub fn largest_with_digits(n: usize) -> Result<Option<u64>> {
    if n > MAX_DIGITS {
        return Err(SearchError::UnsupportedDigitCount {
            digits: n,
            max: MAX_DIGITS,
        });
    }
    if n == 0 {
        return Ok(None);
    }

    // n, n-1, ..., 1 is the largest arrangement
    let mut digits: Vec<u8> = (1..=n as u8).rev().collect();
    // n <= MAX_DIGITS, so n! fits comfortably
    let total = factorial(n as u64);
    let mut walked = 0u64;

    loop {
        walked += 1;
        debug_assert!(walked <= total, "walked past {} permutations", total);

        let candidate = from_digits(&digits);
        if is_prime(candidate) {
            debug_assert_eq!(digits_of(candidate), digits);
            debug_assert!(is_pandigital(&candidate.to_string()));
            debug!("n={}: found {} after {} of {} candidates", n, candidate, walked, total);
            return Ok(Some(candidate));
        }
        trace!("n={}: {} is composite", n, candidate);

        if !prev_permutation(&mut digits) {
            debug!("n={}: no prime among {} candidates", n, walked);
            return Ok(None);
        }
    }
}

/// Find the largest pandigital prime of any length, trying 9 digits down to 1.
pub fn largest_pandigital_prime() -> Result<Option<PandigitalPrime>> {
    for n in (1..=MAX_DIGITS).rev() {
        debug!("Searching {}-digit pandigitals", n);
        if let Some(value) = largest_with_digits(n)? {
            return Ok(Some(PandigitalPrime { value, digits: n }));
        }
    }
    Ok(None)
}

/// Format the report printed by the command line.
///
/// When nothing is found the report carries the -1 sentinel and n = 0.
pub fn report(found: Option<PandigitalPrime>) -> String {
    match found {
        Some(found) => found.to_string(),
        None => "Largest pandigital prime is: -1\nn = 0".to_string(),
    }
}

/// Run the full search and format its report.
pub fn solve() -> Result<String> {
    largest_pandigital_prime().map(report)
}
