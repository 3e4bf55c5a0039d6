//! Trial-division primality testing.

/// Check if a number is prime.
///
/// After ruling out multiples of 2 and 3, every remaining candidate divisor
/// has the form 6k ± 1, so only those are tried up to √n.
///
/// # Example
///
/// ```
/// use math::prime::is_prime;
///
/// assert!(is_prime(7652413));
/// assert!(!is_prime(25));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n.is_multiple_of(2) || n.is_multiple_of(3) {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n.is_multiple_of(i) || n.is_multiple_of(i + 2) {
            return false;
        }
        i += 6;
    }
    true
}
