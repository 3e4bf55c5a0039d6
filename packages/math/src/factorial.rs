/// Compute factorial of n (n!)
pub fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute n!, or `None` if it does not fit in a `u64` (n > 20).
pub fn checked_factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(7), 5040);
        assert_eq!(factorial(9), 362880);
    }

    #[test]
    fn test_checked_factorial() {
        assert_eq!(checked_factorial(0), Some(1));
        assert_eq!(checked_factorial(9), Some(362880));
        assert_eq!(checked_factorial(20), Some(2432902008176640000));
        assert_eq!(checked_factorial(21), None);
    }
}
