/// Convert a sequence of base-10 digits, most-significant first, into its value.
///
/// No overflow check: callers keep the sequence short enough for `u64`.
///
/// # Example
///
/// ```
/// use math::digits::from_digits;
///
/// assert_eq!(from_digits(&[1, 2, 3, 4]), 1234);
/// assert_eq!(from_digits(&[]), 0);
/// ```
pub fn from_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}

/// Split n into its base-10 digits, most-significant first.
///
/// Example: digits_of(4231) = [4, 2, 3, 1], digits_of(0) = [0]
pub fn digits_of(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

/// Is the given string of digits pandigital, i.e. a rearrangement of "12...len"?
///
/// # Example
///
/// ```
/// use math::digits::is_pandigital;
///
/// assert!(is_pandigital("213"));
/// assert!(!is_pandigital("214"));
/// ```
pub fn is_pandigital(s: &str) -> bool {
    let mut bytes = s.as_bytes().to_vec();
    bytes.sort_unstable();
    bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| usize::from(b) == usize::from(b'0') + i + 1)
}
