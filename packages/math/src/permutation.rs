//! In-place permutation stepping in descending lexicographic order.

/// Rearranges `items` into the next lexicographically smaller permutation.
///
/// Returns `false` and leaves `items` untouched when it is already the
/// smallest permutation (sorted ascending). Starting from a slice sorted
/// descending, repeated calls visit every permutation exactly once, from
/// largest to smallest.
///
/// # Example
///
/// ```
/// use math::permutation::prev_permutation;
///
/// let mut digits = [3, 1, 2];
/// assert!(prev_permutation(&mut digits));
/// assert_eq!(digits, [2, 3, 1]);
///
/// let mut smallest = [1, 2, 3];
/// assert!(!prev_permutation(&mut smallest));
/// assert_eq!(smallest, [1, 2, 3]);
/// ```
pub fn prev_permutation<T: Ord>(items: &mut [T]) -> bool {
    // Largest k with items[k] > items[k + 1]
    let Some(k) = items.windows(2).rposition(|w| w[0] > w[1]) else {
        return false;
    };

    // Largest l > k with items[l] < items[k]; items[k + 1] qualifies, so the tail search can't miss
    let l = k + 1
        + items[k + 1..]
            .iter()
            .rposition(|x| *x < items[k])
            .unwrap_or(0);

    items.swap(k, l);
    items[k + 1..].reverse();
    true
}
