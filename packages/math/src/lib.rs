pub mod digits;
pub mod factorial;
pub mod permutation;
pub mod prime;

pub use digits::{digits_of, from_digits, is_pandigital};
pub use factorial::{checked_factorial, factorial};
pub use permutation::prev_permutation;
pub use prime::is_prime;
