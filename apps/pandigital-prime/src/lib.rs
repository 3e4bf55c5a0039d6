pub mod error;
pub mod search;

pub use error::{Result, SearchError};
pub use search::{
    MAX_DIGITS, PandigitalPrime, candidate_count, largest_pandigital_prime, largest_with_digits,
    report, solve,
};
