//! Helper functions that ship alongside the capkit entities.
//!
//! Numeric helpers return [`UtilsResult`] for inputs they cannot handle
//! (negative or overflowing factorials, empty slices); the text helpers
//! are total.

mod error;
mod numbers;
mod point;
mod text;

pub use error::{UtilsError, UtilsResult};
pub use numbers::{factorial, find_max, map_numbers, sort_numbers};
pub use point::Point;
pub use text::{char_frequency, greeting, is_blank, print_greeting_to};
