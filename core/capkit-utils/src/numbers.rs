use crate::{UtilsError, UtilsResult};

/// Computes `n!`.
///
/// Returns 1 for 0 and 1, [`UtilsError::NegativeInput`] below zero, and
/// [`UtilsError::Overflow`] once the product no longer fits in a `u64`
/// (anything above 20).
pub fn factorial(n: i64) -> UtilsResult<u64> {
    let upper = u32::try_from(n).map_err(|_| {
        if n < 0 {
            UtilsError::NegativeInput(n)
        } else {
            UtilsError::Overflow(n)
        }
    })?;
    (2..=u64::from(upper)).try_fold(1u64, |acc, i| {
        acc.checked_mul(i).ok_or(UtilsError::Overflow(n))
    })
}

/// Returns an ascending copy of `numbers`; the input is left untouched.
#[must_use]
pub fn sort_numbers(numbers: &[i32]) -> Vec<i32> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Returns the largest element.
pub fn find_max(values: &[i32]) -> UtilsResult<i32> {
    values.iter().copied().max().ok_or(UtilsError::EmptyInput)
}

/// Applies `f` to every element.
pub fn map_numbers<F>(numbers: Vec<i32>, f: F) -> Vec<i32>
where
    F: Fn(i32) -> i32,
{
    numbers.into_iter().map(f).collect()
}
