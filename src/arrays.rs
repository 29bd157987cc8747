// 🧮 Arrays and Slices - Summation
// Sum one slice, many slices, or the tails of many slices

/// Sum every number in the slice. An empty slice sums to 0.
///
/// Overflow wraps around, so the total never depends on element order.
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0i64, |acc, n| acc.wrapping_add(*n))
}

/// Sum each sequence independently, preserving input order.
pub fn sum_all<I, S>(numbers_to_sum: I) -> Vec<i64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[i64]>,
{
    numbers_to_sum
        .into_iter()
        .map(|numbers| sum(numbers.as_ref()))
        .collect()
}

/// Sum each sequence except its first element.
///
/// Tail of an empty sequence is treated as empty, so it contributes 0.
pub fn sum_all_tails<I, S>(numbers_to_sum: I) -> Vec<i64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[i64]>,
{
    numbers_to_sum
        .into_iter()
        .map(|numbers| match numbers.as_ref() {
            [] => 0,
            [_, tail @ ..] => sum(tail),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
