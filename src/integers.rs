// ➕ Integers - the smallest exercise
// One pure function, documented with a runnable example

/// Add two integers together. Overflow wraps around.
///
/// ```
/// use tdd_katas::add;
///
/// let sum = add(1, 5);
/// assert_eq!(sum, 6);
/// ```
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

// ============================================================================
// TESTS
// ============================================================================
