// 🔁 Iteration - String repetition
// `repeat` uses the standard library; `repeat_manual` is the loop it replaced

/// Repeat `character` exactly `times` times.
pub fn repeat(character: &str, times: usize) -> String {
    character.repeat(times)
}

/// Hand-rolled loop version of [`repeat`].
pub fn repeat_manual(character: &str, times: usize) -> String {
    let mut repeated = String::with_capacity(capacity_hint(character, times));

    for _ in 0..times {
        repeated.push_str(character);
    }

    repeated
}

// Saturating; an impossible size is reported by the allocator
fn capacity_hint(character: &str, times: usize) -> usize {
    character.len().saturating_mul(times)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat() {
        let repeated = repeat("a", 5);
        let expected = "aaaaa";

        assert_eq!(repeated, expected);
    }

    #[test]
    fn test_repeat_zero_times() {
        assert_eq!(repeat("a", 0), "");
        assert_eq!(repeat_manual("a", 0), "");
    }

    #[test]
    fn test_repeat_multi_char() {
        assert_eq!(repeat("ab", 3), "ababab");
    }

    #[test]
    fn test_capacity_hint_saturates() {
        assert_eq!(capacity_hint("ab", usize::MAX), usize::MAX);
        assert_eq!(capacity_hint("é", 3), 6);
        assert_eq!(capacity_hint("", usize::MAX), 0);
    }

    #[test]
    fn test_manual_matches_std() {
        for (character, times) in [("a", 1), ("xy", 4), ("", 7), ("é", 3)] {
            assert_eq!(
                repeat_manual(character, times),
                repeat(character, times),
                "mismatch for {:?} x {}",
                character,
                times
            );
        }
    }
}
