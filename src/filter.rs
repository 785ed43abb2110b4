//! Filter Implementations
//!
//! Two ways of keeping the values that are even and greater than 500:
//!
//! - [`declarative_filter`] - iterator adapter chain, collected at the end
//! - [`manual_filter`] - explicit `for` loop with conditional `push`
//!
//! Both share [`is_match`] and must return identical sequences for any input.

/// Lower bound (exclusive) a value must exceed to be kept
pub const THRESHOLD: i32 = 500;

/// Predicate shared by both implementations: even and > 500.
#[inline]
pub fn is_match(value: i32) -> bool {
    value % 2 == 0 && value > THRESHOLD
}

/// Iterator pipeline: filter -> collect.
pub fn declarative_filter(values: &[i32]) -> Vec<i32> {
    values.iter().copied().filter(|&v| is_match(v)).collect()
}

/// Manual loop baseline. No capacity hint; the Vec grows as it would for a
/// naive accumulation.
pub fn manual_filter(values: &[i32]) -> Vec<i32> {
    let mut result = Vec::new();
    for &v in values {
        if is_match(v) {
            result.push(v);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_match() {
        assert!(is_match(502));
        assert!(is_match(998));
        assert!(!is_match(500)); // even, not > 500
        assert!(!is_match(501)); // odd
        assert!(!is_match(2));
        assert!(!is_match(999));
    }

    #[test]
    fn test_mixed_scenario() {
        let data = [1, 2, 501, 502, 600, 999];
        assert_eq!(declarative_filter(&data), vec![502, 600]);
        assert_eq!(manual_filter(&data), vec![502, 600]);
    }

    #[test]
    fn test_empty_input() {
        assert!(declarative_filter(&[]).is_empty());
        assert!(manual_filter(&[]).is_empty());
    }

    #[test]
    fn test_single_match() {
        assert_eq!(declarative_filter(&[998]), vec![998]);
        assert_eq!(manual_filter(&[998]), vec![998]);
    }

    /// Source order is preserved, duplicates are kept.
    #[test]
    fn test_order_and_duplicates() {
        let data = [900, 502, 900, 3, 700];
        let expected = vec![900, 502, 900, 700];
        assert_eq!(declarative_filter(&data), expected);
        assert_eq!(manual_filter(&data), expected);
    }

    #[test]
    fn test_negative_values_excluded() {
        let data = [-600, -2, 0, 502];
        assert_eq!(declarative_filter(&data), vec![502]);
        assert_eq!(manual_filter(&data), vec![502]);
    }
}
