//! Offset/limit pagination over in-memory sequences.
//!
//! `None` always means "leave the sequence unchanged"; bounds past the end of
//! the sequence yield an empty result, never an error.

/// Drops the first `n` elements if `n` is present, otherwise returns the
/// sequence unchanged.
pub fn drop_if_some<T>(items: Vec<T>, n: Option<usize>) -> Vec<T> {
    match n {
        Some(n) => items.into_iter().skip(n).collect(),
        None => items,
    }
}

/// Takes the first `n` elements if `n` is present, otherwise returns the
/// sequence unchanged.
pub fn take_if_some<T>(items: Vec<T>, n: Option<usize>) -> Vec<T> {
    match n {
        Some(n) => items.into_iter().take(n).collect(),
        None => items,
    }
}

/// Applies `offset` then `limit` to an ordered sequence.
///
/// Drop comes first: `paginate(v, Some(2), Some(3))` skips two elements and
/// returns at most the next three.
pub fn paginate<T>(items: Vec<T>, offset: Option<usize>, limit: Option<usize>) -> Vec<T> {
    take_if_some(drop_if_some(items, offset), limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq() -> Vec<u32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn absent_bounds_leave_sequence_unchanged() {
        assert_eq!(paginate(seq(), None, None), seq());
    }

    #[test]
    fn offset_alone_drops_prefix() {
        assert_eq!(paginate(seq(), Some(2), None), vec![3, 4, 5]);
    }

    #[test]
    fn limit_alone_takes_prefix() {
        assert_eq!(paginate(seq(), None, Some(2)), vec![1, 2]);
    }

    #[test]
    fn offset_applies_before_limit() {
        assert_eq!(paginate(seq(), Some(1), Some(2)), vec![2, 3]);
    }

    #[test]
    fn out_of_range_offset_yields_empty_page() {
        assert_eq!(paginate(seq(), Some(10), Some(2)), Vec::<u32>::new());
    }

    #[test]
    fn oversized_limit_is_clamped_to_remainder() {
        assert_eq!(paginate(seq(), Some(4), Some(10)), vec![5]);
    }

    #[test]
    fn zero_limit_yields_empty_page() {
        assert_eq!(paginate(seq(), None, Some(0)), Vec::<u32>::new());
    }
}
