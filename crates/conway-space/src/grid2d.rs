//! Shared helpers for the bounded 2D grid.

/// Resolve a single axis value on a bounded axis.
/// Returns `Some(val)` in bounds, `None` past either edge.
#[inline]
pub(crate) fn resolve_axis(val: i32, len: u32) -> Option<i32> {
    if val >= 0 && (val as i64) < len as i64 {
        Some(val)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(0, 5), Some(0));
        assert_eq!(resolve_axis(4, 5), Some(4));
    }

    #[test]
    fn resolve_axis_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5), None);
        assert_eq!(resolve_axis(5, 5), None);
        assert_eq!(resolve_axis(i32::MIN, 5), None);
    }
}
