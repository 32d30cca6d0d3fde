//! List selection logic
//!
//! Pure functions for moving and clamping list selections.

/// Next selection index, wrapping to the first item after the last
///
/// # Examples
/// ```
/// use camptui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous selection index, wrapping to the last item before the first
///
/// # Examples
/// ```
/// use camptui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a selection valid after the list changed length
///
/// An empty list clears the selection; a non-empty list with no selection
/// selects the first item.
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(current.map_or(0, |i| i.min(list_len - 1)))
}
