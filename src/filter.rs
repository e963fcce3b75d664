use crate::event::{Category, Event};

/// Filter events by category, preserving the original relative order.
///
/// An empty `selected` slice means "all categories visible", not "none" —
/// the viewer has simply not narrowed anything down yet. This is an explicit
/// special case, not an accident of iterator behavior. Duplicate tags in
/// `selected` are harmless; membership is what matters.
pub fn by_category<'a>(events: &'a [Event], selected: &[Category]) -> Vec<&'a Event> {
    if selected.is_empty() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|event| selected.contains(&event.category))
        .collect()
}
