//! Previous/next stepping over the ordered node list.
//!
//! The two directions wrap differently: "previous" from the first node goes
//! to the last node, while "next" from the last node goes to the default
//! node rather than the first one. With the default node placed first in
//! the list both coincide; otherwise the asymmetry is visible and kept.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Node reached from `current` by one `step` through `order`.
///
/// An empty order yields `default_id`. A `current` missing from `order`
/// steps to the last node (previous) or the first node (next).
pub fn step_from<S: AsRef<str>>(
    order: &[S],
    current: &str,
    default_id: &str,
    step: Step,
) -> String {
    let (Some(first), Some(last)) = (order.first(), order.last()) else {
        return default_id.to_owned();
    };
    let index = order.iter().position(|id| id.as_ref() == current);
    match (step, index) {
        (Step::Previous, Some(i)) if i > 0 => order[i - 1].as_ref().to_owned(),
        (Step::Previous, _) => last.as_ref().to_owned(),
        (Step::Next, Some(i)) if i + 1 < order.len() => order[i + 1].as_ref().to_owned(),
        (Step::Next, Some(_)) => default_id.to_owned(),
        (Step::Next, None) => first.as_ref().to_owned(),
    }
}

#[inline]
pub fn previous_node<S: AsRef<str>>(order: &[S], current: &str, default_id: &str) -> String {
    step_from(order, current, default_id, Step::Previous)
}

#[inline]
pub fn next_node<S: AsRef<str>>(order: &[S], current: &str, default_id: &str) -> String {
    step_from(order, current, default_id, Step::Next)
}
