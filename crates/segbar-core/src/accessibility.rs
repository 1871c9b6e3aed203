//! Default accessibility descriptions for segments

use crate::segment::{AccessibilityProps, AccessibilityRole, AccessibilityState, Segment};

/// Hint announced for segments that are not selected
pub const DEFAULT_HINT: &str = "Changes the active option";

/// Default spoken label: `"{label}, option, {n} of {count}"`
pub fn default_label(label: &str, index: usize, count: usize) -> String {
    format!("{}, option, {} of {}", label, index + 1, count)
}

/// Resolve the accessibility description of one segment
///
/// Caller-supplied properties replace the defaults as a whole.
pub fn describe_segment(
    segment: &Segment,
    index: usize,
    count: usize,
    current_index: usize,
) -> AccessibilityProps {
    if let Some(props) = &segment.accessibility {
        return props.clone();
    }

    let selected = index == current_index;
    AccessibilityProps {
        label: Some(default_label(&segment.label, index, count)),
        hint: (!selected).then(|| DEFAULT_HINT.to_string()),
        role: Some(AccessibilityRole::Button),
        state: Some(AccessibilityState {
            selected,
            disabled: false,
        }),
        value: None,
    }
}

/// Resolve descriptions for every segment in order
pub fn describe_all(segments: &[Segment], current_index: usize) -> Vec<AccessibilityProps> {
    let count = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| describe_segment(segment, index, count, current_index))
        .collect()
}
