//! Which of the three last-name rules a related pair satisfies.

use crate::segments::{segments, shares_segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Identical last names.
    Exact,
    /// Two hyphenated names with a segment in common.
    SharedSegment,
    /// A plain name equal to one segment of a hyphenated name.
    SegmentOfWhole,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::SharedSegment => "shared-segment",
            MatchKind::SegmentOfWhole => "segment-of-whole",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a pair of last names, checking the rules in precedence order.
///
/// Returns `Some` exactly when [`shares_segment`] holds for the pair.
pub fn classify(last_name: &str, other: &str) -> Option<MatchKind> {
    if last_name == other {
        return Some(MatchKind::Exact);
    }
    match (last_name.contains('-'), other.contains('-')) {
        (true, true) => shares_segment(&segments(last_name), &segments(other))
            .then_some(MatchKind::SharedSegment),
        (false, true) => other
            .split('-')
            .any(|segment| segment == last_name)
            .then_some(MatchKind::SegmentOfWhole),
        (true, false) => last_name
            .split('-')
            .any(|segment| segment == other)
            .then_some(MatchKind::SegmentOfWhole),
        (false, false) => None,
    }
}
