/// Hyphen-delimited components of a last name.
///
/// A name without a hyphen yields itself as the only segment. Adjacent or
/// edge hyphens produce empty segments, which match each other like any
/// other segment.
pub fn segments(last_name: &str) -> Vec<&str> {
    last_name.split('-').collect()
}

/// True when the two segment lists have at least one element in common.
pub fn shares_segment(left: &[&str], right: &[&str]) -> bool {
    left.iter().any(|segment| right.contains(segment))
}
