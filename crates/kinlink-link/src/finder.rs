//! Pairwise relation discovery.

use std::collections::{HashMap, HashSet};

use kinlink_model::{DisplayName, EventLog, PersonKey, RelationMap};

use crate::rules::classify;
use crate::segments::{segments, shares_segment};

/// Builds the symmetric [`RelationMap`] for a list of people.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationFinder;

impl RelationFinder {
    pub fn new() -> Self {
        Self
    }

    pub fn link(&self, people: &[PersonKey], log: &dyn EventLog) -> RelationMap {
        link(people, log)
    }
}

/// Relate every pair of people whose last names share a segment.
///
/// Each unordered pair is compared once, with `i < j`. A match appends `j` to
/// `i`'s list and `i` to `j`'s list, so value lists are in discovery order and
/// the map is symmetric. Keys are inserted the first time a person is visited
/// or matched; people with no relation are pruned at the end.
pub fn link(people: &[PersonKey], log: &dyn EventLog) -> RelationMap {
    warn_on_collisions(people, log);

    let names: Vec<DisplayName> = people.iter().map(PersonKey::display_name).collect();
    let split: Vec<Vec<&str>> = people
        .iter()
        .map(|person| segments(&person.last_name))
        .collect();

    let mut relations = RelationMap::new();
    for (i, name) in names.iter().enumerate() {
        relations.entry_or_default(name);
        for (j, other) in names.iter().enumerate().skip(i + 1) {
            if !shares_segment(&split[i], &split[j]) {
                continue;
            }
            relations.entry_or_default(name).push(other.clone());
            relations.entry_or_default(other).push(name.clone());
            if log.debug_enabled()
                && let Some(kind) = classify(&people[i].last_name, &people[j].last_name)
            {
                log.debug(&format!("{name} and {other} are related ({kind})"));
            }
        }
    }
    log.info(&format!(
        "Compared {} people; {} names visited before pruning",
        people.len(),
        relations.len()
    ));

    let removed = relations.prune_empty();
    log.info(&format!(
        "{} names have related people ({removed} without relations dropped)",
        relations.len()
    ));
    relations
}

/// Warn once for each display name produced by more than one distinct person.
///
/// Their relation lists share a single key in the output.
fn warn_on_collisions(people: &[PersonKey], log: &dyn EventLog) {
    let mut first_seen: HashMap<DisplayName, &PersonKey> = HashMap::new();
    let mut reported: HashSet<DisplayName> = HashSet::new();
    for person in people {
        let name = person.display_name();
        match first_seen.get(&name) {
            Some(previous) if *previous != person => {
                if reported.insert(name.clone()) {
                    log.warn(&format!(
                        "Display name \"{name}\" is shared by different people; their relations are merged"
                    ));
                }
            }
            Some(_) => {}
            None => {
                first_seen.insert(name, person);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinlink_model::{LogLevel, MemoryLog};

    fn people(pairs: &[(&str, &str)]) -> Vec<PersonKey> {
        pairs
            .iter()
            .map(|(first, last)| PersonKey::new(*first, *last))
            .collect()
    }

    fn entries(map: &RelationMap) -> Vec<(String, Vec<String>)> {
        map.iter()
            .map(|(name, related)| {
                (
                    name.to_string(),
                    related.iter().map(ToString::to_string).collect(),
                )
            })
            .collect()
    }

    fn owned(expected: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        expected
            .iter()
            .map(|(name, related)| {
                (
                    (*name).to_string(),
                    related.iter().map(|value| (*value).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn exact_match() {
        let map = link(&people(&[("Ann", "Lee"), ("Bob", "Lee")]), &MemoryLog::new());
        assert_eq!(
            entries(&map),
            owned(&[("Ann Lee", &["Bob Lee"]), ("Bob Lee", &["Ann Lee"])])
        );
    }

    #[test]
    fn hyphen_to_hyphen_overlap() {
        let map = link(
            &people(&[("Ann", "Smith-Jones"), ("Bob", "Jones-Clark")]),
            &MemoryLog::new(),
        );
        assert!(map.is_related("Ann Smith-Jones", "Bob Jones-Clark"));
        assert!(map.is_related("Bob Jones-Clark", "Ann Smith-Jones"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn hyphen_to_plain_containment() {
        let map = link(
            &people(&[("Ann", "Smith-Jones"), ("Bob", "Smith")]),
            &MemoryLog::new(),
        );
        assert_eq!(
            entries(&map),
            owned(&[
                ("Ann Smith-Jones", &["Bob Smith"]),
                ("Bob Smith", &["Ann Smith-Jones"]),
            ])
        );
    }

    #[test]
    fn no_relation_prunes_everything() {
        let map = link(&people(&[("Ann", "Lee"), ("Bob", "Park")]), &MemoryLog::new());
        assert!(map.is_empty());
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(link(&[], &MemoryLog::new()).is_empty());
        assert!(link(&people(&[("Ann", "Lee")]), &MemoryLog::new()).is_empty());
    }

    #[test]
    fn substring_is_not_a_segment_match() {
        let map = link(
            &people(&[("Ann", "Smith"), ("Bob", "Smithson-Lee")]),
            &MemoryLog::new(),
        );
        assert!(map.is_empty());
    }

    #[test]
    fn discovery_order_is_deterministic() {
        let input = people(&[
            ("A", "Lee"),
            ("B", "Park"),
            ("C", "Lee"),
            ("D", "Park-Lee"),
        ]);
        let map = link(&input, &MemoryLog::new());
        assert_eq!(
            entries(&map),
            owned(&[
                ("A Lee", &["C Lee", "D Park-Lee"]),
                ("C Lee", &["A Lee", "D Park-Lee"]),
                ("D Park-Lee", &["A Lee", "B Park", "C Lee"]),
                ("B Park", &["D Park-Lee"]),
            ])
        );
    }

    #[test]
    fn duplicate_people_merge_under_one_key() {
        let log = MemoryLog::new();
        let map = link(&people(&[("Ann", "Lee"), ("Ann", "Lee")]), &log);
        assert_eq!(entries(&map), owned(&[("Ann Lee", &["Ann Lee", "Ann Lee"])]));
        assert!(log.messages(LogLevel::Warn).is_empty());
    }

    #[test]
    fn colliding_display_names_are_reported_once() {
        let log = MemoryLog::new();
        let input = people(&[
            ("Mary Ann", "Lee"),
            ("Mary", "Ann Lee"),
            ("Mary", "Ann Lee"),
        ]);
        link(&input, &log);
        let warnings = log.messages(LogLevel::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("\"Mary Ann Lee\""));
    }

    #[test]
    fn matches_are_logged_with_their_rule() {
        let log = MemoryLog::new();
        link(&people(&[("Ann", "Smith-Jones"), ("Bob", "Smith")]), &log);
        assert!(log.contains(
            LogLevel::Debug,
            "Ann Smith-Jones and Bob Smith are related (segment-of-whole)"
        ));
        assert!(log.contains(LogLevel::Info, "2 names have related people"));
    }

    /// Counts debug messages while reporting debug output as off.
    #[derive(Default)]
    struct QuietLog {
        debug_calls: std::cell::Cell<usize>,
    }

    impl EventLog for QuietLog {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}

        fn debug(&self, _message: &str) {
            self.debug_calls.set(self.debug_calls.get() + 1);
        }
    }

    #[test]
    fn match_messages_are_skipped_when_debug_is_off() {
        let log = QuietLog::default();
        let map = link(
            &people(&[("Ann", "Lee"), ("Bob", "Lee"), ("Cy", "Lee")]),
            &log,
        );
        assert_eq!(map.len(), 3);
        assert_eq!(log.debug_calls.get(), 0);
    }
}
