//! Shared data model for the kinlink pipeline.
//!
//! Every stage hands its fully materialized output to the next one:
//! [`RawRecord`]s from the source, [`PersonKey`]s from validation, and a
//! [`RelationMap`] from linkage.

pub mod error;
pub mod log;
pub mod person;
pub mod relation;

pub use error::{ModelError, Result};
pub use log::{EventLog, LogEvent, LogLevel, MemoryLog, TracingLog};
pub use person::{DisplayName, PersonKey, RawRecord};
pub use relation::RelationMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_map_serializes_in_insertion_order() {
        let mut map = RelationMap::new();
        let zed = DisplayName::from("Zed Lee");
        let ann = DisplayName::from("Ann Lee");
        map.entry_or_default(&zed).push(ann.clone());
        map.entry_or_default(&ann).push(zed.clone());

        let json = serde_json::to_string(&map).expect("serialize relation map");
        assert_eq!(json, r#"{"Zed Lee":["Ann Lee"],"Ann Lee":["Zed Lee"]}"#);
    }

    #[test]
    fn person_key_serializes_as_struct() {
        let key = PersonKey::new("Ann", "Smith-Jones");
        let json = serde_json::to_string(&key).expect("serialize person key");
        assert_eq!(json, r#"{"first_name":"Ann","last_name":"Smith-Jones"}"#);
    }
}
