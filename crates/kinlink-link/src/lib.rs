//! Record linkage by last name.
//!
//! Two people are related when their last names share at least one hyphen
//! segment. That single test covers exact equality, overlap between two
//! hyphenated names, and a plain name appearing inside a hyphenated one.

mod finder;
mod rules;
mod segments;

pub use finder::{RelationFinder, link};
pub use rules::{MatchKind, classify};
pub use segments::{segments, shares_segment};
