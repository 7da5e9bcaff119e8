//! Rule-based segmentation — ordered predicate rules evaluated
//! first-match-wins, plus the built-in venue rule tables.

pub mod builder;
pub mod engine;
pub mod predicates;
pub mod rules;

pub use builder::RuleBuilder;
pub use engine::{Classified, RuleSet, SegmentRule};
pub use rules::{restaurant_rules, rules_for, supermarket_rules};
