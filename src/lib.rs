//! coursecat: course catalog advisor
//!
//! Loads a comma-delimited course catalog into an ordered course index (an
//! unbalanced binary search tree keyed by course identifier) and answers
//! ordered listings and exact-identifier lookups.
//!
//! Layers, innermost first:
//! - [`domain`]: `CourseRecord`, `CourseIndex`
//! - [`application`]: catalog loading, the session, text rendering
//! - [`infrastructure`]: filesystem boundary, service wiring
//! - [`cli`]: argument parsing, commands, interactive menu

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
