//! Table driven conjugation of French verbs.
//!
//! A verb is conjugated by finding the longest registered suffix of it in the
//! rule table of a tense, and replacing that suffix with the endings of the
//! rule.
//!
//! ```
//! use conjugue::{Mode, Pronoun, Tables, Tense};
//!
//! let tables = Tables::new();
//! let c = tables.conjugate("rappeler", Tense::Present, Mode::Classic);
//!
//! assert_eq!(c.suffix(), Some("appeler"));
//! assert_eq!(c.get(Pronoun::Ils), Some("ils rappellent"));
//! ```

#[macro_use]
mod table;
pub use self::table::{Endings, Match, Table};

mod person;
pub use self::person::{Person, Pronoun};

mod tense;
pub use self::tense::{Mode, Tense, UnknownTense};

mod phonetics;

mod tables;
pub use self::tables::Tables;

mod conjugate;
pub use self::conjugate::{conjugate, Conjugation};

pub mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;

pub mod output;
