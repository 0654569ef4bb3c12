//! The rule tables of every supported tense.

mod conditional;
mod future;
mod generate;
mod imperfect;
mod present;
mod simple_past;

#[cfg(test)]
mod tests;

use crate::conjugate::{self, Conjugation};
use crate::table::Table;
use crate::tense::{Mode, Tense};

/// Rule tables for all tenses.
///
/// Tables are built once and never modified afterwards, so a single instance
/// can be shared by reference across any number of threads.
pub struct Tables {
    present: Table,
    imperfect: Table,
    future: Table,
    simple_past: Table,
    conditional: Table,
}

impl Tables {
    /// Build all rule tables.
    pub fn new() -> Self {
        let present = present::table();
        let future = future::table();
        let imperfect = imperfect::table(&present);
        let conditional = conditional::table(&future);
        let simple_past = simple_past::table();

        let tables = Self {
            present,
            imperfect,
            future,
            simple_past,
            conditional,
        };

        for tense in Tense::ALL {
            tracing::debug!(
                tense = tense.ident(),
                rules = tables.get(tense).len(),
                "Built table"
            );
        }

        tables
    }

    /// Get the rule table of a tense.
    pub fn get(&self, tense: Tense) -> &Table {
        match tense {
            Tense::Present => &self.present,
            Tense::Imperfect => &self.imperfect,
            Tense::Future => &self.future,
            Tense::SimplePast => &self.simple_past,
            Tense::Conditional => &self.conditional,
        }
    }

    /// Conjugate `verb` in the given tense and mode.
    #[inline]
    pub fn conjugate<'a>(&'a self, verb: &'a str, tense: Tense, mode: Mode) -> Conjugation<'a> {
        conjugate::resolve(self.get(tense), verb, tense, mode)
    }
}

impl Default for Tables {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
