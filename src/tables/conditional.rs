//! Present conditional, derived from the future.

use crate::table::Table;

use super::generate;
use super::imperfect::{ENDINGS, PLURAL};

/// Build the conditional table from the future table.
pub(super) fn table(future: &Table) -> Table {
    let mut table = generate::derive(future, PLURAL, ENDINGS);
    table.overlay(literal());
    table
}

/// Impersonal verbs, which have no 1st person plural to derive from.
#[rustfmt::skip]
pub(super) fn literal() -> Table {
    table! {
        "falloir" => [_, _, "faudrait", _, _, _],
        "pleuvoir" => [_, _, "pleuvrait", _, _, "pleuvraient"],
        "poindre" => [_, _, "poindrait", _, _, "poindraient"],
        "seoir" => [_, _, "siérait", _, _, "siéraient"],
    }
}
