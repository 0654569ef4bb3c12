//! Imperfect of the indicative, derived from the present.

use crate::table::Table;

use super::generate;

/// Endings added to the stem of the 1st person plural. The conditional uses
/// the same endings on the stem of the future.
pub(super) const ENDINGS: [&str; 6] = ["ais", "ais", "ait", "ions", "iez", "aient"];

/// Characters stripped from the 1st person plural, `-ons`.
pub(super) const PLURAL: usize = 3;

/// Build the imperfect table from the present table.
pub(super) fn table(present: &Table) -> Table {
    let mut table = generate::derive(present, PLURAL, ENDINGS);
    table.overlay(literal());
    table
}

/// Rules where the derived forms are wrong, either because the stem is
/// spelled differently before `i`, or because the present lacks a 1st person
/// plural.
#[rustfmt::skip]
pub(super) fn literal() -> Table {
    table! {
        "cer" => ["çais", "çais", "çait", "cions", "ciez", "çaient"],
        "ecer" => ["eçais", "eçais", "eçait", "ecions", "eciez", "eçaient"],
        "écer" => ["éçais", "éçais", "éçait", "écions", "éciez", "éçaient"],
        "ger" => ["geais", "geais", "geait", "gions", "giez", "geaient"],
        "être" => ["étais", "étais", "était", "étions", "étiez", "étaient"],
        "falloir" => [_, _, "fallait", _, _, _],
        "pleuvoir" => [_, _, "pleuvait", _, _, "pleuvaient"],
        "poindre" => [_, _, "poignait", _, _, "poignaient"],
        "seoir" => [_, _, "seyait", _, _, "seyaient"],
    }
}
