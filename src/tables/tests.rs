use std::collections::HashMap;

use crate::person::Person;
use crate::table::Table;
use crate::tense::{Mode, Tense};

use super::generate::{self, BOOT, EVERY};
use super::{conditional, future, imperfect, present, simple_past, Tables};

#[track_caller]
fn assert_disjoint(groups: &[(&str, Table)]) {
    let mut seen = HashMap::new();

    for (name, table) in groups {
        for (suffix, _) in table.iter() {
            if let Some(other) = seen.insert(suffix.to_owned(), *name) {
                panic!("suffix `{suffix}` is registered by both {other} and {name}");
            }
        }
    }
}

fn form(tables: &Tables, tense: Tense, suffix: &str, person: Person) -> Option<String> {
    let endings = tables.get(tense).get(suffix)?;
    Some(endings.get(person)?.to_owned())
}

#[test]
fn tables_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tables>();

    let tables = Tables::new();

    std::thread::scope(|s| {
        let a = s.spawn(|| tables.conjugate("manger", Tense::Present, Mode::Classic).is_empty());
        let b = s.spawn(|| tables.conjugate("finir", Tense::Future, Mode::Classic).is_empty());
        assert!(!a.join().unwrap());
        assert!(!b.join().unwrap());
    });
}

#[test]
fn groups_are_disjoint() {
    assert_disjoint(&[
        ("group1", present::group1()),
        (
            "acute",
            generate::acute_alternation(present::ACUTE, present::ALTERNATING, BOOT),
        ),
        (
            "mute e",
            generate::mute_e_alternation(present::MUTE_E, present::ALTERNATING, BOOT),
        ),
        ("group2", present::group2()),
        ("group3", present::group3()),
    ]);

    assert_disjoint(&[
        ("group1", future::group1()),
        (
            "mute e",
            generate::mute_e_alternation(
                present::MUTE_E,
                ["erai", "eras", "era", "erons", "erez", "eront"],
                EVERY,
            ),
        ),
        ("group2", future::group2()),
        ("group3", future::group3()),
    ]);

    assert_disjoint(&[
        ("group1", simple_past::group1()),
        ("group2", simple_past::group2()),
        ("group3", simple_past::group3()),
    ]);
}

#[test]
fn literal_overlays_only_replace_derived_rules() {
    let tables = Tables::new();

    for (suffix, _) in imperfect::literal().iter() {
        assert!(
            tables.get(Tense::Present).get(suffix).is_some(),
            "imperfect overlay `{suffix}` has no present rule"
        );
    }

    for (suffix, _) in conditional::literal().iter() {
        assert!(
            tables.get(Tense::Future).get(suffix).is_some(),
            "conditional overlay `{suffix}` has no future rule"
        );
    }
}

#[test]
fn derived_tenses_keep_absent_slots() {
    let tables = Tables::new();

    for (source, derived) in [
        (Tense::Present, Tense::Imperfect),
        (Tense::Future, Tense::Conditional),
    ] {
        let source = tables.get(source);
        let derived = tables.get(derived);

        assert_eq!(source.len(), derived.len());

        for (suffix, endings) in source.iter() {
            let Some(other) = derived.get(suffix) else {
                panic!("`{suffix}` is missing from the derived table");
            };

            for (person, ending) in endings.iter() {
                if ending.is_none() {
                    assert_eq!(other.get(person), None, "`{suffix}` {person:?}");
                }
            }
        }
    }
}

#[test]
fn derived_rules_without_plural_are_empty() {
    let tables = Tables::new();

    // No 1st person plural in the present, and no literal overlay.
    let frire = tables.get(Tense::Imperfect).get("frire").unwrap();
    assert!(frire.is_absent());

    let clore = tables.get(Tense::Imperfect).get("clore").unwrap();
    assert!(clore.is_absent());

    let gesir = tables.get(Tense::Conditional).get("gésir").unwrap();
    assert!(gesir.is_absent());
}

#[test]
fn spot_checks() {
    let tables = Tables::new();

    let checks = [
        (Tense::Imperfect, "ger", Person::FirstSingular, "geais"),
        (Tense::Imperfect, "ger", Person::FirstPlural, "gions"),
        (Tense::Imperfect, "ir", Person::ThirdPlural, "issaient"),
        (Tense::Imperfect, "dire", Person::SecondPlural, "disiez"),
        (Tense::Imperfect, "être", Person::ThirdSingular, "était"),
        (Tense::Conditional, "avoir", Person::FirstSingular, "aurais"),
        (Tense::Conditional, "er", Person::FirstPlural, "erions"),
        (Tense::Conditional, "falloir", Person::ThirdSingular, "faudrait"),
        (Tense::Future, "peler", Person::FirstSingular, "pèlerai"),
        (Tense::Future, "acheter", Person::FirstPlural, "achèterons"),
        (Tense::Present, "éder", Person::FirstSingular, "ède"),
        (Tense::Present, "éder", Person::FirstPlural, "édons"),
        (Tense::Present, "écer", Person::FirstPlural, "éçons"),
        (Tense::Present, "peler", Person::ThirdPlural, "pèlent"),
        (Tense::Present, "peler", Person::SecondPlural, "pelez"),
        (Tense::SimplePast, "ger", Person::ThirdSingular, "gea"),
    ];

    for (tense, suffix, person, expected) in checks {
        assert_eq!(
            form(&tables, tense, suffix, person).as_deref(),
            Some(expected),
            "{tense:?} `{suffix}` {person:?}"
        );
    }
}

#[test]
fn every_table_has_rules() {
    let tables = Tables::new();

    for tense in Tense::ALL {
        assert!(!tables.get(tense).is_empty(), "{tense:?}");
    }
}

#[test]
fn lookup_finds_the_longest_registered_suffix() {
    let tables = Tables::new();

    let verbs = [
        "manger", "rappeler", "céder", "peler", "finir", "haïr", "prendre", "apprendre",
        "recevoir", "falloir", "dire", "contredire", "être", "paraître", "xyz", "",
    ];

    for tense in Tense::ALL {
        let table = tables.get(tense);

        for verb in verbs {
            let expected = table
                .iter()
                .filter(|(suffix, _)| verb.ends_with(suffix))
                .map(|(suffix, _)| suffix)
                .max_by_key(|suffix| suffix.len());

            let actual = table.lookup(verb).map(|m| m.suffix);
            assert_eq!(actual, expected, "{tense:?} `{verb}`");
        }
    }
}
