use super::{Endings, Table};
use crate::person::Person;

fn sample() -> Table {
    table! {
        "er" => ["e", "es", "e", "ons", "ez", "ent"],
        "eler" => ["elle", "elles", "elle", "elons", "elez", "ellent"],
        "appeler" => ["appelle", "appelles", "appelle", "appelons", "appelez", "appellent"],
        "falloir" => [_, _, "faut", _, _, _],
    }
}

#[test]
fn longest_suffix_wins() {
    let table = sample();

    let m = table.lookup("appeler").unwrap();
    assert_eq!(m.suffix, "appeler");
    assert_eq!(m.stem, "");

    let m = table.lookup("rappeler").unwrap();
    assert_eq!(m.suffix, "appeler");
    assert_eq!(m.stem, "r");

    let m = table.lookup("ficeler").unwrap();
    assert_eq!(m.suffix, "eler");
    assert_eq!(m.stem, "fic");

    let m = table.lookup("manger").unwrap();
    assert_eq!(m.suffix, "er");
    assert_eq!(m.stem, "mang");
}

#[test]
fn no_match() {
    let table = sample();
    assert!(table.lookup("finir").is_none());
    assert!(table.lookup("").is_none());
}

#[test]
fn empty_suffix_has_lowest_priority() {
    let mut table = sample();
    table.insert("", endings!["ai", "as", "a", "ons", "ez", "ont"]);

    let m = table.lookup("finir").unwrap();
    assert_eq!(m.suffix, "");
    assert_eq!(m.stem, "finir");

    let m = table.lookup("aimer").unwrap();
    assert_eq!(m.suffix, "er");
}

#[test]
fn multibyte_suffixes() {
    let table = table! {
        "ïr" => ["is", "is", "ït", "ïssons", "ïssez", "ïssent"],
        "ir" => ["is", "is", "it", "issons", "issez", "issent"],
    };

    let m = table.lookup("haïr").unwrap();
    assert_eq!(m.suffix, "ïr");
    assert_eq!(m.stem, "ha");

    let m = table.lookup("é").map(|m| m.suffix);
    assert_eq!(m, None);
}

#[test]
fn absent_slots() {
    let table = sample();
    let endings = table.get("falloir").unwrap();

    assert!(!endings.is_absent());
    assert_eq!(endings.get(Person::ThirdSingular), Some("faut"));
    assert_eq!(endings.get(Person::FirstSingular), None);

    let present = endings.iter().filter(|(_, e)| e.is_some()).count();
    assert_eq!(present, 1);
    assert!(Endings::absent().is_absent());
}

#[test]
fn merge_keeps_latest_on_collision() {
    let mut table = sample();
    table.merge(table! {
        "ir" => ["is", "is", "it", "issons", "issez", "issent"],
        "er" => ["x", "x", "x", "x", "x", "x"],
    });

    assert_eq!(table.len(), 5);
    assert_eq!(table.get("er").unwrap().get(Person::FirstSingular), Some("x"));
}

#[test]
fn overlay_replaces() {
    let mut table = sample();
    table.overlay(table! {
        "falloir" => [_, _, "fallait", _, _, _],
    });

    assert_eq!(table.len(), 4);

    let endings = table.get("falloir").unwrap();
    assert_eq!(endings.get(Person::ThirdSingular), Some("fallait"));
}
