use crate::person::{Person, Pronoun};
use crate::tables::Tables;
use crate::tense::{Mode, Tense};

use super::conjugate;

#[track_caller]
fn assert_forms(
    tables: &Tables,
    verb: &str,
    tense: Tense,
    mode: Mode,
    expected: [Option<&str>; 9],
) {
    let c = tables.conjugate(verb, tense, mode);
    let actual = c.flat().collect::<Vec<_>>();
    assert_eq!(actual, expected, "{verb} {tense:?} {mode:?}");
}

#[test]
fn present_of_regular_verb() {
    let tables = Tables::new();

    assert_forms(
        &tables,
        "manger",
        Tense::Present,
        Mode::Classic,
        [
            Some("je mange"),
            Some("tu manges"),
            Some("il mange"),
            Some("elle mange"),
            Some("on mange"),
            Some("nous mangeons"),
            Some("vous mangez"),
            Some("ils mangent"),
            Some("elles mangent"),
        ],
    );
}

#[test]
fn present_of_etre() {
    let tables = Tables::new();

    assert_forms(
        &tables,
        "être",
        Tense::Present,
        Mode::Classic,
        [
            Some("je suis"),
            Some("tu es"),
            Some("il est"),
            Some("elle est"),
            Some("on est"),
            Some("nous sommes"),
            Some("vous êtes"),
            Some("ils sont"),
            Some("elles sont"),
        ],
    );
}

#[test]
fn impersonal_verb() {
    let tables = Tables::new();

    let c = tables.conjugate("falloir", Tense::Present, Mode::Classic);
    assert!(!c.is_empty());
    assert_eq!(c.suffix(), Some("falloir"));
    assert_eq!(c.get(Pronoun::Il), Some("il faut"));
    assert_eq!(c.get(Pronoun::On), Some("on faut"));
    assert_eq!(c.get(Pronoun::Je), None);
    assert_eq!(c.get(Pronoun::Ils), None);
    assert_eq!(c.iter().count(), 3);
    assert_eq!(c.flat().filter(Option::is_none).count(), 6);
    assert_eq!(c.first(Person::ThirdSingular), Some("il faut"));
    assert_eq!(c.first(Person::FirstPlural), None);
}

#[test]
fn elision() {
    let tables = Tables::new();

    let c = tables.conjugate("aimer", Tense::Present, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("j'aime"));
    assert_eq!(c.get(Pronoun::Tu), Some("tu aimes"));

    let c = tables.conjugate("avoir", Tense::Present, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("j'ai"));

    let c = tables.conjugate("écrire", Tense::Present, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("j'écris"));
}

#[test]
fn interrogative() {
    let tables = Tables::new();

    let c = conjugate(&tables, "manger", Tense::Present, true);
    assert_eq!(c.mode, Mode::Interrogative);
    assert_eq!(c.get(Pronoun::Je), Some("mangé-je ?"));
    assert_eq!(c.get(Pronoun::Il), Some("mange-t-il ?"));
    assert_eq!(c.get(Pronoun::Nous), Some("mangeons-nous ?"));
    assert_eq!(c.get(Pronoun::Elles), Some("mangent-elles ?"));

    let c = conjugate(&tables, "peler", Tense::Present, true);
    assert_eq!(c.get(Pronoun::Je), Some("pelé-je ?"));

    let c = conjugate(&tables, "avoir", Tense::Present, true);
    assert_eq!(c.get(Pronoun::Je), Some("ai-je ?"));
    assert_eq!(c.get(Pronoun::Il), Some("a-t-il ?"));
    assert_eq!(c.get(Pronoun::Elle), Some("a-t-elle ?"));
    assert_eq!(c.get(Pronoun::On), Some("a-t-on ?"));
    assert_eq!(c.get(Pronoun::Ils), Some("ont-ils ?"));

    let c = conjugate(&tables, "dire", Tense::Present, true);
    assert_eq!(c.get(Pronoun::Il), Some("dit-il ?"));
    assert_eq!(c.get(Pronoun::Vous), Some("dites-vous ?"));

    let c = conjugate(&tables, "aimer", Tense::Future, true);
    assert_eq!(c.get(Pronoun::Il), Some("aimera-t-il ?"));
}

#[test]
fn longest_suffix_selects_rule() {
    let tables = Tables::new();

    let c = tables.conjugate("appeler", Tense::Present, Mode::Classic);
    assert_eq!(c.suffix(), Some("appeler"));
    assert_eq!(c.stem(), Some(""));
    assert_eq!(c.get(Pronoun::Je), Some("j'appelle"));
    assert_eq!(c.get(Pronoun::Nous), Some("nous appelons"));

    let c = tables.conjugate("rappeler", Tense::Present, Mode::Classic);
    assert_eq!(c.suffix(), Some("appeler"));
    assert_eq!(c.stem(), Some("r"));
    assert_eq!(c.get(Pronoun::Ils), Some("ils rappellent"));

    let c = tables.conjugate("céder", Tense::Present, Mode::Classic);
    assert_eq!(c.suffix(), Some("éder"));
    assert_eq!(c.get(Pronoun::Je), Some("je cède"));
    assert_eq!(c.get(Pronoun::Nous), Some("nous cédons"));
}

#[test]
fn unknown_verb() {
    let tables = Tables::new();

    let c = tables.conjugate("xyz", Tense::Present, Mode::Classic);
    assert!(c.is_empty());
    assert!(c.rule().is_none());
    assert_eq!(c.stem(), None);
    assert!(c.flat().all(|form| form.is_none()));
    assert!(c.person(Person::ThirdSingular).is_empty());

    let c = tables.conjugate("", Tense::Present, Mode::Interrogative);
    assert!(c.is_empty());
}

#[test]
fn other_tenses() {
    let tables = Tables::new();

    let c = tables.conjugate("finir", Tense::Future, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("je finirai"));

    let c = tables.conjugate("prendre", Tense::Future, Mode::Classic);
    assert_eq!(c.get(Pronoun::Nous), Some("nous prendrons"));

    let c = tables.conjugate("aimer", Tense::Conditional, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("j'aimerais"));

    let c = tables.conjugate("être", Tense::Conditional, Mode::Classic);
    assert_eq!(c.get(Pronoun::Ils), Some("ils seraient"));

    let c = tables.conjugate("manger", Tense::Imperfect, Mode::Classic);
    assert_eq!(c.get(Pronoun::Je), Some("je mangeais"));
    assert_eq!(c.get(Pronoun::Nous), Some("nous mangions"));

    let c = tables.conjugate("finir", Tense::Imperfect, Mode::Classic);
    assert_eq!(c.get(Pronoun::Vous), Some("vous finissiez"));

    let c = tables.conjugate("parler", Tense::SimplePast, Mode::Classic);
    assert_eq!(c.get(Pronoun::Il), Some("il parla"));
    assert_eq!(c.get(Pronoun::Elles), Some("elles parlèrent"));

    let c = tables.conjugate("venir", Tense::SimplePast, Mode::Classic);
    assert_eq!(c.get(Pronoun::Nous), Some("nous vînmes"));
}

#[test]
fn person_views() {
    let tables = Tables::new();
    let c = tables.conjugate("manger", Tense::Present, Mode::Classic);

    assert_eq!(c.flat().count(), 9);

    let third = c.person(Person::ThirdSingular);
    assert_eq!(
        third.as_slice(),
        [
            (Pronoun::Il, "il mange"),
            (Pronoun::Elle, "elle mange"),
            (Pronoun::On, "on mange"),
        ]
    );

    assert_eq!(c.first(Person::ThirdPlural), Some("ils mangent"));
    assert_eq!(c.first(Person::FirstSingular), Some("je mange"));
}

#[test]
fn conjugation_is_deterministic() {
    let tables = Tables::new();

    for tense in Tense::ALL {
        for mode in Mode::ALL {
            let a = tables.conjugate("apercevoir", tense, mode);
            let b = tables.conjugate("apercevoir", tense, mode);
            assert_eq!(a.flat().collect::<Vec<_>>(), b.flat().collect::<Vec<_>>());
        }
    }

    let other = Tables::new();
    let a = other.conjugate("jeter", Tense::Present, Mode::Classic);
    let b = tables.conjugate("jeter", Tense::Present, Mode::Classic);
    assert_eq!(a.flat().collect::<Vec<_>>(), b.flat().collect::<Vec<_>>());
}
