//! Euphonic rules applied when a pronoun is joined to a verb form.

use std::borrow::Cow;

use crate::person::{Person, Pronoun};

/// Initial letters which elide `je` into `j'`.
const ELIDING: [char; 8] = ['a', 'e', 'é', 'è', 'ê', 'i', 'o', 'u'];

/// Final letters which call for a `-t-` before an inverted third person.
const HIATUS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Assemble the affirmative form, `je mange` or `j'aime`.
pub(crate) fn classic(pronoun: Pronoun, form: &str) -> String {
    if pronoun == Pronoun::Je && form.starts_with(ELIDING) {
        format!("j'{form}")
    } else {
        format!("{pronoun} {form}")
    }
}

/// Assemble the inverted question form, `mangé-je ?` or `a-t-il ?`.
pub(crate) fn interrogative(pronoun: Pronoun, form: &str) -> String {
    match pronoun.person() {
        Person::FirstSingular => {
            let form = acute_final_e(form);
            let form = restore_mute_e(&form);
            format!("{form}-{pronoun} ?")
        }
        person if person.is_third() && form.ends_with(HIATUS) => {
            format!("{form}-t-{pronoun} ?")
        }
        _ => format!("{form}-{pronoun} ?"),
    }
}

/// An inverted `je` turns a final mute `e` into `é`, `mange` → `mangé`.
fn acute_final_e(form: &str) -> Cow<'_, str> {
    match form.strip_suffix('e') {
        Some(head) => Cow::Owned(format!("{head}é")),
        None => Cow::Borrowed(form),
    }
}

/// A grave stem vowel reverts to a mute `e` when followed by one syllable
/// ending in `é`, `pèlé` → `pelé`.
fn restore_mute_e(form: &str) -> Cow<'_, str> {
    let mut chars = form.char_indices().rev();

    let (Some((_, 'é')), Some(_), Some((index, 'è'))) = (chars.next(), chars.next(), chars.next())
    else {
        return Cow::Borrowed(form);
    };

    let tail = &form[index + 'è'.len_utf8()..];
    Cow::Owned(format!("{}e{tail}", &form[..index]))
}

#[test]
fn elision() {
    assert_eq!(classic(Pronoun::Je, "aime"), "j'aime");
    assert_eq!(classic(Pronoun::Je, "écris"), "j'écris");
    assert_eq!(classic(Pronoun::Je, "ai"), "j'ai");
    assert_eq!(classic(Pronoun::Je, "mange"), "je mange");
    assert_eq!(classic(Pronoun::Je, "hais"), "je hais");
    assert_eq!(classic(Pronoun::Il, "aime"), "il aime");
    assert_eq!(classic(Pronoun::Elles, "aiment"), "elles aiment");
}

#[test]
fn inversion() {
    assert_eq!(interrogative(Pronoun::Je, "mange"), "mangé-je ?");
    assert_eq!(interrogative(Pronoun::Je, "pèle"), "pelé-je ?");
    assert_eq!(interrogative(Pronoun::Je, "suis"), "suis-je ?");
    assert_eq!(interrogative(Pronoun::Tu, "manges"), "manges-tu ?");
    assert_eq!(interrogative(Pronoun::Il, "a"), "a-t-il ?");
    assert_eq!(interrogative(Pronoun::On, "mange"), "mange-t-on ?");
    assert_eq!(interrogative(Pronoun::Elle, "dit"), "dit-elle ?");
    assert_eq!(interrogative(Pronoun::Ils, "ont"), "ont-ils ?");
    assert_eq!(interrogative(Pronoun::Ils, "va"), "va-t-ils ?");
    assert_eq!(interrogative(Pronoun::Elles, "ira"), "ira-t-elles ?");
    assert_eq!(interrogative(Pronoun::Elles, "parle"), "parle-t-elles ?");
    assert_eq!(interrogative(Pronoun::Vous, "aima"), "aima-vous ?");
    assert_eq!(interrogative(Pronoun::Nous, "mangeons"), "mangeons-nous ?");
}

#[test]
fn mute_e_restoration() {
    assert_eq!(restore_mute_e("pèlé"), "pelé");
    assert_eq!(restore_mute_e("achèté"), "acheté");
    assert_eq!(restore_mute_e("mangé"), "mangé");
    assert_eq!(restore_mute_e("èé"), "èé");
    assert_eq!(restore_mute_e(""), "");
}
