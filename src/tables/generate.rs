//! Generators for rule groups which follow a mechanical pattern.

use std::borrow::Cow;

use crate::person::Person;
use crate::table::{Endings, Table};

/// Marks the slots which take a grave accent in an alternating stem.
pub(super) type Grave = [bool; 6];

/// Stem alternation in the singular and the 3rd plural, `je cède`, `nous
/// cédons`.
pub(super) const BOOT: Grave = [true, true, true, false, false, true];

/// Stem alternation in every person, as in the future `je pèlerai`.
pub(super) const EVERY: Grave = [true; 6];

/// Generate rules for suffixes where an acute stem vowel alternates with a
/// grave one, like `éder` in `céder`.
///
/// The suffix is the whole alternating part, so each rule is keyed by
/// `é<consonants>er`.
pub(super) fn acute_alternation(
    suffixes: &[&'static str],
    endings: [&'static str; 6],
    grave: Grave,
) -> Table {
    let mut table = Table::new();

    for &suffix in suffixes {
        let Some(cluster) = suffix
            .strip_prefix('é')
            .and_then(|rest| rest.strip_suffix("er"))
        else {
            tracing::warn!(suffix, "Not an acute alternating suffix");
            continue;
        };

        table.insert(suffix, alternate("", 'é', cluster, endings, grave));
    }

    table
}

/// Generate rules for verbs where a mute `e` in the stem becomes `è` instead
/// of doubling the following consonant, like `peler` in `je pèle`.
///
/// Each rule is keyed by the full verb.
pub(super) fn mute_e_alternation(
    verbs: &[&'static str],
    endings: [&'static str; 6],
    grave: Grave,
) -> Table {
    let mut table = Table::new();

    for &verb in verbs {
        let Some((radical, consonant)) = split_mute_e(verb) else {
            tracing::warn!(verb, "Not a mute e alternating verb");
            continue;
        };

        let mut buf = [0; 4];
        let cluster = consonant.encode_utf8(&mut buf);
        table.insert(verb, alternate(radical, 'e', cluster, endings, grave));
    }

    table
}

/// Derive the rules of a tense from the 1st person plural of another.
///
/// The last `strip` characters of the 1st person plural are removed to form
/// a stem, which is then suffixed with `suffixes`. A slot which is absent in
/// the source is absent in the derived rule, and if the 1st person plural
/// itself is absent no form is derived at all.
pub(super) fn derive(source: &Table, strip: usize, suffixes: [&'static str; 6]) -> Table {
    let mut table = Table::new();

    for (suffix, endings) in source.iter() {
        let derived = match endings.get(Person::FirstPlural) {
            Some(plural) => {
                let stem = strip_chars(plural, strip);

                Endings::from_fn(|person| {
                    endings.get(person)?;
                    Some(Cow::Owned(format!("{stem}{}", suffixes[person.index()])))
                })
            }
            None => Endings::absent(),
        };

        table.insert(suffix.to_owned(), derived);
    }

    table
}

fn alternate(
    radical: &str,
    plain: char,
    cluster: &str,
    endings: [&'static str; 6],
    grave: Grave,
) -> Endings {
    Endings::from_fn(|person| {
        let n = person.index();
        let vowel = if grave[n] { 'è' } else { plain };
        let ending = endings[n];
        let cluster = soften(cluster, ending);
        Some(Cow::Owned(format!("{radical}{vowel}{cluster}{ending}")))
    })
}

/// A `c` is written `ç` before `a` and `o` to keep it soft.
fn soften<'a>(cluster: &'a str, ending: &str) -> Cow<'a, str> {
    match cluster.strip_suffix('c') {
        Some(head) if ending.starts_with(['a', 'o']) => Cow::Owned(format!("{head}ç")),
        _ => Cow::Borrowed(cluster),
    }
}

/// Split `peler` into the radical `p` and the consonant `l`.
fn split_mute_e(verb: &str) -> Option<(&str, char)> {
    let head = verb.strip_suffix("er")?;
    let mut chars = head.chars();
    let consonant = chars.next_back()?;
    let radical = chars.as_str().strip_suffix('e')?;
    Some((radical, consonant))
}

/// Strip `n` trailing characters.
fn strip_chars(string: &str, n: usize) -> &str {
    let Some(n) = n.checked_sub(1) else {
        return string;
    };

    string
        .char_indices()
        .rev()
        .nth(n)
        .map_or("", |(index, _)| &string[..index])
}

#[test]
fn strip_characters() {
    assert_eq!(strip_chars("issons", 3), "iss");
    assert_eq!(strip_chars("ïssons", 3), "ïss");
    assert_eq!(strip_chars("çons", 3), "ç");
    assert_eq!(strip_chars("ons", 3), "");
    assert_eq!(strip_chars("on", 3), "");
    assert_eq!(strip_chars("ons", 0), "ons");
}

#[test]
fn mute_e_split() {
    assert_eq!(split_mute_e("peler"), Some(("p", 'l')));
    assert_eq!(split_mute_e("démanteler"), Some(("démant", 'l')));
    assert_eq!(split_mute_e("acheter"), Some(("ach", 't')));
    assert_eq!(split_mute_e("finir"), None);
}

#[test]
fn cedilla() {
    assert_eq!(soften("c", "ons"), "ç");
    assert_eq!(soften("c", "ez"), "c");
    assert_eq!(soften("br", "ons"), "br");
}
