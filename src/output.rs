//! Text renderings of conjugations.

use std::io::{self, Write};

use crate::person::Person;
use crate::tables::Tables;
use crate::tense::{Mode, Tense};

/// Write a Markdown table of `verb` with one column per tense and one row per
/// person.
///
/// Each row shows the form of the first pronoun of its person, and
/// `placeholder` where no form exists.
pub fn write_table<O>(
    out: &mut O,
    tables: &Tables,
    verb: &str,
    tenses: &[Tense],
    mode: Mode,
    placeholder: &str,
) -> io::Result<()>
where
    O: ?Sized + Write,
{
    let conjugations = tenses
        .iter()
        .map(|&tense| tables.conjugate(verb, tense, mode))
        .collect::<Vec<_>>();

    write!(out, "|")?;

    for c in &conjugations {
        write!(out, " {} |", c.tense.title())?;
    }

    writeln!(out)?;
    write!(out, "|")?;

    for _ in &conjugations {
        write!(out, " --- |")?;
    }

    writeln!(out)?;

    for person in Person::ALL {
        write!(out, "|")?;

        for c in &conjugations {
            write!(out, " {} |", c.first(person).unwrap_or(placeholder))?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Write every existing form of `verb`, one per line, in classic and then
/// interrogative mode for each tense.
///
/// Returns the number of forms written.
pub fn write_forms<O>(
    out: &mut O,
    tables: &Tables,
    verb: &str,
    tenses: &[Tense],
) -> io::Result<usize>
where
    O: ?Sized + Write,
{
    let mut count = 0;

    for &tense in tenses {
        for mode in Mode::ALL {
            for (_, form) in tables.conjugate(verb, tense, mode).iter() {
                writeln!(out, "{form}")?;
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Write the rule which matched `verb` in each tense.
pub fn write_rules<O>(
    out: &mut O,
    tables: &Tables,
    verb: &str,
    tenses: &[Tense],
) -> io::Result<()>
where
    O: ?Sized + Write,
{
    for &tense in tenses {
        let c = tables.conjugate(verb, tense, Mode::Classic);

        let Some(rule) = c.rule() else {
            writeln!(out, "{}: no rule", tense.title())?;
            continue;
        };

        writeln!(
            out,
            "{}: -{} (stem `{}`)",
            tense.title(),
            rule.suffix,
            rule.stem
        )?;
    }

    Ok(())
}

/// Test if `verb` has no form in any of the given tenses.
///
/// The future registers a zero-length rule which matches any verb, and the
/// conditional is derived from it. So as long as either of them is among
/// `tenses` no verb is unknown.
pub fn is_unknown(tables: &Tables, verb: &str, tenses: &[Tense]) -> bool {
    tenses
        .iter()
        .all(|&tense| tables.conjugate(verb, tense, Mode::Classic).is_empty())
}

#[cfg(test)]
fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn table() {
    let tables = Tables::new();

    let output = render(|out| {
        write_table(
            out,
            &tables,
            "falloir",
            &[Tense::Present, Tense::Future],
            Mode::Classic,
            "-",
        )
    });

    let expected = "\
| Présent | Futur |
| --- | --- |
| - | - |
| - | - |
| il faut | il faudra |
| - | - |
| - | - |
| - | - |
";

    assert_eq!(output, expected);
}

#[test]
fn interrogative_table() {
    let tables = Tables::new();

    let output = render(|out| {
        write_table(
            out,
            &tables,
            "avoir",
            &[Tense::Present],
            Mode::Interrogative,
            "?",
        )
    });

    let expected = "\
| Présent |
| --- |
| ai-je ? |
| as-tu ? |
| a-t-il ? |
| avons-nous ? |
| avez-vous ? |
| ont-ils ? |
";

    assert_eq!(output, expected);
}

#[test]
fn forms() {
    let tables = Tables::new();
    let mut out = Vec::new();

    let count = write_forms(&mut out, &tables, "falloir", &[Tense::Present]).unwrap();
    assert_eq!(count, 6);

    let output = String::from_utf8(out).unwrap();
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(
        lines,
        [
            "il faut",
            "elle faut",
            "on faut",
            "faut-il ?",
            "faut-elle ?",
            "faut-on ?",
        ]
    );

    let mut out = Vec::new();
    let count = write_forms(&mut out, &tables, "xyz", &[Tense::Present]).unwrap();
    assert_eq!(count, 0);
    assert!(out.is_empty());
}

#[test]
fn rules() {
    let tables = Tables::new();

    let output = render(|out| {
        write_rules(out, &tables, "rappeler", &[Tense::Present, Tense::SimplePast])
    });

    assert_eq!(
        output,
        "Présent: -appeler (stem `r`)\nPassé simple: -er (stem `rappel`)\n"
    );
}

#[test]
fn unknown() {
    let tables = Tables::new();
    assert!(is_unknown(&tables, "xyz", &[Tense::Present, Tense::SimplePast]));
    assert!(!is_unknown(&tables, "xyz", &Tense::ALL));
    assert!(!is_unknown(&tables, "xyz", &[Tense::Future]));
    assert!(!is_unknown(&tables, "xyz", &[Tense::Conditional]));
    assert!(is_unknown(
        &tables,
        "xyz",
        &[Tense::Present, Tense::Imperfect, Tense::SimplePast]
    ));
    assert!(!is_unknown(&tables, "manger", &[Tense::Present]));
}
