//! Resolution of a verb against a rule table.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;
use fixed_map::Map;

use crate::person::{Person, Pronoun};
use crate::phonetics;
use crate::table::{Match, Table};
use crate::tables::Tables;
use crate::tense::{Mode, Tense};

/// Conjugate `verb` in the given tense, optionally in the interrogative form.
///
/// Any string is accepted. If no rule matches, the returned conjugation is
/// empty.
///
/// # Examples
///
/// ```
/// use conjugue::{Pronoun, Tables, Tense};
///
/// let tables = Tables::new();
///
/// let c = conjugue::conjugate(&tables, "avoir", Tense::Present, true);
/// assert_eq!(c.get(Pronoun::Il), Some("a-t-il ?"));
///
/// let c = conjugue::conjugate(&tables, "aimer", Tense::Present, false);
/// assert_eq!(c.get(Pronoun::Je), Some("j'aime"));
/// ```
pub fn conjugate<'a>(
    tables: &'a Tables,
    verb: &'a str,
    tense: Tense,
    interrogative: bool,
) -> Conjugation<'a> {
    tables.conjugate(verb, tense, Mode::from_interrogative(interrogative))
}

pub(crate) fn resolve<'a>(
    table: &'a Table,
    verb: &'a str,
    tense: Tense,
    mode: Mode,
) -> Conjugation<'a> {
    let mut forms = Map::new();

    let Some(rule) = table.lookup(verb) else {
        tracing::trace!(verb, tense = tense.ident(), "No matching rule");

        return Conjugation {
            verb,
            tense,
            mode,
            rule: None,
            forms,
        };
    };

    tracing::trace!(
        verb,
        tense = tense.ident(),
        suffix = rule.suffix,
        stem = rule.stem,
        "Matched rule"
    );

    for (person, ending) in rule.endings.iter() {
        let Some(ending) = ending else {
            continue;
        };

        let form = format!("{}{ending}", rule.stem);

        for &pronoun in person.pronouns() {
            let rendered = match mode {
                Mode::Classic => phonetics::classic(pronoun, &form),
                Mode::Interrogative => phonetics::interrogative(pronoun, &form),
            };

            forms.insert(pronoun, rendered);
        }
    }

    Conjugation {
        verb,
        tense,
        mode,
        rule: Some(rule),
        forms,
    }
}

/// The conjugated forms of a verb in one tense and mode.
///
/// Only forms which exist are stored. A person without a form in the
/// matching rule, or a verb without a matching rule, has no entry.
#[derive(Debug)]
#[non_exhaustive]
pub struct Conjugation<'a> {
    /// The verb as it was given.
    pub verb: &'a str,
    pub tense: Tense,
    pub mode: Mode,
    rule: Option<Match<'a>>,
    forms: Map<Pronoun, String>,
}

impl<'a> Conjugation<'a> {
    /// Test if no form exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// The rule which matched the verb, if any.
    #[inline]
    pub fn rule(&self) -> Option<&Match<'a>> {
        self.rule.as_ref()
    }

    /// The radical kept in every form.
    #[inline]
    pub fn stem(&self) -> Option<&'a str> {
        Some(self.rule?.stem)
    }

    /// The registered suffix which matched the verb.
    #[inline]
    pub fn suffix(&self) -> Option<&'a str> {
        Some(self.rule?.suffix)
    }

    /// Get the form for the given pronoun.
    #[inline]
    pub fn get(&self, pronoun: Pronoun) -> Option<&str> {
        self.forms.get(pronoun).map(String::as_str)
    }

    /// The form of every pronoun in order, `None` where no form exists.
    pub fn flat(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        Pronoun::ALL.into_iter().map(|pronoun| self.get(pronoun))
    }

    /// Iterate over existing forms.
    pub fn iter(&self) -> impl Iterator<Item = (Pronoun, &str)> + '_ {
        self.forms
            .iter()
            .map(|(pronoun, form)| (pronoun, form.as_str()))
    }

    /// The existing forms of a single person.
    pub fn person(&self, person: Person) -> ArrayVec<(Pronoun, &str), 3> {
        person
            .pronouns()
            .iter()
            .filter_map(|&pronoun| Some((pronoun, self.get(pronoun)?)))
            .collect()
    }

    /// The form of the first pronoun of a person, like `il` for the 3rd
    /// singular.
    pub fn first(&self, person: Person) -> Option<&str> {
        let pronoun = person.pronouns().first()?;
        self.get(*pronoun)
    }
}
