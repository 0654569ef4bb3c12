//! Suffix rule tables, resolved by longest suffix match.

#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::person::Person;

/// The endings of one rule, one slot per [`Person`].
///
/// A slot set to `None` means that no form exists for that person, as is the
/// case for impersonal and defective verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endings {
    slots: [Option<Cow<'static, str>>; 6],
}

impl Endings {
    #[inline]
    pub const fn new(slots: [Option<Cow<'static, str>>; 6]) -> Self {
        Self { slots }
    }

    /// Construct a template by computing the slot of every person.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Person) -> Option<Cow<'static, str>>,
    {
        Self {
            slots: std::array::from_fn(|n| f(Person::ALL[n])),
        }
    }

    /// Construct a template where no person has a form.
    #[inline]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Get the ending for the given person.
    #[inline]
    pub fn get(&self, person: Person) -> Option<&str> {
        self.slots[person.index()].as_deref()
    }

    /// Test if no person has a form.
    pub fn is_absent(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over all slots in person order.
    pub fn iter(&self) -> impl Iterator<Item = (Person, Option<&str>)> + '_ {
        Person::ALL
            .into_iter()
            .zip(self.slots.iter().map(Option::as_deref))
    }
}

/// The rule which matched a verb.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    /// Radical of the verb, which is kept in every form.
    pub stem: &'a str,
    /// The registered suffix which matched.
    pub suffix: &'a str,
    /// Endings replacing the suffix.
    pub endings: &'a Endings,
}

/// A mapping from verb suffix to the endings that replace it.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: BTreeMap<Cow<'static, str>, Endings>,
}

impl Table {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the rule it replaced.
    pub fn insert<S>(&mut self, suffix: S, endings: Endings) -> Option<Endings>
    where
        S: Into<Cow<'static, str>>,
    {
        self.entries.insert(suffix.into(), endings)
    }

    /// Get the rule registered for exactly the given suffix.
    #[inline]
    pub fn get(&self, suffix: &str) -> Option<&Endings> {
        self.entries.get(suffix)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all rules ordered by suffix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Endings)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Find the rule with the longest suffix of `verb`.
    ///
    /// Suffixes are probed from the whole verb down to the empty string, so
    /// the first hit is the longest one. An empty suffix, if registered,
    /// matches any verb with the lowest priority.
    pub fn lookup<'a>(&'a self, verb: &'a str) -> Option<Match<'a>> {
        let starts = verb.char_indices().map(|(n, _)| n).chain([verb.len()]);

        for start in starts {
            let Some((suffix, endings)) = self.entries.get_key_value(&verb[start..]) else {
                continue;
            };

            return Some(Match {
                stem: &verb[..start],
                suffix: suffix.as_ref(),
                endings,
            });
        }

        None
    }

    /// Merge a disjoint group of rules into this table.
    ///
    /// Groups are not expected to share suffixes. If they do the incoming
    /// rule wins and the collision is reported.
    pub(crate) fn merge(&mut self, other: Table) {
        for (suffix, endings) in other.entries {
            if self.entries.contains_key(&suffix) {
                tracing::warn!(%suffix, "Suffix registered by more than one group, keeping the latest");
            }

            self.entries.insert(suffix, endings);
        }
    }

    /// Overlay rules which are meant to replace existing ones.
    pub(crate) fn overlay(&mut self, other: Table) {
        for (suffix, endings) in other.entries {
            if let Some(previous) = self.entries.get(&suffix) {
                tracing::debug!(%suffix, ?previous, replacement = ?endings, "Overriding rule");
            }

            self.entries.insert(suffix, endings);
        }
    }
}
