use core::fmt;

use fixed_map::Key;

/// One of the six grammatical persons, in template slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The slot this person occupies in an ending template.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Person::FirstSingular => 0,
            Person::SecondSingular => 1,
            Person::ThirdSingular => 2,
            Person::FirstPlural => 3,
            Person::SecondPlural => 4,
            Person::ThirdPlural => 5,
        }
    }

    /// Pronouns this person expands to, in output order.
    pub const fn pronouns(self) -> &'static [Pronoun] {
        match self {
            Person::FirstSingular => &[Pronoun::Je],
            Person::SecondSingular => &[Pronoun::Tu],
            Person::ThirdSingular => &[Pronoun::Il, Pronoun::Elle, Pronoun::On],
            Person::FirstPlural => &[Pronoun::Nous],
            Person::SecondPlural => &[Pronoun::Vous],
            Person::ThirdPlural => &[Pronoun::Ils, Pronoun::Elles],
        }
    }

    /// Test if this is a third person, singular or plural.
    #[inline]
    pub const fn is_third(self) -> bool {
        matches!(self, Person::ThirdSingular | Person::ThirdPlural)
    }
}

/// A subject pronoun as it appears in a conjugated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Pronoun {
    Je,
    Tu,
    Il,
    Elle,
    On,
    Nous,
    Vous,
    Ils,
    Elles,
}

impl Pronoun {
    pub const ALL: [Pronoun; 9] = [
        Pronoun::Je,
        Pronoun::Tu,
        Pronoun::Il,
        Pronoun::Elle,
        Pronoun::On,
        Pronoun::Nous,
        Pronoun::Vous,
        Pronoun::Ils,
        Pronoun::Elles,
    ];

    /// The person this pronoun belongs to.
    pub const fn person(self) -> Person {
        match self {
            Pronoun::Je => Person::FirstSingular,
            Pronoun::Tu => Person::SecondSingular,
            Pronoun::Il | Pronoun::Elle | Pronoun::On => Person::ThirdSingular,
            Pronoun::Nous => Person::FirstPlural,
            Pronoun::Vous => Person::SecondPlural,
            Pronoun::Ils | Pronoun::Elles => Person::ThirdPlural,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Pronoun::Je => "je",
            Pronoun::Tu => "tu",
            Pronoun::Il => "il",
            Pronoun::Elle => "elle",
            Pronoun::On => "on",
            Pronoun::Nous => "nous",
            Pronoun::Vous => "vous",
            Pronoun::Ils => "ils",
            Pronoun::Elles => "elles",
        }
    }
}

impl fmt::Display for Pronoun {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text().fmt(f)
    }
}

#[test]
fn pronoun_expansion_covers_every_pronoun_once() {
    let expanded = Person::ALL
        .iter()
        .flat_map(|person| person.pronouns().iter().copied())
        .collect::<Vec<_>>();

    assert_eq!(expanded, Pronoun::ALL);

    for pronoun in Pronoun::ALL {
        assert!(pronoun.person().pronouns().contains(&pronoun));
    }
}
