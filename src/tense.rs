use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a tense keyword is not recognized.
#[derive(Debug, Error)]
#[error("Unknown tense `{0}`, expected one of: present, imperfect, future, simple-past, conditional")]
pub struct UnknownTense(Box<str>);

/// A tense of the indicative mood which can be conjugated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    SimplePast,
    Conditional,
}

impl Tense {
    /// All tenses in the order they are tabulated.
    pub const ALL: [Tense; 5] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Future,
        Tense::SimplePast,
        Tense::Conditional,
    ];

    /// Keyword used to select the tense.
    pub fn ident(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
            Tense::SimplePast => "simple-past",
            Tense::Conditional => "conditional",
        }
    }

    /// French name of the tense, used as a column title.
    pub fn title(&self) -> &'static str {
        match self {
            Tense::Present => "Présent",
            Tense::Imperfect => "Imparfait",
            Tense::Future => "Futur",
            Tense::SimplePast => "Passé simple",
            Tense::Conditional => "Conditionnel",
        }
    }

    /// Parse a keyword or a French title, ignoring case.
    pub fn parse_keyword(input: &str) -> Option<Tense> {
        let input = input.trim().to_lowercase();

        Tense::ALL
            .into_iter()
            .find(|tense| input == tense.ident() || input == tense.title().to_lowercase())
    }
}

impl FromStr for Tense {
    type Err = UnknownTense;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tense::parse_keyword(s).ok_or_else(|| UnknownTense(s.into()))
    }
}

impl fmt::Display for Tense {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.title().fmt(f)
    }
}

/// How conjugated forms are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Affirmative form, `je mange`.
    Classic,
    /// Inverted question form, `mangé-je ?`.
    Interrogative,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Classic, Mode::Interrogative];

    #[inline]
    pub const fn from_interrogative(interrogative: bool) -> Self {
        if interrogative {
            Mode::Interrogative
        } else {
            Mode::Classic
        }
    }
}

#[test]
fn parse_keywords() {
    assert_eq!(Tense::parse_keyword("present"), Some(Tense::Present));
    assert_eq!(Tense::parse_keyword("Simple-Past"), Some(Tense::SimplePast));
    assert_eq!(Tense::parse_keyword("Passé simple"), Some(Tense::SimplePast));
    assert_eq!(Tense::parse_keyword("IMPARFAIT"), Some(Tense::Imperfect));
    assert_eq!(Tense::parse_keyword(" futur "), Some(Tense::Future));
    assert_eq!(Tense::parse_keyword("subjonctif"), None);

    let error = "pluperfect".parse::<Tense>().unwrap_err();
    assert!(error.to_string().contains("`pluperfect`"));
}
