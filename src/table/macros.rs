//! Macros to construct rule tables.

/// A single template slot, where `_` marks a person without a form.
macro_rules! slot {
    (_) => {
        None
    };

    ($ending:literal) => {
        Some(::std::borrow::Cow::Borrowed($ending))
    };
}

/// Construct an [`Endings`] template from six slots.
///
/// [`Endings`]: crate::table::Endings
macro_rules! endings {
    ($($slot:tt),* $(,)?) => {
        $crate::table::Endings::new([$(slot!($slot)),*])
    };
}

/// Setup a rule table from literal rows.
macro_rules! table {
    ($($suffix:literal => [$($slot:tt),* $(,)?]),* $(,)?) => {{
        let mut table = $crate::table::Table::new();
        $(table.insert($suffix, endings!($($slot),*));)*
        table
    }};
}
