//! The closed category set shared by transactions and budget goals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag applied to transactions and budget goals.
///
/// Both record types use this one enum, so anything that made it past
/// normalization is guaranteed to agree on the category vocabulary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Bills,
    Shopping,
    Travel,
    Entertainment,
    Income,
    Utilities,
    #[default]
    #[serde(other)]
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Bills,
        Category::Shopping,
        Category::Travel,
        Category::Entertainment,
        Category::Income,
        Category::Utilities,
        Category::Others,
    ];

    /// Parses a user-supplied label, falling back to [`Category::Others`].
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_label(label: &str) -> Self {
        Self::recognise(label).unwrap_or(Category::Others)
    }

    /// Like [`Category::from_label`], but reports whether the label was recognised.
    pub fn recognise(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Income => "Income",
            Category::Utilities => "Utilities",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
