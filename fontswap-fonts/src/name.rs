//! Font identity and family grouping.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A font identified by its (family, style) pair.
///
/// Equality is structural: two names are the same font exactly when both
/// the family and the style match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontName {
    /// Family name, e.g. `"Inter"`.
    pub family: String,
    /// Style name within the family, e.g. `"Regular"` or `"Bold Italic"`.
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// All styles of one family, for reporting to the panel.
///
/// Styles are deduplicated and sorted; sequences of groups are sorted by
/// family. Groups are derived fresh for each report and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilyGroup {
    pub family: String,
    pub styles: Vec<String>,
}

/// Group fonts by family, sorting families and styles lexicographically.
pub fn group_by_family<I>(fonts: I) -> Vec<FontFamilyGroup>
where
    I: IntoIterator<Item = FontName>,
{
    let mut families: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for font in fonts {
        families.entry(font.family).or_default().insert(font.style);
    }
    families
        .into_iter()
        .map(|(family, styles)| FontFamilyGroup {
            family,
            styles: styles.into_iter().collect(),
        })
        .collect()
}
