use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::UnknownCategory;

/// Grouping of related parameters. Ordering follows declaration order and
/// is what `BTreeMap<Category, _>` iterates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Cardiovascular,
    Respiratory,
    Metabolic,
    Lipid,
    Hematology,
    Anthropometric,
    BodyComposition,
    Sensory,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cardiovascular,
        Category::Respiratory,
        Category::Metabolic,
        Category::Lipid,
        Category::Hematology,
        Category::Anthropometric,
        Category::BodyComposition,
        Category::Sensory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cardiovascular => "cardiovascular",
            Category::Respiratory => "respiratory",
            Category::Metabolic => "metabolic",
            Category::Lipid => "lipid",
            Category::Hematology => "hematology",
            Category::Anthropometric => "anthropometric",
            Category::BodyComposition => "body_composition",
            Category::Sensory => "sensory",
        }
    }

    /// Human-readable label, e.g. "Body Composition".
    pub fn label(self) -> &'static str {
        match self {
            Category::Cardiovascular => "Cardiovascular",
            Category::Respiratory => "Respiratory",
            Category::Metabolic => "Metabolic",
            Category::Lipid => "Lipid Profile",
            Category::Hematology => "Hematology",
            Category::Anthropometric => "Anthropometric",
            Category::BodyComposition => "Body Composition",
            Category::Sensory => "Sensory",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
