use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// Column a result table can be ordered by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortKey {
    DepartureDate,
    ReturnDate,
    Price,
    Duration,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    // Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The sort the caller applies next.
///
/// There is a single direction shared by all keys: every sort flips it, so
/// switching to another column reuses the flipped direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

// Key and direction a result set was actually ordered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppliedSort {
    pub key: SortKey,
    pub direction: SortDirection,
}
