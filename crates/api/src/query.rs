//! Query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?search=&tag=` narrowing for character listings.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterFilterParams {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl CharacterFilterParams {
    /// True when at least one non-blank filter was supplied.
    pub fn is_active(&self) -> bool {
        self.search_term().is_some() || self.tag_term().is_some()
    }

    pub fn search_term(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    pub fn tag_term(&self) -> Option<&str> {
        non_blank(self.tag.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
