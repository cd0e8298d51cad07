//! Search query and page types passed through to the genre store.
//!
//! The core does not interpret these beyond carrying them; paging and
//! filtering semantics belong to the store implementation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_SORT: &str = "name";

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::InvalidArgument(format!(
                "unknown sort direction '{}' (expected 'asc' or 'desc')",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Parameters for [`GenreGateway::find_all`](crate::application::ports::GenreGateway::find_all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Zero-based page index.
    pub page: usize,
    pub per_page: usize,
    /// Free-text filter; blank means no filter.
    pub terms: String,
    /// Field to sort by.
    pub sort: String,
    pub direction: Direction,
}

impl SearchQuery {
    pub fn new(
        page: usize,
        per_page: usize,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE, "", DEFAULT_SORT, Direction::Asc)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub per_page: usize,
    /// Number of matching items across all pages.
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Convert every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!(" desc ".parse::<Direction>().unwrap(), Direction::Desc);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Pagination::new(1, 2, 5, vec![1, 2]).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn default_query_sorts_by_name() {
        let query = SearchQuery::default();
        assert_eq!(query.page, 0);
        assert_eq!(query.per_page, DEFAULT_PER_PAGE);
        assert_eq!(query.sort, "name");
        assert!(query.terms.is_empty());
    }
}
