//! Filtering, sorting and paging shared by the genre stores.

use std::cmp::Ordering;

use catalog_core::{
    domain::{Direction, DomainError, Genre, Pagination, SearchQuery},
    error::CatalogResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Name,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    fn parse(raw: &str) -> CatalogResult<Self> {
        match raw.trim() {
            "" | "name" => Ok(Self::Name),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(DomainError::InvalidArgument(format!(
                "cannot sort genres by '{}' (expected name, createdAt or updatedAt)",
                other
            ))
            .into()),
        }
    }

    fn compare(self, a: &Genre, b: &Genre) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
            Self::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        }
    }
}

/// Apply `query` to `genres` and cut out the requested page.
///
/// Terms match a case-insensitive substring of the name. Ties on the sort
/// field are broken by id so paging is stable.
pub(crate) fn paginate(
    genres: impl IntoIterator<Item = Genre>,
    query: &SearchQuery,
) -> CatalogResult<Pagination<Genre>> {
    let field = SortField::parse(&query.sort)?;
    let terms = query.terms.trim().to_lowercase();

    let mut matching: Vec<Genre> = genres
        .into_iter()
        .filter(|g| terms.is_empty() || g.name().to_lowercase().contains(&terms))
        .collect();

    matching.sort_by(|a, b| {
        let ordering = field
            .compare(a, b)
            .then_with(|| a.id().as_str().cmp(b.id().as_str()));
        match query.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    let total = matching.len() as u64;
    let items = matching
        .into_iter()
        .skip(query.page.saturating_mul(query.per_page))
        .take(query.per_page)
        .collect();

    Ok(Pagination::new(query.page, query.per_page, total, items))
}
