//! Paging types shared by repositories and services.

use std::str::FromStr;

/// Sortable post columns, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(UnknownSortField(s.to_string())),
        }
    }
}

/// Raised when a sort expression names a column or direction we do not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort expression: {0}")]
pub struct UnknownSortField(pub String);

/// Ordering of a paged query. Defaults to ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl FromStr for Sort {
    type Err = UnknownSortField;

    /// Parses `field` or `field,direction`, e.g. `createdAt,desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim().parse()?;
        let direction = match parts.next() {
            Some(dir) => dir.trim().parse()?,
            None => Direction::Asc,
        };
        Ok(Self { field, direction })
    }
}

/// A request for one bounded slice of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u64,
    /// Items per page, always within `1..=MAX_SIZE`.
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;
    /// Largest offset a SQL `OFFSET` clause accepts.
    pub const MAX_OFFSET: u64 = i64::MAX as u64;

    /// A size of zero falls back to `DEFAULT_SIZE`; larger sizes are capped.
    pub fn new(page: u64, size: u64, sort: Sort) -> Self {
        let size = match size {
            0 => Self::DEFAULT_SIZE,
            n => n.min(Self::MAX_SIZE),
        };
        Self { page, size, sort }
    }

    /// Number of rows to skip before this page starts, capped at `MAX_OFFSET`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(Self::MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE, Sort::default())
    }
}

/// One page of results plus the totals of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Build a page, deriving `total_pages` from the total and the page size.
    pub fn new(content: Vec<T>, total_elements: u64, size: u64) -> Self {
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(size.max(1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert every item, stopping at the first failure.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<_, _>>()?,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        })
    }
}
