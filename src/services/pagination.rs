use schemars::JsonSchema;
use serde::Serialize;

/// Window `[page_index * page_size, page_index * page_size + page_size)` of
/// `records`, clamped to its length.
///
/// Pages past the end are empty, as is every page when `page_size` is zero.
/// Resetting `page_index` after a page size change is up to the caller.
pub fn page<T>(records: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

pub fn total_pages(total_results: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}

// One page of results plus what the pager control needs to render
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_results: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    pub fn from_slice(records: &[T], page_index: usize, page_size: usize) -> Self {
        Page {
            items: page(records, page_index, page_size).to_vec(),
            page_index,
            page_size,
            total_results: records.len(),
            total_pages: total_pages(records.len(), page_size),
        }
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_results: self.total_results,
            total_pages: self.total_pages,
        }
    }
}
