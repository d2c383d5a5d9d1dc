use serde::Serialize;

use crate::error::{MovieError, MovieResult};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of a larger list, plus the counts a client needs to navigate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub total_results: usize,
    pub current_page: u32,
    pub total_pages: usize,
}

pub fn check_page_args(page: u32, page_size: u32) -> MovieResult<()> {
    if page < 1 {
        return Err(MovieError::validation("Page must be greater than 0"));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(MovieError::validation(format!(
            "Page size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// Slice `items` into 1-based pages of `page_size`.
/// Pages past the end are empty, not an error.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> MovieResult<Page<T>> {
    check_page_args(page, page_size)?;

    let total_results = items.len();
    let total_pages = total_results.div_ceil(page_size as usize);

    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let slice: Vec<T> = if page as usize > total_pages {
        Vec::new()
    } else {
        items
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect()
    };

    Ok(Page {
        count: slice.len(),
        items: slice,
        total_results,
        current_page: page,
        total_pages,
    })
}
