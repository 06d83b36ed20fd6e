//! Fixed-size windows over the ordered day series.
//!
//! Page indices are 1-based. The window is always derived from the current
//! series and never stored, so it cannot drift from it.

pub const DEFAULT_PAGE_SIZE: usize = 7;

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice `[(page_index - 1) * page_size, page_index * page_size)` clamped to
/// the series; empty when the page lies past the end.
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self { page_index: 1, page_size: page_size.max(1) }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_index, self.page_size)
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next(&mut self, len: usize) -> bool {
        let target = (self.page_index + 1).min(self.total_pages(len));
        self.move_to(target)
    }

    /// Go back one page. Returns false when already on page 1.
    pub fn prev(&mut self, len: usize) -> bool {
        let target = self.page_index.saturating_sub(1).clamp(1, self.total_pages(len));
        self.move_to(target)
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page_index < self.total_pages(len)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 1
    }

    /// Back to page 1, whatever the new series looks like
    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    /// "Page {p} of {total}"
    pub fn label(&self, len: usize) -> String {
        format!("Page {} of {}", self.page_index, self.total_pages(len))
    }

    fn move_to(&mut self, target: usize) -> bool {
        let changed = target != self.page_index;
        self.page_index = target;
        changed
    }
}
