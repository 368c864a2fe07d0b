//! Paginated catalog listing
//!
//! Turns repository output plus a raw requested page into a
//! boundary-correct pagination view. A page past the end is not an error:
//! the repository returns an empty window and the presenter renders a
//! valid page with zero items.

use crate::db::{PaperRepository, PaperSummary};
use serde::Serialize;

/// Papers per listing page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Parse a raw page parameter and clamp it to a minimum of 1.
///
/// Anything unparseable (missing, empty, non-numeric) falls back to 1.
pub fn effective_page(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.max(1) as u64)
        .unwrap_or(1)
}

/// Display-ready pagination view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub items: Vec<PaperSummary>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

impl ListingPage {
    /// Assemble a page view; `total_pages` is 0 when there are no records
    pub fn new(items: Vec<PaperSummary>, page: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));
        Self { items, page, page_size, total_count, total_pages }
    }

    /// Whether a "previous" link is valid
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a "next" link is valid
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Presenter for the paginated catalog
#[derive(Clone)]
pub struct ListingPresenter {
    repo: PaperRepository,
    page_size: u64,
}

impl ListingPresenter {
    pub fn new(repo: PaperRepository) -> Self {
        Self { repo, page_size: DEFAULT_PAGE_SIZE }
    }

    pub fn with_page_size(repo: PaperRepository, page_size: u64) -> Self {
        Self { repo, page_size: page_size.max(1) }
    }

    /// Present one catalog page for a raw, possibly invalid page parameter.
    ///
    /// Store failures surface here as an empty page with zero totals; the
    /// result is always renderable.
    pub async fn present(&self, requested_page: Option<&str>) -> ListingPage {
        let page = effective_page(requested_page);
        let result = self.repo.list_published(page, self.page_size).await;
        ListingPage::new(result.items, page, self.page_size, result.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> PaperSummary {
        PaperSummary {
            id: id.to_string(),
            title: format!("Paper {}", id),
            abstract_text: None,
            authors: None,
            categories: None,
            created_at: None,
        }
    }

    #[test]
    fn test_effective_page_clamps_to_one() {
        assert_eq!(effective_page(None), 1);
        assert_eq!(effective_page(Some("")), 1);
        assert_eq!(effective_page(Some("abc")), 1);
        assert_eq!(effective_page(Some("0")), 1);
        assert_eq!(effective_page(Some("-5")), 1);
        assert_eq!(effective_page(Some("3")), 3);
        assert_eq!(effective_page(Some(" 7 ")), 7);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = ListingPage::new(vec![], 1, 20, 25);
        assert_eq!(page.total_pages, 2);

        let exact = ListingPage::new(vec![], 1, 20, 40);
        assert_eq!(exact.total_pages, 2);

        let one_over = ListingPage::new(vec![], 1, 20, 41);
        assert_eq!(one_over.total_pages, 3);
    }

    #[test]
    fn test_empty_catalog_offers_no_controls() {
        let page = ListingPage::new(vec![], 1, 20, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_boundary_controls() {
        let first = ListingPage::new(vec![], 1, 20, 45);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let middle = ListingPage::new(vec![], 2, 20, 45);
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let last = ListingPage::new(vec![], 3, 20, 45);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_beyond_end_is_valid_and_empty() {
        let page = ListingPage::new(vec![], 9, 20, 25);
        assert_eq!(page.total_pages, 2);
        assert!(page.items.is_empty());
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_two_page_split_over_25_records() {
        // 25 published records, newest first, page size 20: the windows
        // must split 20/5 with no overlap and no gap.
        let all: Vec<PaperSummary> = (0..25).map(|i| summary(&format!("{:02}", i))).collect();
        let size = 20usize;

        let window = |page: usize| -> Vec<PaperSummary> {
            let offset = (page - 1) * size;
            all.iter().skip(offset).take(size).cloned().collect()
        };

        let first = ListingPage::new(window(1), 1, 20, 25);
        let second = ListingPage::new(window(2), 2, 20, 25);

        assert_eq!(first.items.len(), 20);
        assert_eq!(second.items.len(), 5);
        assert_eq!(first.total_pages, 2);

        let mut seen: Vec<&str> = first
            .items
            .iter()
            .chain(second.items.iter())
            .map(|p| p.id.as_str())
            .collect();
        seen.dedup();
        assert_eq!(seen.len(), 25);
    }
}
