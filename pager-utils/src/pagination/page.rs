//! Pre-rendered pages and the pure page-window math used to build them.

use twilight_model::channel::message::embed::Embed;

use crate::embed::{build_paginated_embed, page_footer};

use super::error::PaginatorError;

/// One pre-rendered page: optional text content plus an optional embed.
#[derive(Clone, Debug, Default)]
pub struct Page {
    content: Option<String>,
    embed: Option<Embed>,
}

impl Page {
    /// Build a page from raw parts.
    pub fn new(content: Option<String>, embed: Option<Embed>) -> Self {
        Self { content, embed }
    }

    /// Build a text-only page.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Some(content.into()), None)
    }

    /// Build an embed-only page.
    pub fn from_embed(embed: Embed) -> Self {
        Self::new(None, Some(embed))
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn embed(&self) -> Option<&Embed> {
        self.embed.as_ref()
    }
}

/// Ordered, non-empty sequence of pages, addressed 1-based.
#[derive(Clone, Debug)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Wrap a list of pages, rejecting an empty list.
    pub fn new(pages: Vec<Page>) -> Result<Self, PaginatorError> {
        if pages.is_empty() {
            return Err(PaginatorError::EmptyPageSet);
        }

        Ok(Self { pages })
    }

    /// Chunk `items` into bulleted embed pages of `per_page` entries each.
    pub fn from_items(title: &str, items: &[String], per_page: usize) -> anyhow::Result<Self> {
        let total = total_pages(items.len(), per_page);

        let pages = (1..=total)
            .map(|page| {
                let description = paginated_bulleted_description(items, per_page, page);
                build_paginated_embed(title, description, page, total).map(Page::from_embed)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self::new(pages)?)
    }

    /// Stamp `Page i / N` onto the footer of every embed page.
    ///
    /// Sets with a single page and text-only pages are left untouched.
    pub fn with_page_number_footers(mut self) -> Self {
        let total = self.pages.len();
        if total <= 1 {
            return self;
        }

        for (index, page) in self.pages.iter_mut().enumerate() {
            if let Some(embed) = page.embed.as_mut() {
                embed.footer = Some(page_footer(index + 1, total));
            }
        }

        self
    }

    /// Number of pages, always at least one.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Page at a 1-based position.
    pub fn get(&self, page: usize) -> Option<&Page> {
        page.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    pub fn first(&self) -> &Page {
        &self.pages[0]
    }
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = (start + safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Build a bullet-list description string for a specific page window.
pub fn paginated_bulleted_description(items: &[String], per_page: usize, page: usize) -> String {
    let total = total_pages(items.len(), per_page);
    let page = clamp_page(page, total);
    let (start, end) = page_window(items.len(), per_page, page);
    format!("- {}", items[start..end].join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|index| format!("item {index}")).collect()
    }

    #[test]
    fn empty_page_list_is_rejected() {
        let result = PageSet::new(Vec::new());
        assert!(matches!(result, Err(PaginatorError::EmptyPageSet)));
    }

    #[test]
    fn get_is_one_based() -> Result<(), PaginatorError> {
        let pages = PageSet::new(vec![Page::text("a"), Page::text("b")])?;
        assert!(pages.get(0).is_none());
        assert_eq!(pages.get(1).and_then(Page::content), Some("a"));
        assert_eq!(pages.get(2).and_then(Page::content), Some("b"));
        assert!(pages.get(3).is_none());
        Ok(())
    }

    #[test]
    fn from_items_chunks_and_numbers_pages() -> anyhow::Result<()> {
        let pages = PageSet::from_items("List", &items(12), 5)?;
        assert_eq!(pages.len(), 3);

        let last = pages.get(3).and_then(Page::embed).expect("embed page");
        assert_eq!(last.description.as_deref(), Some("- item 11\n- item 12"));
        assert_eq!(
            last.footer.as_ref().map(|footer| footer.text.as_str()),
            Some("Page 3 / 3")
        );
        Ok(())
    }

    #[test]
    fn from_items_without_items_is_empty_page_set() {
        let error = PageSet::from_items("List", &[], 5).expect_err("no items");
        assert!(matches!(
            error.downcast_ref::<PaginatorError>(),
            Some(PaginatorError::EmptyPageSet)
        ));
    }

    #[test]
    fn footers_are_stamped_only_on_embed_pages_of_multi_page_sets() -> anyhow::Result<()> {
        let embed = build_paginated_embed("T", "body", 1, 1)?;
        let pages = PageSet::new(vec![Page::from_embed(embed.clone()), Page::text("plain")])?
            .with_page_number_footers();

        let first = pages.get(1).and_then(Page::embed).expect("embed page");
        assert_eq!(
            first.footer.as_ref().map(|footer| footer.text.as_str()),
            Some("Page 1 / 2")
        );
        assert!(pages.get(2).and_then(Page::embed).is_none());

        let single = PageSet::new(vec![Page::from_embed(embed)])?.with_page_number_footers();
        assert!(single.first().embed().and_then(|e| e.footer.as_ref()).is_none());
        Ok(())
    }

    #[test]
    fn page_math_matches_windows() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(3, 0), 3);
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(page_window(12, 5, 3), (10, 12));
        assert_eq!(page_window(12, 5, 9), (12, 12));
    }

    #[test]
    fn one_based_page_parsing() {
        assert_eq!(parse_one_based_page(None), Some(1));
        assert_eq!(parse_one_based_page(Some("4")), Some(4));
        assert_eq!(parse_one_based_page(Some("0")), None);
        assert_eq!(parse_one_based_page(Some("x")), None);
    }
}
