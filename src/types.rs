use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the primary API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Pagination metadata, taken verbatim from the server. The client never
/// recomputes totals; it only derives display helpers from these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: 10,
            has_next: false,
            has_prev: false,
        }
    }
}

impl PaginationInfo {
    /// Bounds for the "Showing X to Y of Z results" line. (0, 0) when the
    /// result set is empty.
    pub fn display_range(&self) -> (u64, u64) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = u64::from(self.current_page - 1) * u64::from(self.items_per_page) + 1;
        let end = (u64::from(self.current_page) * u64::from(self.items_per_page)).min(self.total_items);
        (start, end)
    }
}

/// One slot in the numbered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Windowed page numbers for the pagination control: the first page, the last
/// page, and the pages within two of the current one, with ellipsis markers
/// standing in for collapsed runs.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut last_shown: u32 = 0;
    for page in 1..=total {
        let visible = page == 1
            || page == total
            || (page + 2 >= current && page <= current + 2);
        if !visible {
            continue;
        }
        if last_shown != 0 && page != last_shown + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        last_shown = page;
    }
    items
}
