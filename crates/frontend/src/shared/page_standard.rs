//! Page categories for pages rendered inside a tab.
//!
//! Every tab page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_hotel--list"`) and `data-page-category` with one of the
//! constants below, so an id copied from the DOM inspector leads straight
//! to the `domain/a001_hotel/` directory.

/// Records of one aggregate with filters (hotels, rooms).
pub const PAGE_CAT_LIST: &str = "list";

/// Service pages: home, support.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_SYSTEM];

/// `{entity}--{category}` with both halves non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_hotel--list"));
        assert!(is_valid_page_id("support--system"));
        assert!(!is_valid_page_id("a001_hotel"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_hotel--dashboard"));
    }
}
