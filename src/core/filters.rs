use std::collections::BTreeSet;
use crate::models::{Category, WorkItem};

/// Set of active category tags for the work grid
///
/// An empty set means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    active: BTreeSet<Category>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from query tags, toggling each one in turn.
    ///
    /// Tags are matched case-insensitively after trimming, so `LABS` and
    /// ` labs ` both select labs. Unknown tags are skipped. A tag given twice
    /// cancels out, the same as clicking a filter chip twice.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filter = Self::new();
        for tag in tags {
            match tag.parse::<Category>() {
                Ok(category) => {
                    filter.toggle(category);
                }
                Err(e) => tracing::debug!("Ignoring filter tag: {}", e),
            }
        }
        filter
    }

    /// Add the category if absent, remove it if present.
    ///
    /// Returns whether the category is active afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.active.remove(&category) {
            false
        } else {
            self.active.insert(category);
            true
        }
    }

    #[inline]
    pub fn is_active(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Active categories in declaration order
    pub fn active(&self) -> Vec<Category> {
        self.active.iter().copied().collect()
    }

    #[inline]
    pub fn matches(&self, item: &WorkItem) -> bool {
        self.active.is_empty() || self.active.contains(&item.category)
    }

    /// Visible items, in their original order
    pub fn apply<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slug: &str, category: Category) -> WorkItem {
        WorkItem {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            category,
            link: None,
        }
    }

    fn items() -> Vec<WorkItem> {
        vec![
            item("breakout", Category::Labs),
            item("client", Category::ClientWork),
            item("saas", Category::ClientWork),
        ]
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let items = items();
        let filter = CategoryFilter::new();
        assert_eq!(filter.apply(&items).len(), 3);
    }

    #[test]
    fn test_single_category() {
        let items = items();
        let mut filter = CategoryFilter::new();
        assert!(filter.toggle(Category::ClientWork));

        let visible = filter.apply(&items);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.category == Category::ClientWork));
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut filter = CategoryFilter::new();
        filter.toggle(Category::Labs);
        assert!(!filter.toggle(Category::Labs));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_all_active_equals_none_active() {
        let items = items();
        let mut filter = CategoryFilter::new();
        for category in Category::ALL {
            filter.toggle(category);
        }
        assert_eq!(filter.apply(&items), CategoryFilter::new().apply(&items));
    }

    #[test]
    fn test_from_tags_skips_unknown() {
        let filter = CategoryFilter::from_tags(["labs", "branding"]);
        assert_eq!(filter.active(), vec![Category::Labs]);

        let filter = CategoryFilter::from_tags(["labs", "labs"]);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_tags_ignores_case_and_padding() {
        let filter = CategoryFilter::from_tags(["LABS", " Client-Work "]);
        assert_eq!(filter.active(), vec![Category::ClientWork, Category::Labs]);
    }

    #[test]
    fn test_is_active_and_clear() {
        let items = items();
        let mut filter = CategoryFilter::new();
        filter.toggle(Category::Labs);
        assert!(filter.is_active(Category::Labs));
        assert!(!filter.is_active(Category::ClientWork));
        assert_eq!(filter.apply(&items).len(), 1);

        filter.clear();
        assert!(filter.is_empty());
        assert!(!filter.is_active(Category::Labs));
        assert_eq!(filter.apply(&items).len(), 3);
    }
}
