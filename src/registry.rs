use crate::content::{self, Page};

/// Identifier of the page every unknown identifier resolves to.
pub const DEFAULT_PAGE: &str = "overview";

/// Static metadata for one documentation page. The order of `PAGES` is
/// significant: it drives sidebar grouping and next/previous navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub glyph: char,
}

pub const PAGES: &[PageDescriptor] = &[
    PageDescriptor {
        id: "overview",
        title: "Overview",
        category: "General",
        glyph: '▤',
    },
    PageDescriptor {
        id: "quick-start",
        title: "Quick Start",
        category: "General",
        glyph: '↯',
    },
    PageDescriptor {
        id: "smart-contracts",
        title: "Smart Contracts",
        category: "Protocol",
        glyph: '§',
    },
    PageDescriptor {
        id: "installation",
        title: "Installation",
        category: "AA SDK",
        glyph: '$',
    },
    PageDescriptor {
        id: "create-account",
        title: "Create Smart Account",
        category: "AA SDK",
        glyph: '◈',
    },
    PageDescriptor {
        id: "send-transactions",
        title: "Send Transactions",
        category: "AA SDK",
        glyph: '→',
    },
    PageDescriptor {
        id: "batch-transactions",
        title: "Batch Transactions",
        category: "AA SDK",
        glyph: '▣',
    },
    PageDescriptor {
        id: "mining-rewards",
        title: "Mining Rewards",
        category: "AA SDK",
        glyph: '⚒',
    },
    PageDescriptor {
        id: "configuration",
        title: "Configuration",
        category: "AA SDK",
        glyph: '⚙',
    },
    PageDescriptor {
        id: "session-keys",
        title: "Session Keys",
        category: "Advanced",
        glyph: '⚷',
    },
    PageDescriptor {
        id: "faq",
        title: "FAQ",
        category: "Support",
        glyph: '?',
    },
];

/// Stable partition of descriptors by category. Categories appear in
/// first-seen order and items keep their relative order within a category.
pub fn group_by_category(
    descriptors: &'static [PageDescriptor],
) -> Vec<(&'static str, Vec<&'static PageDescriptor>)> {
    let mut groups: Vec<(&'static str, Vec<&'static PageDescriptor>)> = Vec::new();
    for desc in descriptors {
        match groups.iter_mut().find(|(cat, _)| *cat == desc.category) {
            Some((_, items)) => items.push(desc),
            None => groups.push((desc.category, vec![desc])),
        }
    }
    groups
}

/// The content registry - maps page identifiers to their rendered content.
///
/// Pages are built once at startup from the content builder table and held
/// for the life of the session. Lookups are pure; an unknown identifier is
/// never an error, it resolves to the default page.
pub struct Registry {
    pages: Vec<(&'static str, Page)>,
}

impl Registry {
    pub fn new() -> Self {
        let pages = PAGES
            .iter()
            .map(|desc| (desc.id, content::build_page(desc.id)))
            .collect();
        Self { pages }
    }

    /// Look up the content for `id`, falling back to the default page for
    /// unknown identifiers.
    pub fn resolve(&self, id: &str) -> &Page {
        self.pages
            .iter()
            .find(|(page_id, _)| *page_id == id)
            .or_else(|| self.pages.iter().find(|(page_id, _)| *page_id == DEFAULT_PAGE))
            .map(|(_, page)| page)
            .unwrap_or(&self.pages[0].1)
    }

    /// Normalize `id` to the identifier that will actually be shown.
    pub fn resolve_id(&self, id: &str) -> &'static str {
        PAGES
            .iter()
            .find(|desc| desc.id == id)
            .map(|desc| desc.id)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn descriptor(&self, id: &str) -> &'static PageDescriptor {
        let id = self.resolve_id(id);
        PAGES
            .iter()
            .find(|desc| desc.id == id)
            .unwrap_or(&PAGES[0])
    }

    /// Identifier following `id` in registration order, wrapping at the end.
    pub fn next_id(&self, id: &str) -> &'static str {
        let pos = self.position(id);
        PAGES[(pos + 1) % PAGES.len()].id
    }

    /// Identifier preceding `id` in registration order, wrapping at the start.
    pub fn prev_id(&self, id: &str) -> &'static str {
        let pos = self.position(id);
        PAGES[(pos + PAGES.len() - 1) % PAGES.len()].id
    }

    fn position(&self, id: &str) -> usize {
        let id = self.resolve_id(id);
        PAGES.iter().position(|desc| desc.id == id).unwrap_or(0)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Block;

    #[test]
    fn test_page_ids_are_unique() {
        for (i, a) in PAGES.iter().enumerate() {
            for b in &PAGES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate page id {}", a.id);
            }
        }
    }

    #[test]
    fn test_resolve_known_ids_returns_non_default_content() {
        let registry = Registry::new();
        let overview = registry.resolve(DEFAULT_PAGE) as *const Page;
        for desc in PAGES {
            let page = registry.resolve(desc.id);
            assert!(!page.blocks.is_empty(), "page {} has no content", desc.id);
            if desc.id != DEFAULT_PAGE {
                assert!(
                    page as *const Page != overview,
                    "page {} resolved to the overview fallback",
                    desc.id
                );
            }
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = Registry::new();
        let first = registry.resolve("quick-start") as *const Page;
        let second = registry.resolve("quick-start") as *const Page;
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_id_falls_back_to_overview() {
        let registry = Registry::new();
        let overview = registry.resolve(DEFAULT_PAGE) as *const Page;
        let unknown = registry.resolve("nonexistent-page") as *const Page;
        assert_eq!(unknown, overview);
        assert_eq!(registry.resolve_id("nonexistent-page"), DEFAULT_PAGE);
    }

    #[test]
    fn test_mining_rewards_is_not_the_fallback() {
        let registry = Registry::new();
        assert_eq!(registry.resolve_id("mining-rewards"), "mining-rewards");
        let page = registry.resolve("mining-rewards");
        let has_heading = page.blocks.iter().any(|block| {
            matches!(block, Block::Heading(text) if text == "Mining Rewards")
        });
        assert!(has_heading);
    }

    #[test]
    fn test_group_by_category_preserves_order() {
        let groups = group_by_category(PAGES);

        let categories: Vec<&str> = groups.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            vec!["General", "Protocol", "AA SDK", "Advanced", "Support"]
        );

        // Every descriptor appears exactly once, in original relative order.
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|(_, items)| items.iter().map(|desc| desc.id))
            .collect();
        assert_eq!(flattened.len(), PAGES.len());

        let aa_sdk: Vec<&str> = groups
            .iter()
            .find(|(cat, _)| *cat == "AA SDK")
            .map(|(_, items)| items.iter().map(|desc| desc.id).collect())
            .unwrap_or_default();
        assert_eq!(
            aa_sdk,
            vec![
                "installation",
                "create-account",
                "send-transactions",
                "batch-transactions",
                "mining-rewards",
                "configuration"
            ]
        );
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        let registry = Registry::new();
        assert_eq!(registry.next_id("overview"), "quick-start");
        assert_eq!(registry.prev_id("overview"), "faq");
        assert_eq!(registry.next_id("faq"), "overview");
        // Unknown ids navigate relative to the fallback position.
        assert_eq!(registry.next_id("bogus"), "quick-start");
    }
}
