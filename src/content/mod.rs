/// Content subsystem - page bodies for the documentation browser
///
/// Pages are block lists built once at startup. The builder table maps page
/// identifiers to builder functions so new pages are additive; identifiers
/// without a builder get the shared "coming soon" body.

pub mod pages;
pub mod snippets;

/// One code window inside a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeWindow {
    /// Label shown in the window title bar ("typescript", "solidity", "bash").
    pub lang: &'static str,
    pub code: &'static str,
    /// Reveal the text with the typewriter animation when the page opens.
    pub typing: bool,
    /// 1-based line numbers drawn with an emphasized background.
    pub highlight_lines: Vec<usize>,
}

impl CodeWindow {
    pub fn new(lang: &'static str, code: &'static str) -> Self {
        Self {
            lang,
            code,
            typing: false,
            highlight_lines: Vec::new(),
        }
    }

    pub fn typing(mut self) -> Self {
        self.typing = true;
        self
    }

    pub fn highlight(mut self, lines: &[usize]) -> Self {
        self.highlight_lines = lines.to_vec();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    /// Callout box with a short emphasized message.
    Note(String),
    Bullets(Vec<String>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Code(CodeWindow),
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    /// The code windows on this page, in display order.
    pub fn code_windows(&self) -> Vec<&CodeWindow> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Code(window) => Some(window),
                _ => None,
            })
            .collect()
    }
}

type PageBuilder = fn() -> Page;

const BUILDERS: &[(&str, PageBuilder)] = &[
    ("overview", pages::overview),
    ("quick-start", pages::quick_start),
    ("smart-contracts", pages::smart_contracts),
    ("installation", pages::installation),
    ("create-account", pages::create_account),
    ("send-transactions", pages::send_transactions),
    ("batch-transactions", pages::batch_transactions),
    ("mining-rewards", pages::mining_rewards),
    ("configuration", pages::configuration),
];

pub fn build_page(id: &str) -> Page {
    BUILDERS
        .iter()
        .find(|(builder_id, _)| *builder_id == id)
        .map(|(_, builder)| builder())
        .unwrap_or_else(pages::coming_soon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PAGES;

    #[test]
    fn test_every_registered_page_has_content() {
        for desc in PAGES {
            let page = build_page(desc.id);
            assert!(!page.blocks.is_empty(), "{} is empty", desc.id);
        }
    }

    #[test]
    fn test_unbuildable_ids_get_coming_soon() {
        let page = build_page("session-keys");
        assert!(page.blocks.iter().any(|b| matches!(b, Block::ComingSoon)));
    }

    #[test]
    fn test_code_windows_in_display_order() {
        let page = build_page("smart-contracts");
        let windows = page.code_windows();
        assert_eq!(windows.len(), 2);
        assert!(windows[0].code.contains("IBlockDAGLightAccount"));
        assert!(windows[1].code.contains("BlockDAGLightAccountFactory"));
    }

    #[test]
    fn test_quick_start_window_types() {
        let page = build_page("quick-start");
        let windows = page.code_windows();
        assert_eq!(windows.len(), 1);
        assert!(windows[0].typing);
    }
}
