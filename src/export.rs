//! Static HTML export of the documentation registry.
//!
//! The serializer is deliberately small: page blocks map 1:1 onto plain
//! markup and every text segment goes through `escape` before it is written,
//! so snippet text can never be interpreted as markup. Token kinds become CSS
//! classes mirroring the terminal colors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::content::{Block, CodeWindow, Page};
use crate::highlight::{Highlighter, TokenKind};
use crate::registry::{self, PAGES, PageDescriptor, Registry};

/// Escape the three HTML metacharacters. `&` must go first.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn class_for(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Text => None,
        TokenKind::Str => Some("tok-str"),
        TokenKind::Comment => Some("tok-comment"),
        TokenKind::Keyword => Some("tok-kw"),
        TokenKind::Func => Some("tok-fn"),
        TokenKind::Literal => Some("tok-lit"),
    }
}

const STYLE: &str = r#"
body { background: #0b0c15; color: #cbd5e1; font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }
a { color: #38bdf8; }
h1 { color: #f8fafc; }
.note { border-left: 4px solid #38bdf8; background: #15172533; padding: 0.5rem 1rem; }
.coming-soon { border: 2px dashed #1e293b; padding: 2rem; text-align: center; }
table { border-collapse: collapse; }
th, td { border: 1px solid #1e293b; padding: 0.4rem 0.8rem; text-align: left; }
.code-window { background: #0f111a; border: 1px solid #1e293b; border-radius: 6px; padding: 0.5rem; }
.code-window .lang { color: #64748b; font-size: 0.8rem; text-transform: uppercase; }
.code-window table, .code-window td { border: none; font-family: monospace; }
td.ln { color: #334155; text-align: right; user-select: none; }
tr.hl { background: #1d4ed81a; }
.tok-str { color: #4ade80; }
.tok-comment { color: #6b7280; font-style: italic; }
.tok-kw { color: #c084fc; }
.tok-fn { color: #60a5fa; }
.tok-lit { color: #fb923c; }
"#;

fn render_code_window(window: &CodeWindow, highlighter: &Highlighter) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"code-window\">");
    html.push_str(&format!("<div class=\"lang\">{}</div>", escape(window.lang)));
    html.push_str("<table>");
    for row in highlighter.render(window.code) {
        let row_class = if window.highlight_lines.contains(&row.number) {
            " class=\"hl\""
        } else {
            ""
        };
        html.push_str(&format!("<tr{row_class}><td class=\"ln\">{}</td><td>", row.number));
        for segment in &row.segments {
            match class_for(segment.kind) {
                Some(class) => {
                    html.push_str(&format!(
                        "<span class=\"{class}\">{}</span>",
                        escape(&segment.text)
                    ));
                }
                None => html.push_str(&escape(&segment.text)),
            }
        }
        html.push_str("</td></tr>");
    }
    html.push_str("</table></div>");
    html
}

fn render_block(block: &Block, highlighter: &Highlighter) -> String {
    match block {
        Block::Heading(text) => format!("<h1>{}</h1>", escape(text)),
        Block::Paragraph(text) => format!("<p>{}</p>", escape(text)),
        Block::Note(text) => format!("<div class=\"note\">{}</div>", escape(text)),
        Block::Bullets(items) => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul>");
            html
        }
        Block::Table { headers, rows } => {
            let mut html = String::from("<table><tr>");
            for header in headers {
                html.push_str(&format!("<th>{}</th>", escape(header)));
            }
            html.push_str("</tr>");
            for row in rows {
                html.push_str("<tr>");
                for cell in row {
                    html.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                html.push_str("</tr>");
            }
            html.push_str("</table>");
            html
        }
        Block::Code(window) => render_code_window(window, highlighter),
        Block::ComingSoon => {
            "<div class=\"coming-soon\"><h2>Coming Soon</h2></div>".to_string()
        }
    }
}

fn render_nav(current: &PageDescriptor) -> String {
    let mut html = String::from("<nav>");
    for (category, items) in registry::group_by_category(PAGES) {
        html.push_str(&format!("<h3>{}</h3><ul>", escape(category)));
        for desc in items {
            let marker = if desc.id == current.id { " (current)" } else { "" };
            html.push_str(&format!(
                "<li><a href=\"{}.html\">{}</a>{marker}</li>",
                desc.id,
                escape(desc.title)
            ));
        }
        html.push_str("</ul>");
    }
    html.push_str("</nav>");
    html
}

pub fn render_page(
    desc: &PageDescriptor,
    page: &Page,
    highlighter: &Highlighter,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str(&format!(
        "<title>{} - BlockDAG SDK Docs</title>",
        escape(desc.title)
    ));
    html.push_str(&format!("<style>{STYLE}</style></head><body>"));
    html.push_str(&render_nav(desc));
    html.push_str("<main>");
    for block in &page.blocks {
        html.push_str(&render_block(block, highlighter));
    }
    html.push_str("</main></body></html>");
    html
}

fn render_index() -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<title>BlockDAG SDK Docs</title>");
    html.push_str(&format!("<style>{STYLE}</style></head><body>"));
    html.push_str("<h1>BlockDAG SDK Documentation</h1>");
    for (category, items) in registry::group_by_category(PAGES) {
        html.push_str(&format!("<h3>{}</h3><ul>", escape(category)));
        for desc in items {
            html.push_str(&format!(
                "<li><a href=\"{}.html\">{}</a></li>",
                desc.id,
                escape(desc.title)
            ));
        }
        html.push_str("</ul>");
    }
    html.push_str("</body></html>");
    html
}

/// Write one HTML file per registered page plus an index. Returns the paths
/// written, in registration order.
pub fn export_site(dir: &Path, registry: &Registry) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let highlighter = Highlighter::new();
    let mut written = Vec::new();

    let index_path = dir.join("index.html");
    fs::write(&index_path, render_index())?;
    written.push(index_path);

    for desc in PAGES {
        let page = registry.resolve(desc.id);
        let path = dir.join(format!("{}.html", desc.id));
        fs::write(&path, render_page(desc, page, &highlighter))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_escape_metacharacters() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        // Escaping is not applied twice.
        assert_eq!(escape("&"), "&amp;");
    }

    #[test]
    fn test_code_html_has_no_unescaped_metacharacters() {
        let highlighter = Highlighter::new();
        let window = CodeWindow::new("typescript", "if (a < b && c > d) { } // <ok>");
        let html = render_code_window(&window, &highlighter);

        let tag = Regex::new("<[^>]+>").expect("tag pattern");
        let stripped = tag.replace_all(&html, "");
        assert!(!stripped.contains('<'));
        assert!(!stripped.contains('>'));
        assert!(stripped.contains("&lt;"));
        assert!(stripped.contains("&amp;"));
    }

    #[test]
    fn test_token_classes_in_rendered_code() {
        let highlighter = Highlighter::new();
        let window = CodeWindow::new("typescript", "const x = 'hi'; // test");
        let html = render_code_window(&window, &highlighter);
        assert!(html.contains("<span class=\"tok-kw\">const</span>"));
        assert!(html.contains("<span class=\"tok-str\">'hi'</span>"));
        assert!(html.contains("<span class=\"tok-comment\">// test</span>"));
    }

    #[test]
    fn test_highlight_lines_get_the_hl_class() {
        let highlighter = Highlighter::new();
        let window = CodeWindow::new("typescript", "one\ntwo").highlight(&[2]);
        let html = render_code_window(&window, &highlighter);
        assert!(html.contains("<tr><td class=\"ln\">1</td>"));
        assert!(html.contains("<tr class=\"hl\"><td class=\"ln\">2</td>"));
    }

    #[test]
    fn test_export_writes_every_page_and_the_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        let registry = Registry::new();
        let written = export_site(dir.path(), &registry).expect("export");

        assert_eq!(written.len(), PAGES.len() + 1);
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("mining-rewards.html").exists());

        let overview = fs::read_to_string(dir.path().join("overview.html")).expect("read");
        assert!(overview.contains("Build the future on BlockDAG Network"));
    }
}
