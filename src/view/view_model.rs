//! View model - flattens pages and the sidebar into styled display lines.
//!
//! Everything here is pure: block lists in, `Line` lists out. The renderer
//! decides colors; the controller decides which page, which code window is
//! selected and how much of each window the typewriter has revealed.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{Block, CodeWindow, Page};
use crate::highlight::{Highlighter, TokenKind};
use crate::registry::{self, PAGES, PageDescriptor};
use crate::typewriter::Typewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Text,
    Dim,
    Heading,
    Accent,
    Good,
    LineNumber,
    Border,
    BorderActive,
    Category,
    Active,
    Token(TokenKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub style: Style,
    pub text: String,
}

impl Span {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// One display line. `emphasized` rows get a background band (used for
/// caller-highlighted code lines).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    pub emphasized: bool,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::new(style, text)],
            emphasized: false,
        }
    }

}

/// Word-wrap `text` to a display width. Words longer than the width are
/// hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
        } else if word_width <= width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            // Hard-split an overlong word across lines.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn paragraph_lines(style: Style, text: &str, width: usize, out: &mut Vec<Line>) {
    for wrapped in wrap(text, width) {
        out.push(Line::styled(style, wrapped));
    }
}

fn bullet_lines(items: &[String], width: usize, out: &mut Vec<Line>) {
    let body_width = width.saturating_sub(2).max(1);
    for item in items {
        for (i, wrapped) in wrap(item, body_width).into_iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            out.push(Line {
                spans: vec![
                    Span::new(Style::Accent, marker),
                    Span::new(Style::Text, wrapped),
                ],
                emphasized: false,
            });
        }
    }
}

fn note_lines(text: &str, width: usize, out: &mut Vec<Line>) {
    let body_width = width.saturating_sub(2).max(1);
    for wrapped in wrap(text, body_width) {
        out.push(Line {
            spans: vec![
                Span::new(Style::Accent, "▌ "),
                Span::new(Style::Text, wrapped),
            ],
            emphasized: false,
        });
    }
}

fn table_lines(headers: &[String], rows: &[Vec<String>], out: &mut Vec<Line>) {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| UnicodeWidthStr::width(header.as_str()))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let pad = |text: &str, target: usize| {
        let missing = target.saturating_sub(UnicodeWidthStr::width(text));
        format!("{text}{}", " ".repeat(missing))
    };

    let header_text = headers
        .iter()
        .enumerate()
        .map(|(i, header)| pad(header, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    out.push(Line::styled(Style::Heading, header_text));

    let rule_width = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
    out.push(Line::styled(Style::Border, "─".repeat(rule_width)));

    for row in rows {
        let row_text = row
            .iter()
            .enumerate()
            .take(columns)
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push(Line::styled(Style::Text, row_text));
    }
}

fn window_header(
    window: &CodeWindow,
    width: usize,
    selected: bool,
    copied: bool,
    out: &mut Vec<Line>,
) {
    let border = if selected {
        Style::BorderActive
    } else {
        Style::Border
    };
    let tag = format!("╭─ {} ", window.lang);
    let hint = if copied && selected {
        " ✓ copied "
    } else if selected {
        " y to copy "
    } else {
        ""
    };
    let fill = width
        .saturating_sub(UnicodeWidthStr::width(tag.as_str()))
        .saturating_sub(UnicodeWidthStr::width(hint));

    let mut spans = vec![Span::new(border, tag)];
    if !hint.is_empty() {
        let style = if copied { Style::Good } else { Style::Dim };
        spans.push(Span::new(style, hint));
    }
    spans.push(Span::new(border, "─".repeat(fill)));
    out.push(Line {
        spans,
        emphasized: false,
    });
}

fn code_window_lines(
    window: &CodeWindow,
    typewriter: Option<&Typewriter>,
    width: usize,
    highlighter: &Highlighter,
    selected: bool,
    copied: bool,
    show_line_numbers: bool,
    out: &mut Vec<Line>,
) {
    window_header(window, width, selected, copied, out);

    let visible = match typewriter {
        Some(tw) => tw.visible_prefix(window.code),
        None => window.code,
    };

    for row in highlighter.render(visible) {
        let mut spans = Vec::new();
        if show_line_numbers {
            spans.push(Span::new(Style::LineNumber, format!("{:>3} │ ", row.number)));
        } else {
            spans.push(Span::new(Style::LineNumber, "  "));
        }
        for segment in row.segments {
            spans.push(Span::new(Style::Token(segment.kind), segment.text));
        }
        out.push(Line {
            spans,
            emphasized: window.highlight_lines.contains(&row.number),
        });
    }

    let border = if selected {
        Style::BorderActive
    } else {
        Style::Border
    };
    out.push(Line::styled(border, format!("╰{}", "─".repeat(width.saturating_sub(1)))));
}

fn coming_soon_lines(out: &mut Vec<Line>) {
    out.push(Line::styled(Style::Heading, "Coming Soon"));
    out.push(Line::styled(Style::Border, "───────────"));
}

/// Flatten a page to display lines at the given content width.
#[allow(clippy::too_many_arguments)]
pub fn build_content(
    page: &Page,
    width: usize,
    highlighter: &Highlighter,
    typists: &[Typewriter],
    selected_window: usize,
    copied: bool,
    show_line_numbers: bool,
) -> Vec<Line> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut window_index = 0;

    for block in &page.blocks {
        if !lines.is_empty() {
            lines.push(Line::blank());
        }
        match block {
            Block::Heading(text) => {
                lines.push(Line::styled(Style::Heading, text.clone()));
                let rule = UnicodeWidthStr::width(text.as_str()).min(width);
                lines.push(Line::styled(Style::Border, "─".repeat(rule)));
            }
            Block::Paragraph(text) => paragraph_lines(Style::Text, text, width, &mut lines),
            Block::Note(text) => note_lines(text, width, &mut lines),
            Block::Bullets(items) => bullet_lines(items, width, &mut lines),
            Block::Table { headers, rows } => table_lines(headers, rows, &mut lines),
            Block::Code(window) => {
                code_window_lines(
                    window,
                    typists.get(window_index),
                    width,
                    highlighter,
                    window_index == selected_window,
                    copied,
                    show_line_numbers,
                    &mut lines,
                );
                window_index += 1;
            }
            Block::ComingSoon => coming_soon_lines(&mut lines),
        }
    }

    lines
}

fn matches_filter(desc: &PageDescriptor, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    desc.title.to_lowercase().contains(&needle) || desc.id.contains(&needle)
}

/// The page ids the sidebar currently shows, in registration order.
pub fn visible_ids(filter: &str) -> Vec<&'static str> {
    PAGES
        .iter()
        .filter(|desc| matches_filter(desc, filter))
        .map(|desc| desc.id)
        .collect()
}

/// Build the grouped sidebar. `selection` indexes into `visible_ids(filter)`
/// and is only drawn when the sidebar has focus.
pub fn build_sidebar(
    filter: &str,
    current_id: &str,
    selection: usize,
    focused: bool,
) -> Vec<Line> {
    let mut lines = Vec::new();

    if !filter.is_empty() {
        lines.push(Line {
            spans: vec![
                Span::new(Style::Dim, "filter: "),
                Span::new(Style::Accent, filter),
            ],
            emphasized: false,
        });
        lines.push(Line::blank());
    }

    let mut entry_index = 0;
    for (category, items) in registry::group_by_category(PAGES) {
        let visible: Vec<&&PageDescriptor> = items
            .iter()
            .filter(|desc| matches_filter(desc, filter))
            .collect();
        if visible.is_empty() {
            continue;
        }

        lines.push(Line::styled(Style::Category, category.to_uppercase()));
        for desc in visible {
            let is_selected = focused && entry_index == selection;
            let is_current = desc.id == current_id;
            let marker = if is_selected { "▸ " } else { "  " };
            let style = if is_current {
                Style::Active
            } else if is_selected {
                Style::Accent
            } else {
                Style::Text
            };
            lines.push(Line {
                spans: vec![
                    Span::new(Style::Accent, marker),
                    Span::new(Style::Dim, format!("{} ", desc.glyph)),
                    Span::new(style, desc.title),
                ],
                emphasized: false,
            });
            entry_index += 1;
        }
        lines.push(Line::blank());
    }

    if entry_index == 0 {
        lines.push(Line::styled(Style::Dim, "  no matches"));
    }

    lines
}
