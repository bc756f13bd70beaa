use super::view_model::{Line, Style};
use crate::highlight::TokenKind;
use crossterm::{
    cursor, execute,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType, size},
};
use std::io::{self, Write, stdout};
use unicode_width::UnicodeWidthChar;

/// Width of the sidebar pane, separator column included.
pub const SIDEBAR_WIDTH: usize = 30;

#[derive(Clone)]
pub struct RenderParams<'a> {
    pub header: &'a str,
    pub status: &'a str,
    pub sidebar: Option<&'a [Line]>,
    pub sidebar_scroll: usize,
    pub content: &'a [Line],
    pub scroll: usize,
}

fn color_for(style: Style) -> Color {
    match style {
        Style::Text => Color::Grey,
        Style::Dim => Color::DarkGrey,
        Style::Heading => Color::White,
        Style::Accent => Color::Cyan,
        Style::Good => Color::Green,
        Style::LineNumber => Color::DarkGrey,
        Style::Border => Color::DarkGrey,
        Style::BorderActive => Color::Cyan,
        Style::Category => Color::DarkGrey,
        Style::Active => Color::Cyan,
        Style::Token(kind) => match kind {
            TokenKind::Text => Color::Grey,
            TokenKind::Str => Color::Green,
            TokenKind::Comment => Color::DarkGrey,
            TokenKind::Keyword => Color::Magenta,
            TokenKind::Func => Color::Blue,
            TokenKind::Literal => Color::Yellow,
        },
    }
}

/// Serialize a styled line to an ANSI string clipped to `width` display
/// columns, optionally padded to the full width (used for the sidebar pane
/// and emphasized background bands).
fn line_to_ansi(line: &Line, width: usize, pad: bool) -> String {
    let mut result = String::new();
    let mut used = 0;

    if line.emphasized {
        result.push_str(&format!("{}", SetBackgroundColor(Color::Rgb {
            r: 20,
            g: 40,
            b: 80,
        })));
    }

    'spans: for span in &line.spans {
        result.push_str(&format!("{}", SetForegroundColor(color_for(span.style))));
        for ch in span.text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                break 'spans;
            }
            result.push(ch);
            used += ch_width;
        }
    }

    if pad || line.emphasized {
        result.push_str(&" ".repeat(width.saturating_sub(used)));
    }
    result.push_str(&format!("{ResetColor}"));
    result
}

pub struct View {
    last_rows: Vec<String>,
    last_header: String,
    last_status: String,
    last_terminal_size: (u16, u16),
    needs_full_redraw: bool,
    render_count: usize,
}

impl View {
    pub fn new() -> Self {
        Self {
            last_rows: Vec::new(),
            last_header: String::new(),
            last_status: String::new(),
            last_terminal_size: (0, 0),
            needs_full_redraw: true,
            render_count: 0,
        }
    }

    fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))
    }

    fn move_cursor(&self, line: usize, column: usize) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(column as u16, line as u16))
    }

    /// Rows available for pane content (header and status line excluded).
    pub fn visible_rows(height: u16) -> usize {
        (height as usize).saturating_sub(2)
    }

    pub fn render(&mut self, params: &RenderParams<'_>) -> io::Result<()> {
        let (width, height) = size()?;
        self.render_count += 1;

        // Force full redraw periodically to prevent state drift
        if self.render_count % 50 == 0 {
            self.needs_full_redraw = true;
        }

        let current_size = (width, height);
        if self.last_terminal_size != current_size {
            self.needs_full_redraw = true;
            self.last_terminal_size = current_size;
        }

        if self.needs_full_redraw {
            self.clear_screen()?;
            self.needs_full_redraw = false;
            self.last_rows.clear();
            self.last_header.clear();
            self.last_status.clear();
        }

        // Header bar
        if self.last_header != params.header {
            self.move_cursor(0, 0)?;
            execute!(stdout(), Clear(ClearType::CurrentLine))?;
            let clipped: String = params.header.chars().take(width as usize).collect();
            print!(
                "{}{clipped}{ResetColor}",
                SetForegroundColor(Color::White)
            );
            self.last_header = params.header.to_string();
        }

        let pane_rows = Self::visible_rows(height);
        let sidebar_width = match params.sidebar {
            Some(_) if (width as usize) > SIDEBAR_WIDTH + 10 => SIDEBAR_WIDTH,
            _ => 0,
        };
        let content_width = (width as usize).saturating_sub(sidebar_width + 1);

        let rows: Vec<String> = (0..pane_rows)
            .map(|i| {
                let mut row = String::new();
                if sidebar_width > 0 {
                    let sidebar_line = params
                        .sidebar
                        .and_then(|lines| lines.get(params.sidebar_scroll + i));
                    match sidebar_line {
                        Some(line) => {
                            row.push_str(&line_to_ansi(line, sidebar_width - 2, true))
                        }
                        None => row.push_str(&" ".repeat(sidebar_width - 2)),
                    }
                    row.push_str(&format!(
                        "{} │{ResetColor} ",
                        SetForegroundColor(Color::DarkGrey)
                    ));
                } else {
                    row.push(' ');
                }
                if let Some(line) = params.content.get(params.scroll + i) {
                    row.push_str(&line_to_ansi(line, content_width, false));
                }
                row
            })
            .collect();

        if self.last_rows != rows {
            for (i, row) in rows.iter().enumerate() {
                if i >= self.last_rows.len() || self.last_rows[i] != *row {
                    self.move_cursor(i + 1, 0)?;
                    execute!(stdout(), Clear(ClearType::CurrentLine))?;
                    print!("{row}");
                }
            }
            if rows.len() < self.last_rows.len() {
                for i in rows.len()..self.last_rows.len() {
                    if i + 1 < (height.saturating_sub(1)) as usize {
                        self.move_cursor(i + 1, 0)?;
                        execute!(stdout(), Clear(ClearType::CurrentLine))?;
                    }
                }
            }
            self.last_rows = rows;
        }

        // Status line
        if self.last_status != params.status {
            self.move_cursor(height.saturating_sub(1) as usize, 0)?;
            execute!(stdout(), Clear(ClearType::CurrentLine))?;
            let clipped: String = params.status.chars().take(width as usize).collect();
            print!(
                "{}{clipped}{ResetColor}",
                SetForegroundColor(Color::DarkGrey)
            );
            self.last_status = params.status.to_string();
        }

        stdout().flush()?;
        Ok(())
    }

    pub fn force_redraw(&mut self) {
        self.needs_full_redraw = true;
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::view_model::Span;

    fn display_width(ansi: &str) -> usize {
        // Strip CSI sequences, then measure what remains.
        let mut width = 0;
        let mut chars = ansi.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for ctrl in chars.by_ref() {
                    if ctrl.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                width += ch.width().unwrap_or(0);
            }
        }
        width
    }

    #[test]
    fn test_line_to_ansi_clips_to_width() {
        let line = Line::styled(Style::Text, "abcdefghij");
        assert_eq!(display_width(&line_to_ansi(&line, 4, false)), 4);
        assert_eq!(display_width(&line_to_ansi(&line, 40, false)), 10);
    }

    #[test]
    fn test_line_to_ansi_pads_when_requested() {
        let line = Line::styled(Style::Text, "ab");
        assert_eq!(display_width(&line_to_ansi(&line, 10, true)), 10);
    }

    #[test]
    fn test_wide_characters_never_straddle_the_clip_edge() {
        let line = Line {
            spans: vec![Span::new(Style::Text, "a中b")],
            emphasized: false,
        };
        // '中' is two columns wide; at width 2 it must not be half-drawn.
        assert_eq!(display_width(&line_to_ansi(&line, 2, false)), 1);
    }

    #[test]
    fn test_emphasized_lines_fill_the_row() {
        let line = Line {
            spans: vec![Span::new(Style::Text, "x")],
            emphasized: true,
        };
        assert_eq!(display_width(&line_to_ansi(&line, 20, false)), 20);
    }
}
