use crate::config::RcConfig;
use crate::export;
use crate::highlight::Highlighter;
use crate::registry::Registry;
use crate::typewriter::{CopiedIndicator, Typewriter};
use crate::view::{self, View};
use crate::view::renderer::{RenderParams, SIDEBAR_WIDTH};
use arboard::Clipboard;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Content,
    Sidebar,
    Filter,
    Command,
}

pub enum Command {
    Quit,
    OpenPage(String),
    NextPage,
    PrevPage,
    ScrollDown(usize),
    ScrollUp(usize),
    ScrollTop,
    ScrollBottom,
    HalfPageDown,
    HalfPageUp,
    ToggleSidebar,
    FocusSidebar,
    FocusContent,
    SidebarUp,
    SidebarDown,
    SidebarSelect,
    EnterFilterMode,
    EnterCommandMode,
    NextWindow,
    PrevWindow,
    CopyWindow,
    RevealAll,
    ReplayTyping,
    Execute(String),
    Help,
}

const KEY_HELP: &str = "Tab sidebar · j/k scroll · J/K pages · [/] window · y copy · s skip · / filter · : command · q quit";

/// How often timer work runs when no input arrives.
const TICK: Duration = Duration::from_millis(10);

pub struct Controller {
    registry: Registry,
    highlighter: Highlighter,
    config: RcConfig,
    mode: Mode,
    current_page: String,
    typists: Vec<Typewriter>,
    copied: CopiedIndicator,
    selected_window: usize,
    scroll: usize,
    sidebar_open: bool,
    sidebar_selection: usize,
    filter: String,
    command_buffer: String,
    status_message: String,
    visible_rows: usize,
    view: View,
}

impl Controller {
    pub fn new(config: RcConfig, start_page: Option<&str>) -> Self {
        let registry = Registry::new();
        let initial = start_page
            .map(str::to_string)
            .or_else(|| config.start_page.clone())
            .unwrap_or_default();
        let sidebar_open = config.sidebar_open;

        let mut controller = Self {
            registry,
            highlighter: Highlighter::new(),
            config,
            mode: Mode::Content,
            current_page: String::new(),
            typists: Vec::new(),
            copied: CopiedIndicator::new(),
            selected_window: 0,
            scroll: 0,
            sidebar_open,
            sidebar_selection: 0,
            filter: String::new(),
            command_buffer: String::new(),
            status_message: String::new(),
            visible_rows: 0,
            view: View::new(),
        };
        controller.set_current_page(&initial);
        controller
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    /// Navigate. Unknown identifiers fall back to the default page; the
    /// previous page's timers are replaced wholesale so they cannot touch
    /// the new content.
    pub fn set_current_page(&mut self, id: &str) {
        self.current_page = self.registry.resolve_id(id).to_string();
        self.scroll = 0;
        self.selected_window = 0;
        self.copied.clear();
        self.rebuild_typists(false);
    }

    /// Rebuild the typewriter set for the current page. With `force`, every
    /// window animates; otherwise only windows flagged for typing, and only
    /// when the configuration allows it.
    fn rebuild_typists(&mut self, force: bool) {
        let interval = Duration::from_millis(self.config.typing_interval_ms);
        self.typists = self
            .registry
            .resolve(&self.current_page)
            .code_windows()
            .iter()
            .map(|window| {
                if force || (self.config.typing && window.typing) {
                    Typewriter::new(window.code, interval)
                } else {
                    Typewriter::completed(window.code)
                }
            })
            .collect();
    }

    fn tick(&mut self, now: Instant) {
        for typist in &mut self.typists {
            typist.tick(now);
        }
        // Expire the copied indicator.
        self.copied.is_active(now);
    }

    fn visible_ids(&self) -> Vec<&'static str> {
        view::visible_ids(&self.filter)
    }

    fn copy_selected_window(&mut self) {
        let page = self.registry.resolve(&self.current_page);
        let windows = page.code_windows();
        let Some(window) = windows.get(self.selected_window) else {
            self.status_message = "No code snippets on this page".to_string();
            return;
        };
        // A denied clipboard simply never arms the indicator.
        if Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(window.code.to_string()))
            .is_ok()
        {
            self.copied.arm(Instant::now());
            self.status_message = "Snippet copied to clipboard".to_string();
        }
    }

    fn select_window(&mut self, forward: bool) {
        let count = self
            .registry
            .resolve(&self.current_page)
            .code_windows()
            .len();
        if count == 0 {
            self.status_message = "No code snippets on this page".to_string();
            return;
        }
        self.selected_window = if forward {
            (self.selected_window + 1) % count
        } else {
            (self.selected_window + count - 1) % count
        };
    }

    fn open_sidebar_selection(&mut self) {
        let ids = self.visible_ids();
        if let Some(id) = ids.get(self.sidebar_selection) {
            let id = id.to_string();
            self.set_current_page(&id);
        }
        self.filter.clear();
        self.sidebar_selection = 0;
        self.mode = Mode::Content;
    }

    fn execute_command_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "" => {}
            "q" | "quit" => return true,
            "open" => {
                if arg.is_empty() {
                    self.status_message = "Usage: :open <page-id>".to_string();
                } else {
                    self.set_current_page(arg);
                }
            }
            "copy" => self.copy_selected_window(),
            "export" => {
                if arg.is_empty() {
                    self.status_message = "Usage: :export <dir>".to_string();
                } else {
                    let dir = PathBuf::from(arg);
                    match export::export_site(&dir, &self.registry) {
                        Ok(written) => {
                            self.status_message =
                                format!("Exported {} files to {}", written.len(), dir.display());
                        }
                        Err(err) => {
                            self.status_message = format!("Export failed: {err}");
                        }
                    }
                }
            }
            "set" => match arg {
                "typing" => {
                    self.config.typing = true;
                    self.status_message = "Typewriter reveal enabled".to_string();
                }
                "notyping" => {
                    self.config.typing = false;
                    self.rebuild_typists(false);
                    self.status_message = "Typewriter reveal disabled".to_string();
                }
                "nu" | "number" => self.config.show_line_numbers = true,
                "nonu" | "nonumber" => self.config.show_line_numbers = false,
                _ => {
                    self.status_message = format!("Unknown setting: {arg}");
                }
            },
            "help" | "h" => self.status_message = KEY_HELP.to_string(),
            _ => {
                self.status_message = format!("Not a command: {name}");
            }
        }
        false
    }

    /// Apply one command. Returns true when the application should quit.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return true,
            Command::OpenPage(id) => self.set_current_page(&id),
            Command::NextPage => {
                let id = self.registry.next_id(&self.current_page).to_string();
                self.set_current_page(&id);
            }
            Command::PrevPage => {
                let id = self.registry.prev_id(&self.current_page).to_string();
                self.set_current_page(&id);
            }
            Command::ScrollDown(n) => self.scroll = self.scroll.saturating_add(n),
            Command::ScrollUp(n) => self.scroll = self.scroll.saturating_sub(n),
            Command::ScrollTop => self.scroll = 0,
            Command::ScrollBottom => self.scroll = usize::MAX, // clamped per frame
            Command::HalfPageDown => {
                self.scroll = self.scroll.saturating_add(self.visible_rows.max(2) / 2);
            }
            Command::HalfPageUp => {
                self.scroll = self.scroll.saturating_sub(self.visible_rows.max(2) / 2);
            }
            Command::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                if !self.sidebar_open {
                    self.mode = Mode::Content;
                }
                self.view.force_redraw();
            }
            Command::FocusSidebar => {
                self.sidebar_open = true;
                self.mode = Mode::Sidebar;
                self.sidebar_selection = self
                    .visible_ids()
                    .iter()
                    .position(|id| *id == self.current_page)
                    .unwrap_or(0);
            }
            Command::FocusContent => self.mode = Mode::Content,
            Command::SidebarUp => {
                self.sidebar_selection = self.sidebar_selection.saturating_sub(1);
            }
            Command::SidebarDown => {
                let count = self.visible_ids().len();
                if count > 0 {
                    self.sidebar_selection = (self.sidebar_selection + 1).min(count - 1);
                }
            }
            Command::SidebarSelect => self.open_sidebar_selection(),
            Command::EnterFilterMode => {
                self.sidebar_open = true;
                self.filter.clear();
                self.sidebar_selection = 0;
                self.mode = Mode::Filter;
            }
            Command::EnterCommandMode => {
                self.command_buffer.clear();
                self.mode = Mode::Command;
            }
            Command::NextWindow => self.select_window(true),
            Command::PrevWindow => self.select_window(false),
            Command::CopyWindow => self.copy_selected_window(),
            Command::RevealAll => {
                for typist in &mut self.typists {
                    typist.reveal_all();
                }
            }
            Command::ReplayTyping => self.rebuild_typists(true),
            Command::Execute(line) => {
                let quit = self.execute_command_line(&line);
                self.mode = Mode::Content;
                if quit {
                    return true;
                }
            }
            Command::Help => self.status_message = KEY_HELP.to_string(),
        }
        false
    }

    fn parse_key(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        // Bindings shared by the content and sidebar focus.
        match code {
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Char('b') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Command::ToggleSidebar);
            }
            KeyCode::Char('/') => return Some(Command::EnterFilterMode),
            KeyCode::Char(':') => return Some(Command::EnterCommandMode),
            KeyCode::Char('?') => return Some(Command::Help),
            _ => {}
        }

        match self.mode {
            Mode::Sidebar => match code {
                KeyCode::Char('j') | KeyCode::Down => Some(Command::SidebarDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Command::SidebarUp),
                KeyCode::Enter => Some(Command::SidebarSelect),
                KeyCode::Esc | KeyCode::Tab => Some(Command::FocusContent),
                _ => None,
            },
            Mode::Content => match code {
                KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Command::HalfPageDown)
                }
                KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Command::HalfPageUp)
                }
                KeyCode::Char('j') | KeyCode::Down => Some(Command::ScrollDown(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Command::ScrollUp(1)),
                KeyCode::Char('g') | KeyCode::Home => Some(Command::ScrollTop),
                KeyCode::Char('G') | KeyCode::End => Some(Command::ScrollBottom),
                KeyCode::PageDown => Some(Command::HalfPageDown),
                KeyCode::PageUp => Some(Command::HalfPageUp),
                KeyCode::Char('J') | KeyCode::Char('n') | KeyCode::Right => {
                    Some(Command::NextPage)
                }
                KeyCode::Char('K') | KeyCode::Char('p') | KeyCode::Left => {
                    Some(Command::PrevPage)
                }
                KeyCode::Char(']') => Some(Command::NextWindow),
                KeyCode::Char('[') => Some(Command::PrevWindow),
                KeyCode::Char('y') | KeyCode::Char('c') => Some(Command::CopyWindow),
                KeyCode::Char('s') => Some(Command::RevealAll),
                KeyCode::Char('t') => Some(Command::ReplayTyping),
                KeyCode::Tab => Some(Command::FocusSidebar),
                _ => None,
            },
            // Filter and command modes consume raw characters in the loop.
            Mode::Filter | Mode::Command => None,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;

        // Ensure cleanup happens even on panic
        struct TerminalGuard;
        impl Drop for TerminalGuard {
            fn drop(&mut self) {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
            }
        }
        let _guard = TerminalGuard;

        self.run_loop()
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let now = Instant::now();
            self.tick(now);
            self.render(now)?;

            if !event::poll(TICK)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    // Filter mode consumes characters directly.
                    if self.mode == Mode::Filter {
                        match key.code {
                            KeyCode::Char(c) => {
                                self.filter.push(c);
                                self.sidebar_selection = 0;
                                continue;
                            }
                            KeyCode::Backspace => {
                                self.filter.pop();
                                continue;
                            }
                            KeyCode::Enter => {
                                self.open_sidebar_selection();
                                continue;
                            }
                            KeyCode::Esc => {
                                self.filter.clear();
                                self.mode = Mode::Sidebar;
                                continue;
                            }
                            KeyCode::Down | KeyCode::Up => {
                                // Fall through to selection movement below.
                            }
                            _ => continue,
                        }
                        let command = match key.code {
                            KeyCode::Down => Command::SidebarDown,
                            _ => Command::SidebarUp,
                        };
                        if self.execute(command) {
                            break;
                        }
                        continue;
                    }

                    // Command mode consumes characters directly.
                    if self.mode == Mode::Command {
                        match key.code {
                            KeyCode::Char(c) => self.command_buffer.push(c),
                            KeyCode::Backspace => {
                                if self.command_buffer.pop().is_none() {
                                    self.mode = Mode::Content;
                                }
                            }
                            KeyCode::Enter => {
                                let line = self.command_buffer.clone();
                                if self.execute(Command::Execute(line)) {
                                    break;
                                }
                            }
                            KeyCode::Esc => self.mode = Mode::Content,
                            _ => {}
                        }
                        continue;
                    }

                    if let Some(command) = self.parse_key(key.code, key.modifiers) {
                        self.status_message.clear();
                        if self.execute(command) {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    self.view.force_redraw();
                }
                _ => {
                    // Ignore other events (mouse, etc.)
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, now: Instant) -> Result<(), Box<dyn std::error::Error>> {
        let (width, height) = size()?;
        self.visible_rows = View::visible_rows(height);

        let desc = self.registry.descriptor(&self.current_page);
        let header = format!(" BlockDAG SDK Docs  ·  {} › {}", desc.category, desc.title);

        let sidebar_lines = if self.sidebar_open {
            Some(view::build_sidebar(
                &self.filter,
                &self.current_page,
                self.sidebar_selection,
                matches!(self.mode, Mode::Sidebar | Mode::Filter),
            ))
        } else {
            None
        };

        let sidebar_width = if sidebar_lines.is_some() {
            SIDEBAR_WIDTH + 1
        } else {
            1
        };
        let content_width = (width as usize).saturating_sub(sidebar_width);

        let copied_active = self.copied.is_active(now);
        let page = self.registry.resolve(&self.current_page);
        let content = view::build_content(
            page,
            content_width,
            &self.highlighter,
            &self.typists,
            self.selected_window,
            copied_active,
            self.config.show_line_numbers,
        );

        let max_scroll = content.len().saturating_sub(self.visible_rows);
        self.scroll = self.scroll.min(max_scroll);

        // Keep the sidebar selection in view.
        let sidebar_scroll = match &sidebar_lines {
            Some(lines) => lines
                .len()
                .saturating_sub(self.visible_rows)
                .min(self.sidebar_selection.saturating_sub(self.visible_rows.saturating_sub(1))),
            None => 0,
        };

        let status = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            Mode::Filter => format!("/{}", self.filter),
            _ if !self.status_message.is_empty() => self.status_message.clone(),
            _ => KEY_HELP.to_string(),
        };

        let params = RenderParams {
            header: &header,
            status: &status,
            sidebar: sidebar_lines.as_deref(),
            sidebar_scroll,
            content: &content,
            scroll: self.scroll,
        };
        self.view.render(&params)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_PAGE;

    fn controller() -> Controller {
        let config = RcConfig {
            typing: false,
            ..RcConfig::default()
        };
        Controller::new(config, None)
    }

    #[test]
    fn test_starts_on_the_default_page() {
        let controller = controller();
        assert_eq!(controller.current_page(), DEFAULT_PAGE);
    }

    #[test]
    fn test_cli_page_argument_sets_initial_page() {
        let config = RcConfig::default();
        let controller = Controller::new(config, Some("mining-rewards"));
        assert_eq!(controller.current_page(), "mining-rewards");
    }

    #[test]
    fn test_unknown_initial_page_falls_back() {
        let config = RcConfig::default();
        let controller = Controller::new(config, Some("nonexistent-page"));
        assert_eq!(controller.current_page(), DEFAULT_PAGE);
    }

    #[test]
    fn test_rc_start_page_used_when_no_argument() {
        let config = RcConfig {
            start_page: Some("configuration".to_string()),
            ..RcConfig::default()
        };
        let controller = Controller::new(config, None);
        assert_eq!(controller.current_page(), "configuration");
    }

    #[test]
    fn test_navigation_resets_scroll_and_selection() {
        let mut controller = controller();
        controller.scroll = 12;
        controller.selected_window = 1;
        controller.execute(Command::OpenPage("quick-start".to_string()));
        assert_eq!(controller.current_page(), "quick-start");
        assert_eq!(controller.scroll, 0);
        assert_eq!(controller.selected_window, 0);
    }

    #[test]
    fn test_navigation_replaces_typewriters() {
        let config = RcConfig::default(); // typing enabled
        let mut controller = Controller::new(config, Some("quick-start"));
        assert!(controller.typists.iter().any(|t| !t.is_done()));

        controller.execute(Command::OpenPage("installation".to_string()));
        // Installation windows are not typing-flagged: all complete.
        assert!(controller.typists.iter().all(|t| t.is_done()));
    }

    #[test]
    fn test_open_unknown_page_shows_overview() {
        let mut controller = controller();
        controller.execute(Command::OpenPage("quick-start".to_string()));
        controller.execute(Command::Execute("open nonsense".to_string()));
        assert_eq!(controller.current_page(), DEFAULT_PAGE);
    }

    #[test]
    fn test_next_prev_page_wrap() {
        let mut controller = controller();
        controller.execute(Command::PrevPage);
        assert_eq!(controller.current_page(), "faq");
        controller.execute(Command::NextPage);
        assert_eq!(controller.current_page(), DEFAULT_PAGE);
    }

    #[test]
    fn test_quit_commands() {
        let mut controller = controller();
        assert!(controller.execute(Command::Quit));
        assert!(controller.execute(Command::Execute("q".to_string())));
        assert!(!controller.execute(Command::Execute("help".to_string())));
    }

    #[test]
    fn test_window_selection_wraps() {
        let mut controller = controller();
        controller.execute(Command::OpenPage("smart-contracts".to_string()));
        controller.execute(Command::NextWindow);
        assert_eq!(controller.selected_window, 1);
        controller.execute(Command::NextWindow);
        assert_eq!(controller.selected_window, 0);
        controller.execute(Command::PrevWindow);
        assert_eq!(controller.selected_window, 1);
    }

    #[test]
    fn test_filter_mode_narrows_sidebar_and_opens_first_match() {
        let mut controller = controller();
        controller.execute(Command::EnterFilterMode);
        assert_eq!(controller.mode, Mode::Filter);
        controller.filter.push_str("batch");
        assert_eq!(controller.visible_ids(), vec!["batch-transactions"]);

        controller.open_sidebar_selection();
        assert_eq!(controller.current_page(), "batch-transactions");
        assert_eq!(controller.mode, Mode::Content);
        assert!(controller.filter.is_empty());
    }

    #[test]
    fn test_focus_sidebar_selects_current_page() {
        let mut controller = controller();
        controller.execute(Command::OpenPage("installation".to_string()));
        controller.execute(Command::FocusSidebar);
        assert_eq!(controller.mode, Mode::Sidebar);
        assert_eq!(controller.sidebar_selection, 3);
    }

    #[test]
    fn test_set_commands_toggle_config() {
        let mut controller = controller();
        controller.execute(Command::Execute("set nonu".to_string()));
        assert!(!controller.config.show_line_numbers);
        controller.execute(Command::Execute("set nu".to_string()));
        assert!(controller.config.show_line_numbers);
    }

    #[test]
    fn test_unknown_command_reports_not_a_command() {
        let mut controller = controller();
        controller.execute(Command::Execute("frobnicate".to_string()));
        assert!(controller.status_message.contains("Not a command"));
    }

    #[test]
    fn test_reveal_all_completes_typewriters() {
        let config = RcConfig::default();
        let mut controller = Controller::new(config, Some("quick-start"));
        assert!(controller.typists.iter().any(|t| !t.is_done()));
        controller.execute(Command::RevealAll);
        assert!(controller.typists.iter().all(|t| t.is_done()));
    }

    #[test]
    fn test_replay_animates_every_window() {
        let mut controller = controller();
        controller.execute(Command::OpenPage("smart-contracts".to_string()));
        assert!(controller.typists.iter().all(|t| t.is_done()));
        controller.execute(Command::ReplayTyping);
        assert!(controller.typists.iter().all(|t| !t.is_done()));
    }
}
