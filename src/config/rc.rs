use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    pub typing: bool,
    pub typing_interval_ms: u64,
    pub show_line_numbers: bool,
    pub sidebar_open: bool,
    pub start_page: Option<String>,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            typing: true,
            typing_interval_ms: 10,
            show_line_numbers: true,
            sidebar_open: true,
            start_page: None,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .bdagdocsrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.bdagdocsrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(".bdagdocsrc");
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(".bdagdocsrc");
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load and parse the RC file
    pub fn load_config() -> RcConfig {
        let mut config = RcConfig::default();

        if let Some(rc_path) = Self::get_rc_path() {
            match fs::read_to_string(&rc_path) {
                Ok(content) => {
                    Self::parse_config_content(&content, &mut config);
                }
                Err(_) => {
                    // Silently fail if we can't read the file
                }
            }
        }

        config
    }

    pub fn load_config_from(path: &Path) -> RcConfig {
        let mut config = RcConfig::default();
        if let Ok(content) = fs::read_to_string(path) {
            Self::parse_config_content(&content, &mut config);
        }
        config
    }

    /// Parse the content of an RC file
    pub fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    /// Parse a single configuration line
    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = if let Some(pos) = line.find('#') {
            &line[..pos]
        } else {
            line
        }
        .trim();

        // Handle "set" commands (vim-style)
        if let Some(stripped) = line.strip_prefix("set ") {
            let setting = stripped.trim();

            if setting == "typing" {
                config.typing = true;
            } else if setting == "notyping" {
                config.typing = false;
            } else if setting == "nu" || setting == "number" {
                config.show_line_numbers = true;
            } else if setting == "nonu" || setting == "nonumber" {
                config.show_line_numbers = false;
            } else if setting == "sidebar" {
                config.sidebar_open = true;
            } else if setting == "nosidebar" {
                config.sidebar_open = false;
            } else if let Some(value) = setting.strip_prefix("typespeed=") {
                if let Ok(interval) = value.parse::<u64>() {
                    if interval > 0 && interval <= 1000 {
                        config.typing_interval_ms = interval;
                    }
                }
            } else if let Some(value) = setting.strip_prefix("page=") {
                if !value.is_empty() {
                    config.start_page = Some(value.to_string());
                }
            }
        }
        // Handle direct key-value pairs
        else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            match key {
                "typing" => {
                    config.typing = value == "true" || value == "1" || value == "yes";
                }
                "typespeed" | "typing_interval" | "typing_interval_ms" => {
                    if let Ok(interval) = value.parse::<u64>() {
                        if interval > 0 && interval <= 1000 {
                            config.typing_interval_ms = interval;
                        }
                    }
                }
                "linenumbers" | "line_numbers" | "number" => {
                    config.show_line_numbers = value == "true" || value == "1" || value == "yes";
                }
                "sidebar" | "sidebar_open" => {
                    config.sidebar_open = value == "true" || value == "1" || value == "yes";
                }
                "page" | "start_page" => {
                    if !value.is_empty() {
                        config.start_page = Some(value.to_string());
                    }
                }
                _ => {} // Unknown setting, ignore
            }
        }
    }
}
