//! Timer-driven UI effects: the typewriter reveal and the transient
//! "copied" indicator.
//!
//! Both run cooperatively on the single event loop thread: the controller
//! ticks them whenever its input poll times out. Cancellation is by
//! replacement - navigating to another page rebuilds the typewriter set and
//! clears the indicator, so a stale timer can never touch new content.

use std::time::{Duration, Instant};

/// Progressive character-by-character reveal of one code window.
#[derive(Debug, Clone)]
pub struct Typewriter {
    total: usize,
    visible: usize,
    interval: Duration,
    last_tick: Instant,
}

impl Typewriter {
    /// A typewriter that starts hidden and reveals `text` one character per
    /// interval.
    pub fn new(text: &str, interval: Duration) -> Self {
        Self {
            total: text.chars().count(),
            visible: 0,
            interval,
            last_tick: Instant::now(),
        }
    }

    /// A typewriter that is already complete (animation disabled).
    pub fn completed(text: &str) -> Self {
        let total = text.chars().count();
        Self {
            total,
            visible: total,
            interval: Duration::ZERO,
            last_tick: Instant::now(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.visible >= self.total
    }

    /// Advance by however many intervals have elapsed since the last tick.
    /// Returns true when the visible prefix grew.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_done() || self.interval.is_zero() {
            return false;
        }
        let mut advanced = false;
        while now.duration_since(self.last_tick) >= self.interval && !self.is_done() {
            self.visible += 1;
            self.last_tick += self.interval;
            advanced = true;
        }
        if self.is_done() {
            self.last_tick = now;
        }
        advanced
    }

    pub fn reveal_all(&mut self) {
        self.visible = self.total;
    }

    /// The currently revealed prefix of `text`, on a char boundary.
    pub fn visible_prefix<'a>(&self, text: &'a str) -> &'a str {
        if self.is_done() {
            return text;
        }
        match text.char_indices().nth(self.visible) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }
}

/// Deadline-based "copied to clipboard" feedback. Armed only when the
/// clipboard write succeeded; expires on its own or is cleared by navigation.
#[derive(Debug, Clone, Default)]
pub struct CopiedIndicator {
    deadline: Option<Instant>,
}

/// How long the indicator stays visible after a successful copy.
pub const COPIED_DURATION: Duration = Duration::from_secs(2);

impl CopiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + COPIED_DURATION);
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    /// True while armed and not yet expired. Expiry clears the deadline so
    /// later calls are cheap.
    pub fn is_active(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.deadline = None;
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typewriter_advances_one_char_per_interval() {
        let mut tw = Typewriter::new("abcd", Duration::from_millis(10));
        let start = tw.last_tick;

        assert_eq!(tw.visible_prefix("abcd"), "");
        assert!(tw.tick(start + Duration::from_millis(10)));
        assert_eq!(tw.visible_prefix("abcd"), "a");
        assert!(tw.tick(start + Duration::from_millis(30)));
        assert_eq!(tw.visible_prefix("abcd"), "abc");
    }

    #[test]
    fn test_typewriter_terminates_at_full_length() {
        let mut tw = Typewriter::new("ab", Duration::from_millis(10));
        let start = tw.last_tick;
        tw.tick(start + Duration::from_secs(60));
        assert!(tw.is_done());
        assert_eq!(tw.visible_prefix("ab"), "ab");
        // Done typewriters never advance again.
        assert!(!tw.tick(start + Duration::from_secs(120)));
    }

    #[test]
    fn test_typewriter_prefix_respects_char_boundaries() {
        let mut tw = Typewriter::new("a⚙b", Duration::from_millis(10));
        let start = tw.last_tick;
        tw.tick(start + Duration::from_millis(20));
        assert_eq!(tw.visible_prefix("a⚙b"), "a⚙");
    }

    #[test]
    fn test_completed_typewriter_starts_revealed() {
        let tw = Typewriter::completed("hello");
        assert!(tw.is_done());
        assert_eq!(tw.visible_prefix("hello"), "hello");
    }

    #[test]
    fn test_reveal_all_skips_ahead() {
        let mut tw = Typewriter::new("hello", Duration::from_millis(10));
        tw.reveal_all();
        assert!(tw.is_done());
    }

    #[test]
    fn test_copied_indicator_expires() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        assert!(!indicator.is_active(now));

        indicator.arm(now);
        assert!(indicator.is_active(now + Duration::from_millis(500)));
        assert!(!indicator.is_active(now + COPIED_DURATION));
        // Expiry is latched.
        assert!(!indicator.is_active(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_copied_indicator_cleared_by_navigation() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        indicator.arm(now);
        indicator.clear();
        assert!(!indicator.is_active(now + Duration::from_millis(1)));
    }
}
