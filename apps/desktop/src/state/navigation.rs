//! # Navigation Controller
//!
//! Flat screen switcher. Every screen shares the central panel and exactly
//! one is visible at a time.
//!
//! ```text
//!                 ┌──────────────┐
//!        ┌───────►│     Home     │◄───────┐
//!        │        └──────┬───────┘        │
//!        │ Back          │ buttons        │ Back
//!        │     ┌─────────┼─────────┐      │
//!        │     ▼         ▼         ▼      │
//!  ┌─────┴─────────┐ ┌───────┐ ┌──────────┴───────┐
//!  │ Product Entry │ │ Sales │ │ Stock Management │
//!  └───────────────┘ └───────┘ └──────────────────┘
//! ```
//!
//! There is no history stack; each non-Home screen wires its own Back button.

/// A named screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    ProductEntry,
    StockManagement,
    Sales,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::ProductEntry,
        Screen::StockManagement,
        Screen::Sales,
    ];

    /// Heading shown at the top of the screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::ProductEntry => "Product Entry",
            Screen::StockManagement => "Stock Management",
            Screen::Sales => "Sales",
        }
    }
}

/// Owns the single "current screen" pointer.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// Starts on Home.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Raises `screen`. Returns true when the visible screen changed.
    pub fn show(&mut self, screen: Screen) -> bool {
        if self.current == screen {
            return false;
        }
        tracing::debug!(from = ?self.current, to = ?screen, "Switching screen");
        self.current = screen;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn test_every_screen_reachable_from_home_and_back() {
        let mut nav = Navigator::new();
        for screen in Screen::ALL.into_iter().filter(|s| *s != Screen::Home) {
            assert!(nav.show(screen));
            assert_eq!(nav.current(), screen);
            assert!(nav.show(Screen::Home));
            assert_eq!(nav.current(), Screen::Home);
        }
    }

    #[test]
    fn test_showing_current_screen_is_not_a_change() {
        let mut nav = Navigator::new();
        assert!(!nav.show(Screen::Home));
        nav.show(Screen::Sales);
        assert!(!nav.show(Screen::Sales));
        assert_eq!(nav.current(), Screen::Sales);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Screen::StockManagement.title(), "Stock Management");
        assert_eq!(Screen::ProductEntry.title(), "Product Entry");
    }
}
