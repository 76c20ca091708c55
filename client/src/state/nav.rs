//! Mobile navigation menu state.
//!
//! The menu only matters below the `md` breakpoint; above it the toggle and
//! slide-down panel are hidden by CSS and the inline nav is always shown, so
//! the state is simply ignored there.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Visibility of the slide-down navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that change the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Menu button pressed.
    Toggle,
    /// A navigation link was selected.
    Navigate,
}

impl NavMenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Close the menu. Closing a closed menu is a no-op.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    #[must_use]
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Toggle => self.toggle(),
            NavAction::Navigate => self.close(),
        }
    }

    /// `aria-label` for the menu button in this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }
}
