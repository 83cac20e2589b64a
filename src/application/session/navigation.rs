//! Top-level view state machine of the compact layout.
//!
//! ```text
//!   home --pick--> details --back--> home
//!   home|details|settings --calculator--> calculator
//!   calculator|settings|details --home--> home
//!   any --settings--> settings
//! ```

use super::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    Details,
    Calculator,
    Settings,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::Details => write!(f, "details"),
            View::Calculator => write!(f, "calculator"),
            View::Settings => write!(f, "settings"),
        }
    }
}

/// Bottom navigation items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    Home,
    Calculator,
    Settings,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::Calculator, NavTarget::Settings];

    pub fn view(&self) -> View {
        match self {
            NavTarget::Home => View::Home,
            NavTarget::Calculator => View::Calculator,
            NavTarget::Settings => View::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_view: View,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            current_view: View::Home,
        }
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Bottom-nav item shown as active; details belongs to home
    pub fn highlighted(&self) -> NavTarget {
        match self.current_view {
            View::Home | View::Details => NavTarget::Home,
            View::Calculator => NavTarget::Calculator,
            View::Settings => NavTarget::Settings,
        }
    }

    /// Pick an instrument from the home list.
    ///
    /// Only valid on `home`. Selects the instrument and moves to `details`,
    /// unless nothing could be selected.
    pub fn open_details(&mut self, selection: &mut SelectionState, id: &str) -> bool {
        if self.current_view != View::Home {
            debug!("Navigation: ignoring pick of {} in {}", id, self.current_view);
            return false;
        }

        selection.select_instrument(id);
        if !selection.has_selection() {
            debug!("Navigation: no instrument to show for {}", id);
            return false;
        }

        self.transition(View::Details)
    }

    /// Leave `details` for `home`; selection is kept
    pub fn back(&mut self) -> bool {
        if self.current_view != View::Details {
            debug!("Navigation: back ignored in {}", self.current_view);
            return false;
        }
        self.transition(View::Home)
    }

    /// Follow a bottom-nav item. Returns whether the view changed.
    pub fn navigate(&mut self, target: NavTarget) -> bool {
        self.transition(target.view())
    }

    fn transition(&mut self, to: View) -> bool {
        if self.current_view == to {
            return false;
        }
        debug!("Navigation: {} -> {}", self.current_view, to);
        self.current_view = to;
        true
    }
}
