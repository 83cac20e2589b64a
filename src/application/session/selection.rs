use crate::domain::repositories::InstrumentRepository;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Tabs of the instrument detail pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailTab {
    Overview,
    Constituents,
    Calculator,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Overview,
        DetailTab::Constituents,
        DetailTab::Calculator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Constituents => "Constituents",
            DetailTab::Calculator => "Calculator",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which instrument and which detail tab are active.
///
/// Shared by both layout modes.
#[derive(Clone)]
pub struct SelectionState {
    repository: Arc<dyn InstrumentRepository>,
    selected_instrument_id: String,
    active_tab: DetailTab,
}

impl SelectionState {
    pub fn new(repository: Arc<dyn InstrumentRepository>) -> Self {
        let selected_instrument_id = repository
            .first()
            .map(|etf| etf.id.clone())
            .unwrap_or_default();

        Self {
            repository,
            selected_instrument_id,
            active_tab: DetailTab::Overview,
        }
    }

    pub fn selected_instrument_id(&self) -> &str {
        &self.selected_instrument_id
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_instrument_id.is_empty()
    }

    /// Select an instrument and land on its overview.
    ///
    /// Unknown ids resolve to the first instrument.
    pub fn select_instrument(&mut self, id: &str) {
        let resolved = self
            .repository
            .get_by_id(id)
            .map(|etf| etf.id.clone())
            .unwrap_or_default();

        debug!(
            "Selection: instrument {} -> {} (tab {} -> {})",
            self.selected_instrument_id,
            resolved,
            self.active_tab,
            DetailTab::Overview
        );
        self.selected_instrument_id = resolved;
        self.active_tab = DetailTab::Overview;
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        if self.active_tab != tab {
            debug!("Selection: tab {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected_instrument_id", &self.selected_instrument_id)
            .field("active_tab", &self.active_tab)
            .finish()
    }
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.selected_instrument_id == other.selected_instrument_id
            && self.active_tab == other.active_tab
    }
}
