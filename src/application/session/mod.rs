//! Session state for one user.
//!
//! A single state machine drives both layout modes. The layout is passed in
//! with every action; navigation state only takes part in compact mode while
//! selection state is shared by both.

pub mod calculator;
pub mod layout;
pub mod navigation;
pub mod selection;

use crate::domain::market::instrument::Instrument;
use crate::domain::repositories::InstrumentRepository;
use calculator::CalculatorInput;
use layout::LayoutMode;
use navigation::{NavTarget, NavigationState, View};
use selection::{DetailTab, SelectionState};
use std::sync::Arc;
use tracing::debug;

/// Discrete user actions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Choose an instrument from the list
    PickInstrument(String),
    SelectTab(DetailTab),
    Back,
    BottomNav(NavTarget),
    SetPrincipal(f64),
    SetYears(f64),
    /// Choose the rate instrument in the top-level calculator
    PickCalculatorInstrument(String),
    /// Filter the wide-layout instrument list
    Search(String),
}

pub struct Session {
    repository: Arc<dyn InstrumentRepository>,
    selection: SelectionState,
    navigation: NavigationState,
    detail_calculator: CalculatorInput,
    top_level_calculator: CalculatorInput,
    search_query: String,
}

impl Session {
    pub fn new(repository: Arc<dyn InstrumentRepository>) -> Self {
        let selection = SelectionState::new(repository.clone());
        let first = first_id(repository.as_ref());

        Self {
            repository,
            selection,
            navigation: NavigationState::new(),
            detail_calculator: CalculatorInput::new(first.clone()),
            top_level_calculator: CalculatorInput::new(first),
            search_query: String::new(),
        }
    }

    pub fn repository(&self) -> &dyn InstrumentRepository {
        self.repository.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Inputs of the calculator tab inside the detail view
    pub fn detail_calculator(&self) -> &CalculatorInput {
        &self.detail_calculator
    }

    /// Inputs of the compact layout's standalone calculator view
    pub fn top_level_calculator(&self) -> &CalculatorInput {
        &self.top_level_calculator
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// No data loaded; the presentation layer must show an unavailable state
    pub fn is_unavailable(&self) -> bool {
        self.repository.is_empty()
    }

    pub fn selected_instrument(&self) -> Option<&Instrument> {
        self.repository
            .get_by_id(self.selection.selected_instrument_id())
    }

    /// Instrument whose CAGR feeds the top-level calculator
    pub fn calculator_instrument(&self) -> Option<&Instrument> {
        self.repository
            .get_by_id(self.top_level_calculator.rate_instrument_id())
    }

    pub fn bottom_nav_highlight(&self) -> NavTarget {
        self.navigation.highlighted()
    }

    pub fn dispatch(&mut self, action: Action, layout: LayoutMode) {
        if self.is_unavailable() {
            debug!("Session: no data, ignoring {:?}", action);
            return;
        }

        match action {
            Action::PickInstrument(id) => self.pick_instrument(&id, layout),
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::Back => {
                if layout.is_compact() {
                    self.navigation.back();
                }
            }
            Action::BottomNav(target) => {
                if layout.is_compact() {
                    self.follow_bottom_nav(target);
                }
            }
            Action::SetPrincipal(principal) => {
                self.active_calculator_mut(layout).set_principal(principal)
            }
            Action::SetYears(years) => self.active_calculator_mut(layout).set_years(years),
            Action::PickCalculatorInstrument(id) => {
                let resolved = first_or(self.repository.get_by_id(&id));
                self.top_level_calculator.set_rate_instrument(resolved);
            }
            Action::Search(query) => self.search_query = query,
        }
    }

    /// The top-level calculator only exists on the compact calculator view;
    /// everywhere else the sliders belong to the detail tab.
    fn active_calculator_mut(&mut self, layout: LayoutMode) -> &mut CalculatorInput {
        if layout.is_compact() && self.navigation.current_view() == View::Calculator {
            &mut self.top_level_calculator
        } else {
            &mut self.detail_calculator
        }
    }

    fn pick_instrument(&mut self, id: &str, layout: LayoutMode) {
        match layout {
            LayoutMode::Compact if self.navigation.current_view() == View::Home => {
                self.navigation.open_details(&mut self.selection, id);
            }
            _ => self.selection.select_instrument(id),
        }
    }

    fn select_tab(&mut self, tab: DetailTab) {
        let entering_calculator =
            tab == DetailTab::Calculator && self.selection.active_tab() != DetailTab::Calculator;

        self.selection.select_tab(tab);
        if entering_calculator {
            let id = self.selection.selected_instrument_id().to_string();
            self.detail_calculator.reset(id);
        }
    }

    fn follow_bottom_nav(&mut self, target: NavTarget) {
        let changed = self.navigation.navigate(target);
        if changed && target == NavTarget::Calculator {
            self.top_level_calculator
                .reset(first_id(self.repository.as_ref()));
        }
    }
}

fn first_id(repository: &dyn InstrumentRepository) -> String {
    first_or(repository.first())
}

fn first_or(instrument: Option<&Instrument>) -> String {
    instrument.map(|etf| etf.id.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::instrument::Instrument;
    use crate::infrastructure::repositories::in_memory::InMemoryInstrumentRepository;
    use rust_decimal_macros::dec;

    fn session() -> Session {
        let instruments = vec![
            Instrument {
                id: "NIFTYBEES".to_string(),
                cagr: Some(dec!(13.5)),
                ..Default::default()
            },
            Instrument {
                id: "ITBEES".to_string(),
                cagr: Some(dec!(18.2)),
                ..Default::default()
            },
        ];
        Session::new(Arc::new(InMemoryInstrumentRepository::from_instruments(
            instruments,
        )))
    }

    #[test]
    fn test_compact_pick_opens_details() {
        let mut s = session();
        s.dispatch(Action::PickInstrument("ITBEES".into()), LayoutMode::Compact);

        assert_eq!(s.navigation().current_view(), View::Details);
        assert_eq!(s.selected_instrument().unwrap().id, "ITBEES");
    }

    #[test]
    fn test_wide_pick_leaves_navigation_alone() {
        let mut s = session();
        s.dispatch(Action::PickInstrument("ITBEES".into()), LayoutMode::Wide);

        assert_eq!(s.navigation().current_view(), View::Home);
        assert_eq!(s.selection().selected_instrument_id(), "ITBEES");
    }

    #[test]
    fn test_wide_ignores_navigation_actions() {
        let mut s = session();
        s.dispatch(Action::BottomNav(NavTarget::Settings), LayoutMode::Wide);
        s.dispatch(Action::Back, LayoutMode::Wide);
        assert_eq!(s.navigation().current_view(), View::Home);
    }

    #[test]
    fn test_entering_calculator_tab_resets_inputs() {
        let mut s = session();
        s.dispatch(Action::PickInstrument("ITBEES".into()), LayoutMode::Wide);
        s.dispatch(Action::SelectTab(DetailTab::Calculator), LayoutMode::Wide);
        s.dispatch(Action::SetPrincipal(300_000.0), LayoutMode::Wide);

        // Same tab again keeps the inputs
        s.dispatch(Action::SelectTab(DetailTab::Calculator), LayoutMode::Wide);
        assert_eq!(s.detail_calculator().principal(), 300_000.0);

        s.dispatch(Action::SelectTab(DetailTab::Overview), LayoutMode::Wide);
        s.dispatch(Action::SelectTab(DetailTab::Calculator), LayoutMode::Wide);
        assert_eq!(s.detail_calculator().principal(), 100_000.0);
        assert_eq!(s.detail_calculator().rate_instrument_id(), "ITBEES");
    }

    #[test]
    fn test_top_level_calculator_defaults_to_first_instrument() {
        let mut s = session();
        s.dispatch(Action::PickInstrument("ITBEES".into()), LayoutMode::Compact);
        s.dispatch(Action::BottomNav(NavTarget::Calculator), LayoutMode::Compact);

        assert_eq!(s.navigation().current_view(), View::Calculator);
        assert_eq!(s.calculator_instrument().unwrap().id, "NIFTYBEES");
        assert_eq!(s.selection().selected_instrument_id(), "ITBEES");
    }

    #[test]
    fn test_calculator_picker_unknown_id_falls_back() {
        let mut s = session();
        s.dispatch(Action::BottomNav(NavTarget::Calculator), LayoutMode::Compact);
        s.dispatch(
            Action::PickCalculatorInstrument("ITBEES".into()),
            LayoutMode::Compact,
        );
        assert_eq!(s.top_level_calculator().rate_instrument_id(), "ITBEES");

        s.dispatch(
            Action::PickCalculatorInstrument("MISSING".into()),
            LayoutMode::Compact,
        );
        assert_eq!(s.top_level_calculator().rate_instrument_id(), "NIFTYBEES");
    }

    #[test]
    fn test_sliders_follow_the_active_calculator() {
        let mut s = session();
        s.dispatch(Action::BottomNav(NavTarget::Calculator), LayoutMode::Compact);
        s.dispatch(Action::SetYears(15.0), LayoutMode::Compact);
        assert_eq!(s.top_level_calculator().years(), 15.0);
        assert_eq!(s.detail_calculator().years(), 5.0);

        // Same navigation state, but wide has no top-level calculator
        s.dispatch(Action::SetYears(3.0), LayoutMode::Wide);
        assert_eq!(s.top_level_calculator().years(), 15.0);
        assert_eq!(s.detail_calculator().years(), 3.0);
    }

    #[test]
    fn test_empty_session_ignores_actions() {
        let mut s = Session::new(Arc::new(InMemoryInstrumentRepository::default()));
        assert!(s.is_unavailable());

        s.dispatch(Action::PickInstrument("ITBEES".into()), LayoutMode::Compact);
        s.dispatch(Action::BottomNav(NavTarget::Settings), LayoutMode::Compact);

        assert_eq!(s.navigation().current_view(), View::Home);
        assert!(s.selected_instrument().is_none());
    }
}
