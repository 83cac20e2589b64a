use crate::application::session::Session;
use crate::application::session::calculator::{CalculatorInput, rate_for};
use crate::application::session::layout::LayoutMode;
use crate::application::session::navigation::{NavTarget, View};
use crate::application::session::selection::DetailTab;
use crate::domain::market::instrument::{Holding, Instrument, PricePoint, TickerEntry, or_zero};
use crate::domain::market::projection::Projection;
use crate::domain::market::signal::Signal;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
}

/// Row of the instrument list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub category: String,
    pub price: Decimal,
    pub change: Decimal,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStats {
    pub low52: Decimal,
    pub high52: Decimal,
    pub cagr: Decimal,
    pub holdings: usize,
    pub history: Vec<PricePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingView {
    pub holding: Holding,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorView {
    pub rate_instrument_id: String,
    pub rate: f64,
    pub principal: f64,
    pub years: f64,
    pub projection: Projection,
    /// Instrument picker, only offered by the top-level calculator
    pub picker: Option<Vec<PickerOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum TabContent {
    Overview(OverviewStats),
    Constituents { holdings: Vec<HoldingView> },
    Calculator(CalculatorView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentDetail {
    pub id: String,
    pub desc: String,
    pub price: Decimal,
    pub change: Decimal,
    pub direction: Direction,
    pub active_tab: DetailTab,
    pub content: TabContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// No instruments loaded
    Unavailable,
    Home {
        instruments: Vec<InstrumentSummary>,
    },
    Details {
        detail: InstrumentDetail,
    },
    Calculator {
        calculator: CalculatorView,
    },
    Settings,
    /// Multi-pane layout: list, header and tabs at once
    Wide {
        instruments: Vec<InstrumentSummary>,
        selected_id: String,
        search_query: String,
        detail: InstrumentDetail,
    },
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub layout: LayoutMode,
    pub ticker_tape: Vec<TickerEntry>,
    /// Highlighted bottom-nav item, compact layout only
    pub bottom_nav: Option<NavTarget>,
    pub show_back: bool,
    pub screen: Screen,
}

pub struct ScreenViewModel;

impl ScreenViewModel {
    pub fn build(session: &Session, layout: LayoutMode) -> ViewModel {
        let Some(selected) = session.selected_instrument() else {
            return ViewModel {
                layout,
                ticker_tape: Vec::new(),
                bottom_nav: None,
                show_back: false,
                screen: Screen::Unavailable,
            };
        };

        let ticker_tape = session.repository().ticker_tape().to_vec();

        if !layout.is_compact() {
            let instruments = session
                .repository()
                .search(session.search_query())
                .into_iter()
                .map(Self::summary)
                .collect();

            return ViewModel {
                layout,
                ticker_tape,
                bottom_nav: None,
                show_back: false,
                screen: Screen::Wide {
                    instruments,
                    selected_id: selected.id.clone(),
                    search_query: session.search_query().to_string(),
                    detail: Self::detail(session, selected),
                },
            };
        }

        let view = session.navigation().current_view();
        let screen = match view {
            View::Home => Screen::Home {
                instruments: Self::summaries(session.repository().get_all()),
            },
            View::Details => Screen::Details {
                detail: Self::detail(session, selected),
            },
            View::Calculator => Screen::Calculator {
                calculator: Self::top_level_calculator(session, selected),
            },
            View::Settings => Screen::Settings,
        };

        ViewModel {
            layout,
            ticker_tape,
            bottom_nav: Some(session.bottom_nav_highlight()),
            show_back: view == View::Details,
            screen,
        }
    }

    pub fn summaries(instruments: &[Instrument]) -> Vec<InstrumentSummary> {
        instruments.iter().map(Self::summary).collect()
    }

    pub fn summary(etf: &Instrument) -> InstrumentSummary {
        InstrumentSummary {
            id: etf.id.clone(),
            category: etf.category.clone(),
            price: etf.price_or_zero(),
            change: etf.change_or_zero(),
            direction: direction(etf),
        }
    }

    pub fn overview(etf: &Instrument) -> OverviewStats {
        OverviewStats {
            low52: or_zero(etf.low52),
            high52: or_zero(etf.high52),
            cagr: or_zero(etf.cagr),
            holdings: etf.constituents.len(),
            history: etf.history.clone(),
        }
    }

    pub fn holdings(etf: &Instrument) -> Vec<HoldingView> {
        etf.constituents
            .iter()
            .map(|holding| HoldingView {
                holding: holding.clone(),
                signal: holding.signal(),
            })
            .collect()
    }

    fn detail(session: &Session, etf: &Instrument) -> InstrumentDetail {
        let active_tab = session.selection().active_tab();
        let content = match active_tab {
            DetailTab::Overview => TabContent::Overview(Self::overview(etf)),
            DetailTab::Constituents => TabContent::Constituents {
                holdings: Self::holdings(etf),
            },
            DetailTab::Calculator => TabContent::Calculator(Self::calculator(
                session.detail_calculator(),
                etf,
                None,
            )),
        };

        InstrumentDetail {
            id: etf.id.clone(),
            desc: etf.desc.clone(),
            price: etf.price_or_zero(),
            change: etf.change_or_zero(),
            direction: direction(etf),
            active_tab,
            content,
        }
    }

    fn top_level_calculator(session: &Session, fallback: &Instrument) -> CalculatorView {
        let options = session
            .repository()
            .get_all()
            .iter()
            .map(|etf| PickerOption {
                id: etf.id.clone(),
                label: format!("{} - {}", etf.id, etf.category),
            })
            .collect();

        let etf = session.calculator_instrument().unwrap_or(fallback);
        Self::calculator(session.top_level_calculator(), etf, Some(options))
    }

    fn calculator(
        input: &CalculatorInput,
        etf: &Instrument,
        picker: Option<Vec<PickerOption>>,
    ) -> CalculatorView {
        let rate = rate_for(Some(etf));

        CalculatorView {
            rate_instrument_id: etf.id.clone(),
            rate,
            principal: input.principal(),
            years: input.years(),
            projection: input.project(rate),
            picker,
        }
    }
}

fn direction(etf: &Instrument) -> Direction {
    if etf.is_gaining() {
        Direction::Up
    } else {
        Direction::Down
    }
}
