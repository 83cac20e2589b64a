pub mod screen_view_model;

pub use screen_view_model::{
    CalculatorView, Direction, HoldingView, InstrumentDetail, InstrumentSummary, OverviewStats,
    PickerOption, Screen, ScreenViewModel, TabContent, ViewModel,
};
