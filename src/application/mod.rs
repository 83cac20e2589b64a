// Per-user session state (selection, navigation, calculator)
pub mod session;
