use serde::{Deserialize, Serialize};

/// Viewport width (px) below which the compact layout is used
pub const DEFAULT_COMPACT_BREAKPOINT_PX: u32 = 768;

/// Presentation mode, derived by the caller from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Single pane, driven by the navigation state machine
    Compact,
    /// List, detail and tabs visible side by side
    Wide,
}

impl LayoutMode {
    pub fn from_viewport_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn from_compact_flag(is_compact: bool) -> Self {
        if is_compact {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutMode::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert_eq!(
            LayoutMode::from_viewport_width(767, DEFAULT_COMPACT_BREAKPOINT_PX),
            LayoutMode::Compact
        );
        assert_eq!(
            LayoutMode::from_viewport_width(768, DEFAULT_COMPACT_BREAKPOINT_PX),
            LayoutMode::Wide
        );
    }

    #[test]
    fn test_compact_flag() {
        assert!(LayoutMode::from_compact_flag(true).is_compact());
        assert!(!LayoutMode::from_compact_flag(false).is_compact());
    }
}
