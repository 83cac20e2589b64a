//! Layout configuration parsing from environment variables.
//!
//! The breakpoint decides between compact and wide layout; the viewport
//! width is only used by the headless driver, which has no real window.

use crate::application::session::layout::DEFAULT_COMPACT_BREAKPOINT_PX;
use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_VIEWPORT_WIDTH_PX: u32 = 1280;

/// Layout environment configuration
#[derive(Debug, Clone)]
pub struct LayoutEnvConfig {
    pub compact_breakpoint_px: u32,
    pub viewport_width_px: u32,
}

impl Default for LayoutEnvConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: DEFAULT_COMPACT_BREAKPOINT_PX,
            viewport_width_px: DEFAULT_VIEWPORT_WIDTH_PX,
        }
    }
}

impl LayoutEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            compact_breakpoint_px: Self::parse_u32(
                "COMPACT_BREAKPOINT_PX",
                DEFAULT_COMPACT_BREAKPOINT_PX,
            )?,
            viewport_width_px: Self::parse_u32("VIEWPORT_WIDTH_PX", DEFAULT_VIEWPORT_WIDTH_PX)?,
        })
    }

    fn parse_u32(key: &str, default: u32) -> Result<u32> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u32>()
            .context(format!("Failed to parse {}", key))
    }
}
