//! Configuration module for ETF Nexus.
//!
//! Structured configuration loaded from environment variables, split into
//! the data source and the layout settings.

mod data_config;
mod layout_config;

pub use data_config::{DEFAULT_DATA_PATH, DataEnvConfig};
pub use layout_config::{DEFAULT_VIEWPORT_WIDTH_PX, LayoutEnvConfig};

use crate::application::session::layout::LayoutMode;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Data (from DataEnvConfig)
    pub data_path: PathBuf,

    // Layout (from LayoutEnvConfig)
    pub compact_breakpoint_px: u32,
    pub viewport_width_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        let data = DataEnvConfig::default();
        let layout = LayoutEnvConfig::default();
        Self {
            data_path: data.data_path,
            compact_breakpoint_px: layout.compact_breakpoint_px,
            viewport_width_px: layout.viewport_width_px,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let data = DataEnvConfig::from_env();
        let layout = LayoutEnvConfig::from_env().context("Failed to load layout config")?;

        Ok(Self {
            data_path: data.data_path,
            compact_breakpoint_px: layout.compact_breakpoint_px,
            viewport_width_px: layout.viewport_width_px,
        })
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_viewport_width(self.viewport_width_px, self.compact_breakpoint_px)
    }
}
