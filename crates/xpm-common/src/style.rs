//! Plot style configuration handed to the rendering collaborator.
//!
//! The pipeline itself never draws anything; whichever front end consumes a
//! [`crate::Rgb`] grid or numeric surface receives one of these alongside it.
//! Defaults match the house style used for published figures (Arial, 10pt,
//! 600 DPI, inward ticks).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Style settings for rendered figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Font family for all text
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Base font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Output resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Direction of axis tick marks
    #[serde(default)]
    pub tick_direction: TickDirection,

    /// Line width for plotted lines
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Line width for the axes frame
    #[serde(default = "default_axes_line_width")]
    pub axes_line_width: f32,

    /// Font size for legend text
    #[serde(default = "default_font_size")]
    pub legend_font_size: f32,

    /// Whether the legend gets a frame box
    #[serde(default)]
    pub legend_frame: bool,
}

fn default_font_family() -> String {
    "Arial".to_string()
}
fn default_font_size() -> f32 {
    10.0
}
fn default_dpi() -> u32 {
    600
}
fn default_line_width() -> f32 {
    2.0
}
fn default_axes_line_width() -> f32 {
    1.0
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            dpi: default_dpi(),
            tick_direction: TickDirection::default(),
            line_width: default_line_width(),
            axes_line_width: default_axes_line_width(),
            legend_font_size: default_font_size(),
            legend_frame: false,
        }
    }
}

impl PlotStyle {
    /// Load style settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StyleError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse style settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: Self =
            serde_json::from_str(json).map_err(|e| StyleError::ParseError(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.font_size <= 0.0 || self.legend_font_size <= 0.0 {
            return Err(StyleError::ValidationError(
                "font sizes must be positive".to_string(),
            ));
        }
        if self.dpi == 0 {
            return Err(StyleError::ValidationError("dpi must be positive".to_string()));
        }
        if self.line_width <= 0.0 || self.axes_line_width <= 0.0 {
            return Err(StyleError::ValidationError(
                "line widths must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Direction of axis tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    #[default]
    In,
    Out,
}

/// Style-related errors.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
