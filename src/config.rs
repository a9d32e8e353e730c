//! Builds the demo objects from a TOML description.
//!
//! ```toml
//! [text_view]
//! origin = { x = 0.0, y = 0.0 }
//! extent = { width = 10.0, height = 5.0 }
//! empty = false
//!
//! [window]
//! contents = "Hello, decorators"
//! scroll = true
//! border_width = 1
//! drop_shadow = 2.0
//!
//! [backpack]
//! base = "plain"
//! features = ["laptop_slot", "usb_charge", "water_bottle"]
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::adapter::PlainTextView;
use crate::decorator::backpack::{assemble_with, Backpack, Feature, PlainBackpack};
use crate::decorator::visual::{
    BorderDecorator, DropShadowDecorator, ScrollDecorator, TextArea, VisualComponent, Window,
};
use crate::error::PatternError;
use crate::geometry::{Coord, Extent, Point};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternsConfig {
    #[serde(default)]
    pub text_view: TextViewConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub backpack: BackpackConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextViewConfig {
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub extent: Extent,
    #[serde(default)]
    pub empty: bool,
}

/// Layers wrap the text area in a fixed order: scroll, border, drop shadow.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub contents: Option<String>,
    #[serde(default = "default_window_extent")]
    pub extent: Extent,
    #[serde(default)]
    pub scroll: bool,
    pub border_width: Option<u32>,
    pub drop_shadow: Option<Coord>,
}

fn default_window_extent() -> Extent {
    Extent::new(80.0, 24.0).unwrap_or_default()
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            contents: None,
            extent: default_window_extent(),
            scroll: false,
            border_width: None,
            drop_shadow: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackpackBase {
    Plain,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackpackConfig {
    pub base: Option<BackpackBase>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl PatternsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PatternError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PatternError> {
        info!("loading patterns config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn text_view(&self) -> PlainTextView {
        let TextViewConfig {
            origin,
            extent,
            empty,
        } = self.text_view;
        PlainTextView::new(origin, extent, empty)
    }

    pub fn build_window(&self) -> Result<Window, PatternError> {
        let config = &self.window;
        let contents = config
            .contents
            .as_deref()
            .ok_or_else(|| PatternError::missing("window.contents"))?;
        let mut component: Box<dyn VisualComponent> =
            Box::new(TextArea::new(contents, config.extent));
        if config.scroll {
            component = Box::new(ScrollDecorator::new(component));
        }
        if let Some(width) = config.border_width {
            component = Box::new(BorderDecorator::new(component, width));
        }
        if let Some(offset) = config.drop_shadow {
            component = Box::new(DropShadowDecorator::new(component, offset));
        }

        let mut window = Window::new();
        window.set_contents(component);
        Ok(window)
    }

    pub fn build_backpack(&self) -> Result<Box<dyn Backpack>, PatternError> {
        let config = &self.backpack;
        let base: Box<dyn Backpack> = match config.base {
            Some(BackpackBase::Plain) => Box::new(PlainBackpack),
            None => return Err(PatternError::missing("backpack.base")),
        };
        debug!("backpack features: {:?}", config.features);
        Ok(assemble_with(base, &config.features))
    }
}
