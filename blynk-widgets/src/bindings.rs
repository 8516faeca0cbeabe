//! Widget-to-pin bindings
//!
//! Mirrors the widget layout of the mobile app project so that proxies can
//! be created from one place. With the `toml` feature the bindings can be
//! read from a document like:
//!
//! ```toml
//! lcd = 1
//! image = "V2"
//! table = 3
//! ```

use blynk_protocol::{Channel, Pin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{WidgetImage, WidgetLcd, WidgetTable};

/// Bindings parse error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document is not valid TOML or does not match the bindings layout
    Parse,
}

/// Pins of the widgets in the app project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WidgetBindings {
    /// LCD widget pin
    pub lcd: Option<Pin>,
    /// Image gallery widget pin
    pub image: Option<Pin>,
    /// Table widget pin
    pub table: Option<Pin>,
}

impl WidgetBindings {
    /// Create bindings with no widgets
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the LCD widget to `pin`
    pub fn with_lcd(mut self, pin: impl Into<Pin>) -> Self {
        self.lcd = Some(pin.into());
        self
    }

    /// Bind the image gallery widget to `pin`
    pub fn with_image(mut self, pin: impl Into<Pin>) -> Self {
        self.image = Some(pin.into());
        self
    }

    /// Bind the table widget to `pin`
    pub fn with_table(mut self, pin: impl Into<Pin>) -> Self {
        self.table = Some(pin.into());
        self
    }

    /// LCD proxy, if an LCD is bound
    pub fn lcd<'a, C: Channel + ?Sized>(&self, channel: &'a C) -> Option<WidgetLcd<'a, C>> {
        self.lcd.clone().map(|pin| WidgetLcd::new(channel, pin))
    }

    /// Image gallery proxy, if a gallery is bound
    pub fn image<'a, C: Channel + ?Sized>(&self, channel: &'a C) -> Option<WidgetImage<'a, C>> {
        self.image.clone().map(|pin| WidgetImage::new(channel, pin))
    }

    /// Table proxy, if a table is bound
    pub fn table<'a, C: Channel + ?Sized>(&self, channel: &'a C) -> Option<WidgetTable<'a, C>> {
        self.table.clone().map(|pin| WidgetTable::new(channel, pin))
    }

    /// Parse bindings from a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|_e| {
            trace!("bindings: invalid document");
            ConfigError::Parse
        })
    }
}
