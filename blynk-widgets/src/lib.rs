//! Client-side proxies for Blynk app widgets
//!
//! This crate provides:
//! - `WidgetLcd` for the 16x2 LCD widget
//! - `WidgetImage` for the image gallery widget
//! - `WidgetTable` for the table widget
//! - `WidgetBindings` describing which pin each widget is bound to
//!
//! # Architecture
//!
//! Every proxy borrows a shared `Channel` and is bound to one virtual pin
//! for its whole life. Each method formats its arguments and makes exactly
//! one channel call; errors come back from the channel unchanged.
//!
//! ```text
//! WidgetLcd ───┐
//! WidgetImage ─┼──> &Channel ──> mobile app
//! WidgetTable ─┘
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

/// Trace a forwarded command when defmt logging is enabled
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    };
}

pub mod bindings;
pub mod image;
pub mod lcd;
pub mod table;

// Re-export key types
pub use bindings::{ConfigError, WidgetBindings};
pub use blynk_protocol::{Channel, Pin, Value};
pub use image::WidgetImage;
pub use lcd::{WidgetLcd, LCD_COLS, LCD_ROWS};
pub use table::WidgetTable;
