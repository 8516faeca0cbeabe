//! Table widget
//!
//! Rows are addressed by id. The app owns the row set; nothing here keeps
//! track of which rows exist or which one is selected.

use blynk_protocol::{Channel, Pin, Value};

/// Command tags understood by the table widget
pub mod tag {
    pub const ADD: &str = "add";
    pub const UPDATE: &str = "update";
    pub const PICK: &str = "pick";
    pub const CLEAR: &str = "clr";
    pub const SELECT: &str = "select";
    pub const DESELECT: &str = "deselect";
}

/// Proxy for a table widget bound to one virtual pin
pub struct WidgetTable<'a, C: Channel + ?Sized> {
    channel: &'a C,
    pin: Pin,
}

impl<'a, C: Channel + ?Sized> WidgetTable<'a, C> {
    /// Bind a table proxy to `pin` on `channel`
    pub fn new(channel: &'a C, pin: impl Into<Pin>) -> Self {
        Self {
            channel,
            pin: pin.into(),
        }
    }

    /// Pin this widget is bound to
    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    /// Append a row
    pub fn add_row(&self, id: u32, name: &str, value: impl Into<Value>) -> Result<(), C::Error> {
        trace!("table {}: add row {}", self.pin, id);
        self.send(&[tag::ADD.into(), id.into(), name.into(), value.into()])
    }

    /// Update the name and value of an existing row
    pub fn upd_row(&self, id: u32, name: &str, value: impl Into<Value>) -> Result<(), C::Error> {
        trace!("table {}: update row {}", self.pin, id);
        self.send(&[tag::UPDATE.into(), id.into(), name.into(), value.into()])
    }

    /// Scroll to a row
    pub fn pick_row(&self, id: u32) -> Result<(), C::Error> {
        trace!("table {}: pick row {}", self.pin, id);
        self.send(&[tag::PICK.into(), id.into()])
    }

    /// Remove all rows
    pub fn clear(&self) -> Result<(), C::Error> {
        trace!("table {}: clear", self.pin);
        self.send(&[tag::CLEAR.into()])
    }

    /// Mark a row as selected
    pub fn select_row(&self, id: u32) -> Result<(), C::Error> {
        trace!("table {}: select row {}", self.pin, id);
        self.send(&[tag::SELECT.into(), id.into()])
    }

    /// Clear the selection mark of a row
    pub fn deselect_row(&self, id: u32) -> Result<(), C::Error> {
        trace!("table {}: deselect row {}", self.pin, id);
        self.send(&[tag::DESELECT.into(), id.into()])
    }

    fn send(&self, values: &[Value]) -> Result<(), C::Error> {
        self.channel.virtual_write(&self.pin, values)
    }
}
