//! Commands emitted over the channel and their message bodies
//!
//! A Blynk hardware message carries a NUL-separated body:
//! ```text
//! virtual write:   vw \0 PIN \0 VALUE \0 VALUE ...
//! property update: PIN \0 PROPERTY \0 VALUE \0 VALUE ...
//! ```
//! The surrounding header (message id, length) belongs to the transport and
//! is not produced here.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::value::{Pin, Value};

/// Field separator inside a message body
pub const FIELD_SEPARATOR: char = '\0';

/// Largest body the default Blynk buffer accepts
pub const MAX_BODY_SIZE: usize = 1024;

/// Command code of a hardware (virtual write) message
pub const MSG_HW: u8 = 20;
/// Command code of a property update message
pub const MSG_PROPERTY: u8 = 19;

/// Body tag of a virtual write
pub const VIRTUAL_WRITE_TAG: &str = "vw";

/// Errors that can occur while building a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BodyError {
    /// Body exceeds `MAX_BODY_SIZE`
    BodyTooLarge,
}

/// A single call made on a channel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Ordered values written to a virtual pin
    VirtualWrite { pin: Pin, values: Vec<Value> },
    /// Named property set on the widget bound to a pin
    SetProperty {
        pin: Pin,
        property: String,
        values: Vec<Value>,
    },
}

impl Command {
    /// Build a virtual write command
    pub fn virtual_write(pin: &Pin, values: &[Value]) -> Self {
        Command::VirtualWrite {
            pin: pin.clone(),
            values: values.to_vec(),
        }
    }

    /// Build a property update command
    pub fn set_property(pin: &Pin, property: &str, values: &[Value]) -> Self {
        Command::SetProperty {
            pin: pin.clone(),
            property: String::from(property),
            values: values.to_vec(),
        }
    }

    /// Target pin
    pub fn pin(&self) -> &Pin {
        match self {
            Command::VirtualWrite { pin, .. } | Command::SetProperty { pin, .. } => pin,
        }
    }

    /// Positional values, in call order
    pub fn values(&self) -> &[Value] {
        match self {
            Command::VirtualWrite { values, .. } | Command::SetProperty { values, .. } => values,
        }
    }

    /// Property name, for property updates
    pub fn property(&self) -> Option<&str> {
        match self {
            Command::SetProperty { property, .. } => Some(property),
            Command::VirtualWrite { .. } => None,
        }
    }

    /// Returns true if this is a virtual write
    pub fn is_virtual_write(&self) -> bool {
        matches!(self, Command::VirtualWrite { .. })
    }

    /// Command code of the message this body travels in
    pub fn msg_type(&self) -> u8 {
        match self {
            Command::VirtualWrite { .. } => MSG_HW,
            Command::SetProperty { .. } => MSG_PROPERTY,
        }
    }

    /// Encode the NUL-separated message body
    pub fn encode_body(&self) -> Result<String, BodyError> {
        let mut body = String::new();
        match self {
            Command::VirtualWrite { pin, values } => {
                body.push_str(VIRTUAL_WRITE_TAG);
                push_field(&mut body, pin);
                for value in values {
                    push_field(&mut body, value);
                }
            }
            Command::SetProperty {
                pin,
                property,
                values,
            } => {
                // Writing into a String cannot fail
                let _ = write!(body, "{}", pin);
                push_field(&mut body, property);
                for value in values {
                    push_field(&mut body, value);
                }
            }
        }

        if body.len() > MAX_BODY_SIZE {
            return Err(BodyError::BodyTooLarge);
        }
        Ok(body)
    }
}

fn push_field(body: &mut String, field: impl core::fmt::Display) {
    body.push(FIELD_SEPARATOR);
    let _ = write!(body, "{}", field);
}

/// Split a message body into its fields
pub fn fields(body: &str) -> impl Iterator<Item = &str> {
    body.split(FIELD_SEPARATOR)
}
