//! Blynk virtual-pin channel contract
//!
//! This crate defines what a widget proxy may ask of the link to the Blynk
//! mobile app: write values to a virtual pin, or set a named property on
//! the widget bound to a pin.
//!
//! # Message Bodies
//!
//! Commands travel as NUL-separated bodies:
//! ```text
//! ┌────┬─────┬─────────┬─────────┬─────┐
//! │ vw │ PIN │ VALUE 1 │ VALUE 2 │ ... │   virtual write  (MSG_HW)
//! ├────┴─┬───┴──────┬──┴──────┬──┴─────┤
//! │ PIN  │ PROPERTY │ VALUE 1 │ ...    │   property update (MSG_PROPERTY)
//! └──────┴──────────┴─────────┴────────┘
//! ```
//!
//! Framing, authentication, and reconnection belong to the channel
//! implementation and are not covered here.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod channel;
pub mod message;
pub mod value;

pub use channel::{Channel, ChannelError, RecordingChannel};
pub use message::{
    fields, BodyError, Command, FIELD_SEPARATOR, MAX_BODY_SIZE, MSG_HW, MSG_PROPERTY,
};
pub use value::{Pin, Value, MAX_PIN_NAME_LEN};
