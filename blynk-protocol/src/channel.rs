//! The channel contract shared by every widget proxy
//!
//! A channel is the already-connected link to the mobile app. It owns the
//! wire format, reconnection, and any buffering; widget proxies only hand
//! it a pin and an ordered list of values.

use alloc::vec::Vec;
use core::cell::{Cell, Ref, RefCell};

use crate::message::Command;
use crate::value::{Pin, Value};

/// Link to the mobile app
///
/// Methods take `&self` so that several widgets can share one channel
/// through plain references. Implementations that need to mutate state
/// use interior mutability.
pub trait Channel {
    /// Error raised by this channel, returned unmodified to widget callers
    type Error;

    /// Send an ordered sequence of values to a virtual pin
    fn virtual_write(&self, pin: &Pin, values: &[Value]) -> Result<(), Self::Error>;

    /// Set a named display property on the widget bound to a pin
    fn set_property(&self, pin: &Pin, property: &str, values: &[Value])
        -> Result<(), Self::Error>;
}

impl<C: Channel + ?Sized> Channel for &C {
    type Error = C::Error;

    fn virtual_write(&self, pin: &Pin, values: &[Value]) -> Result<(), Self::Error> {
        (**self).virtual_write(pin, values)
    }

    fn set_property(
        &self,
        pin: &Pin,
        property: &str,
        values: &[Value],
    ) -> Result<(), Self::Error> {
        (**self).set_property(pin, property, values)
    }
}

/// Errors reported by `RecordingChannel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Link to the app is down
    Disconnected,
    /// The app refused the command
    Rejected,
}

/// Channel that records every call instead of sending it
///
/// Used to inspect what widgets emit, in tests or when running without a
/// connection.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    commands: RefCell<Vec<Command>>,
    failure: Cell<Option<ChannelError>>,
}

impl RecordingChannel {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that rejects every call with `error`
    ///
    /// Rejected calls are not recorded.
    pub fn failing(error: ChannelError) -> Self {
        let channel = Self::new();
        channel.failure.set(Some(error));
        channel
    }

    /// Make subsequent calls fail (`Some`) or succeed (`None`)
    pub fn set_failure(&self, error: Option<ChannelError>) {
        self.failure.set(error);
    }

    /// Borrow all recorded commands, oldest first
    pub fn commands(&self) -> Ref<'_, [Command]> {
        Ref::map(self.commands.borrow(), |c| c.as_slice())
    }

    /// Most recent command
    pub fn last(&self) -> Option<Command> {
        self.commands.borrow().last().cloned()
    }

    /// Remove and return all recorded commands
    pub fn take(&self) -> Vec<Command> {
        self.commands.take()
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Forget all recorded commands
    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    fn record(&self, command: Command) -> Result<(), ChannelError> {
        if let Some(error) = self.failure.get() {
            return Err(error);
        }
        self.commands.borrow_mut().push(command);
        Ok(())
    }
}

impl Channel for RecordingChannel {
    type Error = ChannelError;

    fn virtual_write(&self, pin: &Pin, values: &[Value]) -> Result<(), Self::Error> {
        self.record(Command::virtual_write(pin, values))
    }

    fn set_property(
        &self,
        pin: &Pin,
        property: &str,
        values: &[Value],
    ) -> Result<(), Self::Error> {
        self.record(Command::set_property(pin, property, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let channel = RecordingChannel::new();
        channel.virtual_write(&Pin::Number(1), &["a".into()]).unwrap();
        channel
            .set_property(&Pin::Number(2), "scale", &[10u8.into()])
            .unwrap();

        let commands = channel.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].is_virtual_write());
        assert_eq!(commands[1].property(), Some("scale"));
    }

    #[test]
    fn test_take_empties() {
        let channel = RecordingChannel::new();
        channel.virtual_write(&Pin::Number(1), &[]).unwrap();
        assert_eq!(channel.take().len(), 1);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_failing_channel() {
        let channel = RecordingChannel::failing(ChannelError::Disconnected);
        let result = channel.virtual_write(&Pin::Number(1), &["clr".into()]);
        assert_eq!(result, Err(ChannelError::Disconnected));
        assert!(channel.is_empty());

        channel.set_failure(None);
        channel.virtual_write(&Pin::Number(1), &["clr".into()]).unwrap();
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn test_reference_is_a_channel() {
        fn send<C: Channel>(channel: C) -> Result<(), C::Error> {
            channel.virtual_write(&Pin::Number(8), &["x".into()])
        }

        let channel = RecordingChannel::new();
        send(&channel).unwrap();
        assert_eq!(channel.last().unwrap().pin(), &Pin::Number(8));
    }
}
