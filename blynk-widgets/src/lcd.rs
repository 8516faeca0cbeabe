//! LCD widget
//!
//! The app-side LCD is a 16x2 character grid in "advanced" mode. Text is
//! placed with a single payload that packs the command tag, cursor
//! position, and text as NUL-separated fields.

use alloc::format;
use alloc::string::String;
use core::fmt::Display;

use blynk_protocol::{Channel, Pin, Value, FIELD_SEPARATOR};

/// Nominal number of columns (x range is 0..LCD_COLS)
pub const LCD_COLS: u8 = 16;

/// Nominal number of rows (y range is 0..LCD_ROWS)
pub const LCD_ROWS: u8 = 2;

/// Token that clears the display
pub const CLEAR_TOKEN: &str = "clr";

/// Tag of a print command
pub const PRINT_TAG: &str = "p";

/// Build the payload that prints `text` at (`x`, `y`)
///
/// Coordinates are not range-checked; the app decides what to do with
/// positions outside the grid.
pub fn print_payload(x: u8, y: u8, text: impl Display) -> String {
    let sep = FIELD_SEPARATOR;
    format!("{PRINT_TAG}{sep}{x}{sep}{y}{sep}{text}")
}

/// Proxy for an LCD widget bound to one virtual pin
pub struct WidgetLcd<'a, C: Channel + ?Sized> {
    channel: &'a C,
    pin: Pin,
}

impl<'a, C: Channel + ?Sized> WidgetLcd<'a, C> {
    /// Bind an LCD proxy to `pin` on `channel`
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

    /// Clear the display
    pub fn clear(&self) -> Result<(), C::Error> {
        trace!("lcd {}: clear", self.pin);
        self.channel
            .virtual_write(&self.pin, &[Value::from(CLEAR_TOKEN)])
    }

    /// Print `text` with the cursor at column `x`, row `y`
    ///
    /// - `x`: column, nominally 0-15
    /// - `y`: row, nominally 0-1
    /// - `text`: anything with a string representation
    pub fn write(&self, x: u8, y: u8, text: impl Display) -> Result<(), C::Error> {
        trace!("lcd {}: write at ({}, {})", self.pin, x, y);
        let payload = print_payload(x, y, text);
        self.channel.virtual_write(&self.pin, &[Value::Str(payload)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use blynk_protocol::{ChannelError, Command, RecordingChannel};

    #[test]
    fn test_clear_sends_clr() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 1u8);
        lcd.clear().unwrap();

        assert_eq!(
            channel.take(),
            vec![Command::virtual_write(&Pin::Number(1), &["clr".into()])]
        );
    }

    #[test]
    fn test_write_joins_with_nul() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 1u8);
        lcd.write(3, 1, "Hello").unwrap();

        let cmd = channel.last().unwrap();
        assert!(cmd.is_virtual_write());
        assert_eq!(cmd.values(), &[Value::from("p\x003\x001\0Hello")]);
    }

    #[test]
    fn test_write_is_one_payload() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 0u8);
        lcd.write(0, 0, "a\0b").unwrap();

        let cmd = channel.last().unwrap();
        assert_eq!(cmd.values().len(), 1);
    }

    #[test]
    fn test_write_stringifies_text() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 0u8);
        lcd.write(0, 1, 21.5f32).unwrap();
        lcd.write(2, 0, -7i32).unwrap();

        let commands = channel.take();
        assert_eq!(commands[0].values(), &[Value::from("p\x000\x001\x0021.5")]);
        assert_eq!(commands[1].values(), &[Value::from("p\x002\x000\0-7")]);
    }

    #[test]
    fn test_whole_float_text_drops_fraction() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 0u8);
        lcd.write(0, 0, 1.0f32).unwrap();

        assert_eq!(channel.last().unwrap().values(), &[Value::from("p\x000\x000\x001")]);
    }

    #[test]
    fn test_payload_uses_protocol_separator() {
        let payload = print_payload(1, 0, "hi");
        assert_eq!(payload.split(FIELD_SEPARATOR).collect::<alloc::vec::Vec<_>>(), ["p", "1", "0", "hi"]);
    }

    #[test]
    fn test_out_of_range_forwarded() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, 0u8);
        lcd.write(LCD_COLS + 4, LCD_ROWS + 1, "x").unwrap();

        assert_eq!(
            channel.last().unwrap().values(),
            &[Value::from("p\x0020\x003\0x")]
        );
    }

    #[test]
    fn test_error_propagates() {
        let channel = RecordingChannel::failing(ChannelError::Disconnected);
        let lcd = WidgetLcd::new(&channel, 0u8);

        assert_eq!(lcd.clear(), Err(ChannelError::Disconnected));
        assert_eq!(lcd.write(0, 0, "x"), Err(ChannelError::Disconnected));
    }

    #[test]
    fn test_named_pin() {
        let channel = RecordingChannel::new();
        let lcd = WidgetLcd::new(&channel, Pin::named("V20").unwrap());
        lcd.clear().unwrap();

        assert_eq!(lcd.pin(), &Pin::named("V20").unwrap());
        assert_eq!(channel.last().unwrap().pin(), lcd.pin());
    }

    mod properties {
        extern crate std;

        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn payload_is_p_x_y_text(x in any::<u8>(), y in any::<u8>(), text in ".{0,32}") {
                let channel = RecordingChannel::new();
                let lcd = WidgetLcd::new(&channel, 4u8);
                lcd.write(x, y, &text).unwrap();

                let expected = format!("p\0{}\0{}\0{}", x, y, text);
                prop_assert_eq!(channel.take(), vec![
                    Command::virtual_write(&Pin::Number(4), &[Value::Str(expected)])
                ]);
            }
        }
    }
}
