//! Image gallery widget

use alloc::vec::Vec;

use blynk_protocol::{Channel, Pin, Value};

/// Property holding the full list of image URLs
pub const PROP_URLS: &str = "urls";
/// Property replacing a single image URL
pub const PROP_URL: &str = "url";
/// Property holding the gallery opacity in percent
pub const PROP_OPACITY: &str = "opacity";
/// Property holding the gallery scale in percent
pub const PROP_SCALE: &str = "scale";
/// Property holding the gallery rotation in degrees
pub const PROP_ROTATION: &str = "rotation";

/// Proxy for an image gallery widget bound to one virtual pin
///
/// Percentages and angles are forwarded without range checks, as whatever
/// numeric type the caller passes.
pub struct WidgetImage<'a, C: Channel + ?Sized> {
    channel: &'a C,
    pin: Pin,
}

impl<'a, C: Channel + ?Sized> WidgetImage<'a, C> {
    /// Bind an image gallery proxy to `pin` on `channel`
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

    /// Replace the gallery with `urls`, in order
    pub fn set_images(&self, urls: &[impl AsRef<str>]) -> Result<(), C::Error> {
        trace!("image {}: set {} urls", self.pin, urls.len());
        let values: Vec<Value> = urls.iter().map(|url| Value::from(url.as_ref())).collect();
        self.channel.set_property(&self.pin, PROP_URLS, &values)
    }

    /// Replace the image at `index` with `url`
    ///
    /// The app expects the index first, so the values go out as
    /// `[index, url]`.
    pub fn set_image(&self, url: &str, index: u16) -> Result<(), C::Error> {
        trace!("image {}: set url at {}", self.pin, index);
        self.channel
            .set_property(&self.pin, PROP_URL, &[Value::from(index), Value::from(url)])
    }

    /// Set the gallery opacity, in percent
    pub fn set_opacity(&self, percent: impl Into<Value>) -> Result<(), C::Error> {
        let percent: Value = percent.into();
        trace!("image {}: opacity {}", self.pin, percent);
        self.channel.set_property(&self.pin, PROP_OPACITY, &[percent])
    }

    /// Set the gallery scale, in percent
    pub fn set_scale(&self, percent: impl Into<Value>) -> Result<(), C::Error> {
        let percent: Value = percent.into();
        trace!("image {}: scale {}", self.pin, percent);
        self.channel.set_property(&self.pin, PROP_SCALE, &[percent])
    }

    /// Set the gallery rotation, in degrees
    pub fn set_rotation(&self, degrees: impl Into<Value>) -> Result<(), C::Error> {
        let degrees: Value = degrees.into();
        trace!("image {}: rotation {}", self.pin, degrees);
        self.channel.set_property(&self.pin, PROP_ROTATION, &[degrees])
    }

    /// Set the number the gallery starts counting image indexes from
    ///
    /// This is a plain virtual write of the index, not a property update.
    pub fn set_indexing_start(&self, index: u16) -> Result<(), C::Error> {
        trace!("image {}: indexing start {}", self.pin, index);
        self.channel.virtual_write(&self.pin, &[Value::from(index)])
    }
}
