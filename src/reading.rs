//! Sensor Records Consumed by the Engine
//!
//! One record per observation, produced by an external record source (the
//! engine never fetches data itself). Every metric is optional: field
//! hardware drops columns routinely, and the engine degrades to its caution
//! default instead of failing. Records are immutable once built and borrowed
//! read-only during evaluation.

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// One timestamped sensor observation
///
/// The lifetime covers the optional externally supplied status labels, which
/// are borrowed from the record source rather than copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading<'a> {
    /// When the observation was taken, in milliseconds
    pub timestamp: Timestamp,

    /// Fish temperature in Celsius - monitoring only, never scored
    pub temperature: Option<f32>,

    /// Volatile-gas proxy, unitless
    pub gas_value: Option<f32>,

    /// Color/brightness proxy, unitless
    pub color_value: Option<f32>,

    /// Human-entered color status from the record source, if any
    pub color_label: Option<&'a str>,

    /// Human-entered gas status from the record source, if any
    pub gas_label: Option<&'a str>,
}

impl<'a> SensorReading<'a> {
    /// Create an empty reading at the given timestamp
    pub const fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            temperature: None,
            gas_value: None,
            color_value: None,
            color_label: None,
            gas_label: None,
        }
    }

    /// Set the temperature in Celsius
    pub const fn with_temperature(mut self, celsius: f32) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the gas proxy value
    pub const fn with_gas(mut self, value: f32) -> Self {
        self.gas_value = Some(value);
        self
    }

    /// Set the color proxy value
    pub const fn with_color(mut self, value: f32) -> Self {
        self.color_value = Some(value);
        self
    }

    /// Attach an externally supplied color status label
    pub const fn with_color_label(mut self, label: &'a str) -> Self {
        self.color_label = Some(label);
        self
    }

    /// Attach an externally supplied gas status label
    pub const fn with_gas_label(mut self, label: &'a str) -> Self {
        self.gas_label = Some(label);
        self
    }
}
