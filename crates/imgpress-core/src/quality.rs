//! The compression percentage and the quality fraction derived from it.
//!
//! The slider is a *compression* control: a higher percentage asks the
//! encoder for a lower quality. `fraction = 1 - percent / 100`.

use serde::{Deserialize, Serialize};

/// Percentage used when the user has not moved the slider.
pub const DEFAULT_PERCENT: u8 = 30;
pub const MIN_PERCENT: u8 = 1;
pub const MAX_PERCENT: u8 = 100;

/// Compression strength, always within 1-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct CompressPercent(u8);

impl CompressPercent {
    /// Out-of-range values are clamped rather than rejected.
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(MIN_PERCENT, MAX_PERCENT))
    }

    /// Clamp an arbitrary number (a JS slider value, say) into 1-100,
    /// rounding to the nearest step. NaN gives the default.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self::new(value.clamp(f64::from(MIN_PERCENT), f64::from(MAX_PERCENT)).round() as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Encoder quality in [0, 1]. 30 gives 0.70, 100 gives 0.0, 1 gives 0.99.
    pub fn quality_fraction(self) -> f64 {
        quality_fraction(self.0)
    }
}

impl Default for CompressPercent {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

impl From<u8> for CompressPercent {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<CompressPercent> for u8 {
    fn from(value: CompressPercent) -> Self {
        value.0
    }
}

/// `1 - percent / 100`, clamped to [0, 1].
pub fn quality_fraction(percent: u8) -> f64 {
    (1.0 - f64::from(percent) / 100.0).clamp(0.0, 1.0)
}

/// Map a [0, 1] fraction onto the 1-100 scale JPEG encoders take.
pub fn encoder_quality(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return MIN_PERCENT;
    }
    (fraction.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

/// Byte size as kilobytes with two decimals, e.g. `"488.28 KB"`.
pub fn format_kilobytes(size: usize) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}
