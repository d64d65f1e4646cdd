//! Session options passed in by the host page.

use serde::{Deserialize, Serialize};

use crate::quality::CompressPercent;

/// Options for a new [`Session`](crate::Session). Missing fields take their
/// defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Slider position a new session starts at.
    pub default_percent: CompressPercent,
}
