pub mod get;
pub mod get_region;
pub mod list;
pub mod set;
pub mod set_region;
pub mod unset;
pub mod version;

use serde::Serialize;

/// Result of a command: failures are reported here rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
