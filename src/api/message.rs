//! JSON envelopes returned by every endpoint.

use serde::Serialize;

/// `{"success": bool}`
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub success: bool,
}

impl Message {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

/// `{"success": bool, "data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct DataMessage<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Default> DataMessage<T> {
    /// Builds the envelope from a store answer. `None` becomes
    /// `success: false` with empty data.
    pub fn from_option(data: Option<T>) -> Self {
        match data {
            Some(data) => Self { success: true, data },
            None => Self {
                success: false,
                data: T::default(),
            },
        }
    }
}

/// `{"success": false, "status": u16, "error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub success: bool,
    pub status: u16,
    pub error: String,
}
