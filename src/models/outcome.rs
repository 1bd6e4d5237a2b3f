//! Result shape of every write operation.

use serde::Serialize;

use super::DbId;

/// `{ success, message, id? }`. Domain failures (duplicate name, bad team reference, seeding
/// over existing data) are reported here with `success = false` instead of as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl OpOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        OpOutcome {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: DbId) -> Self {
        OpOutcome {
            success: true,
            message: message.into(),
            id: Some(id),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        OpOutcome {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}
