//! Request validation for write payloads: required fields first, then typed decoding.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Input record decoded from a JSON object. `REQUIRED` lists fields that must be present and non-null.
pub trait InputSchema: DeserializeOwned {
    const REQUIRED: &'static [&'static str];
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check that every required field is present and not null. Reports the first missing one.
    pub fn validate(body: &Map<String, Value>, required: &[&str]) -> Result<(), AppError> {
        for col in required {
            match body.get(*col) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", col)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validate an arbitrary JSON value against `T`'s schema and decode it. `null` and `{}` count
    /// as no data.
    pub fn parse<T: InputSchema>(value: Value) -> Result<T, AppError> {
        let body = match value {
            Value::Object(m) if m.is_empty() => {
                return Err(AppError::BadRequest("No data provided".into()))
            }
            Value::Object(m) => m,
            Value::Null => return Err(AppError::BadRequest("No data provided".into())),
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        Self::validate(&body, T::REQUIRED)?;
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::Validation(e.to_string()))
    }
}
