use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Uniform wrapper around every backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub token: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub total: Option<u64>,
    /// HTTP status of the response; not part of the JSON body.
    #[serde(skip)]
    pub status: u16,
}

/// Backend lists occasionally contain `null` holes.
pub type ListEnvelope<T> = Envelope<Vec<Option<T>>>;

impl<T> Envelope<T> {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(msg) if !msg.trim().is_empty() => msg.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Turns `success: false` into [`ApiError::Business`].
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Business(self.message_or("Request failed")))
        }
    }
}

impl<T> Envelope<Vec<Option<T>>> {
    /// Present list entries, `null`s removed. Missing `data` yields an empty list.
    pub fn items(self) -> Vec<T> {
        self.data.unwrap_or_default().into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_items_drops_nulls() {
        let envelope: ListEnvelope<i64> =
            serde_json::from_value(json!({"success": true, "data": [null, 1, null, 2]})).unwrap();
        assert_eq!(envelope.items(), vec![1, 2]);
    }

    #[test]
    fn test_missing_fields_default() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message_or("fallback"), "fallback");
    }

    #[test]
    fn test_into_result_surfaces_message() {
        let envelope: Envelope =
            serde_json::from_value(json!({"success": false, "message": "Code expired"})).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Code expired");
    }
}
