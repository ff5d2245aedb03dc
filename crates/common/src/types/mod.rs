use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Pagination block of the response envelope.
///
/// Lists are always returned in full, so nothing fills this in today; the
/// field exists so clients written against the upstream content API keep
/// deserializing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// Uniform response envelope: `{ success, message?, data, pagination? }`.
///
/// `data` is always present on the wire and is `null` for payload-less
/// outcomes (delete, errors).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data: Some(data), pagination: None }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: Some(data), pagination: None }
    }
}

impl ApiResponse<()> {
    /// Success without payload, e.g. after a delete.
    pub fn done(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, pagination: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), data: None, pagination: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_optionals_but_keeps_null_data() {
        let v = serde_json::to_value(ApiResponse::done("deleted")).unwrap();
        assert_eq!(v, json!({"success": true, "message": "deleted", "data": null}));
    }

    #[test]
    fn envelope_wraps_list_payload() {
        let v = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(v, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn envelope_reads_upstream_pagination() {
        let raw = json!({
            "success": true,
            "data": [],
            "pagination": {"page": 2, "limit": 10, "total": 31}
        });
        let env: ApiResponse<Vec<u8>> = serde_json::from_value(raw).unwrap();
        assert_eq!(env.pagination, Some(Pagination { page: 2, limit: 10, total: 31 }));
        assert!(env.message.is_none());
    }
}
