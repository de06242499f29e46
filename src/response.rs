use serde::Serialize;

/// Uniform response envelope. Every endpoint answers with this shape so the
/// `success` flag can never be forgotten and `data` is only present when
/// there is something to carry.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<serde_json::Value> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_data() {
        let body = ApiResponse::with_data("Incidents found", vec!["i_1", "i_2"]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Incidents found");
        assert_eq!(json["data"][1], "i_2");
    }

    #[test]
    fn failure_envelope_omits_data() {
        let body = ApiResponse::failure("Incident not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn plain_message_envelope_omits_data() {
        let body = ApiResponse::message("Incident created successfully");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
    }
}
