use serde::{Deserialize, Serialize};

/// Every response body of the blog API is wrapped as `{ "message": ..., "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Body returned by endpoints that only acknowledge a write
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_message() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert!(env.message.is_empty());
        assert_eq!(env.into_data(), vec![1, 2]);
    }
}
