use serde::{Deserialize, Serialize};

/// Body of `POST /authorizations`: phone number plus SMS verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub code: String,
}

/// `data` of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl LoginRequest {
    pub fn new(mobile: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
            code: code.into(),
        }
    }

    /// Check the form before it is sent. Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let mobile = self.mobile.trim();
        if mobile.is_empty() {
            return Err("Please enter your mobile number".into());
        }
        if !is_valid_mobile(mobile) {
            return Err("Please enter a valid mobile number".into());
        }
        let code = self.code.trim();
        if code.is_empty() {
            return Err("Please enter the verification code".into());
        }
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err("The verification code has 6 digits".into());
        }
        Ok(())
    }
}

/// Mainland mobile numbers: `1`, then `3`-`9`, then nine more digits
fn is_valid_mobile(mobile: &str) -> bool {
    let bytes = mobile.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(u8::is_ascii_digit)
}
