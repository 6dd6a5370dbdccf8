use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::profile::UserProfile;
use gloo_net::http::Method;

use crate::shared::api_utils::{get_data, send_for_data, ApiError};

/// Exchange mobile number and SMS code for a token
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    send_for_data(Method::POST, "/authorizations", request, None).await
}

/// Profile and counters of the signed-in user
pub async fn fetch_profile(token: Option<&str>) -> Result<UserProfile, ApiError> {
    get_data("/user/profile", token).await
}
