//! Authentication API
//!
//! Login, registration and profile calls against the FlowForge API.
//!
//! Login is a two-step exchange: a form-encoded credential POST yields a
//! bearer token, which is then used immediately to fetch the user profile.

use gloo_net::http::Request;

use crate::api::{error_message, get_api_base};
use crate::state::UserProfile;

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange credentials for a bearer token and the user's profile.
pub async fn login(email: &str, password: &str) -> Result<(String, UserProfile), String> {
    let api_base = get_api_base();

    // The API expects OAuth2 password-flow form fields
    let params = web_sys::UrlSearchParams::new().map_err(|_| "Request build error".to_string())?;
    params.append("username", email);
    params.append("password", password);

    let response = Request::post(&format!("{}/api/v1/auth/jwt/login", api_base))
        .body(params)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Invalid email or password").await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let user = fetch_current_user(&token.access_token).await?;

    Ok((token.access_token, user))
}

/// Fetch the current user's profile with a bearer token.
pub async fn fetch_current_user(token: &str) -> Result<UserProfile, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/v1/users/me", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to load profile").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new account, then delegate to [`login`] to establish the session.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, UserProfile), String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/v1/auth/register", api_base))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Registration failed").await);
    }

    login(email, password).await
}
