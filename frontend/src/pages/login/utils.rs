use crate::api::ApiError;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials";

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required.".into());
    }
    if password.is_empty() {
        return Err("Password is required.".into());
    }
    Ok(())
}

/// A bare 401 on the login endpoint means bad credentials, not an expired session.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthenticated => LOGIN_FAILED_MESSAGE.to_string(),
        other => other.user_message(LOGIN_FAILED_MESSAGE),
    }
}
