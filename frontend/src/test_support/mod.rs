#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod helpers {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::{Duration, Utc};
    use leptos::*;
    use serde_json::json;

    use crate::{api::ApiClient, state::session::SessionStore};

    pub fn token_with_claims(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.test-signature", header, payload)
    }

    pub fn token_expiring_in(offset: Duration) -> String {
        token_with_claims(json!({
            "sub": "admin1",
            "exp": (Utc::now() + offset).timestamp()
        }))
    }

    pub fn valid_token() -> String {
        token_expiring_in(Duration::hours(1))
    }

    pub fn expired_token() -> String {
        token_expiring_in(Duration::hours(-1))
    }

    /// Installs an in-memory session (and a client bound to it) as context.
    pub fn provide_session(token: Option<&str>) -> SessionStore {
        let session = SessionStore::in_memory();
        if let Some(token) = token {
            session
                .set_token(token)
                .expect("memory storage accepts writes");
        }
        provide_context(session.clone());
        provide_context(ApiClient::new_with_base_url(
            "http://localhost:0/api",
            session.clone(),
        ));
        session
    }
}
