use std::rc::Rc;

use leptos::*;

use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest},
    router::LOGIN_PATH,
    utils::{
        navigation::navigate_to,
        storage::{default_storage, KeyValueStorage, MemoryStorage},
    },
};

pub const TOKEN_KEY: &str = "token";

/// Holds the bearer token. Storage is the source of truth across reloads; the
/// signal mirrors it so the header and the guard react to login and logout.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    token: RwSignal<Option<String>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let initial = storage.get_item(TOKEN_KEY).unwrap_or_else(|err| {
            log::warn!("could not read stored session: {}", err);
            None
        });
        Self {
            storage,
            token: create_rw_signal(initial),
        }
    }

    pub fn browser() -> Self {
        Self::new(default_storage())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    pub fn set_token(&self, value: &str) -> Result<(), ApiError> {
        self.storage
            .set_item(TOKEN_KEY, value)
            .map_err(ApiError::Storage)?;
        self.token.set(Some(value.to_string()));
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn token_signal(&self) -> Signal<Option<String>> {
        self.token.into()
    }

    pub fn clear_token(&self) {
        if let Err(err) = self.storage.remove_item(TOKEN_KEY) {
            log::warn!("could not remove stored session: {}", err);
        }
        self.token.set(None);
    }
}

/// Provides the process-wide store and the client bound to it, once.
pub fn provide_session_context() -> SessionStore {
    let session = use_context::<SessionStore>().unwrap_or_else(|| {
        let session = SessionStore::browser();
        provide_context(session.clone());
        session
    });
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::new(session.clone()));
    }
    session
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_session_context();
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        log::warn!("no SessionProvider in scope, falling back to a detached store");
        SessionStore::browser()
    })
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

pub async fn login_request(api: &ApiClient, request: LoginRequest) -> Result<(), ApiError> {
    let username = request.username.clone();
    api.login(&request).await?;
    log::info!("signed in as {}", username);
    Ok(())
}

pub async fn register_request(api: &ApiClient, request: RegisterRequest) -> Result<(), ApiError> {
    api.register(&request).await
}

pub fn logout(session: &SessionStore) {
    session.clear_token();
    log::info!("signed out");
    navigate_to(LOGIN_PATH);
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let api = use_api_client();
    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { login_request(&api, payload).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let api = use_api_client();
    create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { register_request(&api, payload).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::with_runtime;
    use crate::utils::navigation::recorded;
    use serde_json::json;

    #[tokio::test]
    async fn login_persists_returned_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({ "token": "abc.def.ghi" }));
        });

        let runtime = leptos::create_runtime();
        let session = SessionStore::in_memory();
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
        login_request(
            &api,
            LoginRequest {
                username: "admin1".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));

        let sent = server.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].body,
            Some(json!({ "username": "admin1", "password": "pw" }))
        );
        assert_eq!(sent[0].authorization, None);
        runtime.dispose();
    }

    #[test]
    fn logout_clears_token_and_navigates_to_login() {
        with_runtime(|| {
            recorded::take();
            let session = SessionStore::in_memory();
            session.set_token("abc.def.ghi").unwrap();
            logout(&session);
            assert_eq!(session.token(), None);
            assert_eq!(recorded::take(), vec!["/login".to_string()]);
        });
    }
}
