use super::utils::{login_error_message, validate_credentials};
use crate::{
    api::{ApiError, LoginRequest},
    router::DASHBOARD_PATH,
    state::session,
    utils::navigation::navigate_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    /// Validates locally and dispatches; a request already in flight wins.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        if let Err(msg) = validate_credentials(&username, &password) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            username: username.trim().to_string(),
            password,
        });
    }
}

pub fn apply_login_result(result: &Result<(), ApiError>, error: RwSignal<Option<String>>) {
    match result {
        Ok(()) => {
            error.set(None);
            navigate_to(DASHBOARD_PATH);
        }
        Err(err) => {
            log::warn!("login failed: {}", err);
            error.set(Some(login_error_message(err)));
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let error = create_rw_signal(None::<String>);
    let login_action = session::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            apply_login_result(&result, error);
        }
    });

    LoginViewModel {
        username: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        error,
        login_action,
    }
}
