use crate::{
    api::{ApiError, RegisterRequest, Role},
    pages::login::utils::validate_credentials,
    router::LOGIN_PATH,
    state::session,
    utils::navigation::navigate_to,
};
use leptos::*;

pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
    pub error: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

impl RegisterViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.register_action.pending().into()
    }

    pub fn set_role(&self, raw: &str) {
        if let Some(role) = Role::parse(raw) {
            self.role.set(role);
        }
    }

    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        if let Err(msg) = validate_credentials(&username, &password) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.register_action.dispatch(RegisterRequest {
            username: username.trim().to_string(),
            password,
            role: self.role.get_untracked(),
        });
    }
}

pub fn apply_register_result(result: &Result<(), ApiError>, error: RwSignal<Option<String>>) {
    match result {
        Ok(()) => {
            error.set(None);
            navigate_to(LOGIN_PATH);
        }
        Err(err) => {
            log::warn!("registration failed: {}", err);
            error.set(Some(err.user_message(REGISTER_FAILED_MESSAGE)));
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let error = create_rw_signal(None::<String>);
    let register_action = session::use_register_action();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            apply_register_result(&result, error);
        }
    });

    RegisterViewModel {
        username: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        role: create_rw_signal(Role::default()),
        error,
        register_action,
    }
}
