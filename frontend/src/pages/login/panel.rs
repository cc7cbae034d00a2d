use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let username_input = Callback::new(move |value: String| vm.username.set(value));
    let password_input = Callback::new(move |value: String| vm.password.set(value));

    view! {
        <LoginForm
            username=vm.username.into()
            password=vm.password.into()
            error=vm.error.into()
            pending=vm.pending()
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
