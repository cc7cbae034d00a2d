use super::view_model::use_register_view_model;
use crate::{
    api::Role,
    pages::login::components::{
        form::{AUTH_BUTTON_CLASS, AUTH_INPUT_CLASS},
        messages::InlineErrorMessage,
    },
    router::LOGIN_PATH,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Register"</h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <input
                        name="username"
                        type="text"
                        required
                        class=AUTH_INPUT_CLASS
                        placeholder="Username"
                        prop:value=move || vm.username.get()
                        on:input=move |ev| vm.username.set(event_target_value(&ev))
                    />
                    <input
                        name="password"
                        type="password"
                        required
                        class=AUTH_INPUT_CLASS
                        placeholder="Password"
                        prop:value=move || vm.password.get()
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                    <select
                        name="role"
                        class=AUTH_INPUT_CLASS
                        on:change=move |ev| vm.set_role(&event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option value=role.as_str() selected=move || vm.role.get() == role>
                                        {role.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <InlineErrorMessage error=vm.error.into() />

                    <button type="submit" disabled=move || pending.get() class=AUTH_BUTTON_CLASS>
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "Already registered? "
                    <a href=LOGIN_PATH class="text-blue-600 hover:underline">"Login"</a>
                </p>
            </div>
        </div>
    }
}
