use crate::{pages::login::components::messages::InlineErrorMessage, router::REGISTER_PATH};
use leptos::{ev::SubmitEvent, *};

pub const AUTH_INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";
pub const AUTH_BUTTON_CLASS: &str = "w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50";

#[component]
pub fn LoginForm(
    username: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Login"</h2>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="sr-only">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class=AUTH_INPUT_CLASS
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| on_username_input.call(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class=AUTH_INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button type="submit" disabled=move || pending.get() class=AUTH_BUTTON_CLASS>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "No account yet? "
                    <a href=REGISTER_PATH class="text-blue-600 hover:underline">"Register"</a>
                </p>
            </div>
        </div>
    }
}
