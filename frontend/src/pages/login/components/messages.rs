use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-300 text-red-700 px-4 py-3 rounded" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
