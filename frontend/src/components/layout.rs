use crate::{
    router::{
        ATTENDANCE_PATH, DASHBOARD_PATH, EMPLOYEES_PATH, LEAVE_PATH, LOGIN_PATH, REGISTER_PATH,
    },
    state::session::{self, use_session},
};
use leptos::*;

pub const APP_TITLE: &str = "Employee Management System";

const AUTHENTICATED_LINKS: [(&str, &str); 4] = [
    (DASHBOARD_PATH, "Dashboard"),
    (EMPLOYEES_PATH, "Employees"),
    (ATTENDANCE_PATH, "Attendance"),
    (LEAVE_PATH, "Leave Request"),
];

const PUBLIC_LINKS: [(&str, &str); 2] = [(LOGIN_PATH, "Login"), (REGISTER_PATH, "Register")];

const LINK_CLASS: &str =
    "text-gray-200 hover:text-white px-3 py-2 rounded-md text-sm font-medium hover:bg-blue-700";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let token = session.token_signal();
    let signed_in = Signal::derive(move || token.get().is_some());
    let (menu_open, set_menu_open) = create_signal(false);

    let stored_session = store_value(session);
    let on_logout = move |_: ev::MouseEvent| {
        set_menu_open.set(false);
        stored_session.with_value(session::logout);
    };
    let links = move |mobile: bool| {
        let item_class = if mobile {
            format!("block {}", LINK_CLASS)
        } else {
            LINK_CLASS.to_string()
        };
        let entries: &[(&str, &str)] = if signed_in.get() {
            &AUTHENTICATED_LINKS
        } else {
            &PUBLIC_LINKS
        };
        entries
            .iter()
            .map(|(href, label)| {
                view! {
                    <a
                        href=*href
                        class=item_class.clone()
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };
    let logout_button = move |mobile: bool| {
        let class = if mobile {
            format!("w-full text-left {}", LINK_CLASS)
        } else {
            LINK_CLASS.to_string()
        };
        move || {
            signed_in.get().then(|| {
                view! {
                    <button type="button" class=class.clone() on:click=on_logout>
                        "Logout"
                    </button>
                }
            })
        }
    };
    let toggle_menu = move |_: ev::MouseEvent| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-blue-600 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-white">{APP_TITLE}</h1>
                    <div class="flex items-center">
                        <nav class="hidden md:flex space-x-4">
                            {move || links(false)}
                            {logout_button(false)}
                        </nav>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-200 hover:text-white hover:bg-blue-700"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-blue-500">
                        <nav class="px-4 py-3 space-y-2">
                            {move || links(true)}
                            {logout_button(true)}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-3 p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            {label.map(|text| view! { <span class="text-sm text-gray-600">{text}</span> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-red-50 border border-red-300 text-red-700 px-4 py-3 rounded mb-4"
            role="alert"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-300 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
