use leptos::*;

use super::{
    components::dashboard_body,
    repository::DASHBOARD_ERROR_MESSAGE,
    view_model::use_dashboard_view_model,
};
use crate::components::layout::{Layout, LoadingSpinner};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! {
        <Layout>
            {move || match vm.data.get() {
                None => view! { <LoadingSpinner label="Loading..."/> }.into_view(),
                Some(Err(_)) => view! {
                    <div class="text-center mt-20 text-red-600" role="alert">
                        {DASHBOARD_ERROR_MESSAGE}
                    </div>
                }
                .into_view(),
                Some(Ok(data)) => dashboard_body(data).into_view(),
            }}
        </Layout>
    }
}
