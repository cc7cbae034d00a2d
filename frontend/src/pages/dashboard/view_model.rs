use leptos::*;

use super::repository::{self, DashboardData};
use crate::{api::ApiError, state::session::use_api_client};

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: Resource<(), Result<DashboardData, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let data = create_local_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move {
                    let result = repository::fetch_dashboard(&api).await;
                    if let Err(err) = &result {
                        log::error!("dashboard load failed: {}", err);
                    }
                    result
                }
            },
        );
        Self { data }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}
