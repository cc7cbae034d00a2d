use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Employee, Employees},
    utils::search::filter_by_key,
};

/// Employee roster backing the id pickers on the attendance and leave forms.
#[derive(Clone, Copy)]
pub struct EmployeeDirectory {
    pub employees: RwSignal<Vec<Employee>>,
    api: StoredValue<ApiClient>,
}

impl EmployeeDirectory {
    pub fn new(api: ApiClient) -> Self {
        Self {
            employees: create_rw_signal(Vec::new()),
            api: store_value(api),
        }
    }

    pub async fn load(self) -> Result<(), ApiError> {
        match self.api.get_value().list::<Employees>().await {
            Ok(list) => {
                self.employees.set(list);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load employee roster: {}", err);
                Err(err)
            }
        }
    }

    /// Roster entries whose id contains what has been typed so far.
    pub fn suggestions(&self, typed: &str) -> Vec<Employee> {
        self.employees
            .with(|list| filter_by_key(list, typed, |e| Some(e.id.as_str())))
    }
}

pub fn option_label(employee: &Employee) -> String {
    format!("{} - {}", employee.id, employee.name)
}

/// `<datalist>` narrowed to the roster entries matching the id typed so far.
pub fn employee_options(
    directory: EmployeeDirectory,
    list_id: &'static str,
    typed: Signal<String>,
) -> impl IntoView {
    view! {
        <datalist id=list_id>
            {move || {
                directory
                    .suggestions(&typed.get())
                    .into_iter()
                    .map(|employee| {
                        let label = option_label(&employee);
                        view! { <option value=employee.id>{label}</option> }
                    })
                    .collect_view()
            }}
        </datalist>
    }
}

pub fn use_employee_directory() -> EmployeeDirectory {
    let directory = EmployeeDirectory::new(crate::state::session::use_api_client());
    create_effect(move |_| {
        spawn_local(async move {
            let _ = directory.load().await;
        });
    });
    directory
}
