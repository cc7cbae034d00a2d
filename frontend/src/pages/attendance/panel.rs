use leptos::*;

use super::utils::STATUS_OPTIONS;
use crate::{
    api::Attendances,
    components::layout::Layout,
    pages::resource::{
        components::{resource_page, FormInput, FormSelect},
        directory::{employee_options, use_employee_directory, EmployeeDirectory},
        view_model::{use_resource_view_model, ResourceViewModel},
    },
};

const EMPLOYEE_OPTIONS_ID: &str = "attendance-employee-options";

type AttendanceViewModel = ResourceViewModel<Attendances>;

fn create_fields(vm: AttendanceViewModel, directory: EmployeeDirectory) -> impl IntoView {
    view! {
        <FormInput
            name="date"
            placeholder="Date"
            input_type="date"
            value=vm.form_field(|f| f.date.as_str())
            on_input=vm.form_setter(|f, v| f.date = v)
        />
        <FormSelect
            name="status"
            options=STATUS_OPTIONS
            value=vm.form_field(|f| f.status.as_str())
            on_change=vm.form_setter(|f, v| f.status = v)
        />
        <FormInput
            name="employeeId"
            placeholder="Search or select Employee ID"
            list=EMPLOYEE_OPTIONS_ID
            value=vm.form_field(|f| f.employee_id.as_str())
            on_input=vm.form_setter(|f, v| f.employee_id = v)
        />
        {employee_options(
            directory,
            EMPLOYEE_OPTIONS_ID,
            vm.form_field(|f| f.employee_id.as_str()),
        )}
    }
}

/// The employee stays fixed once recorded; only date and status change.
fn modal_fields(vm: AttendanceViewModel) -> impl IntoView {
    view! {
        <FormInput
            name="date"
            placeholder="Date"
            input_type="date"
            value=vm.selected_field(|f| f.date.as_str())
            on_input=vm.selected_setter(|f, v| f.date = v)
        />
        <FormSelect
            name="status"
            options=STATUS_OPTIONS
            value=vm.selected_field(|f| f.status.as_str())
            on_change=vm.selected_setter(|f, v| f.status = v)
        />
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_resource_view_model::<Attendances>();
    let directory = use_employee_directory();
    view! {
        <Layout>
            {resource_page(vm, move || create_fields(vm, directory), move || modal_fields(vm))}
        </Layout>
    }
}
