use leptos::*;

use super::utils::{LeaveForm, STATUS_OPTIONS};
use crate::{
    api::LeaveRequests,
    components::layout::Layout,
    pages::resource::{
        components::{resource_page, FormInput, FormSelect},
        directory::{employee_options, use_employee_directory},
        view_model::{use_resource_view_model, ResourceViewModel},
    },
};

const EMPLOYEE_OPTIONS_ID: &str = "leave-employee-options";

type LeaveViewModel = ResourceViewModel<LeaveRequests>;

/// Field bindings shared by the create form and the modal.
struct Binding {
    read: fn(&LeaveForm) -> &str,
    write: fn(&mut LeaveForm, String),
}

const START_DATE: Binding = Binding {
    read: |f| f.start_date.as_str(),
    write: |f, v| f.start_date = v,
};
const END_DATE: Binding = Binding {
    read: |f| f.end_date.as_str(),
    write: |f, v| f.end_date = v,
};
const REASON: Binding = Binding {
    read: |f| f.reason.as_str(),
    write: |f, v| f.reason = v,
};
const EMPLOYEE_ID: Binding = Binding {
    read: |f| f.employee_id.as_str(),
    write: |f, v| f.employee_id = v,
};
const STATUS: Binding = Binding {
    read: |f| f.status.as_str(),
    write: |f, v| f.status = v,
};

fn leave_fields(
    value: impl Fn(&Binding) -> Signal<String>,
    setter: impl Fn(&Binding) -> Callback<String>,
) -> impl IntoView {
    view! {
        <FormInput
            name="startDate"
            placeholder="Start Date"
            input_type="date"
            value=value(&START_DATE)
            on_input=setter(&START_DATE)
        />
        <FormInput
            name="endDate"
            placeholder="End Date"
            input_type="date"
            value=value(&END_DATE)
            on_input=setter(&END_DATE)
        />
        <FormInput
            name="reason"
            placeholder="Reason"
            value=value(&REASON)
            on_input=setter(&REASON)
        />
        <FormInput
            name="employeeId"
            placeholder="Search or select Employee ID"
            list=EMPLOYEE_OPTIONS_ID
            value=value(&EMPLOYEE_ID)
            on_input=setter(&EMPLOYEE_ID)
        />
        <FormSelect
            name="status"
            options=STATUS_OPTIONS
            placeholder="Select Status"
            value=value(&STATUS)
            on_change=setter(&STATUS)
        />
    }
}

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm: LeaveViewModel = use_resource_view_model::<LeaveRequests>();
    let directory = use_employee_directory();
    let create_fields = move || {
        view! {
            <>
                {leave_fields(move |b| vm.form_field(b.read), move |b| vm.form_setter(b.write))}
                {employee_options(
                    directory,
                    EMPLOYEE_OPTIONS_ID,
                    vm.form_field(|f| f.employee_id.as_str()),
                )}
            </>
        }
    };
    let modal_fields = move || {
        leave_fields(
            move |b| vm.selected_field(b.read),
            move |b| vm.selected_setter(b.write),
        )
    };
    view! {
        <Layout>
            {resource_page(vm, create_fields, modal_fields)}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, valid_token};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_status_placeholder_and_choices() {
        let html = render_to_string(move || {
            provide_session(Some(&valid_token()));
            view! { <LeavePage/> }
        });
        assert!(html.contains("Submit Leave Request"));
        assert!(html.contains("Select Status"));
        for status in STATUS_OPTIONS {
            assert!(html.contains(status), "missing {}", status);
        }
        assert!(html.contains(EMPLOYEE_OPTIONS_ID));
        assert!(html.contains("Leave Request List"));
        assert!(html.contains("No leave requests found."));
    }
}
