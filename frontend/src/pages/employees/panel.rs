use leptos::*;

use crate::{
    api::Employees,
    components::layout::Layout,
    pages::resource::{
        components::{resource_page, FormInput},
        view_model::{use_resource_view_model, ResourceViewModel},
    },
};

type EmployeeViewModel = ResourceViewModel<Employees>;

fn create_fields(vm: EmployeeViewModel) -> impl IntoView {
    view! {
        <FormInput
            name="id"
            placeholder="Id"
            value=vm.form_field(|f| f.id.as_str())
            on_input=vm.form_setter(|f, v| f.id = v)
        />
        <FormInput
            name="name"
            placeholder="Name"
            value=vm.form_field(|f| f.name.as_str())
            on_input=vm.form_setter(|f, v| f.name = v)
        />
        <FormInput
            name="email"
            placeholder="Email"
            input_type="email"
            value=vm.form_field(|f| f.email.as_str())
            on_input=vm.form_setter(|f, v| f.email = v)
        />
        <FormInput
            name="department"
            placeholder="Department"
            value=vm.form_field(|f| f.department.as_str())
            on_input=vm.form_setter(|f, v| f.department = v)
        />
        <FormInput
            name="salary"
            placeholder="Salary"
            input_type="number"
            value=vm.form_field(|f| f.salary.as_str())
            on_input=vm.form_setter(|f, v| f.salary = v)
        />
    }
}

fn modal_fields(vm: EmployeeViewModel) -> impl IntoView {
    view! {
        <FormInput
            name="name"
            placeholder="Name"
            value=vm.selected_field(|f| f.name.as_str())
            on_input=vm.selected_setter(|f, v| f.name = v)
        />
        <FormInput
            name="email"
            placeholder="Email"
            input_type="email"
            value=vm.selected_field(|f| f.email.as_str())
            on_input=vm.selected_setter(|f, v| f.email = v)
        />
        <FormInput
            name="department"
            placeholder="Department"
            value=vm.selected_field(|f| f.department.as_str())
            on_input=vm.selected_setter(|f, v| f.department = v)
        />
        <FormInput
            name="salary"
            placeholder="Salary"
            input_type="number"
            value=vm.selected_field(|f| f.salary.as_str())
            on_input=vm.selected_setter(|f, v| f.salary = v)
        />
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_resource_view_model::<Employees>();
    view! {
        <Layout>
            {resource_page(vm, move || create_fields(vm), move || modal_fields(vm))}
        </Layout>
    }
}
