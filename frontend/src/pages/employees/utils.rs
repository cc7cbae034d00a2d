use crate::{
    api::{ApiError, Employee, Employees},
    pages::resource::{
        utils::{format_number, required, required_number},
        EditableResource, ResourceText,
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: String,
}

impl EditableResource for Employees {
    type Form = EmployeeForm;

    const TEXT: ResourceText = ResourceText {
        form_title: "Add Employee",
        submit_label: "Add Employee",
        search_title: "Search Employee",
        list_title: "Employee List",
        modal_title: "Edit Employee",
        loading: "Loading employees...",
        empty: "No employee found.",
        load_failed: "Failed to load employees.",
        created: "Employee added successfully!",
        create_failed: "Error adding employee",
        updated: "Employee updated successfully!",
        update_failed: "Error updating employee",
        deleted: "Employee deleted!",
        delete_failed: "Failed to delete employee",
        confirm_delete: "Are you sure you want to delete this employee?",
    };
    const COLUMNS: &'static [&'static str] =
        &["Employee ID", "Name", "Email", "Department", "Salary"];

    fn search_key(record: &Employee) -> Option<&str> {
        Some(record.id.as_str())
    }

    fn cells(record: &Employee) -> Vec<String> {
        vec![
            record.id.clone(),
            record.name.clone(),
            record.email.clone(),
            record.department.clone(),
            format_number(record.salary),
        ]
    }

    fn form_from_record(record: &Employee) -> EmployeeForm {
        EmployeeForm {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
            salary: format_number(record.salary),
        }
    }

    fn draft_from_form(form: &EmployeeForm) -> Result<Employee, ApiError> {
        Ok(Employee {
            id: required(&form.id, "Employee ID")?,
            name: required(&form.name, "Name")?,
            email: required(&form.email, "Email")?,
            department: required(&form.department, "Department")?,
            salary: required_number(&form.salary, "Salary")?,
        })
    }
}
