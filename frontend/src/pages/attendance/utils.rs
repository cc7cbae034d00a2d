use crate::{
    api::{ApiError, AttendanceDraft, AttendanceRecord, AttendanceStatus, Attendances, EmployeeLink},
    pages::resource::{
        utils::{required, required_date},
        EditableResource, ResourceText,
    },
};

pub const STATUS_OPTIONS: &[&str] = &["Present", "Absent", "Leave"];

#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceForm {
    pub date: String,
    pub status: String,
    pub employee_id: String,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            status: AttendanceStatus::default().as_str().to_string(),
            employee_id: String::new(),
        }
    }
}

fn employee_id(record: &AttendanceRecord) -> Option<&str> {
    record.employee.as_ref().map(|e| e.id.as_str())
}

impl EditableResource for Attendances {
    type Form = AttendanceForm;

    const TEXT: ResourceText = ResourceText {
        form_title: "Record Attendance",
        submit_label: "Submit Attendance",
        search_title: "Search Attendance",
        list_title: "Attendance Records",
        modal_title: "Edit Attendance",
        loading: "Loading attendance...",
        empty: "No attendance records found.",
        load_failed: "Failed to load attendance records.",
        created: "Attendance recorded successfully!",
        create_failed: "Error recording attendance",
        updated: "Attendance updated!",
        update_failed: "Update failed",
        deleted: "Deleted successfully",
        delete_failed: "Failed to delete record",
        confirm_delete: "Delete this attendance record?",
    };
    const COLUMNS: &'static [&'static str] = &["Date", "Status", "Employee ID", "Name", "Department"];

    fn search_key(record: &AttendanceRecord) -> Option<&str> {
        employee_id(record)
    }

    fn cells(record: &AttendanceRecord) -> Vec<String> {
        let employee = record.employee.as_ref();
        vec![
            record.date.format("%Y-%m-%d").to_string(),
            record.status.as_str().to_string(),
            employee.map(|e| e.id.clone()).unwrap_or_default(),
            employee.and_then(|e| e.name.clone()).unwrap_or_default(),
            employee.and_then(|e| e.department.clone()).unwrap_or_default(),
        ]
    }

    fn form_from_record(record: &AttendanceRecord) -> AttendanceForm {
        AttendanceForm {
            date: record.date.format("%Y-%m-%d").to_string(),
            status: record.status.as_str().to_string(),
            employee_id: employee_id(record).unwrap_or_default().to_string(),
        }
    }

    fn draft_from_form(form: &AttendanceForm) -> Result<AttendanceDraft, ApiError> {
        let date = required_date(&form.date, "Date")?;
        let status = AttendanceStatus::parse(&required(&form.status, "Status")?)
            .ok_or_else(|| ApiError::validation("Status must be Present, Absent or Leave."))?;
        let id = required(&form.employee_id, "Employee ID")?;
        Ok(AttendanceDraft {
            date,
            status,
            employee: EmployeeLink { id },
        })
    }
}
