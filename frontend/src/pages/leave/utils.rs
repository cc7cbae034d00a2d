use crate::{
    api::{ApiError, EmployeeLink, LeaveDraft, LeaveRequest, LeaveRequests, LeaveStatus},
    pages::resource::{
        utils::{required, required_date},
        EditableResource, ResourceText,
    },
};

pub const STATUS_OPTIONS: &[&str] = &["PENDING", "APPROVED", "REJECTED"];

/// Status starts blank so the user has to pick one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaveForm {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub employee_id: String,
    pub status: String,
}

fn employee_id(record: &LeaveRequest) -> Option<&str> {
    record.employee.as_ref().map(|e| e.id.as_str())
}

impl EditableResource for LeaveRequests {
    type Form = LeaveForm;

    const TEXT: ResourceText = ResourceText {
        form_title: "Submit Leave Request",
        submit_label: "Submit Leave",
        search_title: "Search Leave Requests",
        list_title: "Leave Request List",
        modal_title: "Edit Leave Request",
        loading: "Loading leave requests...",
        empty: "No leave requests found.",
        load_failed: "Failed to load leave requests.",
        created: "Leave request submitted!",
        create_failed: "Error submitting leave",
        updated: "Leave request updated!",
        update_failed: "Error updating leave",
        deleted: "Leave request deleted!",
        delete_failed: "Error deleting leave",
        confirm_delete: "Are you sure you want to delete this leave request?",
    };
    const COLUMNS: &'static [&'static str] =
        &["Start Date", "End Date", "Reason", "Status", "Employee ID", "Name"];

    fn search_key(record: &LeaveRequest) -> Option<&str> {
        employee_id(record)
    }

    fn cells(record: &LeaveRequest) -> Vec<String> {
        vec![
            record.start_date.format("%Y-%m-%d").to_string(),
            record.end_date.format("%Y-%m-%d").to_string(),
            record.reason.clone(),
            record.status.as_str().to_string(),
            employee_id(record).unwrap_or_default().to_string(),
            record.employee_display_name(),
        ]
    }

    fn form_from_record(record: &LeaveRequest) -> LeaveForm {
        LeaveForm {
            start_date: record.start_date.format("%Y-%m-%d").to_string(),
            end_date: record.end_date.format("%Y-%m-%d").to_string(),
            reason: record.reason.clone(),
            employee_id: employee_id(record).unwrap_or_default().to_string(),
            status: record.status.as_str().to_string(),
        }
    }

    fn draft_from_form(form: &LeaveForm) -> Result<LeaveDraft, ApiError> {
        let start_date = required_date(&form.start_date, "Start date")?;
        let end_date = required_date(&form.end_date, "End date")?;
        let reason = required(&form.reason, "Reason")?;
        let id = required(&form.employee_id, "Employee ID")?;
        let status = LeaveStatus::parse(&required(&form.status, "Status")?)
            .ok_or_else(|| ApiError::validation("Status must be PENDING, APPROVED or REJECTED."))?;
        Ok(LeaveDraft {
            start_date,
            end_date,
            reason,
            status,
            employee: EmployeeLink { id },
        })
    }
}
