use crate::api::{ApiClient, ApiError, Employees, LeaveRequest, LeaveRequests, LeaveStatus};

pub const DASHBOARD_ERROR_MESSAGE: &str = "Failed to fetch dashboard data.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub employees: usize,
    pub counts: StatusCounts,
    pub recent: Vec<LeaveRequest>,
}

pub fn count_by_status(leaves: &[LeaveRequest]) -> StatusCounts {
    leaves.iter().fold(
        StatusCounts {
            total: leaves.len(),
            ..StatusCounts::default()
        },
        |mut counts, leave| {
            match leave.status {
                LeaveStatus::Pending => counts.pending += 1,
                LeaveStatus::Approved => counts.approved += 1,
                LeaveStatus::Rejected => counts.rejected += 1,
            }
            counts
        },
    )
}

/// Employee count, leave totals and the recent-activity list. The first failed
/// read aborts the whole load.
pub async fn fetch_dashboard(api: &ApiClient) -> Result<DashboardData, ApiError> {
    let employees = api.list::<Employees>().await?;
    let leaves = api.list::<LeaveRequests>().await?;
    let recent = api.recent_leave_requests().await?;
    Ok(DashboardData {
        employees: employees.len(),
        counts: count_by_status(&leaves),
        recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn leave(status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: "1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            reason: "Rest".into(),
            status,
            employee: None,
            employee_name: None,
            leave_type: None,
        }
    }

    #[test]
    fn counts_each_status() {
        let leaves = vec![
            leave(LeaveStatus::Pending),
            leave(LeaveStatus::Approved),
            leave(LeaveStatus::Approved),
            leave(LeaveStatus::Rejected),
        ];
        assert_eq!(
            count_by_status(&leaves),
            StatusCounts {
                total: 4,
                pending: 1,
                approved: 2,
                rejected: 1,
            }
        );
        assert_eq!(count_by_status(&[]), StatusCounts::default());
    }
}
