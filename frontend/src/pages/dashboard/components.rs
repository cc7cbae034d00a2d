use leptos::*;

use super::repository::{DashboardData, StatusCounts};
use crate::api::{LeaveRequest, LeaveStatus};

#[component]
pub fn SummaryCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="bg-white border border-blue-100 p-6 rounded-xl shadow hover:shadow-lg transition duration-300">
            <div class="flex flex-col items-center">
                <p class="text-3xl font-bold text-blue-600">{value}</p>
                <p class="text-gray-700 font-medium mt-2 text-sm text-center">{label}</p>
            </div>
        </div>
    }
}

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-green-100 text-green-700",
        LeaveStatus::Rejected => "bg-red-100 text-red-700",
        LeaveStatus::Pending => "bg-yellow-100 text-yellow-700",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "px-3 py-1 rounded-full text-xs font-medium shadow-sm {}",
            status_badge_class(status),
        )>{status.as_str()}</span>
    }
}

fn summary_cards(counts: StatusCounts, employees: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6 mb-12">
            <SummaryCard label="Total Requests" value=counts.total/>
            <SummaryCard label="Pending" value=counts.pending/>
            <SummaryCard label="Approved" value=counts.approved/>
            <SummaryCard label="Rejected" value=counts.rejected/>
            <SummaryCard label="Employees" value=employees/>
        </div>
    }
}

#[component]
pub fn RecentLeaveTable(leaves: Vec<LeaveRequest>) -> impl IntoView {
    let rows = if leaves.is_empty() {
        view! {
            <tr>
                <td colspan="5" class="text-center py-8 text-gray-500">
                    "No leave requests found."
                </td>
            </tr>
        }
        .into_view()
    } else {
        leaves
            .into_iter()
            .map(|leave| {
                view! {
                    <tr class="border-b hover:bg-gray-50">
                        <td class="px-6 py-3">{leave.employee_display_name()}</td>
                        <td class="px-6 py-3">{leave.start_date.format("%Y-%m-%d").to_string()}</td>
                        <td class="px-6 py-3">{leave.end_date.format("%Y-%m-%d").to_string()}</td>
                        <td class="px-6 py-3">{leave.kind_label()}</td>
                        <td class="px-6 py-3">
                            <StatusBadge status=leave.status/>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };
    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-x-auto">
            <h2 class="text-2xl font-semibold text-gray-800 p-6 border-b">"Recent Leave Requests"</h2>
            <table class="w-full text-sm text-left text-gray-700">
                <thead class="bg-blue-600 text-white text-xs uppercase tracking-wider">
                    <tr>
                        <th class="px-6 py-4">"Employee"</th>
                        <th class="px-6 py-4">"From"</th>
                        <th class="px-6 py-4">"To"</th>
                        <th class="px-6 py-4">"Type"</th>
                        <th class="px-6 py-4">"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

pub fn dashboard_body(data: DashboardData) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-4xl font-extrabold text-center text-blue-800 mb-10">"Dashboard Overview"</h1>
            {summary_cards(data.counts, data.employees)}
            <RecentLeaveTable leaves=data.recent/>
        </div>
    }
}
