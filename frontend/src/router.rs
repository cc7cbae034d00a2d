use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, layout::APP_TITLE},
    pages::{
        attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage,
        leave::LeavePage, login::LoginPage, register::RegisterPage,
    },
    state::session::SessionProvider,
};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/";
pub const EMPLOYEES_PATH: &str = "/employees";
pub const ATTENDANCE_PATH: &str = "/attendance";
pub const LEAVE_PATH: &str = "/leave";

pub const ROUTE_PATHS: &[&str] = &[
    LOGIN_PATH,
    REGISTER_PATH,
    DASHBOARD_PATH,
    EMPLOYEES_PATH,
    ATTENDANCE_PATH,
    LEAVE_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] =
    &[DASHBOARD_PATH, EMPLOYEES_PATH, ATTENDANCE_PATH, LEAVE_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH, REGISTER_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text=APP_TITLE/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=REGISTER_PATH view=RegisterPage/>
                    <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
                    <Route path=EMPLOYEES_PATH view=ProtectedEmployees/>
                    <Route path=ATTENDANCE_PATH view=ProtectedAttendance/>
                    <Route path=LEAVE_PATH view=ProtectedLeave/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAuth><EmployeesPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RequireAuth><LeavePage/></RequireAuth> }
}
