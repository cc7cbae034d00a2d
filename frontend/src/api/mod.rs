mod attendance;
mod auth;
pub mod client;
mod employees;
mod leave;
pub mod resource;
pub mod types;

pub use attendance::Attendances;
pub use client::*;
pub use employees::Employees;
pub use leave::LeaveRequests;
pub use resource::ResourceKind;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
