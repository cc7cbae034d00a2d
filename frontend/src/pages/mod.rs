pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod leave;
pub mod login;
pub mod register;
pub mod resource;
