pub mod activity;
pub mod incident;
pub mod maintenance;
pub mod organization;
pub mod service;
