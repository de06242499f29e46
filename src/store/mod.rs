//! Typed accessors over the document store, one module per entity kind.
//! Every operation is scoped by `organization_id`; update and delete report
//! `NotFound` when no row matched instead of claiming success.

pub mod activity;
pub mod incident;
pub mod maintenance;
pub mod organization;
pub mod service;
