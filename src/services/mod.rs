mod dashboard_service;
pub(crate) use dashboard_service::*;
