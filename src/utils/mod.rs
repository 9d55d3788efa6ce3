pub mod analytics;
pub mod diagnostics;
pub mod resource_errors;
pub mod visitor_id;
