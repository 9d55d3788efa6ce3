pub mod app;
pub mod component;
pub mod consts;
pub mod error_template;
pub mod page;
pub mod state;
pub mod utils;
