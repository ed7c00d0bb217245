pub mod app_state;
pub mod focus;
pub mod form;
pub mod list;
pub mod mode;
pub mod record;
pub mod store;
pub mod text;
