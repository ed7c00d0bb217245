pub mod error_popup;
pub mod form;
pub mod highlight;
pub mod import_prompt;
pub mod layout;
pub mod popup;
pub mod record_list;
pub mod status_bar;
