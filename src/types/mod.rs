pub mod any_datetime;
pub mod query_error;
pub mod reading;
pub mod table_layout;
pub mod time_window;
pub mod visibility;
