pub mod app_state;
pub mod datamall_record;
pub mod output_rows;
