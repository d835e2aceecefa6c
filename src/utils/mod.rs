pub mod datamall_client;
pub mod logger;
