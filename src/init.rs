pub mod args;
pub mod config;
pub mod send_sync_ptr;
