pub mod config;
pub mod copy;
pub mod list;
