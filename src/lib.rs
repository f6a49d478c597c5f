pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exit;
pub mod icon;
pub mod notify;
