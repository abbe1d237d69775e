pub mod config;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod pages;
pub mod platform;
pub mod server;
pub mod view;
