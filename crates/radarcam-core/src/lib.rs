pub mod config;
pub mod logging;

pub mod cache;
pub mod camera;
pub mod checksum;
pub mod extract;
pub mod fetch;
pub mod storage;
