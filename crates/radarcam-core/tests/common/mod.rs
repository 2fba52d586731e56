#![allow(dead_code)]

pub mod radar_server;
