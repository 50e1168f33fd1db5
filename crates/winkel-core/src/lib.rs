pub mod config;
pub mod logging;

pub mod backend;
pub mod error;
pub mod model;
pub mod rest;
pub mod route;
pub mod views;
