pub mod config;
pub mod controller;
pub mod input;
pub mod schedule;
pub mod session;
