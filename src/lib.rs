pub mod common;
pub mod db;
pub mod models;
pub mod sections;
pub mod services;
pub mod types;
