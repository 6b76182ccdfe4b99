pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
