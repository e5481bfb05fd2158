pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod output;
pub mod view;
