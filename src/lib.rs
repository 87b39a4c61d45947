pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod services;
pub mod web;

#[cfg(test)]
mod tests;

pub use config::Config;
