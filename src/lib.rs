pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod listener;
pub mod service;
pub mod startup;
pub mod validation;
