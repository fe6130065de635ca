pub mod cli;
pub mod config;
pub mod error;
pub mod latency;
pub mod message;
pub mod responder;
