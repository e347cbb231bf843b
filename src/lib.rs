//! A Lambda HTTP handler that looks up the caller's public IP and returns
//! `{"message": "Hello, <name>", "ip": "<ip>"}`.

pub mod client;
pub mod config;
pub mod error;
pub mod greeting;
pub mod handler;
pub mod logging;

pub use config::HandlerConfig;
pub use error::{HandlerError, Result};
pub use greeting::Greeting;
pub use handler::GreetingHandler;
