/// Layered client configuration (file, environment, `.env`).
pub mod config;
