mod handlers;
mod models;
mod read;
mod state;

pub use handlers::run_server;
