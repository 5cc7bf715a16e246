//! HTTP surface for the bookshelf service.

mod book_routes;
mod config;
mod health_routes;
mod server;

pub use book_routes::{book_routes, BooksState, Envelope};
pub use config::HttpServerConfig;
pub use health_routes::health_routes;
pub use server::HttpServer;
