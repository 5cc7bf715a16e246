//! bookshelf - A minimal in-memory bookshelf CRUD API

pub mod cli;
pub mod core;
pub mod http_server;
pub mod observability;
