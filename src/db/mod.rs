pub mod connection;
pub mod properties;

pub use connection::Database;
