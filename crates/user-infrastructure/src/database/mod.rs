//! Database module (storage adapters)

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod schema;

pub use connection::create_pool;
pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
pub use schema::ensure_schema;
