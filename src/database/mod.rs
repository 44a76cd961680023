mod connection;
mod memory;
mod postgres;
pub mod seed;
mod store;

pub use connection::{check_health, create_pool};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::CatalogStore;
