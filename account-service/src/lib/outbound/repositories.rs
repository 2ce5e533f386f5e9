pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryAccountRepository;
pub use postgres::PostgresAccountRepository;
