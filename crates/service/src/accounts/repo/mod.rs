//! Concrete account stores.

pub mod memory;
pub mod seaorm;

pub use memory::MemoryAccountStore;
pub use seaorm::SeaOrmAccountStore;
