pub mod user_repo;
pub mod memory_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
pub use memory_repo::InMemoryUserRepository;
