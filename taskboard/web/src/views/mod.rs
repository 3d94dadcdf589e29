mod not_found;
pub mod tasks;

pub use not_found::NotFound;
pub use tasks::Tasks;
