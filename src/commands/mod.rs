// Command handlers module
pub mod env;
pub mod memory;
pub mod status;
pub mod version;

// Re-exports for cleaner imports
pub use memory::{execute_cpu as cpu, execute_gpu as gpu};
pub use status::execute as status;
pub use version::execute as version;
