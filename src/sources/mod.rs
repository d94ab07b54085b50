pub mod json_file_source;
pub mod memory_source;
pub mod traits;

pub use json_file_source::JsonFileSource;
pub use memory_source::MemorySource;
pub use traits::ContactSource;
