pub mod file_type;
pub mod pinning;
pub mod relay;
