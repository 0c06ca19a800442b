// Library root. Exposes build metadata and path resolution to the binary
// and to integration tests. The binary entry point is src/main.rs.

pub mod build_info;
pub mod config;
pub mod error;
pub mod logger;
pub mod paths;

pub use build_info::{BUILD_INFO, BuildInfo};
pub use paths::{dot_folder, dot_folder_path};
