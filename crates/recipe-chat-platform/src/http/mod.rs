pub mod backend;
pub mod payload;

pub use backend::HttpBackend;
