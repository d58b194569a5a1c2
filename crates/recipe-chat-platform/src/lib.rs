//! Browser adapters for the recipe chat ports.

pub mod http;

#[cfg(test)]
mod tests;

pub use http::HttpBackend;
