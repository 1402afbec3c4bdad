pub mod decode;
pub mod manifest;
pub mod store;
