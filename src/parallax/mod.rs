pub mod engine;
pub mod layout;
