pub mod engine;
pub mod scene;
pub mod shader;
