pub mod error;
pub mod options;
pub mod renderer;
