pub mod color;
pub mod config;
pub mod connect;
pub mod constants;
pub mod easing;
pub mod field;
pub mod interactions;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod runner;

pub use color::*;
pub use config::*;
pub use connect::Connection;
pub use field::*;
pub use particle::*;
pub use pointer::*;
pub use render::*;
pub use runner::*;
