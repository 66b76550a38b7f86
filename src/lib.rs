//! The programs of the introductory OpenGL course, one binary per chapter
//! sharing the window bootstrap and the thin GL wrappers below.
pub mod app;
pub mod config;
pub mod demos;
pub mod error;
pub mod graphics;
pub mod logging;
pub mod math;

pub use config::Config;
pub use error::{Error, Result};
