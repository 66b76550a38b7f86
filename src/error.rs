use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while setting up a demo
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create the window: {0}")]
    Window(#[from] glutin::CreationError),

    #[error("failed to make the OpenGL context current: {0}")]
    Context(#[from] glutin::ContextError),

    #[error("failed to read shader source {}: {source}", path.display())]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The driver rejected a shader stage, `log` is its info log
    #[error("{stage} shader compile error:\n{log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program link error:\n{0}")]
    Link(String),

    #[error("uniform `{0}` not found in the program")]
    UniformNotFound(String),

    #[error("vertex attribute `{0}` not found in the program")]
    AttribNotFound(String),

    #[error("failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = Error::Compile {
            stage: "Vertex",
            log: "0:1(1): error: syntax error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Vertex shader compile error"));
        assert!(msg.contains("syntax error"));
    }

    #[test]
    fn shader_read_error_shows_the_path() {
        let err = Error::ShaderRead {
            path: PathBuf::from("shaders/missing.vert"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("shaders/missing.vert"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn uniform_not_found_quotes_the_name() {
        let err = Error::UniformNotFound("transform".to_string());
        assert_eq!(err.to_string(), "uniform `transform` not found in the program");
    }
}
