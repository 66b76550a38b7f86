use crate::error::{Error, Result};
use std::ffi::CString;
use std::path::Path;
use std::ptr;

macro_rules! shader {
	($name: ident [$gl: ident]: $stage: literal) => {
		/// A compiled shader stage, deleted when dropped
		pub struct $name {
			id: u32,
			source: String,
		}

		impl $name {
			pub(super) fn handle(&self) -> u32 {
				self.id
			}

			/// Compiles the GLSL in `source`
			pub unsafe fn from_source(source: &str) -> Result<Self> {
				let id = compile(gl::$gl, $stage, source)?;
				Ok(Self { id, source: source.to_string() })
			}

			/// Reads the file at `path` and compiles it
			pub unsafe fn from_file(path: &Path) -> Result<Self> {
				let source = read_source(path)?;
				log::debug!(concat!("compiling ", $stage, " shader {}"), path.display());
				Self::from_source(&source)
			}
		}

		impl std::fmt::Debug for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, concat!($stage, " source code:\n{}"), self.source)
			}
		}

		impl Drop for $name {
			fn drop(&mut self) {
				unsafe {
					gl::DeleteShader(self.id);
				}
			}
		}
	};
}

shader! {VertexShader[VERTEX_SHADER]: "Vertex"}
shader! {FragmentShader[FRAGMENT_SHADER]: "Fragment"}

pub use program::Program;
mod program;

/// Reads a whole shader source file
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ShaderRead {
        path: path.to_path_buf(),
        source,
    })
}

unsafe fn compile(kind: gl::types::GLenum, stage: &'static str, source: &str) -> Result<u32> {
    let source = CString::new(source).map_err(|_| Error::Compile {
        stage,
        log: "the source contains a NUL byte".to_string(),
    })?;
    let id = gl::CreateShader(kind);
    gl::ShaderSource(id, 1, &source.as_ptr(), ptr::null());
    gl::CompileShader(id);

    let mut status = 0;
    gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
    if status == 0 {
        let mut len = 0;
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        let mut log = info_log_buffer(len);
        gl::GetShaderInfoLog(id, len, &mut len, log.as_mut_ptr() as *mut _);
        gl::DeleteShader(id);
        Err(Error::Compile {
            stage,
            log: info_log_to_string(log, len),
        })
    } else {
        Ok(id)
    }
}

// Allocates the storage the driver writes an info log of `len` bytes into
fn info_log_buffer(len: i32) -> Vec<u8> {
    vec![0; len.max(1) as usize]
}

// Keeps only the `written` bytes the driver actually filled in
fn info_log_to_string(mut buffer: Vec<u8>, written: i32) -> String {
    buffer.truncate(written.max(0) as usize);
    while buffer.last() == Some(&0) {
        buffer.pop();
    }
    String::from_utf8_lossy(&buffer).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shader_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders").join(name)
    }

    #[test]
    fn missing_source_is_a_read_error() {
        let path = shader_path("does_not_exist.vert");
        match read_source(&path) {
            Err(Error::ShaderRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn shipped_sources_target_glsl_330_core() {
        for name in &[
            "shaders.vert",
            "shaders.frag",
            "textures.vert",
            "textures.frag",
            "transformations.vert",
            "coordinate_systems.vert",
        ] {
            let source = read_source(&shader_path(name)).unwrap();
            assert!(
                source.starts_with("#version 330 core"),
                "{} has no version directive",
                name
            );
            assert!(source.contains("void main()"), "{} has no entry point", name);
        }
    }

    #[test]
    fn info_log_stops_at_written_length() {
        let mut buffer = info_log_buffer(16);
        buffer[..5].copy_from_slice(b"oops\n");
        assert_eq!(info_log_to_string(buffer, 6), "oops");
    }

    #[test]
    fn empty_info_log_is_empty() {
        assert_eq!(info_log_buffer(0).len(), 1);
        assert_eq!(info_log_to_string(info_log_buffer(0), 0), "");
    }
}
