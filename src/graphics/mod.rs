//! This is a thin wrapper around basic OpenGL calls that doesn't guarantee
//! any safety (thus everything is unsafe)
mod ebo;
mod layout;
mod shader;
mod texture;
mod vao;
mod vbo;

pub use ebo::ElementBufferObject;
pub use layout::{Attribute, VertexLayout};
pub use shader::{read_source, FragmentShader, Program, VertexShader};
pub use texture::{Texture, TextureImage};
pub use vao::VertexArrayObject;
pub use vbo::VertexBufferObject;

/// Draws `count` vertices of the bound VAO as a triangle list
pub unsafe fn draw_triangles(count: usize) {
    gl::DrawArrays(gl::TRIANGLES, 0, count as i32);
}

/// Panics in debug builds when the driver has a pending error
pub fn check_error() {
    let error = unsafe { gl::GetError() };
    debug_assert!(error == gl::NO_ERROR, "OpenGL error: {:#x}", error);
}
