use super::VertexLayout;
use gl::types as gl_t;
use std::mem::size_of;

/// Records the attribute formats and the element buffer of a mesh
pub struct VertexArrayObject {
    id: u32,
}

impl VertexArrayObject {
    pub unsafe fn new() -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenVertexArrays(1, &mut id);
        Self { id }
    }

    pub unsafe fn bind(vao: &Self) {
        gl::BindVertexArray(vao.id);
    }

    pub unsafe fn unbind() {
        gl::BindVertexArray(0);
    }

    /// Describes an attribute made of `size` floats read from the bound
    /// array buffer and enables it
    ///
    /// `stride` and `offset` are in bytes
    pub unsafe fn f32_attrib_format(location: u32, size: i32, stride: usize, offset: usize) {
        gl::VertexAttribPointer(
            location,
            size,
            gl::FLOAT,
            gl::FALSE,
            stride as gl_t::GLsizei,
            offset as *const _,
        );
        gl::EnableVertexAttribArray(location);
    }

    /// Applies every attribute of `layout`, the VAO and the VBO must be bound
    pub unsafe fn apply_layout(layout: &VertexLayout) {
        for attrib in layout.attributes() {
            Self::f32_attrib_format(
                attrib.location,
                attrib.components as i32,
                attrib.stride * size_of::<f32>(),
                attrib.offset * size_of::<f32>(),
            );
        }
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
