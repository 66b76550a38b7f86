use gl::types as gl_t;
use std::mem::size_of_val;
use std::ptr;

/// Triangle indices for `glDrawElements`
///
/// The VAO records the element buffer binding, so create it while the VAO is
/// bound and don't unbind it before the VAO.
pub struct ElementBufferObject {
    id: u32,
    count: usize,
}

impl ElementBufferObject {
    pub unsafe fn new(indices: &[u32]) -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenBuffers(1, &mut id);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            size_of_val(indices) as gl_t::GLsizeiptr,
            indices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        Self {
            id,
            count: indices.len(),
        }
    }

    pub unsafe fn unbind() {
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Draws every index as a list of triangles using the bound VAO
    pub unsafe fn draw_triangles(&self) {
        gl::DrawElements(
            gl::TRIANGLES,
            self.count as gl_t::GLsizei,
            gl::UNSIGNED_INT,
            ptr::null(),
        );
    }
}

impl Drop for ElementBufferObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
