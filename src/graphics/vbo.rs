use gl::types as gl_t;
use std::mem::size_of_val;

/// Static vertex data living on the GPU
pub struct VertexBufferObject {
    id: u32,
    len: usize,
}

impl VertexBufferObject {
    /// Uploads `data` into a new buffer, which is left bound to `ARRAY_BUFFER`
    pub unsafe fn new<T>(data: &[T]) -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenBuffers(1, &mut id);
        gl::BindBuffer(gl::ARRAY_BUFFER, id);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            size_of_val(data) as gl_t::GLsizeiptr,
            data.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        Self {
            id,
            len: data.len(),
        }
    }

    pub unsafe fn bind(vbo: &Self) {
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo.id);
    }

    pub unsafe fn unbind() {
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
    }

    /// Number of elements that were uploaded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for VertexBufferObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
