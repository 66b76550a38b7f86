use super::{info_log_buffer, info_log_to_string, FragmentShader, VertexShader};
use crate::error::{Error, Result};
use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use std::ffi::CString;
use std::path::Path;

/// A linked vertex + fragment shader program
pub struct Program {
    id: u32,
}

impl Program {
    /// Links the two stages, they can be dropped right after
    pub unsafe fn new(vs: &VertexShader, fs: &FragmentShader) -> Result<Self> {
        let id = gl::CreateProgram();
        gl::AttachShader(id, vs.handle());
        gl::AttachShader(id, fs.handle());
        gl::LinkProgram(id);
        gl::DetachShader(id, vs.handle());
        gl::DetachShader(id, fs.handle());

        let mut status = 0;
        gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
        if status == 0 {
            let mut len = 0;
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
            let mut log = info_log_buffer(len);
            gl::GetProgramInfoLog(id, len, &mut len, log.as_mut_ptr() as *mut _);
            gl::DeleteProgram(id);
            return Err(Error::Link(info_log_to_string(log, len)));
        }
        log::debug!("linked shader program {}", id);
        Ok(Self { id })
    }

    /// Compiles both files and links them
    pub unsafe fn from_files(vertex: &Path, fragment: &Path) -> Result<Self> {
        let vs = VertexShader::from_file(vertex)?;
        let fs = FragmentShader::from_file(fragment)?;
        Self::new(&vs, &fs)
    }

    pub unsafe fn bind(program: &Self) {
        gl::UseProgram(program.id);
    }

    pub unsafe fn unbind() {
        gl::UseProgram(0);
    }

    pub fn handle(&self) -> u32 {
        self.id
    }

    pub unsafe fn uniform_location(&self, name: &str) -> Result<i32> {
        let c_name = CString::new(name).map_err(|_| Error::UniformNotFound(name.to_string()))?;
        match gl::GetUniformLocation(self.id, c_name.as_ptr()) {
            -1 => Err(Error::UniformNotFound(name.to_string())),
            loc => Ok(loc),
        }
    }

    pub unsafe fn vertex_attrib_location(&self, name: &str) -> Result<u32> {
        let c_name = CString::new(name).map_err(|_| Error::AttribNotFound(name.to_string()))?;
        match gl::GetAttribLocation(self.id, c_name.as_ptr()) {
            -1 => Err(Error::AttribNotFound(name.to_string())),
            loc => Ok(loc as u32),
        }
    }

    // NOTE: the setters below write to the currently bound program

    pub unsafe fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        gl::Uniform1i(self.uniform_location(name)?, value as i32);
        Ok(())
    }

    pub unsafe fn set_int(&self, name: &str, value: i32) -> Result<()> {
        gl::Uniform1i(self.uniform_location(name)?, value);
        Ok(())
    }

    pub unsafe fn set_float(&self, name: &str, value: f32) -> Result<()> {
        gl::Uniform1f(self.uniform_location(name)?, value);
        Ok(())
    }

    pub unsafe fn set_vec2(&self, name: &str, value: Vec2) -> Result<()> {
        gl::Uniform2f(self.uniform_location(name)?, value.x, value.y);
        Ok(())
    }

    pub unsafe fn set_vec3(&self, name: &str, value: Vec3) -> Result<()> {
        gl::Uniform3f(self.uniform_location(name)?, value.x, value.y, value.z);
        Ok(())
    }

    pub unsafe fn set_vec4(&self, name: &str, value: Vec4) -> Result<()> {
        gl::Uniform4f(
            self.uniform_location(name)?,
            value.x,
            value.y,
            value.z,
            value.w,
        );
        Ok(())
    }

    pub unsafe fn set_mat2(&self, name: &str, value: &Mat2) -> Result<()> {
        let cols = value.to_cols_array();
        gl::UniformMatrix2fv(self.uniform_location(name)?, 1, gl::FALSE, cols.as_ptr());
        Ok(())
    }

    pub unsafe fn set_mat3(&self, name: &str, value: &Mat3) -> Result<()> {
        let cols = value.to_cols_array();
        gl::UniformMatrix3fv(self.uniform_location(name)?, 1, gl::FALSE, cols.as_ptr());
        Ok(())
    }

    pub unsafe fn set_mat4(&self, name: &str, value: &Mat4) -> Result<()> {
        let cols = value.to_cols_array();
        gl::UniformMatrix4fv(self.uniform_location(name)?, 1, gl::FALSE, cols.as_ptr());
        Ok(())
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
