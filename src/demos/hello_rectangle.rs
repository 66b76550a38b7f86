use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;
use crate::graphics::{
    ElementBufferObject, FragmentShader, Program, VertexArrayObject, VertexBufferObject,
    VertexLayout, VertexShader,
};

pub const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

pub const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

/// Corners of the rectangle in normalized device coordinates
#[rustfmt::skip]
pub const VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Two indexed triangles drawn as a wireframe with in-source shaders
pub struct HelloRectangle {
    program: Program,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    ebo: ElementBufferObject,
}

impl HelloRectangle {
    pub fn config() -> Config {
        Config::from_env()
            .with_title("Hello Rectangle")
            .with_wireframe(true)
    }

    pub unsafe fn new() -> Result<Self> {
        let vs = VertexShader::from_source(VERTEX_SHADER)?;
        let fs = FragmentShader::from_source(FRAGMENT_SHADER)?;
        let program = Program::new(&vs, &fs)?;
        drop(vs);
        drop(fs);

        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);
        let vbo = VertexBufferObject::new(&VERTICES);
        VertexArrayObject::apply_layout(&VertexLayout::new(&[3]));
        let ebo = ElementBufferObject::new(&INDICES);

        // The VAO remembers the element buffer, so it goes last
        VertexBufferObject::unbind();
        VertexArrayObject::unbind();
        ElementBufferObject::unbind();

        Ok(Self {
            program,
            vao,
            _vbo: vbo,
            ebo,
        })
    }
}

impl Scene for HelloRectangle {
    fn draw(&mut self, _time: f32) -> Result<()> {
        unsafe {
            Program::bind(&self.program);
            VertexArrayObject::bind(&self.vao);
            self.ebo.draw_triangles();
            VertexArrayObject::unbind();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_within_the_vertices() {
        let count = VertexLayout::new(&[3]).vertex_count(&VERTICES) as u32;
        assert_eq!(count, 4);
        assert!(INDICES.iter().all(|&i| i < count));
    }

    #[test]
    fn triangles_share_the_diagonal() {
        let (first, second) = INDICES.split_at(3);
        let shared: Vec<_> = first.iter().filter(|i| second.contains(*i)).collect();
        assert_eq!(shared, vec![&1, &3]);
    }

    #[test]
    fn sources_declare_the_core_profile() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos;"));
    }
}
