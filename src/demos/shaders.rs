use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;
use crate::graphics::{self, Program, VertexArrayObject, VertexBufferObject, VertexLayout};

/// Position followed by the colour of each corner
#[rustfmt::skip]
pub const VERTICES: [f32; 18] = [
    // positions        // colors
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom left
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0, // top
];

pub fn layout() -> VertexLayout {
    VertexLayout::new(&[3, 3])
}

/// A triangle whose colours get interpolated across its surface
pub struct Shaders {
    program: Program,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    count: usize,
}

impl Shaders {
    pub fn config() -> Config {
        Config::from_env().with_title("Shaders")
    }

    pub unsafe fn new(config: &Config) -> Result<Self> {
        let program = Program::from_files(
            &config.asset("shaders/shaders.vert"),
            &config.asset("shaders/shaders.frag"),
        )?;

        let layout = layout();
        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);
        let vbo = VertexBufferObject::new(&VERTICES);
        VertexArrayObject::apply_layout(&layout);
        VertexArrayObject::unbind();
        VertexBufferObject::unbind();

        Ok(Self {
            program,
            vao,
            _vbo: vbo,
            count: layout.vertex_count(&VERTICES),
        })
    }
}

impl Scene for Shaders {
    fn draw(&mut self, _time: f32) -> Result<()> {
        unsafe {
            Program::bind(&self.program);
            VertexArrayObject::bind(&self.vao);
            graphics::draw_triangles(self.count);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_triangle_with_primary_colours() {
        let layout = layout();
        assert_eq!(layout.vertex_count(&VERTICES), 3);
        for vertex in VERTICES.chunks_exact(layout.stride()) {
            let color = &vertex[3..];
            assert_eq!(color.iter().sum::<f32>(), 1.0);
        }
    }
}
