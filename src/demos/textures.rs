use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;
use crate::graphics::{
    ElementBufferObject, Program, Texture, VertexArrayObject, VertexBufferObject, VertexLayout,
};

/// Position followed by texture coordinates. Images are uploaded top row
/// first, so `v` grows downwards.
#[rustfmt::skip]
pub const VERTICES: [f32; 20] = [
    // positions       // texture coords
     0.5,  0.5, 0.0,   1.0, 0.0, // top right
     0.5, -0.5, 0.0,   1.0, 1.0, // bottom right
    -0.5, -0.5, 0.0,   0.0, 1.0, // bottom left
    -0.5,  0.5, 0.0,   0.0, 0.0, // top left
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

pub const BRICK: &str = "assets/brick.png";
pub const TREE: &str = "assets/tree.png";

pub fn layout() -> VertexLayout {
    VertexLayout::new(&[3, 2])
}

/// The brick and tree textures bound to units 0 and 1
pub(crate) struct TexturePair {
    first: Texture,
    second: Texture,
}

impl TexturePair {
    pub unsafe fn load(config: &Config) -> Result<Self> {
        Ok(Self {
            first: Texture::from_file(&config.asset(BRICK))?,
            second: Texture::from_file(&config.asset(TREE))?,
        })
    }

    /// Tells the samplers of `program` which unit they read from, only has to be done once
    pub unsafe fn assign_units(program: &Program) -> Result<()> {
        Program::bind(program);
        program.set_int("texture1", 0)?;
        program.set_int("texture2", 1)?;
        Ok(())
    }

    pub unsafe fn bind(&self) {
        Texture::bind_to_unit(&self.first, 0);
        Texture::bind_to_unit(&self.second, 1);
    }
}

/// The indexed, textured rectangle shared by the texture chapters
pub(crate) struct TexturedQuad {
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    ebo: ElementBufferObject,
}

impl TexturedQuad {
    pub unsafe fn new() -> Self {
        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);
        let vbo = VertexBufferObject::new(&VERTICES);
        let ebo = ElementBufferObject::new(&INDICES);
        VertexArrayObject::apply_layout(&layout());

        VertexArrayObject::unbind();
        VertexBufferObject::unbind();
        ElementBufferObject::unbind();
        Self { vao, _vbo: vbo, ebo }
    }

    pub unsafe fn draw(&self) {
        VertexArrayObject::bind(&self.vao);
        self.ebo.draw_triangles();
    }
}

/// A rectangle blending two textures together
pub struct Textures {
    program: Program,
    quad: TexturedQuad,
    textures: TexturePair,
}

impl Textures {
    pub fn config() -> Config {
        Config::from_env().with_title("Textures")
    }

    pub unsafe fn new(config: &Config) -> Result<Self> {
        let program = Program::from_files(
            &config.asset("shaders/textures.vert"),
            &config.asset("shaders/textures.frag"),
        )?;
        let quad = TexturedQuad::new();
        let textures = TexturePair::load(config)?;
        TexturePair::assign_units(&program)?;
        Ok(Self {
            program,
            quad,
            textures,
        })
    }
}

impl Scene for Textures {
    fn draw(&mut self, _time: f32) -> Result<()> {
        unsafe {
            self.textures.bind();
            Program::bind(&self.program);
            self.quad.draw();
        }
        Ok(())
    }
}
