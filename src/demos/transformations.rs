use super::textures::{TexturePair, TexturedQuad};
use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;
use crate::graphics::Program;
use crate::math;

/// The textured rectangle spinning in the bottom right corner
pub struct Transformations {
    program: Program,
    quad: TexturedQuad,
    textures: TexturePair,
}

impl Transformations {
    pub fn config() -> Config {
        Config::from_env().with_title("Transformations")
    }

    pub unsafe fn new(config: &Config) -> Result<Self> {
        let program = Program::from_files(
            &config.asset("shaders/transformations.vert"),
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

impl Scene for Transformations {
    fn draw(&mut self, time: f32) -> Result<()> {
        unsafe {
            self.textures.bind();
            Program::bind(&self.program);
            self.program
                .set_mat4("transform", &math::spinning_transform(time))?;
            self.quad.draw();
        }
        Ok(())
    }
}
