use super::textures::TexturePair;
use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;
use crate::graphics::{self, Program, VertexArrayObject, VertexBufferObject, VertexLayout};
use crate::math;
use glam::{Mat4, Vec3};

/// A unit cube as 36 non-indexed vertices, position followed by texture coordinates
#[rustfmt::skip]
pub const VERTICES: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

/// Where each cube sits in world space
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

pub fn layout() -> VertexLayout {
    VertexLayout::new(&[3, 2])
}

/// Model matrix of the `index`th cube, each one is tilted 20 degrees more than the previous
pub fn model(index: usize) -> Mat4 {
    math::tilted_model(CUBE_POSITIONS[index], 20.0 * index as f32)
}

/// Ten textured cubes seen through a perspective camera
pub struct CoordinateSystems {
    program: Program,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    textures: TexturePair,
    count: usize,
    projection: Mat4,
}

impl CoordinateSystems {
    pub fn config() -> Config {
        Config::from_env()
            .with_title("Coordinate Systems")
            .with_depth_test(true)
    }

    pub unsafe fn new(config: &Config) -> Result<Self> {
        let program = Program::from_files(
            &config.asset("shaders/coordinate_systems.vert"),
            &config.asset("shaders/textures.frag"),
        )?;

        let layout = layout();
        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);
        let vbo = VertexBufferObject::new(&VERTICES);
        VertexArrayObject::apply_layout(&layout);
        VertexArrayObject::unbind();
        VertexBufferObject::unbind();

        let textures = TexturePair::load(config)?;
        TexturePair::assign_units(&program)?;

        Ok(Self {
            program,
            vao,
            _vbo: vbo,
            textures,
            count: layout.vertex_count(&VERTICES),
            projection: math::perspective(config.aspect_ratio()),
        })
    }
}

impl Scene for CoordinateSystems {
    fn draw(&mut self, _time: f32) -> Result<()> {
        unsafe {
            self.textures.bind();
            Program::bind(&self.program);
            self.program.set_mat4("view", &math::camera_view())?;
            self.program.set_mat4("projection", &self.projection)?;

            VertexArrayObject::bind(&self.vao);
            for index in 0..CUBE_POSITIONS.len() {
                self.program.set_mat4("model", &model(index))?;
                graphics::draw_triangles(self.count);
            }
        }
        Ok(())
    }

    fn resized(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.projection = math::perspective(width as f32 / height as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn cube_has_six_faces_of_two_triangles() {
        assert_eq!(layout().vertex_count(&VERTICES), 36);
    }

    #[test]
    fn cube_fits_in_the_unit_box() {
        for v in VERTICES.chunks_exact(layout().stride()) {
            assert!(v[..3].iter().all(|c| c.abs() == 0.5));
            assert!(v[3..].iter().all(|c| *c == 0.0 || *c == 1.0));
        }
    }

    #[test]
    fn first_cube_sits_at_the_origin_untilted() {
        assert!(model(0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn every_cube_center_lands_at_its_position() {
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            let center = model(i) * Vec4::new(0.0, 0.0, 0.0, 1.0);
            assert!(center.truncate().abs_diff_eq(*position, 1e-5));
        }
    }

    #[test]
    fn every_cube_is_in_front_of_the_camera() {
        let view = math::camera_view();
        for i in 0..CUBE_POSITIONS.len() {
            let eye = view * model(i) * Vec4::new(0.0, 0.0, 0.0, 1.0);
            assert!(eye.z < -math::Z_NEAR && eye.z > -math::Z_FAR);
        }
    }
}
