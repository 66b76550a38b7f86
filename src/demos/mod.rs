//! One scene per chapter of the course, in reading order
pub mod coordinate_systems;
pub mod hello_rectangle;
pub mod hello_window;
pub mod shaders;
pub mod textures;
pub mod transformations;
