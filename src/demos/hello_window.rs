use crate::app::Scene;
use crate::config::Config;
use crate::error::Result;

/// An empty window cleared every frame
pub struct HelloWindow;

impl HelloWindow {
    pub fn config() -> Config {
        Config::from_env().with_title("Hello Window")
    }
}

impl Scene for HelloWindow {
    fn draw(&mut self, _time: f32) -> Result<()> {
        Ok(())
    }
}
