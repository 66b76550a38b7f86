use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable overriding the directory shaders and images are read from
pub const ASSETS_VAR: &str = "LEARNOPENGL_ASSETS";
pub const WIDTH_VAR: &str = "LEARNOPENGL_WIDTH";
pub const HEIGHT_VAR: &str = "LEARNOPENGL_HEIGHT";

/// Window and render loop settings shared by every demo
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL version, always a core profile
    pub gl_version: (u8, u8),
    pub clear_color: [f32; 4],
    pub depth_test: bool,
    pub wireframe: bool,
    pub asset_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "OpenGLDemo".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            depth_test: false,
            wireframe: false,
            asset_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        }
    }
}

impl Config {
    /// The default configuration with the overrides found in the environment applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Applies the overrides returned by `lookup`, values that don't parse are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ASSETS_VAR).filter(|v| !v.is_empty()) {
            self.asset_root = PathBuf::from(root);
        }
        if let Some(width) = parse_dimension(lookup(WIDTH_VAR)) {
            self.width = width;
        }
        if let Some(height) = parse_dimension(lookup(HEIGHT_VAR)) {
            self.height = height;
        }
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = enabled;
        self
    }

    pub fn with_wireframe(mut self, enabled: bool) -> Self {
        self.wireframe = enabled;
        self
    }

    /// Resolves a path relative to the asset root
    pub fn asset<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.asset_root.join(relative)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

// Zero sized windows can't be created so they count as unparsable
fn parse_dimension(value: Option<String>) -> Option<u32> {
    value
        .as_deref()
        .map(str::trim)
        .map(u32::from_str)
        .and_then(Result::ok)
        .filter(|&v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_course_window() {
        let config = Config::default();
        assert_eq!(config.title, "OpenGLDemo");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert!(!config.depth_test);
        assert!(!config.wireframe);
    }

    #[test]
    fn overrides_replace_size_and_asset_root() {
        let config = Config::default().with_overrides(lookup_from(&[
            (ASSETS_VAR, "/tmp/assets"),
            (WIDTH_VAR, "1024"),
            (HEIGHT_VAR, " 768 "),
        ]));
        assert_eq!(config.asset_root, PathBuf::from("/tmp/assets"));
        assert_eq!((config.width, config.height), (1024, 768));
    }

    #[test]
    fn bad_overrides_are_ignored() {
        let config = Config::default().with_overrides(lookup_from(&[
            (ASSETS_VAR, ""),
            (WIDTH_VAR, "wide"),
            (HEIGHT_VAR, "0"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn assets_resolve_against_the_root() {
        let config = Config::default().with_overrides(lookup_from(&[(ASSETS_VAR, "/data")]));
        assert_eq!(
            config.asset("shaders/shaders.vert"),
            PathBuf::from("/data/shaders/shaders.vert")
        );
    }

    #[test]
    fn builders_toggle_render_state() {
        let config = Config::default()
            .with_title("Coordinate Systems")
            .with_depth_test(true)
            .with_wireframe(true);
        assert_eq!(config.title, "Coordinate Systems");
        assert!(config.depth_test);
        assert!(config.wireframe);
        assert!((config.aspect_ratio() - 800.0 / 600.0).abs() < f32::EPSILON);
    }
}
