use learn_opengl::app;
use learn_opengl::demos::coordinate_systems::CoordinateSystems;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = CoordinateSystems::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    // Build the shader program and upload the cube
    let scene = app::exit_on_error(unsafe { CoordinateSystems::new(&config) });
    app::run(el, window, scene, &config)
}
