use learn_opengl::app;
use learn_opengl::demos::shaders::Shaders;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = Shaders::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    // Build the shader program and upload the triangle
    let scene = app::exit_on_error(unsafe { Shaders::new(&config) });
    app::run(el, window, scene, &config)
}
