use learn_opengl::app;
use learn_opengl::demos::transformations::Transformations;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = Transformations::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    // Build the shader program and load both images
    let scene = app::exit_on_error(unsafe { Transformations::new(&config) });
    app::run(el, window, scene, &config)
}
