use learn_opengl::app;
use learn_opengl::demos::textures::Textures;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = Textures::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    // Build the shader program and load both images
    let scene = app::exit_on_error(unsafe { Textures::new(&config) });
    app::run(el, window, scene, &config)
}
