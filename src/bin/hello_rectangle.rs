use learn_opengl::app;
use learn_opengl::demos::hello_rectangle::HelloRectangle;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = HelloRectangle::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    // Compile the in-source shaders and upload the rectangle
    let scene = app::exit_on_error(unsafe { HelloRectangle::new() });
    app::run(el, window, scene, &config)
}
