use learn_opengl::app;
use learn_opengl::demos::hello_window::HelloWindow;
use learn_opengl::logging;

fn main() {
    logging::init();
    let config = HelloWindow::config();
    let (el, window) = app::exit_on_error(app::init(&config));
    app::run(el, window, HelloWindow, &config)
}
