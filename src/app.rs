//! Window creation and the render loop every demo runs in
use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphics;

use glutin::dpi::LogicalSize;
use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

use std::ffi::CStr;
use std::time::Instant;

pub type Window = WindowedContext<PossiblyCurrent>;

/// What a demo draws every frame
pub trait Scene {
    /// Issues the draw calls, `time` is the number of seconds since the loop started.
    /// The framebuffer has already been cleared.
    fn draw(&mut self, time: f32) -> Result<()>;

    /// Called after the viewport has been resized
    fn resized(&mut self, _width: u32, _height: u32) {}
}

/// Opens the window, makes its context current and loads the OpenGL functions
pub fn init(config: &Config) -> Result<(EventLoop<()>, Window)> {
    // Create the event loop
    let el = EventLoop::new();
    let wb = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
    let wc = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, config.gl_version))
        .with_gl_profile(GlProfile::Core)
        .with_depth_buffer(if config.depth_test { 24 } else { 0 })
        .build_windowed(wb, &el)?;
    // Set the window context as the current context
    let window = unsafe { wc.make_current().map_err(|(_, e)| Error::Context(e))? };
    // Load the opengl functions
    gl::load_with(|symbol| window.context().get_proc_address(symbol) as *const _);

    log::info!(
        "OpenGL {} on {} ({})",
        gl_string(gl::VERSION),
        gl_string(gl::RENDERER),
        gl_string(gl::VENDOR)
    );

    let size = window.window().inner_size();
    unsafe {
        gl::Viewport(0, 0, size.width as i32, size.height as i32);
        if config.depth_test {
            gl::Enable(gl::DEPTH_TEST);
        }
        if config.wireframe {
            gl::PolygonMode(gl::FRONT_AND_BACK, gl::LINE);
        }
    }
    Ok((el, window))
}

/// Redraws `scene` until the window is closed or Escape is pressed
pub fn run<S: Scene + 'static>(el: EventLoop<()>, window: Window, mut scene: S, config: &Config) -> ! {
    let [r, g, b, a] = config.clear_color;
    let clear_mask = if config.depth_test {
        gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
    } else {
        gl::COLOR_BUFFER_BIT
    };
    let start = Instant::now();

    el.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    window.resize(size);
                    log::debug!("resized to {}x{}", size.width, size.height);
                    unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };
                    scene.resized(size.width, size.height);
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                }
                | WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::MainEventsCleared => window.window().request_redraw(),
            Event::RedrawRequested(_) => {
                unsafe {
                    gl::ClearColor(r, g, b, a);
                    gl::Clear(clear_mask);
                }
                if let Err(e) = scene.draw(start.elapsed().as_secs_f32()) {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
                graphics::check_error();
                // Swap the window buffers
                if let Err(e) = window.swap_buffers() {
                    log::error!("failed to swap buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::LoopDestroyed => log::info!("window closed"),
            _ => {}
        }
    })
}

/// Logs `result`'s error and terminates the process when there is one
pub fn exit_on_error<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn gl_string(name: gl::types::GLenum) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            "<unknown>".to_string()
        } else {
            CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
        }
    }
}
