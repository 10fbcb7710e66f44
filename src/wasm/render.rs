use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::program::{GlError, SpiralProgram};
use crate::config::SpiralConfig;
use crate::driver::{FrameDriver, Resolution};

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

fn display_size(canvas: &HtmlCanvasElement) -> Resolution {
    Resolution::new(
        canvas.client_width().max(0) as u32,
        canvas.client_height().max(0) as u32,
    )
}

/// Compile the spiral program for `canvas` and start the animation loop.
///
/// The loop reschedules itself after each draw and runs until the page goes
/// away.
pub fn start(canvas: HtmlCanvasElement, config: SpiralConfig) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(GlError::Context)?
        .dyn_into()?;
    log::info!("WebGL2 context acquired");

    let program = SpiralProgram::new(&gl, &config)?;
    let mut driver = FrameDriver::new(Resolution::new(canvas.width(), canvas.height()));

    // `f` holds the animation-frame closure so that it can request itself
    // again; the `Option` lets the closure be created before it is stored.
    let f: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let update = driver.frame(timestamp, display_size(&canvas));
        if let Some(size) = update.resize {
            log::info!("canvas resized to {}x{}", size.width, size.height);
            canvas.set_width(size.width);
            canvas.set_height(size.height);
            gl.viewport(0, 0, size.width as i32, size.height as i32);
        }

        let res = update.uniforms.resolution.as_vec2();
        program.draw(&gl, res.x, res.y, update.uniforms.time);

        // schedule next
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("failed to schedule frame: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}
