//! Animated polar spiral rendered into a canvas with WebGL2.
//!
//! The per-pixel math lives in plain modules ([`mapper`], [`noise`],
//! [`shade`]) so it can be evaluated and tested on the host; the browser glue
//! is only compiled for wasm32.

pub mod config;
pub mod driver;
pub mod glsl;
pub mod mapper;
pub mod noise;
pub mod shade;

pub use config::{SpiralConfig, ViewerConfig};
pub use driver::{FrameDriver, Resolution, Uniforms};
pub use shade::{Frame, Spiral};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{SpiralConfig, ViewerConfig};

    pub mod program;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let viewer = ViewerConfig::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let Some(element) = document.get_element_by_id(&viewer.canvas_id) else {
            // Pages without the canvas (test runners, embeds) load the module
            // without starting the loop.
            log::warn!("canvas #{} not found, not rendering", viewer.canvas_id);
            return Ok(());
        };
        let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(canvas, SpiralConfig::default())?;
        Ok(())
    }
}
