//! Particle network renderer on a 2D canvas

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use crate::FxError;
use crate::fx::{ParticleConfig, ParticleField};
use crate::settings::Settings;

const CANVAS_ID: &str = "canvas-bg";

/// Swarm plus the canvas it draws into
struct Network {
    field: ParticleField,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    particle_color: String,
    line_color: String,
}

impl Network {
    /// Match the canvas to the window and regenerate the swarm
    fn fit_to_window(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = dom::inner_width(&window);
        let height = dom::inner_height(&window);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width as f32, height as f32);
    }

    /// Advance and draw one frame
    fn frame(&mut self) {
        let size = self.field.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

        self.field.step();

        self.ctx.set_fill_style_str(&self.particle_color);
        for p in self.field.particles() {
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }

        self.ctx.set_stroke_style_str(&self.line_color);
        for link in self.field.links() {
            self.ctx.set_line_width(link.strength as f64);
            self.ctx.begin_path();
            self.ctx.move_to(link.a.x as f64, link.a.y as f64);
            self.ctx.line_to(link.b.x as f64, link.b.y as f64);
            self.ctx.stroke();
        }
    }
}

pub fn mount(settings: &Settings) -> Result<(), FxError> {
    if !settings.effective_particles() {
        log::info!("Particle network disabled");
        return Ok(());
    }

    let canvas: HtmlCanvasElement = dom::by_id(CANVAS_ID)?
        .dyn_into()
        .map_err(|_| FxError::WrongElement(CANVAS_ID, "canvas"))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(FxError::NoContext)?
        .dyn_into()
        .map_err(|_| FxError::NoContext)?;

    let network = Rc::new(RefCell::new(Network {
        field: ParticleField::new(ParticleConfig::from_settings(settings), dom::seed()),
        canvas,
        ctx,
        particle_color: settings.particle_color.clone(),
        line_color: settings.line_color.clone(),
    }));
    network.borrow_mut().fit_to_window();

    // Resize: full reset of the swarm
    {
        let network = network.clone();
        let window = dom::window()?;
        dom::listen(&window, "resize", move |_event: web_sys::Event| {
            network.borrow_mut().fit_to_window();
        })?;
    }

    log::info!(
        "Particle network running ({} particles)",
        network.borrow().field.particles().len()
    );
    request_animation_frame(network);
    Ok(())
}

fn request_animation_frame(network: Rc<RefCell<Network>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        network_loop(network);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn network_loop(network: Rc<RefCell<Network>>) {
    network.borrow_mut().frame();
    request_animation_frame(network);
}
