//! Folio FX entry point
//!
//! On the web, mounts every page effect. Natively, runs the effect state
//! machines headless and logs what the page would show.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"folio-fx: logger already set".into());
    }

    log::info!("Folio FX starting...");
    let settings = folio_fx::Settings::load();
    let mounted = folio_fx::platform::mount_all(&settings);
    log::info!("Folio FX running ({} effects)", mounted);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio FX (native) starting...");
    log::info!("Native mode has no DOM - serve the wasm build for the real page");

    let settings = folio_fx::Settings::load();
    preview(&settings);
}

/// Drive each state machine to completion without a browser
#[cfg(not(target_arch = "wasm32"))]
fn preview(settings: &folio_fx::Settings) {
    use folio_fx::fx::{
        CounterAnimation, DecodeEffect, ParticleConfig, ParticleField, TerminalTyper, TypeStep,
        Typewriter, parse_target, scroll_progress,
    };

    // Particle network: one second at 60 fps
    let mut field = ParticleField::new(ParticleConfig::from_settings(settings), 12345);
    field.resize(1280.0, 720.0);
    let mut links = 0;
    for _ in 0..60 {
        field.step();
        links = field.links().count();
    }
    println!(
        "particles: {} points, {} links under {}px after 60 frames",
        field.particles().len(),
        links,
        field.config().connection_distance
    );

    // Counter
    let text = "1,234 Users";
    if let Some(target) = parse_target(text) {
        let mut anim = CounterAnimation::new(target, settings.counter_frames());
        let mut frames = 1;
        while !anim.advance().is_done() {
            frames += 1;
        }
        println!("counter: {:?} -> {} in {} frames", text, anim.target(), frames);
    }

    // Hero typing
    let mut typewriter = Typewriter::from_settings(settings);
    while !typewriter.is_done() {
        typewriter.advance();
    }
    println!("typing: {}", typewriter.typed());

    // Decode
    let mut decode = DecodeEffect::new("Portfolio", 7);
    let mut ticks = 0;
    while !decode.is_done() {
        let frame = decode.tick();
        ticks += 1;
        if ticks % 10 == 0 {
            log::info!("decode tick {}: {}", ticks, frame);
        }
    }
    println!(
        "decode: {} after {} of {} ticks",
        decode.original(),
        ticks,
        decode.total_ticks()
    );

    // Terminal
    let mut terminal = TerminalTyper::from_settings(settings);
    terminal.start();
    let mut elapsed_ms = 0;
    loop {
        let step = terminal.advance();
        match terminal.delay_after(step) {
            Some(delay) => elapsed_ms += delay,
            None => break,
        }
        if step == TypeStep::LineBreak {
            log::debug!("terminal line {} done", terminal.state().line);
        }
    }
    println!("terminal: {} lines in {} ms", settings.terminal_lines.len(), elapsed_ms);
    print!("{}", terminal.rendered());

    println!("scroll: {}% at the bottom", scroll_progress(2000.0, 3000.0, 1000.0));
}
