//! DOM effects: counters, typing, decode, scroll UI, pointer UI, reveal, preloader
//!
//! Each `mount_*` looks up its markup, wires listeners/timers and returns.
//! Absent markup is reported as `FxError::MissingElement`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::{dom, observe, timers};
use crate::consts::*;
use crate::fx::{
    CounterAnimation, DecodeEffect, MAGNETIC_RESET, SectionBox, TILT_RESET, TerminalTyper,
    TypeStep, Typewriter, active_section, decode_source, item_active, link_matches,
    magnetic_offset, magnetic_transform, page_loaded, parse_target, scroll_progress,
    spotlight_vars, tilt_for, timeline_fill,
};
use crate::settings::Settings;
use crate::{FxError, percent};

const TILT_SELECTOR: &str = ".project-card, .skill-category, .content-box";

// === Counters ===

pub fn mount_counters(settings: &Settings) -> Result<(), FxError> {
    let counters = dom::query_all(".counter")?;
    let frames = settings.counter_frames();
    let frame_ms = settings.counter_frame_ms;

    log::info!("Watching {} counters", counters.len());
    observe::on_first_visible(&counters, COUNTER_THRESHOLD, move |counter| {
        start_counter(counter, frames, frame_ms);
    })
}

fn start_counter(counter: &Element, frames: u32, frame_ms: u32) {
    let text = match counter.get_attribute("data-target") {
        Some(cached) if !cached.is_empty() => cached,
        _ => {
            let text = dom::inner_text(counter);
            let _ = counter.set_attribute("data-target", &text);
            text
        }
    };
    let Some(target) = parse_target(&text) else {
        log::debug!("Counter text {:?} has no number, skipping", text);
        return;
    };

    let mut anim = CounterAnimation::new(target, frames);
    log::debug!("Counting to {}", anim.target());
    counter.set_text_content(Some(anim.initial_text()));

    // First frame runs right away
    let first = anim.advance();
    counter.set_text_content(Some(&first.value().to_string()));
    if first.is_done() {
        return;
    }

    let counter = counter.clone();
    let result = timers::chain(frame_ms, move || {
        let frame = anim.advance();
        counter.set_text_content(Some(&frame.value().to_string()));
        (!frame.is_done()).then_some(frame_ms)
    });
    if let Err(e) = result {
        log::warn!("Counter animation failed: {}", e);
    }
}

// === Typing ===

pub fn mount_typing(settings: &Settings) -> Result<(), FxError> {
    let el = dom::by_id("typing-text")?;
    let mut typewriter = Typewriter::from_settings(settings);
    el.set_text_content(Some(""));

    let char_delay = typewriter.char_delay_ms;
    timers::chain(typewriter.start_delay_ms, move || {
        typewriter.advance()?;
        el.set_text_content(Some(&typewriter.typed()));
        Some(char_delay)
    })
}

pub fn mount_terminal(settings: &Settings) -> Result<(), FxError> {
    let el = dom::by_id("about-typewriter")?;
    let section = dom::by_id("about")?;
    let mut pending = Some(TerminalTyper::from_settings(settings));

    observe::on_first_visible(&[section], TERMINAL_THRESHOLD, move |_| {
        let Some(mut typer) = pending.take() else {
            return;
        };
        if !typer.start() {
            return;
        }
        if let Err(e) = run_terminal(el.clone(), typer) {
            log::warn!("Terminal typing failed: {}", e);
        }
    })
}

/// Type into text nodes, with a `<br>` between lines
fn run_terminal(el: Element, mut typer: TerminalTyper) -> Result<(), FxError> {
    let document = dom::document()?;
    el.set_text_content(Some(""));
    let mut line = document.create_text_node("");
    el.append_child(&line)?;

    timers::chain(0, move || {
        let step = typer.advance();
        match step {
            TypeStep::Char(c) => {
                let mut buf = [0u8; 4];
                let _ = line.append_data(c.encode_utf8(&mut buf));
            }
            TypeStep::LineBreak => {
                if let Ok(br) = document.create_element("br") {
                    let _ = el.append_child(&br);
                }
                line = document.create_text_node("");
                let _ = el.append_child(&line);
            }
            TypeStep::Finished => {
                let _ = el.class_list().add_1("typing-cursor");
            }
        }
        typer.delay_after(step)
    })
}

// === Decode ===

pub fn mount_decode(settings: &Settings) -> Result<(), FxError> {
    let header = dom::query(".glitch-name")?;
    let original = decode_source(header.get_attribute("data-value"), || {
        dom::inner_text(&header)
    });

    if !settings.effective_decode() {
        header.set_text_content(Some(&original));
        return Ok(());
    }

    let mut effect =
        DecodeEffect::with_rate(&original, settings.decode_ticks_per_char, dom::seed());
    timers::every(settings.decode_tick_ms, move || {
        header.set_text_content(Some(&effect.tick()));
        !effect.is_done()
    })
}

// === Scroll ===

pub fn mount_scroll_progress(_settings: &Settings) -> Result<(), FxError> {
    let bar = dom::by_id("scroll-progress")?;
    let window = dom::window()?;

    dom::listen(&window, "scroll", move |_event: web_sys::Event| {
        let Ok(document) = dom::document() else {
            return;
        };
        let Some(root) = document.document_element() else {
            return;
        };
        let body_top = document.body().map(|b| b.scroll_top()).unwrap_or(0);
        let scroll_top = if body_top != 0 { body_top } else { root.scroll_top() };
        let pct = scroll_progress(
            scroll_top as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "width", &percent(pct));
    })
}

pub fn mount_nav(_settings: &Settings) -> Result<(), FxError> {
    let sections = dom::query_all("section")?;
    let links = dom::query_all(".nav-links a")?;
    let window = dom::window()?;

    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_event: web_sys::Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        let boxes: Vec<SectionBox> = sections
            .iter()
            .filter(|s| !s.id().is_empty())
            .map(|s| {
                let top = s
                    .dyn_ref::<HtmlElement>()
                    .map(|h| h.offset_top())
                    .unwrap_or(0);
                SectionBox::new(s.id(), top as f64, s.client_height() as f64)
            })
            .collect();
        let current = active_section(scroll_y, &boxes);

        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let _ = link
                .class_list()
                .toggle_with_force("active-link", link_matches(&href, current));
        }
    })
}

pub fn mount_timeline(settings: &Settings) -> Result<(), FxError> {
    // Both pieces are required
    let timeline = dom::query(".timeline")?;
    let fill = dom::by_id("timeline-progress")?;
    let items = dom::query_all(".timeline-item").unwrap_or_default();
    let trigger_ratio = settings.timeline_trigger_ratio;
    let window = dom::window()?;

    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_event: web_sys::Event| {
        let vh = dom::inner_height(&scroll_window);
        let rect = dom::rect_of(&timeline);
        let pct = timeline_fill(vh, rect.top, rect.height);
        dom::set_style(&fill, "height", &percent(pct));

        for item in &items {
            let top = item.get_bounding_client_rect().top();
            let _ = item
                .class_list()
                .toggle_with_force("active", item_active(top, vh, trigger_ratio));
        }
    })
}

// === Pointer ===

pub fn mount_spotlight(_settings: &Settings) -> Result<(), FxError> {
    let root = dom::document()?
        .document_element()
        .ok_or(FxError::NoWindow)?;

    let target = root.clone();
    dom::listen(&target, "mousemove", move |event: MouseEvent| {
        for (name, value) in spotlight_vars(event.client_x() as f64, event.client_y() as f64) {
            dom::set_style(&root, name, &value);
        }
    })
}

pub fn mount_tilt(settings: &Settings) -> Result<(), FxError> {
    if !settings.effective_pointer_motion() {
        return Ok(());
    }
    let cards = dom::query_all(TILT_SELECTOR)?;
    let max_deg = settings.tilt_max_deg;

    for card in &cards {
        {
            let el = card.clone();
            dom::listen(card, "mousemove", move |event: MouseEvent| {
                let rect = dom::rect_of(&el);
                let tilt = tilt_for(&rect, event.client_x() as f64, event.client_y() as f64, max_deg);
                dom::set_style(&el, "transform", &tilt.transform());
            })?;
        }
        {
            let el = card.clone();
            dom::listen(card, "mouseleave", move |_event: MouseEvent| {
                dom::set_style(&el, "transform", TILT_RESET);
            })?;
        }
    }
    log::info!("Tilt on {} cards", cards.len());
    Ok(())
}

pub fn mount_magnetic(settings: &Settings) -> Result<(), FxError> {
    if !settings.effective_pointer_motion() {
        return Ok(());
    }
    let buttons = dom::query_all(".magnetic-btn")?;
    let strength = settings.magnetic_strength;

    for btn in &buttons {
        {
            let el = btn.clone();
            dom::listen(btn, "mousemove", move |event: MouseEvent| {
                let rect = dom::rect_of(&el);
                let offset =
                    magnetic_offset(&rect, event.client_x() as f64, event.client_y() as f64, strength);
                dom::set_style(&el, "transform", &magnetic_transform(offset));
            })?;
        }
        {
            let el = btn.clone();
            dom::listen(btn, "mouseleave", move |_event: MouseEvent| {
                dom::set_style(&el, "transform", MAGNETIC_RESET);
            })?;
        }
    }
    Ok(())
}

// === Reveal / preloader ===

pub fn mount_reveal(_settings: &Settings) -> Result<(), FxError> {
    let reveals = dom::query_all(".reveal")?;
    observe::on_first_visible(&reveals, REVEAL_THRESHOLD, |el| {
        let _ = el.class_list().add_1("active");
    })
}

pub fn mount_preloader(_settings: &Settings) -> Result<(), FxError> {
    // Page may already be loaded by the time the module starts
    if page_loaded(&dom::document()?.ready_state()) {
        hide_preloader();
        return Ok(());
    }
    let window = dom::window()?;
    dom::listen(&window, "load", |_event: web_sys::Event| hide_preloader())
}

fn hide_preloader() {
    let Ok(preloader) = dom::by_id("preloader") else {
        return;
    };
    dom::set_style(&preloader, "opacity", "0");
    let result = timers::chain(PRELOADER_FADE_MS, move || {
        dom::set_style(&preloader, "display", "none");
        None
    });
    if let Err(e) = result {
        log::warn!("Preloader timer failed: {}", e);
    }
}
