//! Browser plumbing shared by the animated sections: scroll listeners,
//! layout measurement and page scroll locking.
//!
//! Everything here follows acquire-on-mount / release-on-drop: the handles
//! are created inside `use_effect_with_deps` and dropped by the effect's
//! destructor.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Function;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::motion::progress::Progress;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no window available")]
    NoWindow,
    #[error("no document body available")]
    NoBody,
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Js(format!("{:?}", value))
    }
}

/// Turns a failed animation setup into a logged warning so the rest of the
/// page keeps working.
pub fn guard<T>(what: &str, result: Result<T, MotionError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} disabled: {}", what, e);
            None
        }
    }
}

/// Scroll and resize listener that runs `on_frame` at most once per
/// animation frame.
pub struct FrameListener {
    window: Window,
    on_event: Closure<dyn FnMut()>,
    _frame: Closure<dyn FnMut()>,
    pending: Rc<Cell<Option<i32>>>,
}

const FRAME_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Runs `add` for every event, or for none of them: a failure removes the
/// ones already added before handing the error back.
fn register_all<E>(
    events: &[&'static str],
    mut add: impl FnMut(&'static str) -> Result<(), E>,
    mut remove: impl FnMut(&'static str),
) -> Result<(), E> {
    for (i, &event) in events.iter().enumerate() {
        if let Err(e) = add(event) {
            events[..i].iter().for_each(|&added| remove(added));
            return Err(e);
        }
    }
    Ok(())
}

impl FrameListener {
    pub fn attach(on_frame: Callback<()>) -> Result<Self, MotionError> {
        let window = window().ok_or(MotionError::NoWindow)?;
        let pending = Rc::new(Cell::new(None::<i32>));

        let frame = {
            let pending = pending.clone();
            let on_frame = on_frame.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                on_frame.emit(());
            }) as Box<dyn FnMut()>)
        };
        let frame_fn: Function = frame.as_ref().unchecked_ref::<Function>().clone();

        let on_event = {
            let window = window.clone();
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                if pending.get().is_some() {
                    return;
                }
                if let Ok(handle) = window.request_animation_frame(&frame_fn) {
                    pending.set(Some(handle));
                }
            }) as Box<dyn FnMut()>)
        };

        let listener: &Function = on_event.as_ref().unchecked_ref();
        register_all(
            &FRAME_EVENTS,
            |event| window.add_event_listener_with_callback(event, listener),
            |event| {
                let _ = window.remove_event_listener_with_callback(event, listener);
            },
        )?;

        // Measure once up front; the page may already be scrolled.
        on_frame.emit(());

        Ok(Self {
            window,
            on_event,
            _frame: frame,
            pending,
        })
    }
}

impl Drop for FrameListener {
    fn drop(&mut self) {
        for event in FRAME_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// Runs `on_frame` on mount and then once per frame in which the page
/// scrolled or resized. The callback is captured on mount, so it should only
/// close over stable handles (dispatchers, setters, node refs).
#[hook]
pub fn use_scroll_frame(what: &'static str, on_frame: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let listener = guard(what, FrameListener::attach(on_frame));
            move || drop(listener)
        },
        (),
    );
}

/// Hides the page scrollbar while alive and puts the previous value back on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn engage() -> Result<Self, MotionError> {
        let body = window()
            .ok_or(MotionError::NoWindow)?
            .document()
            .and_then(|d| d.body())
            .ok_or(MotionError::NoBody)?;
        let style = body.style();
        let previous = style.get_property_value("overflow")?;
        style.set_property("overflow", "hidden")?;
        Ok(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

/// Where a tween clock at `now` sits one tick later. It runs towards
/// `duration_ms` while playing and back towards zero otherwise.
fn tween_step(now: u32, playing: bool, duration_ms: u32, tick_ms: u32) -> u32 {
    if playing {
        now.saturating_add(tick_ms).min(duration_ms)
    } else {
        now.saturating_sub(tick_ms)
    }
}

fn tween_target(playing: bool, duration_ms: u32) -> u32 {
    if playing {
        duration_ms
    } else {
        0
    }
}

/// Plays a `duration_ms` clock forward while `playing` and backward
/// otherwise, like a tween being reversed. Returns how far along it is.
///
/// The ticking interval only exists while the clock has somewhere to go;
/// reaching either end flips `settled`, which tears it down.
#[hook]
pub fn use_tween_clock(playing: bool, duration_ms: u32) -> Progress {
    const TICK_MS: u32 = 16;
    let elapsed = use_state(|| 0u32);
    let settled = use_state_eq(|| true);
    let clock = use_mut_ref(|| 0u32);

    {
        let deps = (playing, *settled);
        let elapsed = elapsed.setter();
        let settled = settled.setter();
        use_effect_with_deps(
            move |&(playing, _)| {
                let target = tween_target(playing, duration_ms);
                let at_target = *clock.borrow() == target;
                settled.set(at_target);
                let interval = (!at_target).then(|| {
                    Interval::new(TICK_MS, move || {
                        let mut now = clock.borrow_mut();
                        let next = tween_step(*now, playing, duration_ms, TICK_MS);
                        if next != *now {
                            *now = next;
                            elapsed.set(next);
                        }
                        if next == target {
                            settled.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    Progress::between(f64::from(*elapsed), 0.0, f64::from(duration_ms))
}

pub fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

/// Top and bottom of the element behind `node`, relative to the viewport.
pub fn viewport_edges(node: &NodeRef) -> Option<(f64, f64)> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("no section with id {}", id);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_registration_removes_earlier_listeners() {
        let mut live = Vec::new();
        let mut removed = Vec::new();
        let result = register_all(
            &FRAME_EVENTS,
            |event| {
                if event == "resize" {
                    return Err("refused");
                }
                live.push(event);
                Ok(())
            },
            |event| removed.push(event),
        );
        assert_eq!(result, Err("refused"));
        assert_eq!(live, ["scroll"]);
        assert_eq!(removed, ["scroll"]);
    }

    #[test]
    fn successful_registration_removes_nothing() {
        let mut removed = 0;
        let result: Result<(), ()> = register_all(&FRAME_EVENTS, |_| Ok(()), |_| removed += 1);
        assert!(result.is_ok());
        assert_eq!(removed, 0);
    }

    #[test]
    fn tween_clock_runs_to_either_end_and_stays_there() {
        assert_eq!(tween_step(0, true, 40, 16), 16);
        assert_eq!(tween_step(32, true, 40, 16), 40);
        assert_eq!(tween_step(40, true, 40, 16), 40);
        assert_eq!(tween_step(40, false, 40, 16), 24);
        assert_eq!(tween_step(8, false, 40, 16), 0);
        assert_eq!(tween_step(0, false, 40, 16), 0);
    }

    #[test]
    fn tween_clock_settles_where_stepping_stops() {
        for playing in [true, false] {
            let target = tween_target(playing, 40);
            assert_eq!(tween_step(target, playing, 40, 16), target);
        }
        let mut now = 0;
        let mut ticks = 0;
        while now != tween_target(true, 40) {
            now = tween_step(now, true, 40, 16);
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }
}
