//! Leptos Viewport Utilities
//!
//! Browser glue for scroll-driven views:
//! - document scroll metrics as a signal
//! - per-element intersection ratio callbacks
//! - a restartable `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Longest frame step handed to callbacks, in seconds.
/// Larger gaps (background tabs, breakpoints) are clamped to this.
const MAX_FRAME_STEP_SECS: f64 = 0.1;

/// Snapshot of the document's scroll geometry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top, in CSS pixels
    pub scroll_top: f64,
    /// Full height of the document
    pub scroll_height: f64,
    /// Height of the visible viewport
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Scroll position as a ratio in [0, 1] (0 = top, 1 = fully scrolled).
    ///
    /// A document that does not overflow the viewport reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if !(scrollable > 0.0) {
            return 0.0;
        }
        (self.scroll_top / scrollable).clamp(0.0, 1.0)
    }
}

/// Scroll state signals
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    pub metrics_read: ReadSignal<ScrollMetrics>,
    pub metrics_write: WriteSignal<ScrollMetrics>,
}

pub fn create_scroll_signals() -> ScrollSignals {
    let (metrics_read, metrics_write) = signal(ScrollMetrics::default());
    ScrollSignals {
        metrics_read,
        metrics_write,
    }
}

/// Read the current scroll geometry of the document element
pub fn current_scroll_metrics() -> Option<ScrollMetrics> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: root.scroll_top() as f64,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

/// Bind window scroll and resize handlers that publish scroll metrics.
/// Publishes the current metrics once immediately.
pub fn bind_global_scroll(signals: ScrollSignals) {
    let publish = move || {
        if let Some(metrics) = current_scroll_metrics() {
            signals.metrics_write.set(metrics);
        }
    };
    publish();

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| publish());

    if let Some(win) = web_sys::window() {
        let callback = on_scroll.as_ref().unchecked_ref();
        let _ = win.add_event_listener_with_callback("scroll", callback);
        let _ = win.add_event_listener_with_callback("resize", callback);
    }
    on_scroll.forget();
}

/// A running intersection observation.
///
/// Owns the observer and its callback; dropping the handle disconnects.
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _on_entries: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl IntersectionWatch {
    /// Stop observing and release the callback
    pub fn disconnect(self) {}
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Report the element's visible ratio every time it crosses `threshold`.
///
/// The callback receives the intersection ratio in [0, 1]; it also fires
/// once right after observation starts. Observation lasts as long as the
/// returned handle.
pub fn observe_intersection<F>(
    element: &web_sys::Element,
    threshold: f64,
    on_ratio: F,
) -> Result<IntersectionWatch, String>
where
    F: Fn(f64) + 'static,
{
    let on_entries = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    on_ratio(entry.intersection_ratio());
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());

    let observer =
        web_sys::IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)
            .map_err(|e| format!("Failed to create IntersectionObserver: {:?}", e))?;
    observer.observe(element);
    Ok(IntersectionWatch {
        observer,
        _on_entries: on_entries,
    })
}

/// Seconds between two `requestAnimationFrame` timestamps (milliseconds),
/// clamped to `[0, MAX_FRAME_STEP_SECS]`.
pub fn frame_delta_secs(prev_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - prev_ms) / 1000.0).clamp(0.0, MAX_FRAME_STEP_SECS)
}

struct FrameLoopInner {
    running: Cell<bool>,
    last_timestamp: Cell<Option<f64>>,
    /// Handle of the requested, not yet delivered frame
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Box<dyn FnMut(f64) -> bool>>,
    /// Created on first start; holds the loop only weakly
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopInner {
    /// Run one frame at `now_ms`. Returns whether another frame is wanted.
    fn step(&self, now_ms: f64) -> bool {
        self.pending.set(None);
        let dt = match self.last_timestamp.replace(Some(now_ms)) {
            Some(prev) => frame_delta_secs(prev, now_ms),
            None => 0.0,
        };
        let mut on_frame = self.on_frame.borrow_mut();
        let keep_running = (*on_frame)(dt);
        drop(on_frame);
        if !keep_running {
            self.running.set(false);
            self.last_timestamp.set(None);
        }
        keep_running
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(handle);
            }
        }
    }
}

impl Drop for FrameLoopInner {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Restartable animation frame loop.
///
/// `on_frame` receives the elapsed seconds since the previous frame (0 on
/// the first frame after a start) and returns whether to keep running.
/// Dropping the last handle cancels any pending frame and frees the loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    pub fn new<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self {
            inner: Rc::new(FrameLoopInner {
                running: Cell::new(false),
                last_timestamp: Cell::new(None),
                pending: Cell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
                callback: RefCell::new(None),
            }),
        }
    }

    /// Start the loop unless it is already running
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.last_timestamp.set(None);
        schedule(&self.inner);
    }

    /// Cancel the pending frame. `start` resumes from a fresh timestamp.
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.last_timestamp.set(None);
        self.inner.cancel_pending();
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

fn schedule(inner: &Rc<FrameLoopInner>) {
    let mut callback = inner.callback.borrow_mut();
    let callback = callback.get_or_insert_with(|| {
        let weak = Rc::downgrade(inner);
        Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else { return };
            if inner.step(now_ms) && inner.running.get() {
                schedule(&inner);
            }
        })
    });

    let requested = web_sys::window()
        .map(|win| win.request_animation_frame(callback.as_ref().unchecked_ref()));
    match requested {
        Some(Ok(handle)) => inner.pending.set(Some(handle)),
        _ => inner.running.set(false),
    }
}
