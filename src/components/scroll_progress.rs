//! Scroll Progress Bar
//!
//! Fixed bar along the top of the viewport, scaled horizontally by the
//! smoothed page scroll ratio.

use leptos::prelude::*;
use leptos_viewport::{bind_global_scroll, create_scroll_signals, FrameLoop};

use crate::motion::SmoothedProgress;

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let scroll = create_scroll_signals();
    let progress = StoredValue::new(SmoothedProgress::new());
    let (scale_x, set_scale_x) = signal(0.0f64);

    let frames = FrameLoop::new(move |dt| {
        progress
            .try_update_value(|p| {
                let moving = p.tick(dt);
                set_scale_x.set(p.scale_x());
                moving
            })
            .unwrap_or(false)
    });

    Effect::new(move |_| {
        let raw = scroll.metrics_read.get().progress();
        progress.update_value(|p| p.set_target(raw));
        frames.start();
    });

    bind_global_scroll(scroll);

    view! {
        <div
            class="scroll-progress"
            style=move || format!("transform: scaleX({:.4});", scale_x.get())
        />
    }
}
