//! Horizontal progress bar shared by the processing and flashcard screens.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// Filled bar sized by a `0.0..=1.0` fraction.
#[component]
pub fn ProgressBar(#[prop(into)] fraction: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-bar__fill" style=move || fill_style(fraction.get())></div>
        </div>
    }
}

/// Inline style for the fill element; out-of-range fractions are clamped.
fn fill_style(fraction: f64) -> String {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
    format!("width: {percent}%")
}
