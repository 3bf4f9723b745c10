use clicker_api::theme::{ThemeCycle, Variant};
use dioxus::prelude::*;

/// Cosmetic color cycling. The timer task is dropped with the component.
pub fn use_theme() -> Signal<ThemeCycle> {
    let variant = use_context::<Variant>();
    let interval_ms = variant.cycle_interval_ms;
    let mut theme = use_signal(|| variant.theme());

    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            theme.write().advance();
        }
    });

    theme
}
