use dioxus::prelude::*;

const AUTO_CLOSE_MS: u32 = 2000;

#[derive(Clone, Default, PartialEq)]
pub struct ToastState {
    pub message: Option<String>,
    seq: u64,
}

/// Shows a success toast that closes itself unless replaced first.
pub fn notify(mut toast: Signal<ToastState>, message: impl Into<String>) {
    let seq = {
        let mut t = toast.write();
        t.seq += 1;
        t.message = Some(message.into());
        t.seq
    };
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_CLOSE_MS).await;
        if toast.read().seq == seq {
            toast.write().message = None;
        }
    });
}

#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<Signal<ToastState>>();
    let message = toast.read().message.clone();

    rsx! {
        if let Some(message) = message {
            div {
                class: "fixed top-4 right-4 z-50 bg-green-500 text-white font-bold rounded-md px-4 py-2 shadow-lg cursor-pointer",
                onclick: move |_| toast.write().message = None,
                "{message}"
            }
        }
    }
}
