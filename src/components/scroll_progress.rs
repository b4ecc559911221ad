use yew::prelude::*;

use crate::hooks::{scroll_y, use_scroll_frame, viewport_height};
use crate::motion::progress::Progress;

fn page_progress() -> Option<Progress> {
    let scroll_height = web_sys::window()?
        .document()?
        .document_element()?
        .scroll_height();
    let scrollable = f64::from(scroll_height) - viewport_height()?;
    Some(Progress::between(scroll_y()?, 0.0, scrollable))
}

/// Thin bar along the top edge showing how far down the page the reader is.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state_eq(|| Progress::START);

    {
        let progress = progress.setter();
        use_scroll_frame(
            "scroll progress",
            Callback::from(move |_| {
                if let Some(p) = page_progress() {
                    progress.set(p);
                }
            }),
        );
    }

    html! {
        <div
            class="scroll-progress"
            role="presentation"
            style={format!("transform: scaleX({:.4});", progress.value())}
        >
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        z-index: 60;
                        transform-origin: left center;
                        background: linear-gradient(90deg, #ffb347, #ff8c00, #00ffff);
                    }
                "#}
            </style>
        </div>
    }
}
