use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::contact::Outcome;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub outcome: Outcome,
    pub on_dismiss: Callback<()>,
}

/// Acknowledgement shown after a contact form submission. Goes away on its
/// own after a few seconds or when clicked.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.outcome,
        );
    }

    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());
    let class = match props.outcome {
        Outcome::Sent => "toast toast-success",
        Outcome::Failed => "toast toast-error",
    };

    html! {
        <div class={class} role="status" aria-live="polite" {onclick}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 5.5rem;
                        right: 1.5rem;
                        max-width: 22rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(15, 32, 72, 0.95);
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        cursor: pointer;
                        z-index: 1000000;
                        animation: toastIn 0.4s ease-out;
                    }
                    .toast-success { border-left: 4px solid #00ffff; }
                    .toast-error { border-left: 4px solid #ff6b6b; }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { props.outcome.message() }
        </div>
    }
}
