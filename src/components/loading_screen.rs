use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::info;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;
use crate::hooks::{guard, ScrollLock};
use crate::motion::easing::Ease;
use crate::motion::loader::{Loader, LoaderPhase};

pub enum LoaderAction {
    Tick(f64),
    BeginExit,
    Finish,
}

impl Reducible for Loader {
    type Action = LoaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoaderAction::Tick(step) => {
                if next.tick(step) {
                    info!("Loader filled");
                }
            }
            LoaderAction::BeginExit => {
                next.begin_exit();
            }
            LoaderAction::Finish => {
                next.finish();
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let loader = use_reducer_eq(Loader::new);

    // No scrolling behind the loader
    use_effect_with_deps(
        |_| {
            let lock = guard("scroll lock", ScrollLock::engage());
            move || drop(lock)
        },
        (),
    );

    {
        let dispatcher = loader.dispatcher();
        use_effect_with_deps(
            move |&filling| {
                let interval = filling.then(|| {
                    Interval::new(config::LOADER_TICK_MS, move || {
                        dispatcher.dispatch(LoaderAction::Tick(Math::random() * Loader::MAX_STEP))
                    })
                });
                move || drop(interval)
            },
            loader.phase() == LoaderPhase::Filling,
        );
    }

    {
        let dispatcher = loader.dispatcher();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = match phase {
                    LoaderPhase::Filling => None,
                    LoaderPhase::Holding => Some(Timeout::new(config::LOADER_HOLD_MS, move || {
                        dispatcher.dispatch(LoaderAction::BeginExit)
                    })),
                    LoaderPhase::Exiting => Some(Timeout::new(config::LOADER_EXIT_MS, move || {
                        dispatcher.dispatch(LoaderAction::Finish)
                    })),
                    LoaderPhase::Done => {
                        info!("Loading sequence complete");
                        on_complete.emit(());
                        None
                    }
                };
                move || drop(timeout)
            },
            loader.phase(),
        );
    }

    let leaving = matches!(loader.phase(), LoaderPhase::Exiting | LoaderPhase::Done);
    let screen_style = format!(
        "transform: translateY({}); transition: transform {}s {};",
        if leaving { "-100%" } else { "0" },
        f64::from(config::LOADER_EXIT_MS) / 1000.0,
        Ease::Power2InOut.css(),
    );
    let emoji_style = format!("animation: loaderFloat 2s {} infinite alternate;", Ease::SineInOut.css());
    let percent = loader.percent();

    html! {
        <div class="loading-screen" style={screen_style} aria-busy={(!leaving).to_string()}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 2000000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom, rgb(15,32,72), rgb(25,42,82));
                        color: #fff;
                        text-align: center;
                    }
                    .loading-inner { width: min(90vw, 28rem); }
                    .loading-emoji { font-size: 4rem; margin-bottom: 1.5rem; }
                    .loading-title { font-size: 2.25rem; font-weight: 700; margin: 0 0 0.5rem; }
                    .loading-title span {
                        background: linear-gradient(45deg, #ffb347, #ff8c00);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .loading-sub { color: #cbd5e1; margin-bottom: 2rem; }
                    .loading-track {
                        height: 0.5rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.15);
                        overflow: hidden;
                    }
                    .loading-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #ffb347, #ff8c00);
                        transition: width 0.15s linear;
                    }
                    .loading-percent { margin-top: 0.75rem; font-family: monospace; color: #ffb347; }
                    .loading-message { margin-top: 1.5rem; min-height: 1.5rem; color: #e2e8f0; }
                    .loading-message.complete { color: #ffb347; font-weight: 600; }
                    @keyframes loaderFloat {
                        from { transform: translateY(0); }
                        to { transform: translateY(-12px); }
                    }
                "#}
            </style>
            <div class="loading-inner">
                <div class="loading-emoji" style={emoji_style}>{"🌾"}</div>
                <h1 class="loading-title">{"From Fields to "}<span>{"Frameworks"}</span></h1>
                <p class="loading-sub">{"Loading my journey..."}</p>
                <div
                    class="loading-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={percent.to_string()}
                >
                    <div class="loading-fill" style={format!("width: {}%;", loader.progress())}></div>
                </div>
                <p class="loading-percent">{format!("{}%", percent)}</p>
                <div class={classes!("loading-message", (percent >= 100).then(|| "complete"))}>
                    {loader.message()}
                </div>
            </div>
        </div>
    }
}
