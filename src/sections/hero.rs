use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::hooks::{scroll_to_section, use_scroll_frame, viewport_edges};
use crate::motion::broadcast::SunriseChannel;
use crate::motion::color::{hero_sky, SunPose};
use crate::motion::progress::Progress;
use crate::motion::typewriter::{Typewriter, TypewriterSpeed};

const GREETINGS: &[&str] = &["Hi, I'm Ram Avtar", "नमस्ते, मैं राम अवतार हूँ"];

impl Reducible for Typewriter {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.step();
        Rc::new(next)
    }
}

/// How far the hero has scrolled out, from its top at the viewport top to
/// its bottom at the viewport top.
fn hero_progress(node: &NodeRef) -> Option<Progress> {
    let (top, bottom) = viewport_edges(node)?;
    Some(Progress::between(-top, 0.0, bottom - top))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_state_eq(|| Progress::START);
    let sunrise = use_context::<SunriseChannel>();
    let typewriter = use_reducer_eq(|| Typewriter::new(GREETINGS, TypewriterSpeed::HERO));

    {
        let node = node.clone();
        let progress = progress.setter();
        use_scroll_frame(
            "hero sunrise",
            Callback::from(move |_| {
                let Some(p) = hero_progress(&node) else { return };
                progress.set(p);
                if let Some(channel) = &sunrise {
                    channel.publish(p);
                }
            }),
        );
    }

    {
        let dispatcher = typewriter.dispatcher();
        use_effect_with_deps(
            move |typewriter| {
                let timeout = Timeout::new(typewriter.next_delay(), move || dispatcher.dispatch(()));
                move || drop(timeout)
            },
            (*typewriter).clone(),
        );
    }

    let sky = hero_sky(*progress);
    let sun = SunPose::at(*progress);
    let onclick = Callback::from(|_: MouseEvent| scroll_to_section("chapter-1"));

    html! {
        <section id="hero" ref={node} class="hero" style={format!("background: {};", sky.css())}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        color: #fff;
                        text-align: center;
                    }
                    .hero-sun {
                        position: absolute;
                        left: 50%;
                        bottom: 0;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 50%;
                        background: radial-gradient(circle, #fff3c4 0%, #ffb347 45%, rgba(255, 140, 0, 0) 70%);
                        pointer-events: none;
                    }
                    .hero-content { position: relative; z-index: 1; padding: 0 1.5rem; }
                    .hero-greeting {
                        font-size: clamp(2rem, 6vw, 4rem);
                        font-weight: 800;
                        min-height: 1.3em;
                        margin: 0;
                    }
                    .hero-cursor {
                        display: inline-block;
                        width: 3px;
                        height: 1em;
                        margin-left: 4px;
                        background: #ffb347;
                        vertical-align: -0.1em;
                        animation: caretBlink 1s steps(1) infinite;
                    }
                    .hero-tagline { font-size: 1.25rem; color: #e2e8f0; margin: 1.5rem 0 2.5rem; }
                    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .hero-actions a, .hero-actions button {
                        padding: 0.85rem 1.75rem;
                        border-radius: 999px;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .hero-begin { border: none; background: linear-gradient(45deg, #ffb347, #ff8c00); color: #0f2048; }
                    .hero-resume { border: 2px solid rgba(255, 255, 255, 0.7); color: #fff; }
                "#}
            </style>
            <div class="hero-sun" style={sun.css()} aria-hidden="true"></div>
            <div class="hero-content">
                <h1 class="hero-greeting">
                    { typewriter.text() }
                    <span class="hero-cursor" aria-hidden="true"></span>
                </h1>
                <p class="hero-tagline">{"From the fields of a small village to the frameworks of modern software."}</p>
                <div class="hero-actions">
                    <button class="hero-begin" {onclick}>{"Begin the journey"}</button>
                    <a class="hero-resume" href={config::RESUME_PATH} target="_blank" rel="noopener noreferrer">
                        {"View résumé"}
                    </a>
                </div>
            </div>
        </section>
    }
}
