use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::hooks::{use_scroll_frame, viewport_edges, viewport_height};
use crate::motion::broadcast::SunriseChannel;
use crate::motion::color::{chapter_sky, dusk_sky};
use crate::motion::easing::Ease;
use crate::motion::progress::Progress;
use crate::motion::reveal::{Frame, RevealIntent, Trigger};

const TOOLS: [(&str, &str); 4] = [
    ("🚜", "Farm Work"),
    ("📚", "Studies"),
    ("🌾", "Harvest"),
    ("🏆", "Excellence"),
];

#[function_component(ChapterOne)]
pub fn chapter_one() -> Html {
    let node = use_node_ref();
    let sunrise = use_state_eq(|| Progress::START);
    let dusk = use_state_eq(|| Progress::START);
    let channel = use_context::<SunriseChannel>();

    // The hero drives our sky until we start leaving the viewport.
    {
        let sunrise = sunrise.setter();
        use_effect_with_deps(
            move |channel| {
                let subscription = channel
                    .as_ref()
                    .map(|channel| channel.subscribe(move |p| sunrise.set(p)));
                move || drop(subscription)
            },
            channel,
        );
    }

    {
        let node = node.clone();
        let dusk = dusk.setter();
        use_scroll_frame(
            "chapter one dusk",
            Callback::from(move |_| {
                let (Some((_, bottom)), Some(height)) = (viewport_edges(&node), viewport_height())
                else {
                    return;
                };
                dusk.set(Progress::between(height - bottom, 0.0, height));
            }),
        );
    }

    let sky = if *dusk > Progress::START {
        dusk_sky(*dusk)
    } else {
        chapter_sky(*sunrise)
    };

    let title = RevealIntent::new(Frame::shifted(-100.0, 0.0)).duration(1.0);
    let story = RevealIntent::new(Frame::shifted(0.0, 50.0))
        .duration(0.8)
        .stagger(0.2)
        .trigger(Trigger::TOP_85);
    let tools = RevealIntent::new(Frame::HIDDEN.scaled(0.0).rotated(-45.0))
        .duration(1.0)
        .stagger(0.3)
        .ease(Ease::BackOut)
        .trigger(Trigger::TOP_85);

    html! {
        <section id="chapter-1" ref={node} class="chapter chapter-one">
            <style>
                {r#"
                    .chapter-one { overflow: hidden; }
                    .chapter-one .sky { position: absolute; inset: 0; }
                    .tool-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.25rem; }
                    .tool-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: rgba(92, 64, 51, 0.3);
                        text-align: center;
                    }
                    .tool-card span { display: block; font-size: 2.5rem; margin-bottom: 0.5rem; }
                    .tool-panel {
                        padding: 2rem;
                        border-radius: 18px;
                        background: linear-gradient(135deg, #4a7c23, #d4a017);
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                    }
                    .tool-panel blockquote { margin: 2rem 0 0; text-align: center; font-style: italic; font-size: 1.15rem; }
                "#}
            </style>
            <div class="sky" style={format!("background: {};", sky.css())}></div>
            <div class="chapter-inner">
                <Reveal intent={title}>
                    <h2 class="chapter-title"><span class="gradient-text">{"Rooted in Discipline"}</span></h2>
                </Reveal>
                <div class="chapter-columns">
                    <Reveal intent={story} class="chapter-story">
                        <p>
                            {"I come from a farming background where effort, not excuses, shaped my mindset. \
                              While others were still asleep, I was already up helping on the farm and \
                              preparing for school. Not out of necessity, but out of choice."}
                        </p>
                        <p>
                            {"That early exposure to discipline and responsibility gave me a head start. \
                              It wasn't about hardship. It was about building character. From ploughing soil \
                              to solving problems, I've always worked with the same intention: to grow."}
                        </p>
                    </Reveal>
                    <div class="tool-panel">
                        <Reveal intent={tools} class="tool-grid">
                            { for TOOLS.iter().map(|&(icon, label)| html! {
                                <div class="tool-card"><span>{icon}</span>{label}</div>
                            }) }
                        </Reveal>
                        <blockquote>
                            {"\"Discipline is not about punishment. It's about training yourself to do what needs to be done.\""}
                        </blockquote>
                    </div>
                </div>
            </div>
        </section>
    }
}
