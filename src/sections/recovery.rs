use yew::prelude::*;

use crate::components::pinned_panel::PinnedPanel;
use crate::components::reveal::Reveal;
use crate::motion::reveal::{Frame, RevealIntent};

const MONTHS: [(&str, &str); 5] = [
    (
        "Month 1: The Diagnosis",
        "Doctor said complete bed rest. No sitting for extended periods. My coding dreams seemed shattered.",
    ),
    (
        "Month 2: Adaptation",
        "Started watching coding tutorials lying down. Phone became my classroom. YouTube University was in session.",
    ),
    (
        "Month 3-4: Mental Coding",
        "Learned to visualize code in my head. Solved problems mentally. Theory became my strength.",
    ),
    (
        "Month 5: Gradual Return",
        "Started sitting for short periods. Every 15 minutes felt like a victory. Slowly getting back to coding.",
    ),
    (
        "Month 6: Stronger Than Before",
        "Full recovery. But now I had discipline, patience, and a deeper understanding of perseverance.",
    ),
];

const LEARNED: [(&str, &str); 4] = [
    ("🧠", "Mental Problem Solving"),
    ("📚", "Deep Theory Study"),
    ("⏰", "Time Management"),
    ("💪", "Mental Resilience"),
];

const STATS: [(&str, &str); 3] = [("6", "Months Recovery"), ("100+", "Hours of Tutorials"), ("0", "Days I Quit")];

const LESSONS: [(&str, &str, &str); 3] = [
    ("🎯", "Adaptability", "When circumstances change, find new ways to achieve your goals."),
    ("🔥", "Persistence", "Physical limitations can't stop mental growth and determination."),
    ("🚀", "Innovation", "Constraints force you to find creative solutions and new approaches."),
];

/// Chapter six: the recovery timeline scrolls past a pinned summary card.
#[function_component(Recovery)]
pub fn recovery() -> Html {
    let card = RevealIntent::new(Frame::HIDDEN.scaled(0.8)).duration(1.5);
    let timeline = RevealIntent::new(Frame::shifted(0.0, 50.0))
        .duration(0.8)
        .stagger(0.3);

    let aside = html! {
        <>
            <h2 class="chapter-title"><span class="gradient-text">{"Pain, Persistence & a Phone"}</span></h2>
            <p>
                {"In BCA Year 2, long hours of field work and coding gave me a disc bulge. For 6 months, \
                  I couldn't sit. But I didn't stop. I watched tutorials on my phone. I studied lying on the floor."}
            </p>
            <Reveal intent={card} class="glass-card recovery-card">
                <h4>{"My Recovery Setup"}</h4>
                <div class="recovery-setup">
                    <div><span>{"🛏️"}</span>{"Lying down position"}</div>
                    <div><span>{"📱"}</span>{"Mobile Learning"}<small>{"YouTube tutorials, documentation, forums"}</small></div>
                </div>
                <h5>{"What I Learned:"}</h5>
                <div class="recovery-learned">
                    { for LEARNED.iter().map(|&(icon, label)| html! {
                        <div><span>{icon}</span>{label}</div>
                    }) }
                </div>
                <div class="recovery-stats">
                    { for STATS.iter().map(|&(value, label)| html! {
                        <div><strong>{value}</strong>{label}</div>
                    }) }
                </div>
            </Reveal>
        </>
    };

    html! {
        <PinnedPanel id="chapter-6" class="chapter-night" {aside}>
            <style>
                {r#"
                    .recovery-card h4, .recovery-card h5 { margin: 0 0 0.75rem; color: #ffb347; }
                    .recovery-setup, .recovery-learned, .recovery-stats { display: grid; gap: 0.75rem; margin-bottom: 1rem; }
                    .recovery-setup, .recovery-learned { grid-template-columns: repeat(2, 1fr); }
                    .recovery-stats { grid-template-columns: repeat(3, 1fr); text-align: center; }
                    .recovery-stats strong { display: block; font-size: 1.75rem; color: #00ffff; }
                    .recovery-card span { margin-right: 0.5rem; }
                    .recovery-card small { display: block; color: #94a3b8; }
                    .timeline-entry { border-left: 3px solid #ffb347; padding: 0 0 1.5rem 1.25rem; }
                    .timeline-entry h4 { margin: 0 0 0.35rem; }
                    .lesson-card { margin-top: 1rem; }
                "#}
            </style>
            <h3>{"6 Months of Recovery"}</h3>
            <Reveal intent={timeline}>
                { for MONTHS.iter().map(|&(title, story)| html! {
                    <div class="timeline-entry">
                        <h4>{title}</h4>
                        <p class="quote">{format!("\"{}\"", story)}</p>
                    </div>
                }) }
            </Reveal>
            <h3>{"What This Challenge Taught Me"}</h3>
            { for LESSONS.iter().map(|&(icon, title, lesson)| html! {
                <div class="glass-card lesson-card">
                    <h4>{format!("{} {}", icon, title)}</h4>
                    <p>{lesson}</p>
                </div>
            }) }
            <blockquote class="chapter-quote">
                {"\"That pain taught me power. When you can't sit, you learn to think. When you can't type, \
                  you learn to visualize. Limitations become innovations.\""}
                <footer>{"Turning setbacks into comebacks"}</footer>
            </blockquote>
        </PinnedPanel>
    }
}
