use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::easing::Ease;
use crate::motion::reveal::{Frame, RevealIntent};

struct Milestone {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    badge: &'static str,
}

const NCC_JOURNEY: [Milestone; 7] = [
    Milestone {
        icon: "🎖️",
        title: "NCC A Certificate",
        detail: "Introduced to NCC culture, drill basics, and foundational physical training.",
        badge: "Level 1",
    },
    Milestone {
        icon: "🎖️",
        title: "NCC B Certificate",
        detail: "Intermediate level: weapon handling, map reading, team leadership, and physical endurance.",
        badge: "Level 2",
    },
    Milestone {
        icon: "🏅",
        title: "NCC C Certificate",
        detail: "Advanced command training, drill commanding, and national-level preparation.",
        badge: "Level 3",
    },
    Milestone {
        icon: "🏕️",
        title: "Camps Attended",
        detail: "Participated in 4 camps: 1 National Camp and 3 Annual Training Camps across India.",
        badge: "Field",
    },
    Milestone {
        icon: "👨‍✈️",
        title: "Cadet Warrant Officer",
        detail: "Cadet rank. Led parades, mentored juniors, and coordinated inter-unit operations.",
        badge: "Leadership",
    },
    Milestone {
        icon: "✈️",
        title: "Air Force Training",
        detail: "Underwent ground training and safety drills with Indian Air Force personnel.",
        badge: "Elite",
    },
    Milestone {
        icon: "🛩️",
        title: "SW-80 Virus Aircraft",
        detail: "Completed 7 training sorties in the co-pilot seat. First taste of aviation in action.",
        badge: "Flight",
    },
];

const NCC_GAVE: [(&str, &str, &str); 4] = [
    ("⏰", "Discipline", "4 AM wake-ups became a lifestyle"),
    ("👥", "Leadership", "Leading teams under pressure"),
    ("💪", "Resilience", "Mental and physical toughness"),
    ("🎯", "Precision", "Attention to detail and excellence"),
];

fn stat(value: &'static str, label: &'static str) -> Html {
    html! {
        <div class="stat"><strong>{value}</strong><span>{label}</span></div>
    }
}

/// Chapter seven: university rankings.
#[function_component(AcademicExcellence)]
pub fn academic_excellence() -> Html {
    let trophy = RevealIntent::new(Frame::shifted(0.0, 100.0).scaled(0.5).rotated(-10.0))
        .duration(1.5)
        .ease(Ease::BackOut);
    let certificates = RevealIntent::new(Frame::shifted(0.0, 50.0).rotated(-5.0))
        .duration(1.0)
        .stagger(0.2)
        .alternating();

    html! {
        <section id="chapter-7" class="chapter chapter-night">
            <style>
                {r#"
                    .stat-row { display: flex; gap: 1.5rem; justify-content: center; margin: 0.75rem 0; }
                    .stat { text-align: center; }
                    .stat strong { display: block; font-size: 2rem; color: #ffb347; }
                    .stat span { font-size: 0.85rem; color: #cbd5e1; }
                    .trophy { text-align: center; }
                    .trophy-icon { font-size: 6rem; }
                    .trophy-ranks { display: flex; gap: 1rem; justify-content: center; }
                    .trophy-ranks span {
                        padding: 0.35rem 0.9rem;
                        border-radius: 999px;
                        background: linear-gradient(45deg, #ffb347, #ff8c00);
                        color: #0f2048;
                        font-weight: 700;
                    }
                    .institution { font-size: 0.85rem; color: #94a3b8; text-align: center; }
                "#}
            </style>
            <div class="chapter-inner">
                <h2 class="chapter-title"><span class="gradient-text">{"From Village to Toppers List"}</span></h2>
                <p class="chapter-lead">
                    {"Despite all odds, I secured 2nd position in BCA out of ~3500 students in Punjabi University. \
                      In MCA at Thapar, among 120 bright minds, I stood 3rd overall and 1st among boys with 9.84 CGPA."}
                </p>
                <div class="chapter-columns">
                    <div class="chapter-story">
                        <div class="glass-card">
                            <h3>{"The Impossible Journey"}</h3>
                            <p>
                                {"\"Nobody in my village knew what 'coding' meant. They saw a boy who worked in fields, \
                                  struggled with English, and learned on a phone.\""}
                            </p>
                            <p>
                                {"But results speak louder than backgrounds. When the BCA results came out, I was 2nd \
                                  out of 3500+ students across Punjabi University."}
                            </p>
                            <p class="quote">
                                {"\"From a village school to university topper. That's the power of consistency and \
                                  refusing to accept limitations.\""}
                            </p>
                        </div>
                        <Reveal intent={certificates} class="certificates" item_class="glass-card">
                            <>
                                <h4>{"🏆 BCA Achievement"}</h4>
                                <div class="stat-row">{stat("2nd", "Position")}{stat("3500+", "Students")}</div>
                                <p class="institution">{"University College, Ghanaur (Punjabi University, Patiala)"}</p>
                            </>
                            <>
                                <h4>{"🎓 MCA Excellence"}</h4>
                                <div class="stat-row">
                                    {stat("3rd", "Overall")}{stat("1st", "Among Boys")}{stat("9.84", "CGPA")}
                                </div>
                                <p class="institution">{"Thapar Institute of Engineering & Technology"}</p>
                            </>
                        </Reveal>
                    </div>
                    <Reveal intent={trophy} class="trophy">
                        <div>
                            <div class="trophy-icon">{"🏆"}</div>
                            <div class="trophy-ranks"><span>{"#2"}</span><span>{"#3"}</span></div>
                            <h3>{"Academic Excellence"}</h3>
                            <p>{"Against All Odds"}</p>
                            <blockquote class="quote">
                                {"\"They measured me by my background. I measured myself by my potential. \
                                  The results spoke for themselves.\""}
                            </blockquote>
                            {stat("15+", "Years of Being Topper")}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Chapter eight: NCC and the first flights.
#[function_component(Aviation)]
pub fn aviation() -> Html {
    let journey = RevealIntent::new(Frame::shifted(-100.0, 0.0))
        .duration(0.8)
        .stagger(0.2);
    let gave = RevealIntent::new(Frame::shifted(0.0, 50.0).scaled(0.8))
        .duration(1.0)
        .stagger(0.1)
        .ease(Ease::BackOut);

    html! {
        <section id="chapter-8" class="chapter chapter-night">
            <style>
                {r#"
                    .ncc-step {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .ncc-step .icon { font-size: 1.75rem; }
                    .ncc-step h4 { margin: 0 0 0.25rem; }
                    .ncc-step p { margin: 0; color: #cbd5e1; }
                    .ncc-badge {
                        margin-left: auto;
                        padding: 0.2rem 0.7rem;
                        border-radius: 999px;
                        border: 1px solid #00ffff;
                        color: #00ffff;
                        font-size: 0.75rem;
                        white-space: nowrap;
                    }
                    .ncc-gave { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
                    .ncc-gave .glass-card { text-align: center; }
                    .ncc-gave .icon { font-size: 2rem; }
                "#}
            </style>
            <div class="chapter-inner">
                <h2 class="chapter-title"><span class="gradient-text">{"Airborne with NCC"}</span></h2>
                <p class="chapter-lead">
                    {"NCC made me who I am. I was up at 4 AM, trained with the Indian Air Force, and co-operated in \
                      SW-80 virus aircraft sorties during training. I earned A, B, and C certificates, and proudly \
                      served as a Cadet Warrant Officer."}
                </p>
                <h3>{"My NCC Journey"}</h3>
                <Reveal intent={journey}>
                    { for NCC_JOURNEY.iter().map(|step| html! {
                        <div class="ncc-step">
                            <span class="icon">{step.icon}</span>
                            <div>
                                <h4>{step.title}</h4>
                                <p>{step.detail}</p>
                            </div>
                            <span class="ncc-badge">{step.badge}</span>
                        </div>
                    }) }
                </Reveal>
                <h3>{"What NCC Gave Me"}</h3>
                <Reveal intent={gave} class="ncc-gave" item_class="glass-card">
                    { for NCC_GAVE.iter().map(|&(icon, title, detail)| html! {
                        <>
                            <div class="icon">{icon}</div>
                            <h4>{title}</h4>
                            <p>{detail}</p>
                        </>
                    }) }
                </Reveal>
                <blockquote class="chapter-quote">
                    {"\"NCC didn't just teach me to fly aircraft. It taught me to soar above limitations, to lead \
                      with purpose, and to serve with honor.\""}
                    <footer>{"From cadet to leader, from ground to sky"}</footer>
                </blockquote>
            </div>
        </section>
    }
}
