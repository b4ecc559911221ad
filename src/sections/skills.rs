use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::strength_rings::{Strength, StrengthRings};
use crate::hooks::use_tween_clock;
use crate::motion::easing::{staggered, staggered_ms, Ease};
use crate::motion::reveal::{Frame, RevealIntent, RevealPhase};

struct Skill {
    name: &'static str,
    level: u32,
    category: &'static str,
    icon: &'static str,
    gradient: (&'static str, &'static str),
}

const YELLOW: (&str, &str) = ("#facc15", "#eab308");
const CYAN: (&str, &str) = ("#22d3ee", "#0891b2");
const GREEN: (&str, &str) = ("#4ade80", "#16a34a");
const BLUE: (&str, &str) = ("#60a5fa", "#2563eb");
const RED: (&str, &str) = ("#f87171", "#dc2626");
const ORANGE: (&str, &str) = ("#fb923c", "#ea580c");
const GRAY: (&str, &str) = ("#9ca3af", "#6b7280");
const NEON: (&str, &str) = ("#64ffda", "#42a5f5");

const fn skill(
    name: &'static str,
    level: u32,
    category: &'static str,
    icon: &'static str,
    gradient: (&'static str, &'static str),
) -> Skill {
    Skill {
        name,
        level,
        category,
        icon,
        gradient,
    }
}

const SKILLS: [Skill; 18] = [
    skill("JavaScript", 80, "Frontend", "⚡", YELLOW),
    skill("React", 75, "Frontend", "⚛️", CYAN),
    skill("Next.js", 75, "Frontend", "▲", NEON),
    skill("TypeScript", 65, "Frontend", "📘", BLUE),
    skill("Tailwind CSS", 85, "Frontend", "🎨", NEON),
    skill("shadcn/ui", 70, "Frontend", "🧩", NEON),
    skill("Node.js", 75, "Backend", "🟢", GREEN),
    skill("Python", 60, "Backend", "🐍", BLUE),
    skill("Express.js", 70, "Backend", "🚀", GRAY),
    skill("MongoDB", 70, "Database", "🍃", GREEN),
    skill("MySQL", 60, "Database", "🗄️", BLUE),
    skill("TensorFlow", 10, "AI/ML", "🧠", ORANGE),
    skill("Git", 80, "Tools", "📝", RED),
    skill("VS Code", 85, "Tools", "🧰", BLUE),
    skill("Docker", 65, "DevOps", "🐳", BLUE),
    skill("Jenkins", 50, "DevOps", "🧪", RED),
    skill("Grafana", 45, "DevOps", "📊", YELLOW),
    skill("AWS", 40, "Cloud", "☁️", ORANGE),
];

const CATEGORIES: [&str; 7] = ["Frontend", "Backend", "Database", "AI/ML", "Tools", "DevOps", "Cloud"];

const STRENGTHS: &[Strength] = &[
    Strength { name: "Problem Solving", level: 80, color: (100, 255, 218) },
    Strength { name: "Team Leadership", level: 85, color: (255, 215, 0) },
    Strength { name: "Communication", level: 80, color: (0, 188, 212) },
    Strength { name: "Adaptability", level: 92, color: (249, 211, 66) },
];

const BAR_MS: u32 = 1500;
const BAR_STAGGER_MS: u32 = 100;
const RING_MS: u32 = 2000;
const RING_STAGGER_MS: u32 = 200;

/// Shown value of a count-up that ends at `level`.
fn counted(level: u32, fill: f64) -> u32 {
    (f64::from(level) * fill).round() as u32
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let bars_on = use_state_eq(|| false);
    let rings_on = use_state_eq(|| false);
    let bar_clock = use_tween_clock(*bars_on, staggered_ms(BAR_MS, BAR_STAGGER_MS, SKILLS.len()));
    let ring_clock = use_tween_clock(
        *rings_on,
        staggered_ms(RING_MS, RING_STAGGER_MS, STRENGTHS.len()),
    );

    let rings = RevealIntent::new(Frame::shifted(0.0, 30.0)).duration(0.8);
    let categories = RevealIntent::new(Frame::shifted(0.0, 30.0))
        .duration(0.8)
        .stagger(0.1);
    let on_rings = {
        let rings_on = rings_on.setter();
        Callback::from(move |phase: RevealPhase| rings_on.set(phase.is_shown()))
    };
    let on_bars = {
        let bars_on = bars_on.setter();
        Callback::from(move |phase: RevealPhase| bars_on.set(phase.is_shown()))
    };
    let bar_stagger = f64::from(BAR_STAGGER_MS) / f64::from(BAR_MS);

    let category_card = |category: &'static str| {
        let rows = SKILLS
            .iter()
            .enumerate()
            .filter(|(_, s)| s.category == category)
            .map(|(index, s)| {
                let fill = Ease::Power2Out.apply(staggered(bar_clock, index, SKILLS.len(), bar_stagger));
                let (from, to) = s.gradient;
                html! {
                    <div class="skill-row">
                        <div class="skill-head">
                            <span>{format!("{} {}", s.icon, s.name)}</span>
                            <span class="skill-number">{format!("{}%", counted(s.level, fill))}</span>
                        </div>
                        <div class="skill-track">
                            <div
                                class="skill-bar"
                                style={format!(
                                    "width: {:.2}%; background: linear-gradient(to right, {}, {});",
                                    f64::from(s.level) * fill, from, to
                                )}
                            ></div>
                        </div>
                    </div>
                }
            })
            .collect::<Html>();
        html! {
            <div class="glass-card skill-category">
                <h4>{category}</h4>
                {rows}
            </div>
        }
    };

    html! {
        <section id="skills" class="chapter chapter-night">
            <style>
                {r#"
                    .skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem; }
                    .skill-category h4 { margin: 0 0 1rem; color: #ffb347; }
                    .skill-row { margin-bottom: 0.9rem; }
                    .skill-head { display: flex; justify-content: space-between; font-size: 0.9rem; margin-bottom: 0.35rem; }
                    .skill-number { font-family: monospace; color: #94a3b8; }
                    .skill-track { height: 0.45rem; border-radius: 999px; background: rgba(255, 255, 255, 0.1); overflow: hidden; }
                    .skill-bar { height: 100%; border-radius: 999px; }
                    .strengths { display: flex; justify-content: center; margin: 2rem 0 3rem; }
                "#}
            </style>
            <div class="chapter-inner">
                <h2 class="chapter-title">{"Skills & "}<span class="gradient-text">{"Technologies"}</span></h2>
                <p class="chapter-lead">
                    {"Adaptable. Self-taught. Consistently learning. Every skill reflects a chapter of growth, from \
                      learning the basics to tackling real-world challenges in tech."}
                </p>
                <h3>{"Core Strengths"}</h3>
                <Reveal intent={rings} class="strengths" on_phase={on_rings}>
                    <StrengthRings strengths={STRENGTHS} progress={ring_clock} stagger={f64::from(RING_STAGGER_MS) / f64::from(RING_MS)} />
                </Reveal>
                <h3>{"Technical Expertise"}</h3>
                <Reveal intent={categories} class="skills-grid" on_phase={on_bars}>
                    { for CATEGORIES.iter().map(|&category| category_card(category)) }
                </Reveal>
                <blockquote class="chapter-quote">
                    {"\"Every skill I've learned started with curiosity and was mastered through persistence. From \
                      coding on a phone to building complex systems, the journey never stops.\""}
                    <footer>{"Continuous learning, continuous growth"}</footer>
                </blockquote>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_has_a_listed_category() {
        for skill in &SKILLS {
            assert!(CATEGORIES.contains(&skill.category), "{}", skill.name);
            assert!(skill.level <= 100);
        }
    }

    #[test]
    fn count_up_lands_on_the_level() {
        assert_eq!(counted(92, 1.0), 92);
        assert_eq!(counted(92, 0.0), 0);
        assert_eq!(counted(85, 0.5), 43);
    }
}
