//! Chapters two to four: the language barrier, the first computer and
//! coding on a phone.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::reveal::{Frame, RevealIntent, RevealPhase, Trigger};
use crate::motion::typewriter::{typed_prefix, TypingRun};

const TERMINAL_TEXT: &str =
    "Student Name: Ram Avtar\nClass: 8th\nMarks: 97/100\nStatus: Updated Successfully";
const TERMINAL_CHAR_MS: u32 = 50;
const CODE_ROTATE_MS: u32 = 3000;

struct CodeSample {
    title: &'static str,
    code: &'static str,
}

const CODE_SAMPLES: [CodeSample; 4] = [
    CodeSample {
        title: "Hello World",
        code: "# My First Python Program\nprint(\"Hello, world!\")",
    },
    CodeSample {
        title: "Simple Math Solver",
        code: "# Solves a basic math expression\n\
               expression = input(\"Enter math expression (e.g., 5 + 3): \")\n\
               result = eval(expression)\n\
               print(\"Result:\", result)",
    },
    CodeSample {
        title: "Guess the Number Game",
        code: "# Guess the Number Game\n\
               import random\n\n\
               number = random.randint(1, 100)\n\
               guess = int(input(\"Guess: \"))\n\n\
               if guess == number:\n    print(\"You won!\")\n\
               else:\n    print(\"Try again!\")",
    },
    CodeSample {
        title: "Basic Calculator",
        code: "# Basic Calculator\n\
               def add(x, y):\n    return x + y\n\n\
               def subtract(x, y):\n    return x - y\n\n\
               num1 = float(input(\"First number: \"))\n\
               num2 = float(input(\"Second number: \"))\n\
               result = add(num1, num2)\n\
               print(f\"Result: {result}\")",
    },
];

const PHONE_BUILDS: [(&str, &str); 4] = [
    ("👋", "Hello World"),
    ("🔢", "Math Solvers"),
    ("🎮", "Number Guessing Game"),
    ("🧮", "Basic Calculator"),
];

/// Number of characters typed so far. Typing restarts from nothing every
/// time `typing` turns on and the text is cleared when it turns off.
#[hook]
fn use_typed_chars(typing: bool, total: usize) -> usize {
    let run = use_mut_ref(|| TypingRun::new(total));
    let typed = use_state_eq(|| 0usize);
    {
        let typed = typed.setter();
        use_effect_with_deps(
            move |&typing| {
                if typing {
                    run.borrow_mut().start();
                } else {
                    run.borrow_mut().stop();
                }
                typed.set(run.borrow().typed());
                let interval = typing.then(|| {
                    Interval::new(TERMINAL_CHAR_MS, move || {
                        let mut run = run.borrow_mut();
                        if run.tick() {
                            typed.set(run.typed());
                        }
                    })
                });
                move || drop(interval)
            },
            typing,
        );
    }
    *typed
}

/// Index into a rotation of `len` items that advances every `period_ms`
/// while `running`.
#[hook]
fn use_rotation(running: bool, len: usize, period_ms: u32) -> usize {
    let index = use_state_eq(|| 0usize);
    {
        let current = *index;
        let index = index.setter();
        use_effect_with_deps(
            move |&running| {
                let interval = (running && len > 0).then(|| {
                    let mut at = current;
                    Interval::new(period_ms, move || {
                        at = (at + 1) % len;
                        index.set(at);
                    })
                });
                move || drop(interval)
            },
            running,
        );
    }
    *index
}

#[function_component(ChapterTwo)]
pub fn chapter_two() -> Html {
    let blurred = RevealIntent::new(Frame::REST.blurred(10.0, 0.3)).duration(2.0);
    let clear = RevealIntent::new(Frame::shifted(0.0, 50.0))
        .duration(1.5)
        .delay(0.5)
        .trigger(Trigger::TOP_85);

    html! {
        <section id="chapter-2" class="chapter chapter-night">
            <div class="chapter-inner">
                <h2 class="chapter-title"><span class="gradient-text">{"Lost in Translation"}</span></h2>
                <div class="chapter-columns">
                    <Reveal intent={blurred} class="glass-card">
                        <h3>{"How I Felt in Class 11"}</h3>
                        <p>
                            {"I studied in Punjabi medium till class 10, and my native language is Punjabi. \
                              Suddenly switching to English medium in class 11 felt like being thrown into a foreign world."}
                        </p>
                        <p class="quote">
                            {"\"The teacher is explaining something about physics, but I can't understand. \
                              Everyone around me is nodding, taking notes. I'm just sitting there, feeling invisible.\""}
                        </p>
                    </Reveal>
                    <Reveal intent={clear} class="glass-card">
                        <h3>{"Small Steps, Big Changes"}</h3>
                        <p>
                            {"I started watching simple English cartoons, using Google Translate for everything, \
                              and asking friends for help. I didn't magically become fluent, but I learned to \
                              survive, step by step."}
                        </p>
                        <p class="quote">{"\"Hard work beats talent when talent doesn't work hard.\""}</p>
                    </Reveal>
                </div>
                <blockquote class="chapter-quote">
                    {"\"I didn't just learn English. I learned that any barrier can be broken with enough \
                      determination and the right approach.\""}
                    <footer>{"The moment I realized I could learn anything"}</footer>
                </blockquote>
            </div>
        </section>
    }
}

#[function_component(ChapterThree)]
pub fn chapter_three() -> Html {
    let typing = use_state_eq(|| false);
    let typed = use_typed_chars(*typing, TERMINAL_TEXT.chars().count());
    let computer = RevealIntent::new(Frame::HIDDEN.scaled(0.8)).duration(1.5);
    let on_phase = {
        let typing = typing.setter();
        Callback::from(move |phase: RevealPhase| typing.set(phase.is_shown()))
    };

    html! {
        <section id="chapter-3" class="chapter chapter-night">
            <style>
                {r#"
                    .terminal {
                        border-radius: 14px;
                        background: #111827;
                        border: 8px solid #374151;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                    }
                    .terminal-bar { padding: 0.6rem 1rem; background: #1f2937; color: #9ca3af; font-size: 0.8rem; }
                    .terminal-screen {
                        min-height: 8rem;
                        padding: 1.25rem;
                        color: #4ade80;
                        font-family: monospace;
                        white-space: pre-line;
                    }
                    .terminal-caret { animation: caretBlink 1s steps(1) infinite; }
                "#}
            </style>
            <div class="chapter-inner chapter-columns">
                <div class="chapter-story">
                    <h2 class="chapter-title"><span class="gradient-text">{"The Computer Spark"}</span></h2>
                    <p>
                        {"In 6th standard, computer science was introduced as a subject. The first time I touched \
                          a keyboard, I felt a strange excitement. But things really changed in 8th grade..."}
                    </p>
                    <p>
                        {"I was known for being good at studies, and one day our class teacher called me and said, \
                          \"You're sharp. Can you help enter some student data into the system?\""}
                    </p>
                    <p>
                        {"I had no idea what a database was, but I eagerly agreed. I skipped regular classes just to \
                          sit at that big old desktop and type in roll numbers, marks, and names."}
                    </p>
                    <p>
                        {"Within days, my typing speed reached 30 words per minute. I started participating in \
                          typing competitions and won many!"}
                    </p>
                    <p class="callout">{"💡 The Spark Was Lit"}</p>
                </div>
                <Reveal intent={computer} {on_phase}>
                    <div class="terminal">
                        <div class="terminal-bar">{"SCHOOL MANAGEMENT SYSTEM v1.0"}</div>
                        <div class="terminal-screen" aria-live="off">
                            <div>{"Updating Student Records..."}</div>
                            { typed_prefix(TERMINAL_TEXT, typed) }
                            <span class="terminal-caret">{"|"}</span>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ChapterFour)]
pub fn chapter_four() -> Html {
    let running = use_state_eq(|| false);
    let current = use_rotation(*running, CODE_SAMPLES.len(), CODE_ROTATE_MS);
    let phone = RevealIntent::new(Frame::shifted(0.0, 100.0).turned(-15.0)).duration(1.5);
    let on_phase = {
        let running = running.setter();
        Callback::from(move |phase: RevealPhase| running.set(phase.is_shown()))
    };
    let sample = &CODE_SAMPLES[current % CODE_SAMPLES.len()];

    html! {
        <section id="chapter-4" class="chapter chapter-night">
            <style>
                {r#"
                    .phone {
                        width: 18rem;
                        margin: 0 auto;
                        padding: 0.75rem;
                        border-radius: 2.25rem;
                        background: #111827;
                        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.45);
                        perspective: 800px;
                    }
                    .phone-status { display: flex; justify-content: space-between; padding: 0.25rem 1rem; font-size: 0.75rem; color: #cbd5e1; }
                    .phone-screen { border-radius: 1.75rem; background: #0b1220; padding: 1rem; min-height: 22rem; }
                    .phone-screen h4 { margin: 0 0 0.75rem; color: #ffb347; }
                    .phone-screen pre {
                        margin: 0.5rem 0 0;
                        font-size: 0.72rem;
                        color: #a5f3fc;
                        white-space: pre-wrap;
                        animation: codeSwap 0.4s ease-out;
                    }
                    .phone-builds { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; }
                    .phone-builds div { padding: 0.75rem; border-radius: 10px; background: rgba(255, 255, 255, 0.08); text-align: center; }
                    @keyframes codeSwap { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
            <div class="chapter-inner chapter-columns">
                <div class="chapter-story">
                    <h2 class="chapter-title"><span class="gradient-text">{"Code on a Phone"}</span></h2>
                    <p>
                        {"After 12th, I couldn't join B.Tech. Everyone pushed me toward B.Sc., but I chose BCA. \
                          I started learning Python on my phone and wrote mini games and calculators, all on a \
                          5-inch screen."}
                    </p>
                    <div class="glass-card">
                        <h3>{"The Phone Programmer"}</h3>
                        <p>
                            {"\"I didn't have a laptop. I didn't have a computer. But I had a smartphone and an \
                              unstoppable desire to learn coding.\""}
                        </p>
                        <p>
                            {"I downloaded Python apps, watched YouTube tutorials, and typed code with my thumbs. \
                              My friends thought I was crazy. Who codes on a phone?"}
                        </p>
                        <p class="quote">
                            {"\"Limitation breeds creativity. I learned to think in code before I could type it comfortably.\""}
                        </p>
                    </div>
                    <h4>{"What I Built on My Phone:"}</h4>
                    <div class="phone-builds">
                        { for PHONE_BUILDS.iter().map(|&(icon, label)| html! {
                            <div><div>{icon}</div>{label}</div>
                        }) }
                    </div>
                </div>
                <Reveal intent={phone} {on_phase}>
                    <div class="phone">
                        <div class="phone-status"><span>{"6:00 AM"}</span><span>{"📶 🔋"}</span></div>
                        <div class="phone-screen">
                            <h4>{"Python Mobile IDE"}</h4>
                            <div key={current}>
                                <strong>{sample.title}</strong>
                                <pre>{sample.code}</pre>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_text_types_cleanly_at_every_length() {
        let total = TERMINAL_TEXT.chars().count();
        assert_eq!(typed_prefix(TERMINAL_TEXT, total), TERMINAL_TEXT);
        assert_eq!(typed_prefix(TERMINAL_TEXT, 12), "Student Name");
    }

    #[test]
    fn code_samples_are_python_snippets() {
        for sample in &CODE_SAMPLES {
            assert!(sample.code.starts_with('#'), "{}", sample.title);
        }
        assert!(CODE_SAMPLES[3].code.contains("    return x - y"));
    }
}
