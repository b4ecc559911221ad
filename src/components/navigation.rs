use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::hooks::{scroll_to_section, scroll_to_top, scroll_y, use_scroll_frame};
use crate::motion::tracker::{ScrollTracker, SectionBounds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Page sections in document order.
pub const SECTIONS: [NavSection; 11] = [
    NavSection { id: "hero", label: "Start", icon: "🌅" },
    NavSection { id: "chapter-1", label: "Village Roots", icon: "🌾" },
    NavSection { id: "chapter-2", label: "English Struggle", icon: "📚" },
    NavSection { id: "chapter-3", label: "Computer Spark", icon: "💻" },
    NavSection { id: "chapter-4", label: "Phone Coding", icon: "📱" },
    NavSection { id: "chapter-6", label: "Recovery", icon: "💪" },
    NavSection { id: "chapter-7", label: "Academic Excellence", icon: "🏆" },
    NavSection { id: "chapter-8", label: "NCC Aviation", icon: "✈️" },
    NavSection { id: "skills", label: "Skills", icon: "🛠️" },
    NavSection { id: "projects", label: "Projects", icon: "💻" },
    NavSection { id: "contact", label: "Contact", icon: "📞" },
];

pub struct ScrollSample {
    scroll_y: f64,
    sections: Vec<(&'static str, Option<SectionBounds>)>,
}

impl Reducible for ScrollTracker {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, sample: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.observe(sample.scroll_y, sample.sections);
        Rc::new(next)
    }
}

fn measure(id: &str) -> Option<SectionBounds> {
    let element = window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let tracker = use_reducer_eq(|| {
        ScrollTracker::new(
            SECTIONS[0].id,
            config::NAV_PROBE_OFFSET,
            config::SCROLL_TOP_THRESHOLD,
        )
    });

    {
        let dispatcher = tracker.dispatcher();
        use_scroll_frame(
            "section tracking",
            Callback::from(move |_| {
                let Some(scroll_y) = scroll_y() else { return };
                let sections = SECTIONS.iter().map(|s| (s.id, measure(s.id))).collect();
                dispatcher.dispatch(ScrollSample { scroll_y, sections });
            }),
        );
    }

    let active = tracker.active();

    html! {
        <>
            <style>
                {r#"
                    .side-nav {
                        position: fixed;
                        right: 1.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .side-nav button {
                        position: relative;
                        width: 0.85rem;
                        height: 0.85rem;
                        padding: 0;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.6);
                        background: transparent;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .side-nav button.active {
                        background: #ffb347;
                        border-color: #ffb347;
                        transform: scale(1.35);
                    }
                    .side-nav .nav-tooltip {
                        position: absolute;
                        right: 1.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                        white-space: nowrap;
                        padding: 0.35rem 0.7rem;
                        border-radius: 8px;
                        background: rgba(15, 32, 72, 0.9);
                        color: #fff;
                        font-size: 0.8rem;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.2s ease;
                    }
                    .side-nav button:hover .nav-tooltip,
                    .side-nav button:focus-visible .nav-tooltip { opacity: 1; }
                    .scroll-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 50;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(45deg, #ffb347, #ff8c00);
                        color: #0f2048;
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 10px 24px rgba(0, 0, 0, 0.3);
                    }
                    @media (max-width: 768px) {
                        .side-nav { display: none; }
                    }
                "#}
            </style>
            <nav class="side-nav" aria-label="Sections">
                { for SECTIONS.iter().map(|section| {
                    let id = section.id;
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
                    html! {
                        <button
                            class={classes!((id == active).then(|| "active"))}
                            aria-label={section.label}
                            aria-current={(id == active).then(|| "true")}
                            {onclick}
                        >
                            <span class="nav-tooltip">{format!("{} {}", section.icon, section.label)}</span>
                        </button>
                    }
                }) }
            </nav>
            if tracker.show_scroll_top() {
                <button
                    class="scroll-top"
                    aria-label="Scroll to top"
                    onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
                >
                    {"↑"}
                </button>
            }
        </>
    }
}
