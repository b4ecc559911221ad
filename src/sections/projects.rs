use yew::prelude::*;

use crate::components::pinned_panel::{PinnedPanel, Relayout};
use crate::components::reveal::Reveal;
use crate::motion::reveal::{Frame, RevealIntent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub stack: &'static [&'static str],
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Deepfake Detection",
        summary: "A CNN classifier that flags manipulated face videos frame by frame and reports a confidence score per clip.",
        image: "/images/projects/deepfake.png",
        stack: &["Python", "TensorFlow", "OpenCV"],
    },
    Project {
        title: "Campus Connect",
        summary: "Full-stack notice board and event platform for college departments with role-based access.",
        image: "/images/projects/campus-connect.png",
        stack: &["Next.js", "Node.js", "MongoDB"],
    },
    Project {
        title: "Student Records",
        summary: "The school data entry job, rebuilt properly: a small CRUD app for marks and attendance.",
        image: "/images/projects/student-records.png",
        stack: &["Express.js", "MySQL", "Tailwind CSS"],
    },
    Project {
        title: "From Fields to Frameworks",
        summary: "This site. A scroll-driven story with a sunrise that follows the reader down the page.",
        image: "/images/projects/portfolio.png",
        stack: &["Rust", "Yew", "WebAssembly"],
    },
];

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let relayout = use_context::<Relayout>();
    // Images arrive after the first measurement and change the list height.
    let onload = Callback::from(move |_: Event| {
        if let Some(Relayout(relayout)) = &relayout {
            relayout.emit(());
        }
    });
    let project = props.project;

    html! {
        <article class="glass-card project-card">
            <img src={project.image} alt={project.title} loading="lazy" {onload} />
            <h3>{project.title}</h3>
            <p>{project.summary}</p>
            <ul class="project-stack">
                { for project.stack.iter().map(|tech| html! { <li>{*tech}</li> }) }
            </ul>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let cards = RevealIntent::new(Frame::shifted(0.0, 100.0).scaled(0.8))
        .duration(0.8)
        .stagger(0.1);

    let aside = html! {
        <>
            <h2 class="chapter-title"><span class="gradient-text">{"Projects"}</span></h2>
            <p class="chapter-lead">
                {"From AI-powered deepfake detection to full-stack web applications, here's what I've built \
                  with passion and precision."}
            </p>
        </>
    };

    html! {
        <PinnedPanel id="projects" class="chapter-night" split=true {aside}>
            <style>
                {r#"
                    .project-card { margin-bottom: 1.5rem; }
                    .project-card img {
                        width: 100%;
                        border-radius: 10px;
                        aspect-ratio: 16 / 9;
                        object-fit: cover;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .project-card h3 { margin: 1rem 0 0.5rem; }
                    .project-stack { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0; list-style: none; }
                    .project-stack li {
                        padding: 0.2rem 0.7rem;
                        border-radius: 999px;
                        background: rgba(0, 255, 255, 0.1);
                        color: #00ffff;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
            <Reveal intent={cards}>
                { for PROJECTS.iter().map(|&project| html! { <ProjectCard {project} /> }) }
            </Reveal>
        </PinnedPanel>
    }
}
