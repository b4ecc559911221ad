use chrono::Datelike;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::components::reveal::Reveal;
use crate::config::{self, EmailConfig};
use crate::contact::{deliver, ContactForm, Field, Outcome};
use crate::motion::reveal::{Frame, RevealIntent};

fn input_value(e: &InputEvent) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let outcome = use_state(|| None::<Outcome>);
    let email = use_memo(|_| EmailConfig::from_build_env(), ());

    {
        let email = email.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = &*email {
                    log::warn!("Contact form will not send: {}", e);
                }
                || ()
            },
            (),
        );
    }

    let oninput = |field: Field| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                form.borrow_mut().edit(field, value);
                redraw.force_update();
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(fields) = form.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();

            let form = form.clone();
            let redraw = redraw.clone();
            let outcome = outcome.clone();
            let email = email.clone();
            spawn_local(async move {
                let result = match &*email {
                    Ok(email) => deliver(email, &fields).await,
                    Err(e) => Err(e.clone()),
                };
                match &result {
                    Ok(()) => info!("Contact message sent"),
                    Err(e) => error!("Contact message failed: {}", e),
                }
                let done = form.borrow_mut().finish(&result);
                outcome.set(Some(done));
                redraw.force_update();
            });
        })
    };

    let on_dismiss = {
        let outcome = outcome.clone();
        Callback::from(move |_: ()| outcome.set(None))
    };

    let info_intent = RevealIntent::new(Frame::shifted(-100.0, 0.0))
        .duration(0.8)
        .stagger(0.2);
    let form_intent = RevealIntent::new(Frame::shifted(100.0, 0.0)).duration(1.0);

    let state = form.borrow();
    let fields = state.fields();
    let sending = state.in_flight();
    let year = chrono::Local::now().year();

    html! {
        <section id="contact" class="chapter chapter-night">
            <style>
                {r#"
                    .contact-method { display: flex; gap: 1rem; align-items: center; margin-bottom: 1rem; }
                    .contact-method span { font-size: 1.5rem; }
                    .contact-method h4 { margin: 0; }
                    .contact-method p { margin: 0; color: #cbd5e1; }
                    .contact-links { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .contact-links a {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        text-decoration: none;
                    }
                    .contact-links a.resume { background: linear-gradient(45deg, #ffb347, #ff8c00); color: #0f2048; border: none; }
                    .contact-form label { display: block; margin: 0 0 0.35rem; font-size: 0.9rem; color: #cbd5e1; }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        margin-bottom: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.06);
                        color: #fff;
                        font: inherit;
                    }
                    .contact-form button {
                        width: 100%;
                        padding: 0.85rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #ffb347, #ff8c00);
                        color: #0f2048;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .contact-form button:disabled { opacity: 0.6; cursor: wait; }
                    .site-footer { margin-top: 3rem; text-align: center; color: #94a3b8; font-size: 0.85rem; }
                "#}
            </style>
            <div class="chapter-inner">
                <h2 class="chapter-title">{"Let's "}<span class="gradient-text">{"Connect"}</span></h2>
                <p class="chapter-lead">
                    {"Thank you for walking through my journey. Whether you want to collaborate on a project, discuss \
                      opportunities, or just say hello, I'd love to hear from you."}
                </p>
                <div class="chapter-columns">
                    <Reveal intent={info_intent}>
                        <div>
                            <h3>{"Get in Touch"}</h3>
                            <p>
                                {"I'm always open to discussing new opportunities, interesting projects, or just having \
                                  a conversation about technology and innovation."}
                            </p>
                        </div>
                        <div class="contact-method">
                            <span>{"✉️"}</span>
                            <div><h4>{"Email"}</h4><p>{"ramavtar.crb@gmail.com"}</p></div>
                        </div>
                        <div class="contact-method">
                            <span>{"📍"}</span>
                            <div><h4>{"Location"}</h4><p>{"Punjab, India"}</p></div>
                        </div>
                        <div>
                            <h4>{"Connect on Social"}</h4>
                            <div class="contact-links">
                                <a href="https://www.linkedin.com/in/codingrambharose" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                                <a href="https://github.com/CodingRamBharose" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                                <a href="mailto:codingrambharose@gmail.com">{"Mail"}</a>
                                <a class="resume" href={config::RESUME_PATH} target="_blank" rel="noopener noreferrer">{"⬇ Resume"}</a>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal intent={form_intent}>
                        <form class="glass-card contact-form" {onsubmit}>
                            <h3>{"Send a Message"}</h3>
                            <label for="name">{"Your Name"}</label>
                            <input
                                id="name" name="name" type="text" required=true placeholder="John Doe"
                                value={fields.name.clone()} oninput={oninput(Field::Name)}
                            />
                            <label for="email">{"Email Address"}</label>
                            <input
                                id="email" name="email" type="email" required=true placeholder="john@example.com"
                                value={fields.email.clone()} oninput={oninput(Field::Email)}
                            />
                            <label for="subject">{"Subject"}</label>
                            <input
                                id="subject" name="subject" type="text" required=true placeholder="Project Collaboration"
                                value={fields.subject.clone()} oninput={oninput(Field::Subject)}
                            />
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message" name="message" rows="3" required=true
                                placeholder="Tell me about your project or just say hello..."
                                value={fields.message.clone()} oninput={oninput(Field::Message)}
                            />
                            <button type="submit" disabled={sending}>
                                { if sending { "Sending..." } else { "Send Message ➤" } }
                            </button>
                        </form>
                    </Reveal>
                </div>
                <blockquote class="chapter-quote">
                    {"\"This is my story: a story of roots, code, and resilience. Let's build something meaningful together.\""}
                    <footer>{"Ready for the next chapter"}</footer>
                </blockquote>
                <p class="site-footer">{format!("© {} Ram Avtar. Designed & coded with 💛 and lots of ☕", year)}</p>
            </div>
            if let Some(outcome) = *outcome {
                <Toast {outcome} {on_dismiss} />
            }
        </section>
    }
}
