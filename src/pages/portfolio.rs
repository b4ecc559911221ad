use log::info;
use yew::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::components::navigation::Navigation;
use crate::components::scroll_progress::ScrollProgress;
use crate::motion::broadcast::SunriseChannel;
use crate::sections::{
    achievements::{AcademicExcellence, Aviation},
    chapter_one::ChapterOne,
    chapters::{ChapterFour, ChapterThree, ChapterTwo},
    contact::Contact,
    hero::Hero,
    projects::Projects,
    recovery::Recovery,
    skills::Skills,
};

/// The whole story on one page. Nothing below the loader is mounted until
/// the loading sequence has finished.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let loaded = use_state(|| false);
    let sunrise = use_memo(|_| SunriseChannel::new(), ());

    if !*loaded {
        let on_complete = {
            let loaded = loaded.clone();
            Callback::from(move |_: ()| {
                info!("Mounting portfolio");
                loaded.set(true);
            })
        };
        return html! { <LoadingScreen {on_complete} /> };
    }

    html! {
        <ContextProvider<SunriseChannel> context={(*sunrise).clone()}>
            <ScrollProgress />
            <Navigation />
            <main class="portfolio">
                <Hero />
                <ChapterOne />
                <ChapterTwo />
                <ChapterThree />
                <ChapterFour />
                <Recovery />
                <AcademicExcellence />
                <Aviation />
                <Skills />
                <Projects />
                <Contact />
            </main>
        </ContextProvider<SunriseChannel>>
    }
}
