use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::navbar::{NavBar, NavItem};
use crate::components::top_stories::TopStories;
use crate::config;
use crate::pages::sections::{About, Contact, Features, Footer, StorySection};
use crate::stories::top_stories;

fn nav_items() -> Vec<NavItem> {
    ["Nexus", "Vault", "Prologue", "About", "Contact"]
        .into_iter()
        .map(NavItem::new)
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <NavBar
                items={nav_items()}
                brand="Qualia Sports"
                logo_src={config::media_url("img/qualia-wnbg.svg")}
                audio_src={config::media_url("audio/loop.mp4")}
            />
            <Hero total_videos={config::HERO_VIDEO_COUNT} />
            <TopStories stories={top_stories()} />
            <About />
            <Features />
            <StorySection />
            <Contact />
            <Footer />
            <style>
                {r#"
                .landing {
                    position: relative;
                    min-height: 100vh;
                    width: 100vw;
                    overflow-x: hidden;
                    background: #dfdff0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                "#}
            </style>
        </main>
    }
}
