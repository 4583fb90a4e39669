use yew::prelude::*;

use crate::components::button::Button;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <p class="section__eyebrow">{"Welcome to Qualia Sports"}</p>
            <h2 class="section__heading">
                {"Every gre"}<b>{"a"}</b>{"t player started as a kid with a ball"}
            </h2>
            <div class="about__copy">
                <p>{"The academy years decide more than most people think."}</p>
                <p>{"We follow players from the pre-academy phase through the foundation phase and into their first scholarship decisions."}</p>
            </div>
        </section>
    }
}

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Watchlists",
        description: "Weekly notes on the players coaches keep talking about.",
    },
    Feature {
        title: "Development breakdowns",
        description: "Match clips broken down by decision, not by highlight.",
    },
    Feature {
        title: "Pathway guides",
        description: "What changes at U9, U12 and U16, explained for parents.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="nexus" class="section features">
            <h2 class="section__heading">{"Inside the phases"}</h2>
            <div class="features__grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div key={feature.title} class="feature-card">
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(StorySection)]
pub fn story_section() -> Html {
    html! {
        <section id="prologue" class="section story">
            <p class="section__eyebrow">{"The academy story"}</p>
            <h2 class="section__heading">{"The road to the first contract"}</h2>
            <p class="story__copy">
                {"Long before the cameras, there are cold Tuesday sessions, car-park warmups and parents doing the maths on travel. This is where the phases begin."}
            </p>
            <Button id="realm-button" title="Discover prologue" container_class={classes!("story__button")} />
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section contact">
            <div class="contact__card">
                <p class="section__eyebrow">{"Join Qualia"}</p>
                <h2 class="section__heading">{"Let's build the next generation together"}</h2>
                <Button id="contact-button" title="Contact us" container_class={classes!("contact__button")} />
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"©Qualia Sports 2025. All rights reserved"}</p>
            <a href="#privacy-policy" class="footer__link">{"Privacy Policy"}</a>
            <style>
                {r#"
                .section {
                    position: relative;
                    margin: 0 auto;
                    width: 88%;
                    padding: 6rem 0;
                }
                .section__eyebrow {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .section__heading {
                    margin-top: 1rem;
                    font-size: 2.5rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1;
                }
                .about {
                    text-align: center;
                }
                .about__copy {
                    margin: 2rem auto 0;
                    max-width: 36rem;
                    color: #555;
                }
                .features__grid {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                }
                .feature-card {
                    border-radius: 1rem;
                    background: #000;
                    color: #fff;
                    padding: 1.5rem;
                    min-height: 14rem;
                }
                .feature-card h3 {
                    font-size: 1.5rem;
                    text-transform: uppercase;
                }
                .feature-card p {
                    margin-top: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .story {
                    background: #000;
                    color: #dfdff0;
                    width: 100%;
                    padding: 6rem 6%;
                }
                .story__copy {
                    margin: 1.5rem 0;
                    max-width: 28rem;
                }
                .story__button, .contact__button {
                    background: #fde047;
                }
                .contact__card {
                    border-radius: 1rem;
                    background: #000;
                    color: #dfdff0;
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .footer {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    background: #5542ff;
                    color: #000;
                    padding: 1rem 6%;
                    font-size: 0.875rem;
                }
                .footer__link {
                    color: #000;
                }
                "#}
            </style>
        </footer>
    }
}
