use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;
use crate::motion::reveal::{RevealLayer, RevealTrigger};
use crate::stories::{display_date, split_featured, Story};

#[derive(Properties, PartialEq)]
pub struct TopStoriesProps {
    pub stories: Vec<Story>,
}

#[derive(Properties, PartialEq)]
struct StoryProps {
    story: Story,
    style: String,
}

#[function_component(FeaturedStory)]
fn featured_story(props: &StoryProps) -> Html {
    let story = &props.story;
    html! {
        <a data-featured="" href={story.href} class="featured-story" style={props.style.clone()}>
            <div class="featured-story__media">
                <img src={story.image_src} alt={story.title} loading="eager" />
                <div class="featured-story__overlay" />
                <div class="featured-story__sheen" />
            </div>
            <div class="featured-story__body">
                <div class="featured-story__meta">
                    <span class="featured-story__category">{ story.category }</span>
                    <time datetime={story.date}>{ display_date(story.date) }</time>
                </div>
                <h3>{ story.title }</h3>
                <p class="featured-story__author">{ format!("By {}", story.author) }</p>
            </div>
        </a>
    }
}

#[function_component(StoryRow)]
fn story_row(props: &StoryProps) -> Html {
    let story = &props.story;
    html! {
        <a data-item="" href={story.href} class="story-row" style={props.style.clone()}>
            <div class="story-row__media">
                <img src={story.image_src} alt={story.title} loading="lazy" />
            </div>
            <div class="story-row__body">
                <div class="story-row__meta">
                    <span class="story-row__category">{ story.category }</span>
                    <span class="story-row__dot">{"•"}</span>
                    <time datetime={story.date}>{ display_date(story.date) }</time>
                </div>
                <h4>{ story.title }</h4>
                <p class="story-row__author">{ format!("By {}", story.author) }</p>
            </div>
        </a>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Revealed {
    title: bool,
    featured: bool,
    rows: bool,
}

#[function_component(TopStories)]
pub fn top_stories(props: &TopStoriesProps) -> Html {
    let section_ref = use_node_ref();
    let triggers = use_mut_ref(|| {
        [
            RevealTrigger::at(config::REVEAL_TITLE_AT),
            RevealTrigger::at(config::REVEAL_FEATURED_AT),
            RevealTrigger::at(config::REVEAL_ROWS_AT),
        ]
    });
    let revealed = use_state_eq(Revealed::default);
    let (_, scroll_y) = use_window_scroll();

    {
        let section_ref = section_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                match dom::viewport_edges(&section_ref, "top stories") {
                    Ok((top, _, viewport_height)) => {
                        let mut triggers = triggers.borrow_mut();
                        if triggers
                            .iter_mut()
                            .fold(false, |any, t| t.observe(top, viewport_height) || any)
                        {
                            debug!("top stories reveal at top={}", top);
                            revealed.set(Revealed {
                                title: triggers[0].fired(),
                                featured: triggers[1].fired(),
                                rows: triggers[2].fired(),
                            });
                        }
                    }
                    Err(e) => debug!("top stories reveal not sampled: {}", e),
                }
                || ()
            },
            scroll_y,
        );
    }

    let Some((featured, rest)) = split_featured(&props.stories) else {
        return html! {};
    };

    html! {
        <section ref={section_ref} id="vault" class="top-stories">
            <h2 data-title="" class="top-stories__title" style={RevealLayer::title().style(revealed.title)}>
                {"Top Stories"}
            </h2>
            <div class="top-stories__grid">
                <FeaturedStory story={featured.clone()} style={RevealLayer::featured().style(revealed.featured)} />

                <div class="top-stories__rows">
                    { for rest.iter().enumerate().map(|(position, story)| html! {
                        <StoryRow
                            key={story.id}
                            story={(*story).clone()}
                            style={RevealLayer::row(position).style(revealed.rows)}
                        />
                    }) }

                    <div class="subscribe-card">
                        <p>{"Want weekly watchlists and development breakdowns?"}</p>
                        <button class="subscribe-card__button">{"Subscribe"}</button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-stories {
                    position: relative;
                    top: 100px;
                    margin: 0 auto;
                    width: 88%;
                    padding: 5rem 0 2.5rem;
                }
                @media (min-width: 768px) {
                    .top-stories { width: 95%; }
                }
                .top-stories__title {
                    margin-bottom: 1.5rem;
                    font-size: 2rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .top-stories__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.25rem;
                }
                @media (min-width: 768px) {
                    .top-stories__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        height: 573px;
                    }
                }
                .featured-story {
                    position: relative;
                    display: block;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    text-decoration: none;
                }
                .featured-story__media {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                }
                @media (min-width: 768px) {
                    .featured-story__media { aspect-ratio: 3 / 4; }
                }
                .featured-story__media img,
                .story-row__media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 700ms ease-out;
                }
                .featured-story:hover .featured-story__media img {
                    transform: scale(1.05);
                }
                .featured-story__overlay {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.35), rgba(0, 0, 0, 0.1));
                }
                .featured-story__sheen {
                    pointer-events: none;
                    position: absolute;
                    left: -50%;
                    top: 0;
                    height: 100%;
                    width: 50%;
                    transform: skewX(-12deg);
                    background: linear-gradient(to right, rgba(255, 255, 255, 0), rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0));
                    opacity: 0;
                    transition: opacity 500ms;
                }
                .featured-story:hover .featured-story__sheen {
                    opacity: 1;
                }
                .featured-story__body {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.25rem;
                }
                .featured-story__meta {
                    margin-bottom: 0.75rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .featured-story__category {
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.25rem 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(255, 255, 255, 0.8);
                }
                .featured-story h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    line-height: 1.35;
                }
                .featured-story__author {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .top-stories__rows {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .story-row {
                    display: flex;
                    gap: 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 0.75rem;
                    color: #000;
                    text-decoration: none;
                }
                .story-row__media {
                    position: relative;
                    flex-shrink: 0;
                    height: 200px;
                    width: 300px;
                    overflow: hidden;
                    border-radius: 0.75rem;
                }
                .story-row:hover .story-row__media img {
                    transform: scale(1.06);
                }
                .story-row__body {
                    min-width: 0;
                }
                .story-row__meta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(0, 0, 0, 0.5);
                }
                .story-row__category {
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(0, 0, 0, 0.6);
                }
                .story-row h4 {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .story-row__author {
                    margin-top: 0.25rem;
                    font-size: 0.75rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .subscribe-card {
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #000;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .subscribe-card__button {
                    margin-top: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    padding: 0.5rem 1rem;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    transition: background 150ms;
                }
                .subscribe-card__button:hover {
                    background: rgba(255, 255, 255, 0.15);
                }
                "#}
            </style>
        </section>
    }
}
