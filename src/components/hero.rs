use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::Animation;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::dom;
use crate::motion::hero_sequencer::{expand_cue, video_path, HeroEvent, HeroPlaylistState};
use crate::motion::scrub::{bottom_exit_progress, TitleWipe};
use crate::motion::tween::TransitionSlot;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or(config::HERO_VIDEO_COUNT)]
    pub total_videos: u32,
}

impl Reducible for HeroPlaylistState {
    type Action = HeroEvent;

    fn reduce(self: Rc<Self>, action: HeroEvent) -> Rc<Self> {
        let next = self.apply(action);
        if self.is_loading() && !next.is_loading() {
            info!(
                "hero videos ready after {} loads of {}",
                next.loaded_count(),
                next.total_videos()
            );
        }
        Rc::new(next)
    }
}

fn video_src(index: u32) -> String {
    config::media_url(&video_path(index))
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let playlist = {
        let total = props.total_videos;
        use_reducer(move || HeroPlaylistState::new(total))
    };
    let frame_ref = use_node_ref();
    let next_ref = use_node_ref();
    let preview_ref = use_node_ref();
    let next_slot = use_mut_ref(TransitionSlot::<Animation>::new);
    let preview_slot = use_mut_ref(TransitionSlot::<Animation>::new);
    let wipe = use_state_eq(TitleWipe::default);
    let (_, scroll_y) = use_window_scroll();
    let loading = playlist.is_loading();

    // The reducer is seeded once; later prop values resize it in place
    {
        let dispatcher = playlist.dispatcher();
        let current = playlist.total_videos();
        use_effect_with_deps(
            move |total: &u32| {
                if (*total).max(1) != current {
                    dispatcher.dispatch(HeroEvent::TotalVideos(*total));
                }
                || ()
            },
            props.total_videos,
        );
    }

    // Every click replays the expand, even when the index wrapped onto itself
    {
        let next_ref = next_ref.clone();
        let preview_ref = preview_ref.clone();
        use_effect_with_deps(
            move |activations: &u32| {
                if *activations > 0 {
                    let cue = expand_cue();
                    match dom::animate(&next_ref, "next video", &cue.next) {
                        Ok(animation) => {
                            next_slot.borrow_mut().start(animation);
                            dom::play(&next_ref, "next video");
                        }
                        Err(e) => warn!("expand transition skipped: {}", e),
                    }
                    match dom::animate(&preview_ref, "preview video", &cue.preview) {
                        Ok(animation) => {
                            preview_slot.borrow_mut().start(animation);
                        }
                        Err(e) => warn!("preview pop skipped: {}", e),
                    }
                    debug!("hero expand #{}", activations);
                }
                || ()
            },
            playlist.activations(),
        );
    }

    // Layout shifts once the videos are in, so re-sample on that too
    {
        let frame_ref = frame_ref.clone();
        let wipe = wipe.clone();
        use_effect_with_deps(
            move |_| {
                match dom::viewport_edges(&frame_ref, "video frame") {
                    Ok((_, bottom, viewport_height)) => {
                        wipe.set(TitleWipe::at(bottom_exit_progress(bottom, viewport_height)));
                    }
                    Err(e) => debug!("title wipe not sampled: {}", e),
                }
                || ()
            },
            (scroll_y, loading),
        );
    }

    let on_loaded = {
        let dispatcher = playlist.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(HeroEvent::AssetLoaded))
    };

    let on_preview_click = {
        let dispatcher = playlist.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeroEvent::PreviewClicked))
    };

    let current = playlist.current_index();

    html! {
        <div class="hero">
            if loading {
                <div class="hero-loading">
                    <div class="three-body">
                        <div class="three-body__dot"></div>
                        <div class="three-body__dot"></div>
                        <div class="three-body__dot"></div>
                    </div>
                </div>
            }

            <div
                id="video-frame"
                ref={frame_ref}
                class={classes!("video-frame", playlist.has_been_activated().then(|| "video-frame--activated"))}
            >
                <div>
                    <div class="hero-preview mask-clip-path">
                        <div class="hero-preview__hover" onclick={on_preview_click}>
                            <video
                                ref={preview_ref}
                                src={video_src(playlist.upcoming_index())}
                                loop={true}
                                muted={true}
                                id="current-video"
                                class="hero-preview__video"
                                onloadeddata={on_loaded.clone()}
                            />
                        </div>
                    </div>

                    <div class="hero-tint" />

                    <video
                        ref={next_ref}
                        src={video_src(current)}
                        loop={true}
                        muted={true}
                        id="next-video"
                        class="hero-next-video"
                        onloadeddata={on_loaded.clone()}
                    />

                    <video
                        src={video_src(current)}
                        autoplay={true}
                        loop={true}
                        muted={true}
                        class="hero-background-video"
                        onloadeddata={on_loaded}
                    />
                </div>

                <div class="hero-titles">
                    <h1 id="hero-title-top" class="special-font hero-heading hero-title--light" style={wipe.underlay().inline_style()}>
                        {"Pre "}<b>{"A"}</b>{"cademy"}<br />{"Foundation "}<b>{"P"}</b>{"hase"}
                    </h1>
                    <h1 id="hero-title-bottom" class="special-font hero-heading hero-title--dark" style={wipe.overlay().inline_style()}>
                        {"Pre "}<b>{"A"}</b>{"cademy"}<br />{"Foundation "}<b>{"P"}</b>{"hase"}
                    </h1>
                </div>

                <div class="hero-copy">
                    <div class="hero-copy__inner">
                        <h1 class="special-font hero-heading hero-title--light">
                            {"Beyond "}<b>{"h"}</b>{"ighlights"}
                        </h1>
                        <p class="hero-copy__text">
                            {"Enter the phases"}<br />{"Belonging to the next generation."}
                        </p>
                        <Button
                            id="watch-trailer"
                            title="Explore"
                            left_icon={html! { <span class="hero-arrow">{"➚"}</span> }}
                            container_class={classes!("hero-explore")}
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    top: 110px;
                    height: 100%;
                    width: 100vw;
                    overflow-x: hidden;
                }
                .hero-loading {
                    position: absolute;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 100dvh;
                    width: 100vw;
                    overflow: hidden;
                    background: #f5f3ff;
                }
                .three-body {
                    --uib-size: 35px;
                    --uib-speed: 0.8s;
                    --uib-color: #5d3fd3;
                    position: relative;
                    display: inline-block;
                    height: var(--uib-size);
                    width: var(--uib-size);
                    animation: spin78236 calc(var(--uib-speed) * 2.5) infinite linear;
                }
                .three-body__dot {
                    position: absolute;
                    height: 100%;
                    width: 30%;
                }
                .three-body__dot::after {
                    content: '';
                    position: absolute;
                    height: 0%;
                    width: 100%;
                    padding-bottom: 100%;
                    background-color: var(--uib-color);
                    border-radius: 50%;
                }
                .three-body__dot:nth-child(1) {
                    bottom: 5%;
                    left: 0;
                    transform: rotate(60deg);
                    transform-origin: 50% 85%;
                }
                .three-body__dot:nth-child(1)::after {
                    bottom: 0;
                    left: 0;
                    animation: wobble1 var(--uib-speed) infinite ease-in-out;
                    animation-delay: calc(var(--uib-speed) * -0.3);
                }
                .three-body__dot:nth-child(2) {
                    bottom: 5%;
                    right: 0;
                    transform: rotate(-60deg);
                    transform-origin: 50% 85%;
                }
                .three-body__dot:nth-child(2)::after {
                    bottom: 0;
                    left: 0;
                    animation: wobble1 var(--uib-speed) infinite calc(var(--uib-speed) * -0.15) ease-in-out;
                }
                .three-body__dot:nth-child(3) {
                    bottom: -5%;
                    left: 0;
                    transform: translateX(116.666%);
                }
                .three-body__dot:nth-child(3)::after {
                    top: 0;
                    left: 0;
                    animation: wobble2 var(--uib-speed) infinite ease-in-out;
                }
                @keyframes spin78236 {
                    0% { transform: rotate(0deg); }
                    100% { transform: rotate(360deg); }
                }
                @keyframes wobble1 {
                    0%, 100% { transform: translateY(0%) scale(1); opacity: 1; }
                    50% { transform: translateY(-66%) scale(0.65); opacity: 0.8; }
                }
                @keyframes wobble2 {
                    0%, 100% { transform: translateY(0%) scale(1); opacity: 1; }
                    50% { transform: translateY(66%) scale(0.65); opacity: 0.8; }
                }
                .video-frame {
                    position: relative;
                    z-index: 10;
                    margin: auto;
                    height: 500px;
                    width: 88%;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    background: #dfdff0;
                }
                @media (min-width: 768px) {
                    .video-frame { width: 95%; }
                }
                .hero-preview {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    z-index: 50;
                    width: 16rem;
                    height: 16rem;
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 0.5rem;
                }
                .mask-clip-path {
                    clip-path: polygon(14% 0, 72% 0, 88% 90%, 0 95%);
                }
                .hero-preview__hover {
                    transform-origin: center;
                    transform: scale(0.5);
                    opacity: 0;
                    transition: all 500ms ease-in;
                }
                .hero-preview__hover:hover {
                    transform: scale(1);
                    opacity: 1;
                }
                .hero-preview__video {
                    width: 16rem;
                    height: 16rem;
                    transform-origin: center;
                    transform: scale(1.5);
                    object-fit: cover;
                    object-position: center;
                }
                .hero-tint {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: rgba(0, 0, 0, 0.45);
                }
                .hero-next-video {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    z-index: 20;
                    visibility: hidden;
                    width: 16rem;
                    height: 16rem;
                    object-fit: cover;
                    object-position: center;
                }
                .hero-background-video {
                    position: absolute;
                    left: 0;
                    top: 0;
                    z-index: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center;
                }
                .hero-titles {
                    pointer-events: none;
                    position: absolute;
                    bottom: 1.25rem;
                    right: 1.25rem;
                    z-index: 50;
                }
                .hero-heading {
                    font-size: 3rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 0.9;
                }
                @media (min-width: 768px) {
                    .hero-heading { font-size: 4rem; }
                }
                .hero-title--light {
                    color: #fff;
                }
                .hero-title--dark {
                    position: absolute;
                    inset: 0;
                    color: #000;
                }
                .hero-copy {
                    position: absolute;
                    left: 0;
                    top: 0;
                    z-index: 40;
                    width: 100%;
                    height: 100%;
                }
                .hero-copy__inner {
                    margin-top: 6rem;
                    padding: 0 1.25rem;
                }
                @media (min-width: 640px) {
                    .hero-copy__inner { padding: 0 2.5rem; }
                }
                .hero-copy__text {
                    margin: 1.25rem 0;
                    max-width: 16rem;
                    color: #fff;
                }
                .hero-explore {
                    background: #fde047;
                }
                "#}
            </style>
        </div>
    }
}
