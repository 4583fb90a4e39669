use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::Button;
use crate::dom;
use crate::motion::audio::{bar_delay_secs, INDICATOR_BARS};
use crate::motion::menu::MenuEvent;
use crate::motion::nav_chrome::{nav_tween, NavAction, NavChrome};
use crate::motion::nav_visibility::{NavVisibilityState, ScrollSample};
use crate::motion::tween::TransitionSlot;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
}

impl NavItem {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.label.to_lowercase())
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub items: Vec<NavItem>,
    pub brand: AttrValue,
    pub logo_src: AttrValue,
    pub audio_src: AttrValue,
}

impl Reducible for NavChrome {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => {
                if next.visibility() != self.visibility() {
                    debug!(
                        "nav {:?} -> {:?} at y={}",
                        self.visibility(),
                        next.visibility(),
                        next.scroll.last_y()
                    );
                }
                Rc::new(next)
            }
            None => self,
        }
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let chrome = use_reducer(NavChrome::default);
    let nav_ref = use_node_ref();
    let audio_ref = use_node_ref();
    let nav_slot = use_mut_ref(TransitionSlot::<Timeout>::new);
    let (_, scroll_y) = use_window_scroll();

    {
        let dispatcher = chrome.dispatcher();
        use_effect_with_deps(
            move |y| {
                dispatcher.dispatch(NavAction::Scrolled(ScrollSample::from_offset(*y)));
                || ()
            },
            scroll_y,
        );
    }

    // Slide/fade toward the new visibility. A newer state cancels the pending
    // settle, so only the last tween ever drops its transition.
    {
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |visibility: &NavVisibilityState| {
                let tween = nav_tween(*visibility);
                match dom::set_style(&nav_ref, "navigation bar", &tween.inline_style()) {
                    Ok(()) => {
                        let settle = nav_slot.clone();
                        let resting = tween.resting_style();
                        nav_slot.borrow_mut().start_with(|generation| {
                            Timeout::new(tween.duration_ms, move || {
                                if settle.borrow_mut().settle(generation) {
                                    if let Err(e) = dom::set_style(&nav_ref, "navigation bar", &resting) {
                                        debug!("nav settle skipped: {}", e);
                                    }
                                }
                            })
                        });
                    }
                    Err(e) => warn!("nav tween skipped: {}", e),
                }
                || ()
            },
            chrome.visibility(),
        );
    }

    {
        let audio_ref = audio_ref.clone();
        use_effect_with_deps(
            move |playing: &bool| {
                if *playing {
                    dom::play(&audio_ref, "audio loop");
                } else {
                    dom::pause(&audio_ref, "audio loop");
                }
                || ()
            },
            chrome.audio.is_playing,
        );
    }

    {
        let dispatcher = chrome.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(event) = MenuEvent::from_key(&e.key()) {
                dispatcher.dispatch(NavAction::Menu(event));
            }
        });
    }

    let toggle_audio = {
        let dispatcher = chrome.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleAudio))
    };

    let menu_event = |event: MenuEvent| {
        let dispatcher = chrome.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Menu(event)))
    };

    let is_open = chrome.menu.is_open;
    let indicator_active = chrome.audio.is_playing;

    html! {
        <div
            ref={nav_ref}
            class={classes!("nav-container", chrome.visibility().is_floating().then(|| "floating-nav"))}
        >
            <header class="nav-header">
                <div class="nav-shell">
                    <nav class="nav-bar">
                        <div class="nav-brand">
                            <img src={props.logo_src.clone()} alt="logo" class="nav-logo" />
                            <Button
                                id="product-button"
                                title={props.brand.clone()}
                                container_class={classes!("nav-product")}
                            />
                        </div>

                        <div class="nav-actions">
                            <div class="nav-links">
                                { for props.items.iter().map(|item| html! {
                                    <a key={item.label} href={item.href()} class="nav-hover-btn">
                                        { item.label }
                                    </a>
                                }) }
                            </div>

                            <button
                                onclick={toggle_audio}
                                class="audio-toggle"
                                aria-label={chrome.audio.button_label()}
                            >
                                <audio ref={audio_ref} class="hidden" src={props.audio_src.clone()} loop={true} />
                                { for (1..=INDICATOR_BARS).map(|bar| html! {
                                    <div
                                        key={bar}
                                        class={classes!("indicator-line", indicator_active.then(|| "active"))}
                                        style={format!("animation-delay: {}s;", bar_delay_secs(bar))}
                                    />
                                }) }
                            </button>

                            <button
                                type="button"
                                class="menu-toggle"
                                onclick={menu_event(MenuEvent::Toggle)}
                                aria-label={chrome.menu.toggle_label()}
                                aria-expanded={is_open.to_string()}
                            >
                                { if is_open { "✕" } else { "☰" } }
                            </button>
                        </div>
                    </nav>

                    <div class={classes!("mobile-menu", is_open.then(|| "open"))}>
                        <div class="mobile-menu__items">
                            { for props.items.iter().map(|item| html! {
                                <a
                                    key={item.label}
                                    href={item.href()}
                                    onclick={menu_event(MenuEvent::ItemSelected)}
                                    class="mobile-menu__link"
                                >
                                    { item.label }
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                if is_open {
                    <button
                        class="menu-overlay"
                        aria-label="Close menu overlay"
                        onclick={menu_event(MenuEvent::OutsideClick)}
                    />
                }
            </header>
            <style>
                {r#"
                .nav-container {
                    position: fixed;
                    left: 0;
                    right: 0;
                    top: 1rem;
                    z-index: 50;
                    width: 90%;
                    margin: auto;
                    border: none;
                }
                @media (min-width: 640px) {
                    .nav-container { left: 1.5rem; right: 1.5rem; }
                }
                @media (min-width: 768px) {
                    .nav-container { width: auto; }
                }
                .floating-nav .nav-shell {
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.35);
                }
                .nav-shell {
                    border-radius: 1rem;
                    background: #000;
                }
                .nav-bar {
                    display: flex;
                    height: 4rem;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-logo {
                    width: 3.5rem;
                }
                .nav-product {
                    background: transparent;
                    color: #fff;
                    padding: 0;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                }
                .nav-links {
                    display: none;
                }
                .nav-hover-btn {
                    position: relative;
                    margin: 0 0.5rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #f5f5f5;
                    text-decoration: none;
                    cursor: pointer;
                }
                .nav-hover-btn::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -0.125rem;
                    height: 2px;
                    width: 100%;
                    background: #f5f5f5;
                    transform: scaleX(0);
                    transform-origin: bottom right;
                    transition: transform 0.3s cubic-bezier(0.65, 0.05, 0.36, 1);
                }
                .nav-hover-btn:hover::after {
                    transform: scaleX(1);
                    transform-origin: bottom left;
                }
                .audio-toggle {
                    margin-left: 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.125rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .audio-toggle .hidden {
                    display: none;
                }
                .indicator-line {
                    height: 0.25rem;
                    width: 1px;
                    border-radius: 9999px;
                    background: #fff;
                    transition: all 0.2s ease-in-out;
                }
                .indicator-line.active {
                    animation: indicator-line 0.5s ease infinite;
                }
                @keyframes indicator-line {
                    0% { height: 4px; }
                    50% { height: 16px; }
                    100% { height: 4px; }
                }
                .menu-toggle {
                    margin-left: 0.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 0.75rem;
                    background: none;
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    overflow: hidden;
                    max-height: 0;
                    opacity: 0;
                    transition: max-height 300ms, opacity 300ms;
                }
                .mobile-menu.open {
                    max-height: 24rem;
                    opacity: 1;
                }
                .mobile-menu__items {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem 1rem;
                }
                .mobile-menu__link {
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                    color: #fff;
                    text-decoration: none;
                }
                .mobile-menu__link:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                    background: transparent;
                    border: none;
                }
                @media (min-width: 768px) {
                    .nav-links { display: block; }
                    .audio-toggle { margin-left: 2.5rem; }
                    .menu-toggle, .mobile-menu, .menu-overlay { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
