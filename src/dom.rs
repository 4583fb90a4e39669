//! Thin bridge between the motion types and the browser.

use gloo_timers::callback::Timeout;
use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{js_sys, Animation, Element, HtmlMediaElement};
use yew::NodeRef;

use crate::motion::tween::{Cancel, Tween};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("{0} is not mounted")]
    NodeMissing(&'static str),
    #[error("could not build keyframes: {0}")]
    Keyframes(#[from] serde_wasm_bindgen::Error),
    #[error("browser rejected the call: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl Cancel for Animation {
    fn cancel(self) {
        Animation::cancel(&self);
    }
}

impl Cancel for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

pub fn element(node: &NodeRef, name: &'static str) -> Result<Element, DomError> {
    node.cast::<Element>().ok_or(DomError::NodeMissing(name))
}

/// Starts `tween` on the element behind `node` through the Web Animations API.
///
/// `Element.animate` is looked up and called dynamically: web-sys only binds
/// it behind its unstable-API cfg.
pub fn animate(node: &NodeRef, name: &'static str, tween: &Tween) -> Result<Animation, DomError> {
    let element = element(node, name)?;
    let keyframes = serde_wasm_bindgen::to_value(&tween.keyframes())?;
    let timing = serde_wasm_bindgen::to_value(&tween.timing())?;
    let animate: js_sys::Function =
        js_sys::Reflect::get(&element, &JsValue::from_str("animate"))?.dyn_into()?;
    let animation = animate.call2(&element, &keyframes, &timing)?;
    Ok(animation.unchecked_into())
}

pub fn set_style(node: &NodeRef, name: &'static str, style: &str) -> Result<(), DomError> {
    element(node, name)?.set_attribute("style", style)?;
    Ok(())
}

/// Viewport-relative `(top, bottom)` of the element plus the viewport height.
pub fn viewport_edges(node: &NodeRef, name: &'static str) -> Result<(f64, f64, f64), DomError> {
    let rect = element(node, name)?.get_bounding_client_rect();
    let height = web_sys::window()
        .ok_or(DomError::NodeMissing("window"))?
        .inner_height()?
        .as_f64()
        .unwrap_or_default();
    Ok((rect.top(), rect.bottom(), height))
}

/// Starts playback. Autoplay policies reject the returned promise; that is
/// logged and otherwise ignored.
pub fn play(node: &NodeRef, name: &'static str) {
    let media = match node.cast::<HtmlMediaElement>() {
        Some(media) => media,
        None => {
            warn!("{}", DomError::NodeMissing(name));
            return;
        }
    };
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("{} playback refused: {}", name, DomError::from(e));
            }
        }),
        Err(e) => warn!("{} playback failed: {}", name, DomError::from(e)),
    }
}

pub fn pause(node: &NodeRef, name: &'static str) {
    if let Some(media) = node.cast::<HtmlMediaElement>() {
        if let Err(e) = media.pause() {
            warn!("{} pause failed: {}", name, DomError::from(e));
        }
    }
}
