use crate::config::{MusicSource, SceneConfig};
use crate::constants::{MUSIC_ELEMENT_ID, MUSIC_ON_CLASS, MUSIC_TOGGLE_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track, off until the visitor asks for it.
pub struct MusicToggle {
    audio: web::HtmlAudioElement,
    enabled: bool,
}

impl MusicToggle {
    /// Use `#bg-music` if the page has one, otherwise create an element for
    /// the configured `data-music` URL.
    pub fn from_document(document: &web::Document, config: &SceneConfig) -> Option<Self> {
        let page_audio = document
            .get_element_by_id(MUSIC_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        let audio = match (config.music_source(page_audio.is_some()), page_audio) {
            (MusicSource::PageElement, Some(a)) => a,
            (MusicSource::Url(src), _) => match web::HtmlAudioElement::new_with_src(src) {
                Ok(a) => a,
                Err(e) => {
                    log::error!("[music] audio element error: {:?}", e);
                    return None;
                }
            },
            _ => {
                log::warn!(
                    "[music] no #{} element or data-music source; toggle disabled",
                    MUSIC_ELEMENT_ID
                );
                return None;
            }
        };
        audio.set_loop(true);
        Some(Self {
            audio,
            enabled: false,
        })
    }

    /// Flip playback; returns the new state. Playback failures are logged
    /// and otherwise ignored.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            _ = self.audio.pause();
        } else {
            self.play();
        }
        self.enabled = !self.enabled;
        self.enabled
    }

    fn play(&self) {
        match self.audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[music] playback failed: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[music] playback failed: {:?}", e),
        }
    }
}

impl Drop for MusicToggle {
    fn drop(&mut self) {
        _ = self.audio.pause();
    }
}

pub fn wire_music_toggle(document: &web::Document, music: Rc<RefCell<MusicToggle>>) {
    let doc = document.clone();
    let wired = dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
        let on = music.borrow_mut().toggle();
        log::info!("[music] enabled={}", on);
        if let Some(button) = doc.get_element_by_id(MUSIC_TOGGLE_ID) {
            dom::set_class(&button, MUSIC_ON_CLASS, on);
        }
    });
    if !wired {
        log::warn!("[music] missing #{}", MUSIC_TOGGLE_ID);
    }
}
