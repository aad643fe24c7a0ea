use crate::constants::{
    ACTIVE_CLASS, PLAYER_COVER_ID, PLAYER_PROGRESS_ID, PLAYER_TITLE_ID, PLAYER_TOGGLE_ID,
    PLAYING_CLASS,
};
use crate::core::player::{format_duration, Track};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM pieces of the music player. Every part is optional; missing elements
/// simply aren't updated.
pub struct PlayerUi {
    track_items: Vec<web::Element>,
    title: Option<web::Element>,
    toggle: Option<web::Element>,
    progress: Option<web::HtmlElement>,
    cover: Option<web::HtmlElement>,
}

impl PlayerUi {
    pub fn bind(document: &web::Document, track_items: Vec<web::Element>) -> Self {
        let html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        };
        Self {
            track_items,
            title: document.get_element_by_id(PLAYER_TITLE_ID),
            toggle: document.get_element_by_id(PLAYER_TOGGLE_ID),
            progress: html(PLAYER_PROGRESS_ID),
            cover: html(PLAYER_COVER_ID),
        }
    }

    pub fn toggle_button(&self) -> Option<&web::Element> {
        self.toggle.as_ref()
    }

    pub fn track_items(&self) -> &[web::Element] {
        &self.track_items
    }

    /// Fill in `m:ss` labels for every track.
    pub fn render_durations<'a>(&self, tracks: impl Iterator<Item = &'a Track>) {
        for (el, track) in self.track_items.iter().zip(tracks) {
            if let Ok(Some(slot)) = el.query_selector("[data-role=duration]") {
                slot.set_text_content(Some(&format_duration(track.duration_sec)));
            }
        }
    }

    pub fn show_track(&self, index: usize, track: &Track) {
        for (i, el) in self.track_items.iter().enumerate() {
            dom::set_class(el, ACTIVE_CLASS, i == index);
        }
        if let Some(title) = &self.title {
            title.set_text_content(Some(&track.title));
        }
        if let Some(cover) = &self.cover {
            if !track.cover_art.is_empty() {
                _ = cover.set_attribute("src", &track.cover_art);
            }
            dom::set_style(cover, "transform", "rotate(0deg)");
        }
        self.set_progress(0.0);
    }

    pub fn set_playing(&self, playing: bool) {
        if let Some(toggle) = &self.toggle {
            dom::set_class(toggle, PLAYING_CLASS, playing);
            _ = toggle.set_attribute("aria-pressed", if playing { "true" } else { "false" });
        }
    }

    pub fn set_progress(&self, pct: f32) {
        if let Some(bar) = &self.progress {
            dom::set_style(bar, "width", &format!("{:.2}%", pct));
        }
    }

    pub fn set_cover_rotation(&self, degrees: f32) {
        if let Some(cover) = &self.cover {
            dom::set_style(cover, "transform", &format!("rotate({:.2}deg)", degrees));
        }
    }
}
