#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod music;
mod nav;
mod render;
mod ui;
mod visualizer;

/// Every mounted component. Dropping it tears the page down.
#[derive(Default)]
struct Site {
    nav: Option<nav::OrbitalNav>,
    hero: Option<hero::Hero>,
    music: Option<music::MusicSection>,
}

impl Site {
    fn summary(&self) -> String {
        format!(
            "nav={} hero={} music={}",
            self.nav
                .as_ref()
                .map(|n| format!("{:?}/{} items", n.mode(), n.item_count()))
                .unwrap_or_else(|| "-".into()),
            self.hero
                .as_ref()
                .map(|h| if h.is_rendering() { "rendering" } else { "static" })
                .unwrap_or("-"),
            self.music
                .as_ref()
                .map(|m| if m.is_playing() { "playing" } else { "idle" })
                .unwrap_or("-"),
        )
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slump-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down every component: frame loops stop, listeners detach, GPU and
/// audio resources are released.
#[wasm_bindgen]
pub fn unmount() {
    let site = SITE.with(|s| s.borrow_mut().take());
    match site {
        Some(site) => {
            log::info!("unmounting ({})", site.summary());
            drop(site);
        }
        None => log::info!("unmount: nothing mounted"),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Remounting replaces whatever was there before.
    unmount();

    let mut site = Site::default();

    // Each section is optional; one failing must not take the others down.
    match nav::OrbitalNav::mount(&document) {
        Ok(n) => site.nav = Some(n),
        Err(e) => log::warn!("[nav] not mounted: {:?}", e),
    }
    match music::MusicSection::mount(&document) {
        Ok(m) => site.music = Some(m),
        Err(e) => log::warn!("[player] not mounted: {:?}", e),
    }
    // Park what is ready so far; the hero waits on the GPU adapter.
    SITE.with(|s| *s.borrow_mut() = Some(site));

    match hero::Hero::mount(&document).await {
        Ok(h) => {
            let parked = SITE.with(|s| match s.borrow_mut().as_mut() {
                Some(site) => {
                    site.hero = Some(h);
                    None
                }
                None => Some(h),
            });
            // unmount() ran while the GPU was initialising
            drop(parked);
        }
        Err(e) => log::warn!("[hero] not mounted: {:?}", e),
    }

    SITE.with(|s| {
        if let Some(site) = s.borrow().as_ref() {
            log::info!("mounted ({})", site.summary());
        }
    });
    Ok(())
}
