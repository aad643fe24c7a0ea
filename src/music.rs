use crate::audio::AudioGraph;
use crate::constants::{PLAYER_AUDIO_ID, TRACK_SELECTOR, VISUALIZER_ID};
use crate::core::player::{Playlist, PlayerState, Track, Transport};
use crate::core::spectrum::{average_level, CoverSpin};
use crate::core::Subscription;
use crate::dom;
use crate::frame::FrameLoop;
use crate::ui::PlayerUi;
use crate::visualizer::Visualizer;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Player {
    audio: web::HtmlAudioElement,
    playlist: Playlist,
    state: PlayerState,
    graph: Option<AudioGraph>,
    visualizer: Option<Visualizer>,
    spin: CoverSpin,
    ui: PlayerUi,
}

/// Track list, transport controls and the spectrum visualizer.
pub struct MusicSection {
    player: Rc<RefCell<Player>>,
    frame_loop: Option<FrameLoop>,
    _subs: Vec<Subscription>,
}

impl MusicSection {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let audio: web::HtmlAudioElement = dom::element_by_id(document, PLAYER_AUDIO_ID)?;
        let track_items = dom::query_all_in(document, TRACK_SELECTOR)?;
        let playlist = Playlist::new(track_items.iter().map(read_track).collect())?;
        let visualizer = match dom::element_by_id::<web::HtmlCanvasElement>(document, VISUALIZER_ID)
            .and_then(Visualizer::new)
        {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("[player] visualizer disabled: {:?}", e);
                None
            }
        };
        let ui = PlayerUi::bind(document, track_items);
        ui.render_durations(playlist.iter());
        ui.set_playing(false);
        log::info!("[player] mounted with {} tracks", playlist.len());

        let player = Rc::new(RefCell::new(Player {
            audio,
            playlist,
            state: PlayerState::default(),
            graph: None,
            visualizer,
            spin: CoverSpin::default(),
            ui,
        }));
        let subs = wire_controls(&player)?;
        let frame_loop = {
            let player = player.clone();
            FrameLoop::start("player", move |_| player.borrow_mut().frame())
        };

        Ok(Self {
            player,
            frame_loop: Some(frame_loop),
            _subs: subs,
        })
    }

    pub fn is_playing(&self) -> bool {
        self.player.borrow().state.is_playing()
    }
}

impl Drop for MusicSection {
    fn drop(&mut self) {
        self.frame_loop.take();
        let mut p = self.player.borrow_mut();
        _ = p.audio.pause();
        if let Some(v) = &p.visualizer {
            v.clear();
        }
        if let Some(graph) = p.graph.take() {
            graph.close();
        }
        log::info!("[player] unmounted");
    }
}

fn read_track(el: &web::Element) -> Track {
    let attr = |name: &str| el.get_attribute(name).unwrap_or_default();
    let id = attr("data-track-id");
    let title = el
        .get_attribute("data-title")
        .or_else(|| el.text_content())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| id.clone());
    Track {
        title,
        src: attr("data-src"),
        cover_art: attr("data-cover"),
        duration_sec: attr("data-duration").trim().parse().unwrap_or(0),
        id,
    }
}

fn wire_controls(player: &Rc<RefCell<Player>>) -> anyhow::Result<Vec<Subscription>> {
    let mut subs = Vec::new();
    let p = player.borrow();
    for el in p.ui.track_items() {
        let id = el.get_attribute("data-track-id").unwrap_or_default();
        let Some(index) = p.playlist.index_of(&id) else {
            continue;
        };
        let player = player.clone();
        subs.push(dom::add_click_listener(el, move || {
            player.borrow_mut().select(index)
        })?);
    }
    if let Some(button) = p.ui.toggle_button() {
        let player = player.clone();
        subs.push(dom::add_click_listener(button, move || toggle(&player))?);
    }
    {
        let player = player.clone();
        subs.push(dom::listen(&p.audio, "ended", move |_: web::Event| {
            let mut p = player.borrow_mut();
            p.state.stopped();
            p.ui.set_playing(false);
        })?);
    }
    Ok(subs)
}

fn toggle(player: &Rc<RefCell<Player>>) {
    let mut p = player.borrow_mut();
    match p.state.toggle() {
        None => {}
        Some(Transport::Pause) => {
            _ = p.audio.pause();
            p.ui.set_playing(false);
        }
        Some(Transport::Play) => {
            p.ensure_graph();
            match p.audio.play() {
                Ok(promise) => watch_play(Rc::downgrade(player), promise),
                Err(e) => {
                    log::error!("[player] play() threw: {:?}", e);
                    p.state.stopped();
                }
            }
            let playing = p.state.is_playing();
            p.ui.set_playing(playing);
        }
    }
}

/// Roll the state back if the browser rejects playback.
fn watch_play(player: Weak<RefCell<Player>>, promise: js_sys::Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[player] playback rejected: {:?}", e);
            if let Some(player) = player.upgrade() {
                let mut p = player.borrow_mut();
                p.state.stopped();
                p.ui.set_playing(false);
            }
        }
    });
}

impl Player {
    fn select(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index).cloned() else {
            return;
        };
        let selection = self.state.select(index);
        if selection.pause_previous {
            _ = self.audio.pause();
        }
        self.audio.set_src(&track.src);
        self.audio.load();
        self.spin = CoverSpin::default();
        self.ui.show_track(index, &track);
        self.ui.set_playing(false);
        log::info!("[player] selected {} ({})", track.id, track.title);
    }

    fn ensure_graph(&mut self) {
        if self.graph.is_none() {
            match AudioGraph::new(&self.audio) {
                Ok(g) => self.graph = Some(g),
                Err(e) => log::error!("[player] audio graph unavailable: {:?}", e),
            }
        }
        if let Some(g) = &self.graph {
            g.resume();
        }
    }

    fn frame(&mut self) {
        if self.state.active().is_some() {
            self.state
                .update_progress(self.audio.current_time(), self.audio.duration());
            self.ui.set_progress(self.state.progress_pct());
        }
        let Some(graph) = self.graph.as_mut() else {
            return;
        };
        let bins = graph.sample();
        let average = average_level(bins);
        if let Some(v) = self.visualizer.as_mut() {
            v.draw(bins);
        }
        let degrees = self.spin.step(average, self.state.is_playing());
        self.ui.set_cover_rotation(degrees);
    }
}

