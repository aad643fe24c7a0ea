// Host-side tests for the playlist and player state machine.

#![allow(dead_code)]
mod site {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod player {
        include!("../src/core/player.rs");
    }
}

use site::error::SiteError;
use site::player::*;

fn track(id: &str, src: &str) -> Track {
    Track {
        id: id.to_string(),
        title: id.to_uppercase(),
        src: src.to_string(),
        cover_art: format!("/covers/{}.jpg", id),
        duration_sec: 180,
    }
}

fn playlist() -> Playlist {
    Playlist::new(vec![
        track("intro", "/audio/intro.mp3"),
        track("slump", "/audio/slump.mp3"),
        track("outro", "/audio/outro.mp3"),
    ])
    .unwrap()
}

#[test]
fn playlist_indexes_tracks_by_id() {
    let list = playlist();
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.index_of("slump"), Some(1));
    assert_eq!(list.index_of("missing"), None);
    assert_eq!(list.get(2).map(|t| t.title.as_str()), Some("OUTRO"));
    let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["intro", "slump", "outro"]);
}

#[test]
fn duplicate_track_ids_are_rejected() {
    let err = Playlist::new(vec![track("a", "/a.mp3"), track("a", "/b.mp3")]).unwrap_err();
    assert_eq!(err, SiteError::DuplicateTrack("a".into()));
}

#[test]
fn tracks_without_a_source_are_rejected() {
    let err = Playlist::new(vec![track("a", "/a.mp3"), track("b", "  ")]).unwrap_err();
    assert_eq!(err, SiteError::MissingSource("b".into()));
}

#[test]
fn empty_playlist_is_allowed() {
    let list = Playlist::new(Vec::new()).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.get(0), None);
}

#[test]
fn toggle_without_selection_does_nothing() {
    let mut state = PlayerState::default();
    assert_eq!(state.toggle(), None);
    assert!(!state.is_playing());
    assert_eq!(state.active(), None);
}

#[test]
fn select_loads_without_playing() {
    let mut state = PlayerState::default();
    let sel = state.select(1);
    assert_eq!(
        sel,
        Selection {
            pause_previous: false,
            index: 1
        }
    );
    assert_eq!(state.active(), Some(1));
    assert!(!state.is_playing());
}

#[test]
fn toggle_alternates_play_and_pause() {
    let mut state = PlayerState::default();
    let _ = state.select(0);
    assert_eq!(state.toggle(), Some(Transport::Play));
    assert!(state.is_playing());
    assert_eq!(state.toggle(), Some(Transport::Pause));
    assert!(!state.is_playing());
}

#[test]
fn switching_tracks_pauses_the_previous_one_and_resets_progress() {
    let mut state = PlayerState::default();
    let _ = state.select(0);
    let _ = state.toggle();
    state.update_progress(30.0, 120.0);
    assert_eq!(state.progress_pct(), 25.0);

    let sel = state.select(2);
    assert!(sel.pause_previous);
    assert_eq!(state.active(), Some(2));
    assert!(!state.is_playing());
    assert_eq!(state.progress_pct(), 0.0);
}

#[test]
fn stopped_clears_playing_but_keeps_the_track() {
    let mut state = PlayerState::default();
    let _ = state.select(1);
    let _ = state.toggle();
    state.stopped();
    assert!(!state.is_playing());
    assert_eq!(state.active(), Some(1));
    assert_eq!(state.toggle(), Some(Transport::Play));
}

#[test]
fn progress_handles_unknown_durations() {
    assert_eq!(progress_percent(10.0, f64::NAN), 0.0);
    assert_eq!(progress_percent(10.0, f64::INFINITY), 0.0);
    assert_eq!(progress_percent(10.0, 0.0), 0.0);
    assert_eq!(progress_percent(f64::NAN, 100.0), 0.0);
    assert_eq!(progress_percent(50.0, 200.0), 25.0);
    assert_eq!(progress_percent(250.0, 200.0), 100.0);
    assert_eq!(progress_percent(-1.0, 200.0), 0.0);
}

#[test]
fn durations_format_as_minutes_and_seconds() {
    assert_eq!(format_duration(225), "3:45");
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(60), "1:00");
    assert_eq!(format_duration(605), "10:05");
}
