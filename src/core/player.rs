use super::error::SiteError;
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub src: String,
    pub cover_art: String,
    pub duration_sec: u32,
}

/// Ordered track list with id lookup.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    by_id: FnvHashMap<String, usize>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, SiteError> {
        let mut by_id = FnvHashMap::default();
        for (i, t) in tracks.iter().enumerate() {
            if t.src.trim().is_empty() {
                return Err(SiteError::MissingSource(t.id.clone()));
            }
            if by_id.insert(t.id.clone(), i).is_some() {
                return Err(SiteError::DuplicateTrack(t.id.clone()));
            }
        }
        Ok(Self { tracks, by_id })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

/// What the media element has to do after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    Play,
    Pause,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// The previously active track was playing and must be paused first.
    pub pause_previous: bool,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    active: Option<usize>,
    playing: bool,
    progress_pct: f32,
}

impl PlayerState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress_pct(&self) -> f32 {
        self.progress_pct
    }

    /// Make `index` the active track. It is loaded but not started.
    pub fn select(&mut self, index: usize) -> Selection {
        let pause_previous = self.playing;
        self.active = Some(index);
        self.playing = false;
        self.progress_pct = 0.0;
        Selection {
            pause_previous,
            index,
        }
    }

    /// Flip play/pause. Does nothing until a track has been selected.
    pub fn toggle(&mut self) -> Option<Transport> {
        self.active?;
        self.playing = !self.playing;
        Some(if self.playing {
            Transport::Play
        } else {
            Transport::Pause
        })
    }

    /// The media element stopped on its own (track ended or play() rejected).
    pub fn stopped(&mut self) {
        self.playing = false;
    }

    pub fn update_progress(&mut self, current_sec: f64, duration_sec: f64) {
        self.progress_pct = progress_percent(current_sec, duration_sec);
    }
}

pub fn progress_percent(current_sec: f64, duration_sec: f64) -> f32 {
    if !(duration_sec.is_finite() && duration_sec > 0.0) || !current_sec.is_finite() {
        return 0.0;
    }
    ((current_sec / duration_sec) * 100.0).clamp(0.0, 100.0) as f32
}

/// `m:ss`
pub fn format_duration(total_sec: u32) -> String {
    format!("{}:{:02}", total_sec / 60, total_sec % 60)
}
