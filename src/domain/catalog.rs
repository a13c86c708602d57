use crate::domain::ports::Fields;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub name: String,
    /// 秒
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub tracks: Vec<Track>,
    pub singer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackField {
    Id,
    Name,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackValue<'a> {
    Id(u32),
    Name(&'a str),
    Duration(u32),
}

impl Fields for Track {
    type Key = TrackField;
    type Value<'a> = TrackValue<'a>;

    fn field(&self, key: TrackField) -> TrackValue<'_> {
        match key {
            TrackField::Id => TrackValue::Id(self.id),
            TrackField::Name => TrackValue::Name(&self.name),
            TrackField::Duration => TrackValue::Duration(self.duration),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongField {
    Title,
    Tracks,
    Singer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongValue<'a> {
    Title(&'a str),
    Tracks(&'a [Track]),
    Singer(&'a str),
}

impl<'a> SongValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            SongValue::Title(s) | SongValue::Singer(s) => Some(s),
            SongValue::Tracks(_) => None,
        }
    }
}

impl Fields for Song {
    type Key = SongField;
    type Value<'a> = SongValue<'a>;

    fn field(&self, key: SongField) -> SongValue<'_> {
        match key {
            SongField::Title => SongValue::Title(&self.title),
            SongField::Tracks => SongValue::Tracks(&self.tracks),
            SongField::Singer => SongValue::Singer(&self.singer),
        }
    }
}

pub fn sample_songs() -> Vec<Song> {
    vec![Song {
        title: "Song List".to_string(),
        tracks: vec![
            Track {
                id: 1,
                name: "Song A".to_string(),
                duration: 210,
            },
            Track {
                id: 2,
                name: "Song B".to_string(),
                duration: 180,
            },
            Track {
                id: 3,
                name: "Song C".to_string(),
                duration: 240,
            },
        ],
        singer: "John Doe".to_string(),
    }]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

/// "姓, 名"
pub fn format_name(person: &Person) -> String {
    format!("{}, {}", person.last_name, person.first_name)
}
