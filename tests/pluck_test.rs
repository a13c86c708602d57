use column_render::domain::catalog::{
    format_name, sample_songs, Person, Song, SongField, SongValue, Track,
};
use column_render::{pluck, pluck_field, pluck_iter};

struct Row {
    title: String,
}

#[test]
fn test_pluck_preserves_order_and_length() {
    let rows = vec![
        Row {
            title: "a".to_string(),
        },
        Row {
            title: "b".to_string(),
        },
    ];

    let titles = pluck(&rows, |r| r.title.as_str());
    assert_eq!(titles, vec!["a", "b"]);
    assert_eq!(titles.len(), rows.len());
}

#[test]
fn test_pluck_does_not_filter_empty_values() {
    let rows = vec![
        Row {
            title: String::new(),
        },
        Row {
            title: "b".to_string(),
        },
    ];

    // 與 render 不同，空字串原樣保留
    assert_eq!(pluck(&rows, |r| r.title.clone()), vec!["", "b"]);
}

#[test]
fn test_pluck_field_over_songs() {
    let mut songs = sample_songs();
    songs.push(Song {
        title: "Second".to_string(),
        tracks: vec![Track {
            id: 9,
            name: "Only".to_string(),
            duration: 60,
        }],
        singer: "Jane Roe".to_string(),
    });

    let titles: Vec<&str> = pluck_field(&songs, SongField::Title)
        .into_iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert_eq!(titles, vec!["Song List", "Second"]);

    let track_counts: Vec<usize> = pluck_field(&songs, SongField::Tracks)
        .into_iter()
        .map(|value| match value {
            SongValue::Tracks(tracks) => tracks.len(),
            other => panic!("expected tracks, got {:?}", other),
        })
        .collect();
    assert_eq!(track_counts, vec![3, 1]);
}

#[test]
fn test_pluck_iter_composes_with_iterators() {
    let songs = sample_songs();
    let total: u32 = pluck_iter(&songs[0].tracks, |t| t.duration).sum();
    assert_eq!(total, 630);
}

#[test]
fn test_format_names_with_pluck() {
    let people = vec![
        Person {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        },
        Person {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
        },
    ];

    assert_eq!(
        pluck(&people, format_name),
        vec!["Lovelace, Ada", "Turing, Alan"]
    );
}
