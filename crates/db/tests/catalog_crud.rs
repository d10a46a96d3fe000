//! Integration tests for catalog entity CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create hierarchy (artist -> album -> track -> note/audio file)
//! - Unique constraint violations on slug and key columns
//! - Foreign key violations
//! - Update, list, and delete operations
//! - Album track ordering

use museboard_db::models::album::{CreateAlbum, UpdateAlbum};
use museboard_db::models::artist::{CreateArtist, UpdateArtist};
use museboard_db::models::audio_file::CreateAudioFile;
use museboard_db::models::note::{CreateNote, UpdateNote};
use museboard_db::models::track::{CreateTrack, UpdateTrack};
use museboard_db::repositories::{AlbumRepo, ArtistRepo, AudioFileRepo, NoteRepo, TrackRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        slug: None,
        template_id: None,
    }
}

fn new_album(artist_id: i64, name: &str) -> CreateAlbum {
    CreateAlbum {
        name: name.to_string(),
        slug: None,
        description: None,
        artist_id,
        release_date: None,
        image_url: None,
    }
}

fn new_track(artist_id: i64, name: &str) -> CreateTrack {
    CreateTrack {
        name: name.to_string(),
        key: None,
        artist_id,
        template_id: None,
        track_status_id: None,
        step_id: None,
        tempo: None,
        time_signature_numerator: None,
        time_signature_denominator: None,
        time_signature_varied: None,
        minutes: None,
        seconds: None,
        samples: None,
        album_id: None,
        album_order: None,
        date_created: None,
        isrc_code: None,
        live_ready: None,
        description: None,
    }
}

fn new_note(track_id: i64, text: &str) -> CreateNote {
    CreateNote {
        note: text.to_string(),
        track_id,
        step_id: None,
        track_status_id: None,
        done: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation with defaults
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_full_hierarchy(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Nova Haze"), "nova-haze")
        .await
        .unwrap();
    assert_eq!(artist.name, "Nova Haze");
    assert_eq!(artist.slug, "nova-haze");

    let album = AlbumRepo::create(&pool, &new_album(artist.id, "First Light"), "first-light")
        .await
        .unwrap();
    assert_eq!(album.artist_id, artist.id);
    assert_eq!(album.slug, "first-light");

    let track = TrackRepo::create(&pool, 1, &new_track(artist.id, "Opener"), "opener")
        .await
        .unwrap();
    assert_eq!(track.artist_id, artist.id);
    assert_eq!(track.key, "opener");
    assert_eq!(track.samples, "");
    assert!(!track.live_ready);
    assert!(!track.time_signature_varied);
    assert_eq!(track.created_by, Some(1));

    let note = NoteRepo::create(&pool, 1, &new_note(track.id, "tighten the kick"))
        .await
        .unwrap();
    assert_eq!(note.track_id, track.id);
    assert!(!note.done);
    assert_eq!(note.created_by, Some(1));

    let audio = AudioFileRepo::create(
        &pool,
        1,
        &CreateAudioFile {
            name: "Opener v1".to_string(),
            slug: "opener-v1".to_string(),
            file_url: Some("https://cdn.example/audio/1/opener.wav".to_string()),
            dropbox_url: None,
            track_id: track.id,
            mixdown_date: None,
            description: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(audio.track_id, track.id);
    assert_eq!(audio.created_by, Some(1));
}

// ---------------------------------------------------------------------------
// Test: Unique constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_duplicate_artist_slug_rejected(pool: PgPool) {
    ArtistRepo::create(&pool, &new_artist("One"), "same-slug")
        .await
        .unwrap();
    let result = ArtistRepo::create(&pool, &new_artist("Two"), "same-slug").await;
    assert!(result.is_err(), "Duplicate artist slug should fail");
}

#[sqlx::test]
async fn test_duplicate_track_key_rejected(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    TrackRepo::create(&pool, 1, &new_track(artist.id, "One"), "same-key")
        .await
        .unwrap();
    let result = TrackRepo::create(&pool, 1, &new_track(artist.id, "Two"), "same-key").await;
    assert!(result.is_err(), "Duplicate track key should fail");
}

// ---------------------------------------------------------------------------
// Test: slug_exists / key_exists
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_slug_exists(pool: PgPool) {
    assert!(!ArtistRepo::slug_exists(&pool, "ghost".to_string())
        .await
        .unwrap());
    ArtistRepo::create(&pool, &new_artist("Ghost"), "ghost")
        .await
        .unwrap();
    assert!(ArtistRepo::slug_exists(&pool, "ghost".to_string())
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Test: FK violation when referencing non-existent parent
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_fk_violation_album_bad_artist(pool: PgPool) {
    let result = AlbumRepo::create(&pool, &new_album(999_999, "Orphan"), "orphan").await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent artist_id"
    );
}

// ---------------------------------------------------------------------------
// Test: Update returns updated row, stamps updated_by
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_update_artist(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Before"), "before")
        .await
        .unwrap();

    let updated = ArtistRepo::update(
        &pool,
        artist.id,
        &UpdateArtist {
            name: Some("After".to_string()),
            slug: None,
            template_id: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "After");
    assert_eq!(updated.slug, "before", "Unset fields keep prior values");
}

#[sqlx::test]
async fn test_update_track_stamps_updated_by(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    let track = TrackRepo::create(&pool, 7, &new_track(artist.id, "Draft"), "draft")
        .await
        .unwrap();
    assert_eq!(track.updated_by, None);

    let updated = TrackRepo::update(
        &pool,
        9,
        track.id,
        &UpdateTrack {
            name: None,
            key: None,
            template_id: None,
            track_status_id: None,
            step_id: None,
            tempo: Some(128.0),
            time_signature_numerator: None,
            time_signature_denominator: None,
            time_signature_varied: None,
            minutes: None,
            seconds: None,
            samples: None,
            album_id: None,
            album_order: None,
            date_created: None,
            isrc_code: None,
            live_ready: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.tempo, Some(128.0));
    assert_eq!(updated.created_by, Some(7));
    assert_eq!(updated.updated_by, Some(9));
}

#[sqlx::test]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = ArtistRepo::update(
        &pool,
        999_999,
        &UpdateArtist {
            name: Some("Ghost".to_string()),
            slug: None,
            template_id: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none(), "Updating non-existent ID should return None");
}

// ---------------------------------------------------------------------------
// Test: Delete returns false for non-existent ID
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    let deleted = ArtistRepo::delete(&pool, 999_999).await.unwrap();
    assert!(!deleted, "Deleting non-existent ID should return false");
}

// ---------------------------------------------------------------------------
// Test: Album listing scoped to artist
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_list_albums_scoped_to_artist(pool: PgPool) {
    let a1 = ArtistRepo::create(&pool, &new_artist("A1"), "a1").await.unwrap();
    let a2 = ArtistRepo::create(&pool, &new_artist("A2"), "a2").await.unwrap();

    AlbumRepo::create(&pool, &new_album(a1.id, "X"), "x").await.unwrap();
    AlbumRepo::create(&pool, &new_album(a1.id, "Y"), "y").await.unwrap();
    AlbumRepo::create(&pool, &new_album(a2.id, "Z"), "z").await.unwrap();

    let a1_albums = AlbumRepo::list(&pool, Some(a1.id)).await.unwrap();
    assert_eq!(a1_albums.len(), 2);

    let all = AlbumRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

// ---------------------------------------------------------------------------
// Test: Album tracks ordered by album_order, unordered last
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_album_tracks_ordered(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    let album = AlbumRepo::create(&pool, &new_album(artist.id, "Ordered"), "ordered")
        .await
        .unwrap();

    let mut t_late = new_track(artist.id, "Late");
    t_late.album_id = Some(album.id);
    t_late.album_order = Some(2);
    let mut t_early = new_track(artist.id, "Early");
    t_early.album_id = Some(album.id);
    t_early.album_order = Some(1);
    let mut t_loose = new_track(artist.id, "Loose");
    t_loose.album_id = Some(album.id);

    TrackRepo::create(&pool, 1, &t_late, "late").await.unwrap();
    TrackRepo::create(&pool, 1, &t_loose, "loose").await.unwrap();
    TrackRepo::create(&pool, 1, &t_early, "early").await.unwrap();

    let with_tracks = AlbumRepo::find_with_tracks(&pool, album.id)
        .await
        .unwrap()
        .expect("Album should exist");
    let names: Vec<&str> = with_tracks.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Late", "Loose"]);
}

// ---------------------------------------------------------------------------
// Test: Note update toggles done and stamps updated_by
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_note_update(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    let track = TrackRepo::create(&pool, 1, &new_track(artist.id, "T"), "t")
        .await
        .unwrap();
    let note = NoteRepo::create(&pool, 1, &new_note(track.id, "fix the bridge"))
        .await
        .unwrap();

    let updated = NoteRepo::update(
        &pool,
        2,
        note.id,
        &UpdateNote {
            note: None,
            step_id: None,
            track_status_id: None,
            done: Some(true),
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert!(updated.done);
    assert_eq!(updated.note, "fix the bridge");
    assert_eq!(updated.updated_by, Some(2));
}

// ---------------------------------------------------------------------------
// Test: Cascade delete track removes notes and audio files
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_cascade_delete_track(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    let track = TrackRepo::create(&pool, 1, &new_track(artist.id, "T"), "t")
        .await
        .unwrap();
    let note = NoteRepo::create(&pool, 1, &new_note(track.id, "n")).await.unwrap();

    let deleted = TrackRepo::delete(&pool, track.id).await.unwrap();
    assert!(deleted);

    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: Album update with COALESCE semantics
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_album_update_partial(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("A"), "a").await.unwrap();
    let album = AlbumRepo::create(&pool, &new_album(artist.id, "Old Name"), "old-name")
        .await
        .unwrap();

    let updated = AlbumRepo::update(
        &pool,
        album.id,
        &UpdateAlbum {
            name: Some("New Name".to_string()),
            slug: None,
            description: Some("liner notes".to_string()),
            release_date: None,
            image_url: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.slug, "old-name");
    assert_eq!(updated.description.as_deref(), Some("liner notes"));
}
