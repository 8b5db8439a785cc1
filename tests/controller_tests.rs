//! Controller behavior tests
//!
//! These drive the full record/play/rename/delete surface through fakes
//! and a real filesystem blob store.

mod common;

use common::{CountingPlayerDevice, GrantedMic, TempCaptureDevice};
use murmur::audio::{DeniedMicrophone, RecordingPreset};
use murmur::controller::Controller;
use murmur::notes::NoteRegistry;
use murmur::session::{Player, Recorder};
use murmur::storage::{FsBlobStore, MemoryKeyValueStore, NullBlobStore};
use murmur::MurmurError;
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

struct Fixture {
    controller: Controller,
    live_handles: Rc<Cell<u32>>,
    _dir: TempDir,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let registry = NoteRegistry::load(Box::new(MemoryKeyValueStore::new()));
    let recorder = Recorder::new(
        Box::new(GrantedMic),
        Box::new(TempCaptureDevice::new(dir.path(), 2.0)),
        RecordingPreset::high_quality(),
    );
    let (player_device, live_handles) = CountingPlayerDevice::new();
    let player = Player::new(Box::new(player_device));
    let blobs = Box::new(FsBlobStore::new(dir.path().join("recordings")));

    Fixture {
        controller: Controller::new(registry, recorder, player, blobs),
        live_handles,
        _dir: dir,
    }
}

fn unsupported_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let registry = NoteRegistry::load(Box::new(MemoryKeyValueStore::new()));
    let recorder = Recorder::new(
        Box::new(GrantedMic),
        Box::new(TempCaptureDevice::new(dir.path(), 2.0)),
        RecordingPreset::high_quality(),
    );
    let (player_device, live_handles) = CountingPlayerDevice::new();
    let player = Player::new(Box::new(player_device));

    Fixture {
        controller: Controller::new(registry, recorder, player, Box::new(NullBlobStore)),
        live_handles,
        _dir: dir,
    }
}

fn record_one(controller: &mut Controller) -> murmur::notes::Note {
    controller.start_recording().unwrap();
    controller
        .stop_recording()
        .unwrap()
        .expect("a note should be created")
}

#[test]
fn test_record_rename_search_delete_scenario() {
    let mut fx = fixture();

    // Record -> stop produces one Untitled note with a positive duration.
    fx.controller.start_recording().unwrap();
    assert!(fx.controller.is_recording());
    let note = fx.controller.stop_recording().unwrap().unwrap();
    assert!(!fx.controller.is_recording());
    assert_eq!(note.name, "Untitled");
    assert!(note.duration > 0.0);
    assert_eq!(fx.controller.notes().len(), 1);
    assert!(
        Path::new(&note.uri).exists(),
        "audio blob should live at the note's uri"
    );

    // Rename and search.
    fx.controller.rename(&note.uri, "Meeting").unwrap();
    assert_eq!(fx.controller.notes()[0].name, "Meeting");
    assert_eq!(fx.controller.search("meet").len(), 1);
    assert!(fx.controller.search("xyz").is_empty());

    // Delete removes the blob and the record; a second delete fails
    // without mutating anything.
    fx.controller.delete(&note.uri).unwrap();
    assert!(fx.controller.notes().is_empty());
    assert!(!Path::new(&note.uri).exists());
    assert!(matches!(
        fx.controller.delete(&note.uri),
        Err(MurmurError::NotFound(_))
    ));
    assert!(fx.controller.notes().is_empty());
}

#[test]
fn test_stop_while_idle_is_noop() {
    let mut fx = fixture();
    assert_eq!(fx.controller.stop_recording().unwrap(), None);
    assert!(fx.controller.notes().is_empty());
}

#[test]
fn test_start_while_recording_keeps_single_session() {
    let mut fx = fixture();
    fx.controller.start_recording().unwrap();
    fx.controller.start_recording().unwrap();
    assert!(fx.controller.is_recording());

    // The one active session still stops normally.
    assert!(fx.controller.stop_recording().unwrap().is_some());
    assert_eq!(fx.controller.notes().len(), 1);
}

#[test]
fn test_denied_permission_reports_and_stays_idle() {
    let dir = tempfile::tempdir().unwrap();
    let registry = NoteRegistry::load(Box::new(MemoryKeyValueStore::new()));
    let recorder = Recorder::new(
        Box::new(DeniedMicrophone),
        Box::new(TempCaptureDevice::new(dir.path(), 2.0)),
        RecordingPreset::high_quality(),
    );
    let (player_device, _) = CountingPlayerDevice::new();
    let mut controller = Controller::new(
        registry,
        recorder,
        Player::new(Box::new(player_device)),
        Box::new(FsBlobStore::new(dir.path().join("recordings"))),
    );

    assert!(matches!(
        controller.start_recording(),
        Err(MurmurError::PermissionDenied)
    ));
    assert!(!controller.is_recording());
}

#[test]
fn test_unsupported_storage_refuses_to_save_recording() {
    let mut fx = unsupported_fixture();

    fx.controller.start_recording().unwrap();
    let err = fx.controller.stop_recording().unwrap_err();
    assert!(matches!(err, MurmurError::Unsupported(_)));

    // The session still ended and no note was created.
    assert!(!fx.controller.is_recording());
    assert!(fx.controller.notes().is_empty());
}

#[test]
fn test_unsupported_storage_refuses_delete_without_mutation() {
    let mut fx = unsupported_fixture();
    let before: Vec<_> = fx.controller.notes().to_vec();

    let err = fx.controller.delete("anything.wav").unwrap_err();
    assert!(matches!(err, MurmurError::Unsupported(_)));
    assert_eq!(fx.controller.notes(), &before[..]);
}

#[test]
fn test_play_holds_exactly_one_handle_across_switches() {
    let mut fx = fixture();
    let first = record_one(&mut fx.controller);
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = record_one(&mut fx.controller);

    fx.controller.play(&first.uri).unwrap();
    assert_eq!(fx.live_handles.get(), 1);

    fx.controller.play(&second.uri).unwrap();
    assert_eq!(
        fx.live_handles.get(),
        1,
        "switching notes must never hold two player handles"
    );

    fx.controller.play(&second.uri).unwrap();
    assert_eq!(fx.live_handles.get(), 1, "replay restarts with one handle");
}

#[test]
fn test_play_unknown_note_is_refused() {
    let mut fx = fixture();
    assert!(matches!(
        fx.controller.play("missing.wav"),
        Err(MurmurError::NotFound(_))
    ));
    assert_eq!(fx.controller.playback(), None);
}

#[test]
fn test_pause_without_playback_is_noop() {
    let mut fx = fixture();
    fx.controller.pause();
    assert_eq!(fx.controller.playback(), None);
}

#[test]
fn test_delete_tears_down_active_playback() {
    let mut fx = fixture();
    let note = record_one(&mut fx.controller);

    fx.controller.play(&note.uri).unwrap();
    fx.controller.delete(&note.uri).unwrap();

    assert_eq!(fx.controller.playback(), None);
    assert_eq!(fx.live_handles.get(), 0);
}

#[test]
fn test_rename_rejects_blank_input_without_mutation() {
    let mut fx = fixture();
    let note = record_one(&mut fx.controller);

    for bad in ["", "   "] {
        assert!(matches!(
            fx.controller.rename(&note.uri, bad),
            Err(MurmurError::InvalidInput(_))
        ));
    }
    assert_eq!(fx.controller.notes()[0].name, "Untitled");
}
