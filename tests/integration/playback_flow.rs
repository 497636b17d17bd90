//! Integration tests for the record-then-play flow
//!
//! Drives a seeded visualizer through recording and timer-driven playback
//! on a paused tokio clock.

use std::time::Duration;

use super::common::fixtures;
use sortviz::visualizer::{record_bubble_sort, PlaybackState};
use tokio::sync::mpsc::error::TryRecvError;

/// Known input produces the exact compare/swap sequence
#[test]
fn test_known_input_recording() {
    let recording = record_bubble_sort(&[5, 3, 4, 1]);

    assert_eq!(recording.len(), 13);
    assert_eq!(recording.comparison_count(), 6);
    assert_eq!(recording.swap_count(), 5);

    let swaps: Vec<(&[usize], &[u32])> = recording
        .frames()
        .iter()
        .filter(|f| f.is_swap())
        .map(|f| (f.swapped(), f.values()))
        .collect();
    assert_eq!(swaps[0], (&[0, 1][..], &[3, 5, 4, 1][..]));
    assert_eq!(swaps[2], (&[2, 3][..], &[3, 4, 1, 5][..]));
    assert_eq!(swaps[4], (&[0, 1][..], &[1, 3, 4, 5][..]));
    assert_eq!(recording.last().values(), &[1, 3, 4, 5]);
}

/// Playing through to the end leaves the sorted array on screen
#[tokio::test(start_paused = true)]
async fn test_play_to_end() {
    let (mut viz, mut rx) = fixtures::visualizer(30);
    viz.run_sort();
    let last = viz.playback().recording().unwrap().last_index();
    assert!(viz.play());

    let mut advanced = 0;
    while viz.state() == PlaybackState::Playing {
        let before = viz.cursor();
        let tick = rx.recv().await.unwrap();
        viz.on_tick(tick);
        if viz.cursor() != before {
            assert_eq!(viz.cursor(), before + 1);
            advanced += 1;
        }
    }

    assert_eq!(advanced, last);
    assert_eq!(viz.position(), (last, last));
    assert!(viz.display().values.windows(2).all(|w| w[0] <= w[1]));

    // Timer is gone: nothing else arrives
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

/// Pause keeps the frame, resume continues from it, stop rewinds
#[tokio::test(start_paused = true)]
async fn test_pause_resume_stop() {
    let (mut viz, mut rx) = fixtures::visualizer(20);
    viz.run_sort();
    viz.play();

    for _ in 0..5 {
        let tick = rx.recv().await.unwrap();
        viz.on_tick(tick);
    }
    assert_eq!(viz.cursor(), 5);

    assert!(viz.pause());
    assert_eq!(viz.state(), PlaybackState::Paused);
    assert!(!viz.pause());

    tokio::time::sleep(Duration::from_millis(100)).await;
    while let Ok(stale) = rx.try_recv() {
        assert!(!viz.on_tick(stale));
    }
    assert_eq!(viz.cursor(), 5);

    assert!(viz.play());
    let tick = rx.recv().await.unwrap();
    viz.on_tick(tick);
    assert_eq!(viz.cursor(), 6);

    assert!(viz.stop());
    assert_eq!(viz.state(), PlaybackState::Idle);
    assert_eq!(viz.cursor(), 0);
}

/// Slower speed settings produce fewer frames in the same wall time
#[tokio::test(start_paused = true)]
async fn test_interval_controls_tick_rate() {
    let (mut viz, mut rx) = fixtures::visualizer(50);
    viz.set_interval_ms(40);
    viz.run_sort();
    viz.play();

    tokio::time::sleep(Duration::from_millis(205)).await;
    let mut ticks = 0;
    while let Ok(tick) = rx.try_recv() {
        viz.on_tick(tick);
        ticks += 1;
    }
    assert_eq!(ticks, 5);
    assert_eq!(viz.cursor(), 5);
}

/// Dropping the visualizer mid-playback kills the timer
#[tokio::test(start_paused = true)]
async fn test_teardown_while_playing() {
    let (mut viz, mut rx) = fixtures::visualizer(20);
    viz.run_sort();
    viz.play();
    let tick = rx.recv().await.unwrap();
    viz.on_tick(tick);

    drop(viz);
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Only ticks already queued before the drop can remain
    while rx.try_recv().is_ok() {}
    assert!(rx.recv().await.is_none());
}

/// Same seed, same array
#[test]
fn test_seeded_arrays_are_reproducible() {
    let (a, _rx_a) = fixtures::visualizer(40);
    let (b, _rx_b) = fixtures::visualizer(40);
    assert_eq!(a.array(), b.array());
}
