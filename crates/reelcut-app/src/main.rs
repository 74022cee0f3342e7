//! ReelCut - Headless timeline editor demo
//!
//! Drives a scripted editing session against the in-memory surface and
//! prints the serialized timeline after each committed edit, which is the
//! same payload a rendering host would receive through the change callback.

use anyhow::Result;
use reelcut_core::Vec2;
use reelcut_editor::{Editor, EditorConfig, HeadlessSurface, ManualClock, TICK_INTERVAL};
use reelcut_timeline::{ClipSpec, MediaKind, TimelineData};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("ReelCut starting...");

    let config = EditorConfig::default();
    let clock = ManualClock::new();
    let mut editor = Editor::new(config, HeadlessSurface::new(6000.0), Box::new(clock.clone()))?;

    editor.on_change(Box::new(|data: &TimelineData| {
        println!("timeline changed: {} tracks, {} clips", data.tracks.len(), data.clips.len());
    }));

    // Build a small project: one video clip and one audio clip.
    let video_track = editor.model().tracks()[0].id;
    let audio_track = editor.model().tracks()[1].id;
    let clip = editor.add_clip(
        video_track,
        ClipSpec {
            start_time: 1.0,
            duration: Some(5.0),
            name: "Intro".into(),
            ..Default::default()
        },
    );
    editor.add_clip(
        audio_track,
        ClipSpec {
            start_time: 0.0,
            duration: Some(15.0),
            kind: MediaKind::Audio,
            name: "Score".into(),
            ..Default::default()
        },
    );

    // Drag the video clip 3 seconds to the right through the pointer API.
    editor.pointer_down(Vec2::new(300.0, 40.0));
    editor.pointer_move(Vec2::new(600.0, 40.0));
    editor.pointer_up();
    info!(clip = %clip, start = editor.model().clip(clip).map(|c| c.start_time).unwrap_or_default(), "drag committed");

    // Extend its right edge by 2 seconds via the resize handle.
    let right_edge = 400.0 + 500.0;
    editor.pointer_down(Vec2::new(right_edge - 2.0, 40.0));
    editor.pointer_move(Vec2::new(right_edge + 198.0, 40.0));
    editor.pointer_up();

    // Simulated playback: about 2.5 seconds of wall-clock at the tick rate.
    editor.play();
    for _ in 0..75 {
        clock.advance(TICK_INTERVAL);
        editor.tick();
    }
    editor.pause();
    info!(cursor = editor.current_time(), "playback paused");

    let payload = editor.timeline_data().to_json()?;
    println!("{}", String::from_utf8_lossy(&payload));

    Ok(())
}
