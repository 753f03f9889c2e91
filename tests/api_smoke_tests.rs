use mnemos::api::{TimelineEngine, TimelineEngineConfig};
use mnemos::core::{EventDataset, EventKind, EventRecord, TimeRange, Viewport};
use mnemos::interaction::{InteractionMode, PointerButton};
use mnemos::overlay::RecordingLabelSink;
use mnemos::render::NullRenderer;

fn dataset() -> EventDataset {
    EventDataset::new(TimeRange::new(1700, 1705).expect("valid range"))
        .with_event(
            EventKind::Historical,
            1700,
            EventRecord::new("h-1700", "Treaty signed").with_intensity(0.9),
        )
        .with_event(
            EventKind::Personal,
            1703,
            EventRecord::new("p-1703", "Moved to the coast").with_person("Ana"),
        )
}

#[test]
fn engine_smoke_flow() {
    let config = TimelineEngineConfig::new(Viewport::new(800, 600));
    let mut engine = TimelineEngine::new(
        NullRenderer::default(),
        RecordingLabelSink::default(),
        dataset(),
        config,
    )
    .expect("engine init");

    assert_eq!(engine.year_lines().len(), 6);
    assert_eq!(
        engine
            .year_lines()
            .iter()
            .filter(|line| line.has_events)
            .count(),
        2
    );

    let outcome = engine.frame(0.0).expect("first frame");
    assert!(outcome.drawn);
    assert!(outcome.schedule_next);
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert!(engine.renderer().last_command_count > 0);

    let x_1703 = engine.year_to_screen_x(1703).expect("1703 on axis");
    engine.pointer_move(x_1703 + 3.0, 300.0);
    assert_eq!(engine.hovered_year(), Some(1703));
    assert!(!engine.label_sink().is_empty());

    engine.pointer_down(PointerButton::Primary, 400.0, 300.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Dragging);
    assert_eq!(engine.hovered_year(), None);
    engine.pointer_up(PointerButton::Primary, 400.0, 300.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    engine.frame(16.0).expect("second frame");
    assert_eq!(engine.renderer().frames_rendered, 2);

    engine.dispose();
    assert!(engine.is_disposed());
    assert!(engine.label_sink().is_empty());
    let outcome = engine.frame(32.0).expect("frame after dispose");
    assert!(!outcome.drawn);
    assert!(!outcome.schedule_next);
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn engine_rejects_zero_sized_viewport_at_init() {
    let err = TimelineEngine::new(
        NullRenderer::default(),
        RecordingLabelSink::default(),
        dataset(),
        TimelineEngineConfig::new(Viewport::new(0, 600)),
    )
    .err()
    .expect("zero width must fail");
    assert!(format!("{err}").contains("viewport"));
}

#[test]
fn secondary_button_does_not_start_drag() {
    let mut engine = TimelineEngine::new(
        NullRenderer::default(),
        RecordingLabelSink::default(),
        dataset(),
        TimelineEngineConfig::new(Viewport::new(800, 600)),
    )
    .expect("engine init");

    engine.pointer_down(PointerButton::Secondary, 400.0, 300.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(!engine.camera().is_dragging());
}
