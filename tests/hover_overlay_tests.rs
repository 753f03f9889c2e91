use approx::assert_relative_eq;
use mnemos::api::{TimelineEngine, TimelineEngineConfig};
use mnemos::core::{EventDataset, EventKind, EventRecord, TimeRange, Viewport};
use mnemos::overlay::{OverlayKind, RecordingLabelSink};
use mnemos::render::NullRenderer;

type Engine = TimelineEngine<NullRenderer, RecordingLabelSink>;

fn engine_with(dataset: EventDataset, viewport: Viewport) -> Engine {
    TimelineEngine::new(
        NullRenderer::default(),
        RecordingLabelSink::default(),
        dataset,
        TimelineEngineConfig::new(viewport),
    )
    .expect("engine init")
}

fn single_event_engine() -> Engine {
    let dataset = EventDataset::new(TimeRange::new(1700, 1705).expect("valid range")).with_event(
        EventKind::Historical,
        1700,
        EventRecord::new("h-1700", "Founding"),
    );
    engine_with(dataset, Viewport::new(800, 600))
}

#[test]
fn pointer_near_empty_year_snaps_to_nearest_eventful_year() {
    let mut engine = single_event_engine();
    let x_1702 = engine.year_to_screen_x(1702).expect("1702 on axis");
    assert_relative_eq!(x_1702, 332.0);

    engine.pointer_move(x_1702, engine.layout().axis_y);
    assert_eq!(engine.hovered_year(), Some(1700));
}

#[test]
fn pointer_outside_horizontal_band_hovers_nothing() {
    let mut engine = single_event_engine();
    engine.pointer_move(10.0, engine.layout().axis_y);
    assert_eq!(engine.hovered_year(), None);

    engine.pointer_move(790.0, engine.layout().axis_y);
    assert_eq!(engine.hovered_year(), None);
}

#[test]
fn pointer_outside_vertical_band_hovers_nothing() {
    let mut engine = single_event_engine();
    let layout = *engine.layout();
    let reach = layout.extent * 0.8;

    engine.pointer_move(332.0, layout.axis_y - reach - 1.0);
    assert_eq!(engine.hovered_year(), None);
    engine.pointer_move(332.0, layout.axis_y + reach - 1.0);
    assert_eq!(engine.hovered_year(), Some(1700));
}

#[test]
fn timeline_without_events_never_hovers() {
    let dataset = EventDataset::new(TimeRange::new(1700, 1705).expect("valid range"));
    let mut engine = engine_with(dataset, Viewport::new(800, 600));
    engine.pointer_move(332.0, 300.0);
    assert_eq!(engine.hovered_year(), None);
    assert!(engine.label_sink().is_empty());
}

#[test]
fn pointer_leave_clears_hover_and_labels() {
    let mut engine = single_event_engine();
    engine.pointer_move(332.0, 300.0);
    assert_eq!(engine.hovered_year(), Some(1700));
    assert!(!engine.label_sink().is_empty());

    engine.pointer_leave();
    assert_eq!(engine.hovered_year(), None);
    assert!(engine.label_sink().is_empty());
}

fn busy_dataset() -> EventDataset {
    EventDataset::new(TimeRange::new(1800, 1820).expect("valid range"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("h1", "Coronation"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("h2", "Harvest failure"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("h3", "Bridge opened"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("h4", "Great fire"))
        .with_event(
            EventKind::Personal,
            1810,
            EventRecord::new("p1", "Apprenticed").with_person("Jonas"),
        )
        .with_event(EventKind::Historical, 1813, EventRecord::new("h5", "Flood"))
        .with_event(EventKind::Personal, 1817, EventRecord::new("p2", "Married"))
}

#[test]
fn hover_rebuilds_label_set_for_new_target() {
    let mut engine = engine_with(busy_dataset(), Viewport::new(1200, 900));
    let x = engine.year_to_screen_x(1810).expect("1810 on axis");
    engine.pointer_move(x, engine.layout().axis_y);
    assert_eq!(engine.hovered_year(), Some(1810));

    let sink = engine.label_sink();
    let texts: Vec<&str> = sink.labels().values().map(|l| l.spec.text.as_str()).collect();
    // hovered label, three of four historical texts fit, one personal text, near 1813
    assert_eq!(
        texts,
        vec![
            "1810",
            "Coronation",
            "Harvest failure",
            "Bridge opened",
            "Apprenticed",
            "1813"
        ]
    );
    assert_eq!(sink.created_total, 6);

    let personal = sink
        .labels()
        .values()
        .find(|label| label.spec.text == "Apprenticed")
        .expect("personal text");
    assert_eq!(personal.spec.secondary_text.as_deref(), Some("Jonas"));
    assert_eq!(personal.spec.style_class, "event-text personal");

    let near = sink
        .labels()
        .values()
        .find(|label| label.spec.text == "1813")
        .expect("near label");
    assert_eq!(near.spec.kind, OverlayKind::YearLabel);
    assert_eq!(near.spec.style_class, "year-label near");

    let x_1817 = engine.year_to_screen_x(1817).expect("1817 on axis");
    engine.pointer_move(x_1817, engine.layout().axis_y);
    assert_eq!(engine.hovered_year(), Some(1817));
    let sink = engine.label_sink();
    assert_eq!(sink.destroy_calls, 2);
    let years: Vec<i32> = engine.overlay_elements().map(|e| e.year).collect();
    assert_eq!(years, vec![1817, 1817, 1813]);
}

#[test]
fn moving_within_same_hover_target_keeps_elements() {
    let mut engine = engine_with(busy_dataset(), Viewport::new(1200, 900));
    let x = engine.year_to_screen_x(1810).expect("1810 on axis");
    engine.pointer_move(x, engine.layout().axis_y);
    let created = engine.label_sink().created_total;

    engine.pointer_move(x + 2.0, engine.layout().axis_y + 10.0);
    assert_eq!(engine.label_sink().created_total, created);
}

#[test]
fn labels_fade_in_and_follow_camera() {
    let mut engine = engine_with(busy_dataset(), Viewport::new(1200, 900));
    engine.frame(0.0).expect("first frame");
    let x = engine.year_to_screen_x(1810).expect("1810 on axis");
    engine.pointer_move(x, engine.layout().axis_y);
    let label_id = engine
        .overlay_elements()
        .find(|e| e.kind == OverlayKind::YearLabel && e.year == 1810)
        .map(|e| e.id)
        .expect("hovered year label");

    engine.frame(16.0).expect("frame");
    let early = engine
        .label_sink()
        .get(label_id)
        .and_then(|label| label.placement)
        .expect("placement after frame");
    assert!(early.opacity < 1.0);
    assert_relative_eq!(early.x, x);
    assert_relative_eq!(early.y, engine.layout().axis_y + 8.0);
    assert!(early.visible);

    let mut now = 16.0;
    while now < 400.0 {
        now += 16.0;
        engine.frame(now).expect("frame");
    }
    let settled = engine
        .label_sink()
        .get(label_id)
        .and_then(|label| label.placement)
        .expect("placement");
    assert_relative_eq!(settled.opacity, 1.0);
    assert_eq!(engine.label_sink().orphan_updates, 0);
}

#[test]
fn focus_year_glows_brighter_than_its_baseline_without_hover() {
    let dataset = busy_dataset();
    let mut plain = engine_with(dataset.clone(), Viewport::new(1200, 900));
    let mut focused = TimelineEngine::new(
        NullRenderer::default(),
        RecordingLabelSink::default(),
        dataset,
        TimelineEngineConfig::new(Viewport::new(1200, 900)).with_focus_year(Some(1813)),
    )
    .expect("engine init");

    plain.frame(0.0).expect("frame");
    focused.frame(0.0).expect("frame");
    let base = plain.line_visual(1813).expect("tracked").intensity;
    let boosted = focused.line_visual(1813).expect("tracked").intensity;
    assert!(boosted > base);
    assert!(boosted <= 1.0 + 0.3);
}

#[test]
fn out_of_reach_event_text_is_hidden_then_shown_without_rebuild() {
    let dataset = EventDataset::new(TimeRange::new(1800, 1820).expect("valid range"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("a", "A"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("b", "B"))
        .with_event(EventKind::Historical, 1810, EventRecord::new("c", "C"));
    let mut engine = engine_with(dataset, Viewport::new(1200, 900));
    engine.frame(0.0).expect("first frame");
    let x = engine.year_to_screen_x(1810).expect("1810 on axis");
    engine.pointer_move(x, engine.layout().axis_y);

    let third_id = engine
        .label_sink()
        .labels()
        .iter()
        .find(|(_, label)| label.spec.text == "C")
        .map(|(id, _)| *id)
        .expect("third event text");
    let created = engine.label_sink().created_total;

    engine.frame(16.0).expect("frame");
    let early = engine
        .label_sink()
        .get(third_id)
        .and_then(|label| label.placement)
        .expect("placement after frame");
    assert!(!early.visible);

    let mut now = 16.0;
    while now < 3_000.0 {
        now += 16.0;
        engine.frame(now).expect("frame");
    }
    let late = engine
        .label_sink()
        .get(third_id)
        .and_then(|label| label.placement)
        .expect("placement after settling");
    assert!(late.visible);
    assert_eq!(engine.label_sink().created_total, created);
    assert!(engine.overlay_elements().any(|element| element.id == third_id));
}
