use chrono::{NaiveDate, NaiveDateTime};
use cosmic_calendar::api::SUN_NAME;
use cosmic_calendar::core::{Body, BodyCatalog, FixedClock, FocusTarget, ZoomLevel};
use cosmic_calendar::layout::MOON_NAME;
use cosmic_calendar::navigation::Direction;
use cosmic_calendar::render::{Highlight, NullRenderer, Renderer, SceneFrame};
use cosmic_calendar::{CalendarEngine, CalendarEngineConfig, CalendarError, CalendarResult};

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid datetime")
}

fn now() -> NaiveDateTime {
    datetime(2026, 10, 14, 9, 41)
}

fn engine_at(level: ZoomLevel) -> CalendarEngine<NullRenderer, FixedClock> {
    let config = CalendarEngineConfig::default().with_initial_zoom_level(level);
    CalendarEngine::new(NullRenderer::default(), FixedClock(now()), config).expect("engine init")
}

fn scene(engine: &CalendarEngine<NullRenderer, FixedClock>) -> &SceneFrame {
    engine.last_scene().expect("scene rendered")
}

#[test]
fn new_engine_renders_the_present_once() {
    let engine = engine_at(ZoomLevel::Year);
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.zoom_level(), ZoomLevel::Year);
    assert_eq!(engine.selected_datetime(), now());
    assert!(!engine.navigation_state().has_offsets());

    let frame = scene(&engine);
    frame.validate().expect("valid frame");
    assert_eq!(frame.bodies.len(), 8);
    assert_eq!(frame.orbits.len(), 8);
    assert!(frame.connectors.is_empty());
    assert_eq!(frame.now_height, frame.selected_height);
    assert_eq!(engine.renderer().last_frame.as_ref(), Some(frame));
}

#[test]
fn scene_contains_axis_and_body_worldlines_inside_the_window() {
    let engine = engine_at(ZoomLevel::Decade);
    let frame = scene(&engine);
    let axis = frame.worldline(SUN_NAME).expect("axis worldline");
    assert_eq!(axis.points.len(), 2);
    assert!(axis.points.iter().all(|point| point.x == 0.0 && point.z == 0.0));

    let earth = frame.worldline("Earth").expect("earth worldline");
    assert_eq!(earth.first().map(|point| point.y), Some(frame.window.0));
    assert_eq!(earth.last().map(|point| point.y), Some(frame.window.1));
    assert!((frame.window.1 - frame.window.0 - 1_000.0).abs() <= 1e-9);

    let (low, high) = frame.height_extent().expect("extent");
    assert!(low >= frame.window.0 - 1e-9);
    assert!(high <= frame.window.1 + 1e-9);
}

#[test]
fn navigating_adds_connectors_and_selected_markers() {
    let mut engine = engine_at(ZoomLevel::Year);
    engine.navigate(Direction::Forward).expect("navigate");
    assert_eq!(engine.selected_datetime(), datetime(2026, 11, 14, 9, 41));
    assert_eq!(engine.renderer().frames_rendered, 2);

    let frame = scene(&engine);
    assert_eq!(frame.connectors.len(), 8);
    assert_eq!(engine.renderer().last_connector_count, 8);
    assert!(frame.markers_with(Highlight::UserSelected).count() > 0);
    assert!(frame.markers_with(Highlight::ActualNow).count() > 0);

    let earth = frame.body("Earth").expect("earth");
    assert_eq!(earth.now_position.y, frame.now_height);
    assert_eq!(earth.selected_position.y, frame.selected_height);
    assert!(frame.selected_height > frame.now_height);
}

#[test]
fn zooming_keeps_the_selection_and_moves_the_camera() {
    let mut engine = engine_at(ZoomLevel::Year);
    engine.navigate(Direction::Forward).expect("navigate");
    for _ in 0..5 {
        engine.zoom_in().expect("zoom in");
    }
    assert_eq!(engine.zoom_level(), ZoomLevel::Day);
    // Month level re-anchors on now's weekday inside the Nov 8 row.
    assert_eq!(engine.selected_datetime(), datetime(2026, 11, 11, 9, 41));

    let frame = scene(&engine);
    assert_eq!(frame.camera.focus_target, FocusTarget::Earth);
    let earth = frame.body("Earth").expect("earth");
    assert_eq!(frame.camera.focus, earth.selected_position);

    engine.zoom_in().expect("zoom in");
    engine.zoom_in().expect("saturating zoom in");
    assert_eq!(engine.zoom_level(), ZoomLevel::Clock);

    engine.set_zoom_level(ZoomLevel::Overview).expect("overview");
    let frame = scene(&engine);
    assert!(frame.markers.is_empty());
    assert_eq!(frame.camera.focus_target, FocusTarget::None);
    assert_eq!(frame.camera.focus.x, 0.0);
    assert_eq!(frame.camera.focus.z, 0.0);
}

#[test]
fn overview_navigation_is_a_no_op() {
    let mut engine = engine_at(ZoomLevel::Overview);
    engine.navigate(Direction::Backward).expect("navigate");
    assert_eq!(engine.selected_datetime(), now());
    assert!(!scene(&engine).is_empty());
    assert!(scene(&engine).markers.is_empty());
}

#[test]
fn lunar_scene_carries_the_moon_worldline() {
    let engine = engine_at(ZoomLevel::Lunar);
    let frame = scene(&engine);
    assert!(frame.worldline(MOON_NAME).is_some());
    assert!(frame.label_texts().any(|label| label == "Full Moon"));
}

#[test]
fn return_to_present_animates_and_snaps_exactly() {
    let mut engine = engine_at(ZoomLevel::Month);
    for _ in 0..6 {
        engine.navigate(Direction::Backward).expect("navigate");
    }
    assert_ne!(engine.selected_datetime(), now());

    assert!(engine.return_to_present().expect("start"));
    assert!(engine.is_returning_to_present());
    assert!(!engine.return_to_present().expect("second start is ignored"));

    let mut frames = 0;
    while engine.tick(0.1).expect("tick") {
        frames += 1;
        assert!(frames < 100, "transition never finished");
    }
    assert!(frames >= 10);
    assert!(!engine.is_returning_to_present());
    assert_eq!(engine.selected_datetime(), now());
    assert!(!engine.navigation_state().has_offsets());
    assert!(scene(&engine).connectors.is_empty());
}

#[test]
fn return_to_present_is_refused_at_the_present() {
    let mut engine = engine_at(ZoomLevel::Week);
    assert!(!engine.return_to_present().expect("return"));
    assert!(!engine.tick(0.5).expect("idle tick"));
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn user_actions_cancel_a_running_return() {
    let mut engine = engine_at(ZoomLevel::Week);
    engine.navigate(Direction::Forward).expect("navigate");
    assert!(engine.return_to_present().expect("start"));
    engine.navigate(Direction::Forward).expect("navigate");
    assert!(!engine.is_returning_to_present());

    assert!(engine.return_to_present().expect("restart"));
    engine.zoom_out().expect("zoom out");
    assert!(!engine.is_returning_to_present());
}

#[test]
fn clock_changes_move_the_present_but_not_the_phase_reference() {
    let mut engine = engine_at(ZoomLevel::Day);
    let earth_at_start = engine.focus_track().clone();
    let later = datetime(2026, 10, 15, 20, 5);
    engine.clock_mut().set(later);
    engine.set_zoom_level(ZoomLevel::Day).expect("refresh");

    assert_eq!(engine.now(), later);
    assert_eq!(engine.selected_datetime(), later);
    assert_eq!(scene(&engine).now, later);
    assert_eq!(engine.focus_track(), &earth_at_start);
    assert!(!engine.return_to_present().expect("already present"));
}

fn engine_started_at(
    level: ZoomLevel,
    start: NaiveDateTime,
) -> CalendarEngine<NullRenderer, FixedClock> {
    let config = CalendarEngineConfig::default().with_initial_zoom_level(level);
    CalendarEngine::new(NullRenderer::default(), FixedClock(start), config).expect("engine init")
}

#[test]
fn present_selection_follows_the_clock_across_rollovers() {
    // Saturday night into Sunday at Week level.
    let mut week = engine_started_at(ZoomLevel::Week, datetime(2026, 10, 17, 23, 50));
    let sunday = datetime(2026, 10, 18, 0, 10);
    week.clock_mut().set(sunday);
    week.set_zoom_level(ZoomLevel::Week).expect("refresh");
    assert_eq!(week.selected_datetime(), sunday);
    assert!(scene(&week).connectors.is_empty());

    // Midnight at Day level.
    let mut day = engine_started_at(ZoomLevel::Day, datetime(2026, 10, 14, 23, 30));
    let after_midnight = datetime(2026, 10, 15, 0, 20);
    day.clock_mut().set(after_midnight);
    day.set_zoom_level(ZoomLevel::Day).expect("refresh");
    assert_eq!(day.selected_datetime(), after_midnight);
    assert!(scene(&day).connectors.is_empty());

    // Month rollover at Year and Month levels.
    for level in [ZoomLevel::Year, ZoomLevel::Month] {
        let mut engine = engine_started_at(level, datetime(2026, 10, 31, 23, 55));
        let november = datetime(2026, 11, 1, 0, 5);
        engine.clock_mut().set(november);
        engine.set_zoom_level(level).expect("refresh");
        assert_eq!(engine.selected_datetime(), november, "{level:?}");
        assert!(scene(&engine).connectors.is_empty(), "{level:?}");
    }
}

#[test]
fn navigated_selection_survives_a_midnight_rollover() {
    let mut engine = engine_started_at(ZoomLevel::Day, datetime(2026, 10, 14, 23, 30));
    engine.navigate(Direction::Forward).expect("navigate");
    assert_eq!(engine.selected_datetime(), datetime(2026, 10, 15, 2, 30));

    engine.clock_mut().set(datetime(2026, 10, 15, 0, 20));
    engine.set_zoom_level(ZoomLevel::Day).expect("refresh");
    assert_eq!(engine.selected_datetime(), datetime(2026, 10, 15, 2, 20));
    assert_eq!(engine.navigation_state().hour_offset, 0);
    assert!(!scene(&engine).connectors.is_empty());
    assert!(engine.return_to_present().expect("start return"));
}

#[test]
fn invalid_configs_are_rejected_before_rendering() {
    let unknown = CalendarEngineConfig::default().with_focus_body("Pluto");
    assert!(matches!(
        CalendarEngine::new(NullRenderer::default(), FixedClock(now()), unknown),
        Err(CalendarError::UnknownBody(name)) if name == "Pluto"
    ));

    let degenerate = CalendarEngineConfig::default()
        .with_catalog(BodyCatalog::solar_system().with_body(Body::new("Frozen", 40.0, 0.0, 0.0)));
    assert!(matches!(
        CalendarEngine::new(NullRenderer::default(), FixedClock(now()), degenerate),
        Err(CalendarError::DegenerateOrbit { body }) if body == "Frozen"
    ));

    let empty = CalendarEngineConfig::default().with_catalog(BodyCatalog::empty());
    assert!(CalendarEngine::new(NullRenderer::default(), FixedClock(now()), empty).is_err());

    let ring = CalendarEngineConfig::default().with_hour_ring_offset(0.0);
    assert!(matches!(
        CalendarEngine::new(NullRenderer::default(), FixedClock(now()), ring),
        Err(CalendarError::InvalidConfig(_))
    ));
}

#[derive(Default)]
struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&mut self, _frame: &SceneFrame) -> CalendarResult<()> {
        Err(CalendarError::InvalidData("backend unavailable".to_owned()))
    }
}

#[test]
fn renderer_failures_propagate() {
    let result = CalendarEngine::new(
        FailingRenderer,
        FixedClock(now()),
        CalendarEngineConfig::default(),
    );
    assert!(matches!(result, Err(CalendarError::InvalidData(_))));
}

#[test]
fn custom_focus_body_carries_the_markers() {
    let config = CalendarEngineConfig::default()
        .with_initial_zoom_level(ZoomLevel::Clock)
        .with_focus_body("Mars");
    let engine =
        CalendarEngine::new(NullRenderer::default(), FixedClock(now()), config).expect("engine");
    assert_eq!(engine.focus_track().body.name, "Mars");
    let frame = scene(&engine);
    let mars = frame.body("Mars").expect("mars");
    assert_eq!(frame.camera.focus, mars.selected_position);
}
