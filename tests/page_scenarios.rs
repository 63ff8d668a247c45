//! End-to-end scenarios: input events in, render intents out.

use folio_interact::{
    Carousel, CarouselIntent, CarouselLayout, InputEvent, InteractionConfig, KeyboardEvent, Menu,
    MenuIntent, MenuParts, Page, PageLayout, PointerEvent, PointerSource, RecordingSink, Rect,
    RenderIntent, SwipeThreshold,
};

// =============================================================================
// HELPERS
// =============================================================================

const TRACK_WIDTH: f64 = 1000.0;

fn page_with(slides: usize, viewport_width: f64) -> (Page, RecordingSink) {
    let layout = PageLayout {
        viewport_width,
        viewport_height: 800.0,
        navbar: Some(Rect::new(0.0, 0.0, viewport_width, 60.0)),
        menu_toggle: Some(Rect::new(viewport_width - 50.0, 10.0, 40.0, 40.0)),
        nav_links: Some(vec![Rect::new(0.0, 60.0, viewport_width, 40.0)]),
        carousels: vec![
            CarouselLayout::new(Rect::new(0.0, 200.0, TRACK_WIDTH, 300.0), slides)
                .with_indicators(Rect::new(0.0, 520.0, 200.0, 20.0)),
        ],
    };
    let mut sink = RecordingSink::new();
    let page = Page::initialize(&layout, InteractionConfig::default(), &mut sink);
    sink.drain();
    (page, sink)
}

fn drag(page: &mut Page, sink: &mut RecordingSink, source: PointerSource, from: f64, to: f64) {
    let y = 300.0;
    page.dispatch(InputEvent::Pointer(PointerEvent::down(source, from, y)), sink);
    page.dispatch(InputEvent::Pointer(PointerEvent::move_to(source, (from + to) / 2.0, y)), sink);
    page.dispatch(InputEvent::Pointer(PointerEvent::up(source, to, y)), sink);
}

fn menu_intents(sink: &RecordingSink) -> Vec<MenuIntent> {
    sink.intents()
        .iter()
        .filter_map(|intent| match intent {
            RenderIntent::Menu(menu) => Some(*menu),
            _ => None,
        })
        .collect()
}

fn last_carousel_intent(sink: &RecordingSink) -> CarouselIntent {
    sink.intents()
        .iter()
        .rev()
        .find_map(|intent| match intent {
            RenderIntent::Carousel { intent, .. } => Some(*intent),
            _ => None,
        })
        .expect("no carousel intent recorded")
}

// =============================================================================
// CAROUSEL
// =============================================================================

#[test]
fn test_swipe_left_half_track_moves_one_slide() {
    let (mut page, mut sink) = page_with(5, 500.0);

    drag(&mut page, &mut sink, PointerSource::Touch, 800.0, 300.0);

    assert_eq!(page.carousel(0).unwrap().current_index(), 1);
    let intent = last_carousel_intent(&sink);
    assert_eq!(intent.offset_percent, -100.0);
    assert_eq!(intent.transition_ms, 300);
    assert_eq!(intent.active_indicator, Some(1));
}

#[test]
fn test_swipe_left_on_last_slide_stays() {
    let (mut page, mut sink) = page_with(3, 500.0);
    page.go_to(0, 2, false, &mut sink);

    drag(&mut page, &mut sink, PointerSource::Mouse, 900.0, 100.0);

    assert_eq!(page.carousel(0).unwrap().current_index(), 2);
    assert_eq!(last_carousel_intent(&sink).offset_percent, -200.0);
}

#[test]
fn test_mouse_and_touch_share_one_machine() {
    let (mut page, mut sink) = page_with(5, 500.0);

    drag(&mut page, &mut sink, PointerSource::Mouse, 700.0, 400.0);
    drag(&mut page, &mut sink, PointerSource::Touch, 700.0, 400.0);
    assert_eq!(page.carousel(0).unwrap().current_index(), 2);

    drag(&mut page, &mut sink, PointerSource::Touch, 400.0, 700.0);
    assert_eq!(page.carousel(0).unwrap().current_index(), 1);
}

#[test]
fn test_threshold_split_across_policies() {
    for (threshold, delta, advances) in [
        (SwipeThreshold::TrackFraction(0.15), 149.0, false),
        (SwipeThreshold::TrackFraction(0.15), 150.0, true),
        (SwipeThreshold::Pixels(60.0), 59.0, false),
        (SwipeThreshold::Pixels(60.0), 60.0, true),
    ] {
        let mut carousel = Carousel::new(4, false, threshold, 300);
        carousel.on_resize(TRACK_WIDTH);
        carousel.on_gesture_start(500.0);
        carousel.on_gesture_end(500.0 - delta);
        assert_eq!(
            carousel.current_index(),
            usize::from(advances),
            "{threshold:?} with delta {delta}"
        );
    }
}

#[test]
fn test_resize_never_changes_index() {
    let (mut page, mut sink) = page_with(5, 500.0);
    page.go_to(0, 3, true, &mut sink);

    for width in [320.0, 1920.0, 768.0] {
        page.dispatch(InputEvent::Resize(width, 600.0), &mut sink);
        assert_eq!(page.carousel(0).unwrap().current_index(), 3);
        let intent = last_carousel_intent(&sink);
        assert_eq!(intent.offset_percent, -300.0);
        assert_eq!(intent.transition_ms, 0);
    }
}

// =============================================================================
// MENU
// =============================================================================

#[test]
fn test_resize_below_breakpoint_leaves_closed_menu_alone() {
    let (mut page, mut sink) = page_with(3, 1024.0);

    page.dispatch(InputEvent::Resize(500.0, 800.0), &mut sink);

    assert!(!page.menu().is_open());
    assert!(menu_intents(&sink).is_empty());
}

#[test]
fn test_escape_closes_open_menu() {
    let (mut page, mut sink) = page_with(3, 500.0);
    page.toggle_menu(&mut sink);
    sink.drain();

    page.dispatch(InputEvent::Key(KeyboardEvent::new("Escape")), &mut sink);

    let intents = menu_intents(&sink);
    assert_eq!(intents.len(), 1);
    assert!(!intents[0].is_open);
    assert_eq!(intents[0].label(), "Open menu");
    assert_eq!(intents[0].aria_expanded(), "false");
}

#[test]
fn test_all_close_triggers_converge() {
    let (mut page, mut sink) = page_with(3, 500.0);
    let closed = MenuIntent { is_open: false };

    // Nav link click
    page.toggle_menu(&mut sink);
    sink.drain();
    page.dispatch(InputEvent::Pointer(PointerEvent::down(PointerSource::Mouse, 10.0, 70.0)), &mut sink);
    page.dispatch(InputEvent::Pointer(PointerEvent::up(PointerSource::Mouse, 10.0, 70.0)), &mut sink);
    assert_eq!(menu_intents(&sink), vec![closed]);

    // Escape
    page.toggle_menu(&mut sink);
    sink.drain();
    page.dispatch(InputEvent::Key(KeyboardEvent::new("Escape")), &mut sink);
    assert_eq!(menu_intents(&sink), vec![closed]);

    // Resize past the breakpoint
    page.toggle_menu(&mut sink);
    sink.drain();
    page.dispatch(InputEvent::Resize(900.0, 800.0), &mut sink);
    assert_eq!(menu_intents(&sink), vec![closed]);
}

#[test]
fn test_collapsed_links_ignore_clicks() {
    let (mut page, mut sink) = page_with(3, 500.0);

    page.dispatch(InputEvent::Pointer(PointerEvent::down(PointerSource::Touch, 10.0, 70.0)), &mut sink);
    page.dispatch(InputEvent::Pointer(PointerEvent::up(PointerSource::Touch, 10.0, 70.0)), &mut sink);
    assert!(menu_intents(&sink).is_empty());
    assert!(!page.menu().is_open());
}

#[test]
fn test_close_when_closed_emits_nothing() {
    let mut menu = Menu::new(MenuParts::TOGGLE | MenuParts::LINKS);
    assert!(menu.close().is_none());
    assert!(menu.on_viewport_resize(2000.0).is_none());
    assert!(menu.on_key(&KeyboardEvent::new("Escape")).is_none());
}
