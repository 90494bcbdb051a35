//! Navigation controller tests
//!
//! Relative and absolute moves, page number display, preload requests,
//! viewport-forced single page mode, toggle reconfiguration and render
//! generations.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{config, config_with, page};
use spreadview::layout::CanvasSize;
use spreadview::loader::PRELOAD_WINDOW;
use spreadview::navigation::PreloadRequest;
use spreadview::{plan_from_json, Configuration, Direction, Toggles, ViewerError, ViewerState};

fn wide() -> CanvasSize {
    CanvasSize::from_viewport(1610.0, 910.0)
}

fn narrow() -> CanvasSize {
    CanvasSize::from_viewport(810.0, 1010.0)
}

// =============================================================================
// RELATIVE AND ABSOLUTE MOVES
// =============================================================================

#[test]
fn test_right_steps_one_page() {
    let mut state = ViewerState::new(config(10));
    let nav = state.navigate(Direction::Right, None);
    assert_eq!(nav.position, 1);
    assert_eq!(nav.indicator, 2);
    assert_eq!(state.path(), (page(1), None));
}

#[test]
fn test_spread_steps_two_pages() {
    let mut state = ViewerState::new(config_with(10, true, false, false));
    state.navigate(Direction::Right, None);
    let nav = state.navigate(Direction::Right, None);
    assert_eq!(nav.position, 4);
    assert_eq!(state.path(), (page(4), page(5)));
}

#[test]
fn test_moves_stop_at_both_ends() {
    let mut state = ViewerState::new(config(3));
    for _ in 0..5 {
        state.navigate(Direction::Right, None);
    }
    assert_eq!(state.current(), 2);
    for _ in 0..5 {
        state.navigate(Direction::Left, None);
    }
    assert_eq!(state.current(), 0);
}

#[test]
fn test_absolute_position_wins_over_direction() {
    let mut state = ViewerState::new(config(10));
    let nav = state.navigate(Direction::Right, Some("6"));
    assert_eq!(nav.position, 6);
    assert_eq!(nav.indicator, 7);
}

#[test]
fn test_invalid_absolute_position_keeps_page() {
    let mut state = ViewerState::new(config(10));
    state.navigate(Direction::Both, Some("4"));
    let nav = state.navigate(Direction::Both, Some("abc"));
    assert_eq!(nav.position, 4);
}

#[test]
fn test_direction_parsing() {
    assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
    assert_eq!(" Right ".parse::<Direction>().unwrap(), Direction::Right);
    assert_eq!("both".parse::<Direction>().unwrap(), Direction::Both);
    assert!(matches!(
        "up".parse::<Direction>(),
        Err(ViewerError::Other(_))
    ));
    assert_eq!(Direction::Left.to_string(), "left");
}

// =============================================================================
// RIGHT-TO-LEFT
// =============================================================================

#[test]
fn test_r2l_spread_left_reads_forward() {
    let mut state = ViewerState::new(config_with(4, true, true, false));
    assert_eq!(state.initial_direction(), Direction::Left);

    let start = state.navigate(Direction::Both, None);
    assert_eq!(start.position, 2);
    assert_eq!(start.indicator, 2);
    assert_eq!(state.path(), (page(1), page(0)));

    let next = state.navigate(Direction::Left, None);
    assert_eq!(next.position, 0);
    assert_eq!(next.indicator, 4);
    assert_eq!(state.path(), (page(3), page(2)));
}

#[test]
fn test_r2l_indicator_counts_from_the_right() {
    let mut state = ViewerState::new(config_with(10, false, true, false));
    let nav = state.navigate(Direction::Both, Some("9"));
    assert_eq!(nav.indicator, 1);
    assert_eq!(state.path(), (page(0), None));
}

// =============================================================================
// PRELOAD REQUESTS
// =============================================================================

#[test]
fn test_preload_follows_direction() {
    let mut state = ViewerState::new(config(20));
    let nav = state.navigate(Direction::Right, None);
    assert_eq!(
        nav.preloads,
        vec![PreloadRequest {
            pos: 1,
            direction: Direction::Right,
            size: PRELOAD_WINDOW,
        }]
    );
}

#[test]
fn test_both_preloads_both_sides() {
    let mut state = ViewerState::new(config(20));
    let nav = state.navigate(Direction::Both, Some("10"));
    let directions: Vec<Direction> = nav.preloads.iter().map(|r| r.direction).collect();
    assert_eq!(directions, vec![Direction::Right, Direction::Left]);
    assert!(nav.preloads.iter().all(|r| r.pos == 10));
}

// =============================================================================
// VIEWPORT
// =============================================================================

#[test]
fn test_narrow_viewport_forces_single_page() {
    let mut state = ViewerState::new(config_with(10, true, false, false));
    assert!(!state.apply_canvas(&wide(), true));
    assert!(state.spread());

    assert!(state.apply_canvas(&narrow(), true));
    assert!(!state.spread());
    assert_eq!(state.paging().step, 1);
    let nav = state.navigate(Direction::Right, None);
    assert_eq!(nav.position, 1);
    assert_eq!(state.path(), (page(1), None));

    assert!(state.apply_canvas(&wide(), true));
    assert_eq!(state.path(), (page(0), page(1)));
}

#[test]
fn test_spread_toggle_off_wins_on_wide_viewport() {
    let mut state = ViewerState::new(config_with(10, true, false, false));
    state.apply_canvas(&wide(), false);
    assert!(!state.spread());
}

// =============================================================================
// RECONFIGURATION
// =============================================================================

#[test]
fn test_reconfigure_keeps_visible_page() {
    let mut state = ViewerState::new(config(10));
    state.navigate(Direction::Both, Some("5"));

    state.reconfigure(Toggles {
        spread: true,
        highlight: false,
        pageshift: true,
    });
    assert!(state.spread());
    assert_eq!(state.pages().len(), 11);
    // the blank slot shifts page 5 to slot 6, which now starts a pair
    assert_eq!(state.path(), (page(5), page(6)));
}

#[test]
fn test_reconfigure_highlight_rewrites_paths() {
    let mut state = ViewerState::new(Configuration {
        search_query: "moon".to_string(),
        ..config(10)
    });
    state.navigate(Direction::Both, Some("3"));
    state.reconfigure(Toggles {
        spread: false,
        highlight: true,
        pageshift: false,
    });
    assert_eq!(state.path().0.as_deref(), Some("/img/S/3?query=moon"));
}

#[test]
fn test_reconfigure_in_narrow_viewport_keeps_odd_page() {
    let mut state = ViewerState::new(config_with(10, true, false, false));
    state.apply_canvas(&narrow(), true);
    state.navigate(Direction::Both, Some("5"));

    state.reconfigure(Toggles {
        spread: true,
        highlight: true,
        pageshift: false,
    });
    assert!(!state.spread());
    let nav = state.navigate(Direction::Both, None);
    assert_eq!(nav.position, 5);
    assert_eq!(nav.indicator, 6);
    assert_eq!(state.path(), (Some("/img/S/5?query=".to_string()), None));

    // widening the window afterwards restores the spread
    assert!(state.apply_canvas(&wide(), true));
    assert!(state.spread());
}

#[test]
fn test_reconfigure_drops_pageshift_without_spread() {
    let mut state = ViewerState::new(config_with(10, true, false, true));
    state.reconfigure(Toggles {
        spread: false,
        highlight: false,
        pageshift: true,
    });
    assert_eq!(state.pages().len(), 10);
    assert!(!state.config().pageshift);
}

#[test]
fn test_preload_windows_hold_only_nearby_slots() {
    let mut state = ViewerState::new(config(40));
    let nav = state.navigate(Direction::Both, Some("20"));
    let windows: Vec<_> = nav
        .preloads
        .iter()
        .map(|request| state.preload_window(request))
        .collect();
    assert_eq!(
        windows,
        vec![
            (20..26).map(page).collect::<Vec<_>>(),
            (14..20).rev().map(page).collect::<Vec<_>>(),
        ]
    );
}

// =============================================================================
// RENDER GENERATIONS AND SNAPSHOTS
// =============================================================================

#[test]
fn test_only_latest_render_is_current() {
    let mut state = ViewerState::new(config(3));
    let first = state.begin_render();
    let second = state.begin_render();
    assert!(!state.is_current_render(first));
    assert!(state.is_current_render(second));
}

#[test]
fn test_snapshot_reports_position_and_path() {
    let mut state = ViewerState::new(config_with(6, true, false, false));
    state.navigate(Direction::Right, None);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.position, 2);
    assert_eq!(snapshot.indicator, 3);
    assert!(snapshot.spread);
    assert_eq!(snapshot.path, (page(2), page(3)));
    assert_eq!(snapshot.pages.len(), 6);
}

#[test]
fn test_plan_from_json() {
    let snapshot = plan_from_json(
        r#"{"pageCount": 4, "seriesId": "S", "spread": true, "r2l": true}"#,
    )
    .unwrap();
    assert_eq!(snapshot.position, 2);
    assert_eq!(snapshot.path, (page(1), page(0)));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["paging"]["step"], 2);
    assert_eq!(json["pages"][0], "/img/S/3");
}

#[test]
fn test_plan_from_bad_json() {
    assert!(matches!(
        plan_from_json("{not json"),
        Err(ViewerError::Serialization(_))
    ));
}
