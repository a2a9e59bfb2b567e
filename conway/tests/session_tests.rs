//! Session command flow, the way a frame loop drives it.

use conway::rng::LifeRng;
use conway::{CellColor, LifeConfig, LifeError, Session};

fn live_in_row(row: &[bool]) -> usize {
    row.iter().filter(|&&alive| alive).count()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_default_session_matches_reference_config() {
    let session = Session::new(LifeConfig::default(), LifeRng::new(1)).unwrap();
    let board = session.board();
    assert_eq!((board.width(), board.height()), (200, 200));
    assert!(board.rows().all(|row| live_in_row(row) == 49));
    assert!(board.border_is_dead());
}

#[test]
fn test_zero_height_config_rejected() {
    let result = Session::new(LifeConfig::with_board(10, 0, 3), LifeRng::new(1));
    assert_eq!(
        result.err(),
        Some(LifeError::InvalidDimensions { width: 10, height: 0 })
    );
}

#[test]
fn test_error_messages() {
    let err = LifeError::InvalidSeedWidth { live_seed_width: 0, width: 200 };
    assert_eq!(err.to_string(), "live seed width 0 outside 1..=200");

    let err = LifeError::Allocation { cells: 40804 };
    assert_eq!(err.to_string(), "out of memory allocating 40804 cells");
}

// =============================================================================
// Frame Loop Tests
// =============================================================================

#[test]
fn test_frames_step_only_while_running() {
    let mut session = Session::new(LifeConfig::with_board(40, 40, 20), LifeRng::new(8)).unwrap();
    let mut expected = session.board().clone();

    for _ in 0..5 {
        session.tick();
    }
    assert_eq!(session.board(), &expected);

    session.toggle_running();
    for _ in 0..5 {
        session.tick();
        expected.step();
    }
    assert_eq!(session.board(), &expected);
    assert_eq!(session.generation(), 5);
}

#[test]
fn test_regenerate_while_paused() {
    let mut session = Session::new(LifeConfig::with_board(30, 30, 8), LifeRng::new(4)).unwrap();
    let first = session.board().clone();

    session.regenerate();

    assert!(!session.is_running());
    assert_ne!(session.board(), &first);
    assert!(session.board().rows().all(|row| live_in_row(row) == 7));
}

#[test]
fn test_same_rng_seed_same_session() {
    let config = LifeConfig::with_board(25, 25, 10);
    let mut a = Session::new(config, LifeRng::new(123)).unwrap();
    let mut b = Session::new(config, LifeRng::new(123)).unwrap();
    assert_eq!(a.board(), b.board());

    a.regenerate();
    b.regenerate();
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_color_cycles_through_palette() {
    let mut session = Session::new(LifeConfig::with_board(5, 5, 1), LifeRng::new(0)).unwrap();
    let mut seen = vec![session.color()];
    for _ in 0..4 {
        session.cycle_color();
        seen.push(session.color());
    }
    assert_eq!(seen[..4], CellColor::ALL);
    assert_eq!(seen[4], CellColor::Green);
}
