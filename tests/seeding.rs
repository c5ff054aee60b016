//! End-to-end pass over the public surface: seed a board from text,
//! run it, and check the errors a host would show its user.

use conway_life::{Board, SeedError, SeedPolicy};

fn live_cells(b: &Board) -> Vec<(usize, usize)> {
    let mut out = vec![];
    for y in 0..b.height() {
        for x in 0..b.width() {
            if b.is_alive(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn seed_then_run_a_blinker() {
    let mut b = Board::new(50, 50);
    b.seed_from_text(["1,2", "2,2", "3,2"], SeedPolicy::default())
        .unwrap();

    b.step();
    assert_eq!(live_cells(&b), vec![(2, 1), (2, 2), (2, 3)]);

    b.step();
    assert_eq!(live_cells(&b), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn rejected_seed_reports_line_and_reason() {
    let mut b = Board::new(50, 50);
    let errors = b
        .seed_from_text(["10,10", "oops", "60,1"], SeedPolicy::default())
        .unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], SeedError::MalformedLine { line: 1 }));
    assert!(matches!(errors[1], SeedError::OutOfRange { line: 2, .. }));

    // The messages are what a host shows its user.
    assert_eq!(
        errors[0].to_string(),
        "line 1 does not split into two comma-separated fields"
    );
    assert_eq!(
        errors[1].to_string(),
        "line 2: (60, 1) is outside the 50x50 board"
    );
}

#[test]
fn independent_boards_do_not_interfere() {
    let mut small = Board::new(10, 10);
    let mut big = Board::new(50, 50);

    small.seed_from_text(["9,9"], SeedPolicy::default()).unwrap();
    big.seed_from_text(["20,20"], SeedPolicy::default()).unwrap();

    small.reset();
    assert!(big.is_alive(20, 20));

    // A coordinate fine for one board is out of range for the other.
    let errors = small
        .seed_from_text(["20,20"], SeedPolicy::default())
        .unwrap_err();
    assert!(matches!(errors[0], SeedError::OutOfRange { line: 0, .. }));
}

#[test]
fn manual_edits_and_seeding_compose() {
    let mut b = Board::new(50, 50);
    b.seed_from_text(["5,5"], SeedPolicy::default()).unwrap();

    // Toggling a seeded cell kills it; toggling it again revives it.
    assert!(!b.toggle(5, 5));
    assert!(b.toggle(5, 5));

    // Re-seeding over a live cell keeps it alive.
    b.seed_from_text(["5,5"], SeedPolicy::default()).unwrap();
    assert!(b.is_alive(5, 5));
}
