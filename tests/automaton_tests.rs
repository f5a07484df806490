// Integration tests for the automaton engine

use ecatty::automaton::constants::MAX_LENGTH;
use ecatty::automaton::{AutomatonError, AutomatonLine, Boundary, Cell, Rule, StartCondition};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a line from a `#`/`.` pattern
fn line_from(pattern: &str, rule: u8) -> AutomatonLine {
    let mut line = AutomatonLine::new(pattern.len(), Rule::new(rule));
    for (cell, c) in line.cells_mut().iter_mut().zip(pattern.chars()) {
        *cell = if c == '#' { Cell::Alive } else { Cell::Dead };
    }
    line
}

fn all(cell: Cell, length: usize) -> Vec<Cell> {
    vec![cell; length]
}

// === RULE TABLE PROPERTIES ===

#[test]
fn test_all_dead_line_follows_pattern_zero_bit() {
    for rule in 0..=255u8 {
        for length in [3, 4, 17] {
            let mut line = line_from(&".".repeat(length), rule);
            line.tick();

            let expected = if rule & 1 == 0 { Cell::Dead } else { Cell::Alive };
            assert_eq!(
                line.cells(),
                all(expected, length).as_slice(),
                "rule {} length {}",
                rule,
                length
            );
        }
    }
}

#[test]
fn test_rule_255_fills_every_cell() {
    for pattern in ["#.#..##.", "........", "########", "#"] {
        let mut line = line_from(pattern, 255);
        line.tick();
        assert_eq!(line.cells(), all(Cell::Alive, pattern.len()).as_slice());
    }
}

#[test]
fn test_rule_0_clears_every_cell() {
    for pattern in ["#.#..##.", "........", "########", "#"] {
        let mut line = line_from(pattern, 0);
        line.tick();
        assert_eq!(line.cells(), all(Cell::Dead, pattern.len()).as_slice());
    }
}

// === WRAPAROUND ===

#[test]
fn test_rule_30_from_middle_cell() {
    let mut line = line_from("..#..", 30);
    line.tick();
    assert_eq!(line.to_string(), ".###.");
}

#[test]
fn test_rule_30_wraps_at_both_ends() {
    // Index 0 sees index 4 on its left; index 4 sees index 0 on its right
    let mut line = line_from("#....", 30);
    line.tick();
    assert_eq!(line.to_string(), "##..#");

    line.tick();
    assert_eq!(line.to_string(), "..###");
}

#[test]
fn test_dead_boundary_keeps_edges_apart() {
    let mut line = line_from("#....", 30);
    line.set_boundary(Boundary::Dead);
    line.tick();
    assert_eq!(line.to_string(), "##...");
}

// === RECONFIGURATION ===

#[test]
fn test_set_length_rejects_invalid_values() {
    let mut line = line_from("#.#.#.#.#.", 30);
    let before = line.cells().to_vec();

    for bad in [0, -5, MAX_LENGTH as i64 + 1] {
        let err = line.set_length(bad).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::InvalidLength {
                requested: bad,
                max: MAX_LENGTH
            }
        );
        assert_eq!(line.length(), 10);
        assert_eq!(line.cells(), before.as_slice());
    }
}

#[test]
fn test_set_length_reallocates_all_dead() {
    let mut line = line_from("#.#.#.#.#.", 30);
    line.set_length(50).expect("valid length");

    assert_eq!(line.length(), 50);
    assert_eq!(line.cells(), all(Cell::Dead, 50).as_slice());
    assert_eq!(line.rule(), Rule::new(30));
}

#[test]
fn test_change_rule_rejects_out_of_range() {
    let mut line = line_from("..#..", 30);

    assert_eq!(
        line.change_rule(256),
        Err(AutomatonError::InvalidRule { requested: 256 })
    );
    assert_eq!(
        line.change_rule(-1),
        Err(AutomatonError::InvalidRule { requested: -1 })
    );
    assert_eq!(line.rule(), Rule::new(30));
    assert_eq!(line.to_string(), "..#..");
}

#[test]
fn test_change_rule_applies_on_next_tick() {
    let mut line = line_from("..#..", 0);
    line.change_rule(30).expect("valid rule");
    assert_eq!(line.to_string(), "..#..");

    line.tick();
    assert_eq!(line.to_string(), ".###.");
}

#[test]
fn test_change_rule_to_current_rule_is_noop() {
    let mut a = line_from("#..#.##...#", 110);
    let mut b = a.clone();
    b.change_rule(110).expect("valid rule");

    for _ in 0..10 {
        a.tick();
        b.tick();
        assert_eq!(a.cells(), b.cells());
    }
}

// === BUFFER CONTRACT ===

#[test]
fn test_cells_view_is_stable_across_ticks() {
    let mut line = line_from("..#..", 30);
    let before = line.cells().as_ptr();

    line.tick();

    // Re-fetched view shares storage with the pre-tick view
    assert_eq!(line.cells().as_ptr(), before);
    assert_eq!(line.to_string(), ".###.");
}

#[test]
fn test_cells_mut_seeds_the_next_tick() {
    let mut line = AutomatonLine::new(5, Rule::new(30));
    line.cells_mut().fill(Cell::Dead);
    line.cells_mut()[0] = Cell::Alive;

    line.tick();
    assert_eq!(line.to_string(), "##..#");
}

// === SEEDING ===

#[test]
fn test_reset_to_single_cell_after_resize() {
    let mut line = AutomatonLine::new(10, Rule::new(30));
    line.set_length(8).expect("valid length");
    assert_eq!(line.population(), 0);

    line.reset_to_single_cell();
    assert_eq!(line.population(), 1);
    assert_eq!(line.cells()[4], Cell::Alive);
}

#[test]
fn test_randomize_any_length() {
    let mut rng = StdRng::seed_from_u64(2024);
    for length in [1, 2, 3, 255, 1000] {
        let mut line = AutomatonLine::new(length, Rule::new(30));
        line.randomize(&mut rng);
        assert_eq!(line.length(), length);
        assert_eq!(line.cells().len(), length);
    }
}

#[test]
fn test_randomize_is_roughly_balanced() {
    let mut line = AutomatonLine::new(10_000, Rule::new(30));
    line.seed(StartCondition::Random, &mut StdRng::seed_from_u64(99));

    let alive = line.population();
    assert!(
        (4_500..=5_500).contains(&alive),
        "expected about half alive, got {}",
        alive
    );
}

// === MULTI-STEP ===

#[test]
fn test_ticks_matches_repeated_tick() {
    for boundary in [Boundary::Wrap, Boundary::Dead] {
        let mut batched = line_from("#..#.##...#.", 110);
        batched.set_boundary(boundary);
        let mut stepped = line_from("#..#.##...#.", 110);
        stepped.set_boundary(boundary);

        batched.ticks(4);
        for _ in 0..4 {
            stepped.tick();
        }

        assert_eq!(batched.cells(), stepped.cells(), "{:?}", boundary);
    }
}

#[test]
fn test_ticks_zero_changes_nothing() {
    let mut line = line_from("..##.#..", 30);
    line.ticks(0);

    assert_eq!(line.to_string(), "..##.#..");
    assert_eq!(line.rule(), Rule::new(30));
}

// === END TO END ===

#[test]
fn test_rule_90_three_generations() {
    let mut line = line_from("...#...", 90);
    let mut rows = Vec::new();
    for _ in 0..3 {
        line.tick();
        rows.push(line.to_string());
    }

    assert_eq!(rows, vec!["..#.#..", ".#...#.", "#.#.#.#"]);
}
