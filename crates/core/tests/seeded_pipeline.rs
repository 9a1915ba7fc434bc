//! Integration test: labels → ladder → trace → render commands → SVG, with a
//! seeded RNG so every run sees the same ladder.

use ghostleg_core::labels::parse_labels;
use ghostleg_core::svg::render_svg;
use ghostleg_core::{LadderConfig, PathSegment, Session, generate, trace};
use ghostleg_protocol::{Point, RenderCommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 20_240_601;

/// Apply each rung as a swap of adjacent lanes, top to bottom. Entry `i` of
/// the result is the terminal lane of start lane `i`.
fn permutation_by_rows(ladder: &ghostleg_core::Ladder) -> Vec<usize> {
    let n = ladder.lane_count();
    // position[lane] = which start currently occupies that lane
    let mut occupant: Vec<usize> = (0..n).collect();
    for rung in ladder.rungs() {
        occupant.swap(rung.left_lane, rung.right_lane());
    }
    let mut terminal = vec![0; n];
    for (lane, start) in occupant.into_iter().enumerate() {
        terminal[start] = lane;
    }
    terminal
}

/// `left_lane` of every rung generated for `["A", "B", "C", "D"]` with `SEED`,
/// top row first.
const SEED_RUNGS: [usize; 39] = [
    0, 0, 1, 2, 0, 0, 1, 0, 2, 0, 0, 2, 0, 0, 2, 0, 2, 1, 0, 1, //
    2, 1, 2, 0, 1, 1, 1, 2, 2, 0, 0, 2, 1, 2, 1, 0, 2, 0, 0,
];

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> PathSegment {
    PathSegment::new(Point::new(x1, y1), Point::new(x2, y2))
}

#[test]
fn seeded_four_lane_fixture_is_stable() {
    let config = LadderConfig::default();
    let labels = ["A", "B", "C", "D"];

    let ladder = generate(&labels, &config, &mut ChaCha8Rng::seed_from_u64(SEED));
    let left_lanes: Vec<usize> = ladder.rungs().iter().map(|r| r.left_lane).collect();
    assert_eq!(left_lanes, SEED_RUNGS);
    for (row, rung) in (1..).zip(ladder.rungs()) {
        assert_eq!(rung.y, config.row_y(row));
    }

    let a = trace(&ladder, &ladder.lanes()[0]).expect("lane 0 belongs to ladder");
    assert_eq!(a.start, 0);
    assert_eq!(a.terminal, 2);
    assert_eq!(a.hops(), 22);
    assert_eq!(a.segments.len(), 45);
    assert_eq!(
        a.segments[..6],
        [
            seg(50.0, 50.0, 50.0, 65.0),
            seg(50.0, 65.0, 150.0, 65.0),
            seg(150.0, 65.0, 150.0, 80.0),
            seg(150.0, 80.0, 50.0, 80.0),
            seg(50.0, 80.0, 50.0, 125.0),
            seg(50.0, 125.0, 150.0, 125.0),
        ]
    );
    assert_eq!(
        a.segments[a.segments.len() - 4..],
        [
            seg(250.0, 545.0, 250.0, 560.0),
            seg(250.0, 560.0, 350.0, 560.0),
            seg(350.0, 560.0, 350.0, 605.0),
            seg(350.0, 605.0, 250.0, 605.0),
        ]
    );
    assert_eq!(a.segments.last(), Some(&seg(250.0, 605.0, 250.0, 650.0)));

    let again = generate(&labels, &config, &mut ChaCha8Rng::seed_from_u64(SEED));
    assert_eq!(trace(&again, &again.lanes()[0]).expect("own lane"), a);
}

#[test]
fn default_geometry_maps_lanes_one_to_one() {
    let config = LadderConfig::default();
    for seed in 0..16 {
        let ladder = generate(
            &["A", "B", "C", "D", "E", "F"],
            &config,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        let expected = permutation_by_rows(&ladder);

        let mut terminals: Vec<usize> = ladder
            .lanes()
            .iter()
            .map(|lane| trace(&ladder, lane).expect("own lane").terminal)
            .collect();
        assert_eq!(terminals, expected, "seed {seed}");

        terminals.sort_unstable();
        assert_eq!(terminals, (0..6).collect::<Vec<_>>(), "seed {seed}");
    }
}

#[test]
fn two_lanes_cross_on_every_row() {
    let config = LadderConfig::default();
    let ladder = generate(&["A", "B"], &config, &mut ChaCha8Rng::seed_from_u64(SEED));
    assert_eq!(ladder.rungs().len(), 39);
    assert!(ladder.rungs().iter().all(|r| r.left_lane == 0));

    // 39 crossings: odd parity swaps the two lanes.
    let from_a = trace(&ladder, &ladder.lanes()[0]).expect("own lane");
    assert_eq!(from_a.hops(), 39);
    assert_eq!(from_a.terminal, 1);
    let from_b = trace(&ladder, &ladder.lanes()[1]).expect("own lane");
    assert_eq!(from_b.terminal, 0);
}

#[test]
fn text_input_to_svg() {
    let labels = parse_labels("Alice\n\n\nBob\nCarol\n");
    assert_eq!(labels, vec!["Alice", "", "Bob", "Carol", ""]);

    let mut session =
        Session::with_seed(LadderConfig::default(), SEED).expect("default config is valid");
    let ladder = session.generate(&labels).expect("no trace running");
    assert_eq!(ladder.lane_count(), 3);

    let tracer = session.start().expect("ladder has lanes");
    let segments: Vec<_> = tracer.collect();
    let terminal_bottom = segments.last().map(|s| s.to).expect("at least one segment");
    let terminal = session
        .ladder()
        .lanes()
        .iter()
        .position(|l| l.bottom() == terminal_bottom)
        .expect("path ends on a lane");
    let start = session
        .ladder()
        .lanes()
        .iter()
        .position(|l| Some(l.top()) == segments.first().map(|s| s.from))
        .expect("path starts on a lane");
    session.finish(ghostleg_core::Trace {
        start,
        terminal,
        segments,
    });

    let commands = session.render();
    assert!(matches!(commands.first(), Some(RenderCommand::Clear { .. })));

    let canvas = session.config().canvas(session.ladder().lane_count());
    let svg = render_svg(&commands, canvas.w, canvas.h, false);
    for name in ["Alice", "Bob", "Carol"] {
        assert!(svg.contains(name), "{name} missing from SVG");
    }
    assert!(svg.contains(r#"<g id="path">"#));
}
