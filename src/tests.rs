use crate::*;
use crate::cursor::normalize_heading;
use crate::recording::Stroke;

use alloc::format;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::real::Real;

fn close(a: Float, b: Float) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

fn close_couple(a: Couple, b: Couple) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

fn same_heading(a: Float, b: Float) -> bool {
    let d = normalize_heading(a - b);
    d < 1e-6 || 360.0 - d < 1e-6
}

fn direction(stroke: &Stroke) -> Float {
    let d = stroke.to - stroke.from;
    d.y.atan2(d.x).to_degrees()
}

fn triangle_area(side: Float) -> Float {
    (3.0 as Float).sqrt() / 4.0 * side * side
}

/// (bounding box center, side) of a recorded triangle fill
fn fill_geometry(vertices: &[Couple]) -> (Couple, Float) {
    let side = vertices[1].x - vertices[0].x;
    let center = Couple::new(
        (vertices[0].x + vertices[1].x) / 2.0,
        (vertices[0].y + vertices[2].y) / 2.0,
    );
    (center, side)
}

fn styled_recorder() -> Recorder {
    Recorder::with_state(CursorState {
        position: Couple::new(12.5, -4.0),
        heading: 17.0,
        color: Color::Named("purple"),
        speed: 3,
        ..CursorState::default()
    })
}

fn assert_restored(before: &CursorState, after: &CursorState) {
    assert_eq!(before.style(), after.style());
    assert!(close_couple(before.position, after.position), "{:?} != {:?}", before.position, after.position);
    assert!(same_heading(before.heading, after.heading), "{} != {}", before.heading, after.heading);
}

#[test]
fn heading_normalization() {
    assert_eq!(normalize_heading(370.0), 10.0);
    assert_eq!(normalize_heading(-90.0), 270.0);
    assert_eq!(normalize_heading(360.0), 0.0);

    let mut r = Recorder::new();
    r.right(30.0);
    assert_eq!(r.heading(), 330.0);
    r.left(750.0);
    assert_eq!(r.heading(), 0.0);
}

#[test]
fn square() {
    let mut r = Recorder::new();
    polygon(&mut r, 100.0, 4).unwrap();

    let forwards: Vec<_> = r.forwards().collect();
    assert_eq!(forwards.len(), 4);
    assert!(forwards.iter().all(|s| s.distance == 100.0 && s.drawn));
    assert_eq!(r.turns().collect::<Vec<_>>(), [90.0; 4]);
    assert!(close_couple(r.position(), C_ZERO));
    assert!(same_heading(r.heading(), 0.0));
}

#[test]
fn polygon_closure() {
    for n in 2..=12 {
        for side in [0.0, 1.0, 37.5, 250.0] {
            let mut r = styled_recorder();
            let before = *r.state();
            polygon(&mut r, side, n).unwrap();
            assert_restored(&before, r.state());
            assert_eq!(r.forwards().count(), n as usize);
        }
    }
}

#[test]
fn single_sided_polygon() {
    let mut r = styled_recorder();
    let before = *r.state();
    polygon(&mut r, 20.0, 1).unwrap();

    assert_eq!(r.forwards().count(), 1);
    assert_eq!(r.turns().collect::<Vec<_>>(), [360.0]);
    let (sin, cos) = before.heading.to_radians().sin_cos();
    let end = before.position + Couple::new(20.0 * cos, 20.0 * sin);
    assert!(close_couple(r.position(), end));
    assert!(same_heading(r.heading(), before.heading));
    assert_eq!(before.style(), r.state().style());

    let mut r = styled_recorder();
    polygon(&mut r, 0.0, 1).unwrap();
    assert_restored(&before, r.state());
}

#[test]
fn polygon_preconditions() {
    let mut r = Recorder::new();
    assert_eq!(polygon(&mut r, 10.0, 0), Err(DrawError::InvalidSides(0)));
    assert_eq!(polygon(&mut r, -1.0, 3), Err(DrawError::InvalidLength("side", -1.0)));
    assert!(polygon(&mut r, Float::NAN, 3).is_err());
    r.set_draw_mode(false);
    assert_eq!(polygon(&mut r, 10.0, 3), Err(DrawError::PenUp));
    assert!(r.commands().is_empty());
}

#[test]
fn triangle_in_color() {
    let mut r = styled_recorder();
    let before = *r.state();
    triangle(&mut r, 50.0, Color::RED).unwrap();

    assert_eq!(r.forwards().count(), 3);
    assert!(r.forwards().all(|s| s.color == Color::RED));
    assert_eq!(r.turns().collect::<Vec<_>>(), [-120.0; 3]);
    assert_restored(&before, r.state());
}

#[test]
fn triangle_rejects_colors() {
    let mut r = Recorder::new();
    let bogus = Color::Named("not a color");
    assert_eq!(triangle(&mut r, 5.0, bogus), Err(DrawError::InvalidColor(bogus)));
    let hsv = Color::Hsv(Hsv::new(400.0, 0.5, 0.5));
    assert_eq!(triangle(&mut r, 5.0, hsv), Err(DrawError::InvalidColor(hsv)));
    assert!(r.commands().is_empty());
}

#[test]
fn hexagon_of_triangles() {
    let mut r = styled_recorder();
    let before = *r.state();
    hexagon(&mut r, 30.0).unwrap();

    assert_eq!(r.forwards().count(), 18);
    assert!(r.forwards().all(|s| s.color == Color::CYAN));
    assert_eq!(r.turns().filter(|a| *a == 60.0).count(), 6);
    assert_restored(&before, r.state());

    // every triangle starts at the center
    let forwards: Vec<_> = r.forwards().collect();
    for t in forwards.chunks(3) {
        assert!(close_couple(t[0].from, before.position));
    }
}

#[test]
fn circle_steps_follow_circumference() {
    let mut r = styled_recorder();
    let before = *r.state();
    circle(&mut r, 100.0).unwrap();

    let circumference = 2.0 * core::f64::consts::PI * 100.0;
    assert_eq!(circle_steps(circumference), 62);
    assert_eq!(r.forwards().count(), 62);
    assert!(r.forwards().all(|s| close(s.distance, circumference / 62.0)));
    assert!(r.forwards().all(|s| s.color == Color::RED));
    assert_restored(&before, r.state());
}

#[test]
fn degenerate_circles() {
    let mut r = Recorder::new();
    circle(&mut r, 0.0).unwrap();
    assert_eq!(r.forwards().count(), 0);

    circle(&mut r, 1.0).unwrap();
    assert_eq!(r.forwards().count(), 3);
    assert!(close_couple(r.position(), C_ZERO));

    // one and two steps by circumference, still drawn as triangles
    for radius in [2.0, 4.0] {
        let circumference = 2.0 * core::f64::consts::PI * radius;
        assert!(((circumference / 10.0).floor() as u32) < 3);
        r.forget();
        circle(&mut r, radius).unwrap();
        assert_eq!(r.forwards().count(), 3);
        assert!(r.forwards().all(|s| close(s.distance, circumference / 3.0)));
        assert!(close_couple(r.position(), C_ZERO));
    }

    assert!(circle(&mut r, -3.0).is_err());
}

#[test]
fn generators_validate_before_moving() {
    type Generator = fn(&mut Recorder, Float) -> DrawResult<()>;
    let generators: [(Generator, &'static str); 4] = [
        (|r, side| hexagon(r, side), "side"),
        (|r, radius| circle(r, radius), "radius"),
        (|r, length| diamond(r, length, 10.0), "length"),
        (|r, side| island_edge(r, side, 2), "side"),
    ];

    for (generator, what) in generators {
        let mut r = Recorder::new();
        assert_eq!(generator(&mut r, -5.0), Err(DrawError::InvalidLength(what, -5.0)));
        assert!(r.commands().is_empty());

        r.set_draw_mode(false);
        assert_eq!(generator(&mut r, 5.0), Err(DrawError::PenUp));
        assert!(r.commands().is_empty());
    }
}

#[test]
fn command_positions() {
    let mut r = styled_recorder();
    r.forward(10.0);
    r.forget();
    let start = r.position();

    r.set_heading(0.0);
    r.left(90.0);
    r.forward(5.0);
    r.flush();
    r.move_to(Couple::new(1.0, 2.0));
    r.left(45.0);
    let positions: Vec<_> = r.positions().collect();

    assert_eq!(r.commands().len(), 5);
    assert_eq!(positions[0], start);
    assert!(close_couple(positions[1], start + Couple::new(0.0, 5.0)));
    assert_eq!(positions[2], positions[1]);
    assert_eq!(positions[3], Couple::new(1.0, 2.0));
    assert_eq!(positions[4], Couple::new(1.0, 2.0));
    r.log_commands();

    r.clear();
    assert_eq!(r.positions().collect::<Vec<_>>(), [C_ZERO]);
}

#[test]
fn canvas_rejects_nan() {
    let canvas = Canvas::new(16, 16);
    assert_eq!(canvas.pixel_at(Couple::new(Float::NAN, 0.0)), None);
    assert_eq!(canvas.pixel_at(Couple::new(0.0, Float::NAN)), None);
    assert_eq!(canvas.pixel_at(Couple::new(Float::INFINITY, 0.0)), None);
    assert!(canvas.pixel_at(C_ZERO).is_some());
}

#[test]
fn diamond_returns_home() {
    let mut r = styled_recorder();
    let before = *r.state();
    diamond(&mut r, 80.0, 30.0).unwrap();

    assert_eq!(r.commands().len(), 9);
    assert_restored(&before, r.state());

    // the far tip sits `length` away along the heading
    let tip = r.forwards().nth(1).unwrap().to;
    let (sin, cos) = before.heading.to_radians().sin_cos();
    let expected = before.position + Couple::new(80.0 * cos, 80.0 * sin);
    assert!(close_couple(tip, expected));
}

#[test]
fn spiral_segments() {
    let mut r = styled_recorder();
    let before = *r.state();
    spiral_helper(&mut r, 5.0, 33.0, 7, 4).unwrap();

    let forwards: Vec<_> = r.forwards().collect();
    assert_eq!(forwards.len(), 7);
    for (i, s) in forwards.iter().enumerate() {
        assert_eq!(s.distance, ((i + 1) as Float) * 5.0);
        assert_eq!(s.color, SPIRAL_COLORS[i % 3]);
    }
    assert!(same_heading(r.heading(), before.heading + 7.0 * 33.0));
    assert_eq!(before.style(), r.state().style());
}

#[test]
fn spiral_window() {
    let mut r = styled_recorder();
    spiral(&mut r, 10.0, 90.0, 4, 0).unwrap();

    assert_eq!(r.commands()[0], Command::Clear);
    let first = r.forwards().next().unwrap();
    assert!(close_couple(first.from, C_ZERO));
    assert!(close_couple(first.to, Couple::new(0.0, -10.0)));
    assert!(!r.visible());
    assert_eq!(r.flushes(), 1);

    spiral(&mut r, 10.0, 90.0, 4, 5).unwrap();
    assert_eq!(r.flushes(), 0);

    assert_eq!(spiral(&mut r, 10.0, 90.0, 0, 5), Err(DrawError::InvalidCount("n", 0)));
    assert_eq!(spiral(&mut r, 10.0, 90.0, 3, 11), Err(DrawError::InvalidSpeed(11)));
    assert!(spiral(&mut r, 10.0, Float::INFINITY, 3, 1).is_err());
}

#[test]
fn rosette_symmetry() {
    let mut r = styled_recorder();
    let before = *r.state();
    rosette_helper(&mut r, 40.0, 5, 4, 2).unwrap();

    let forwards: Vec<_> = r.forwards().collect();
    assert_eq!(forwards.len(), 20);
    for (j, shape) in forwards.chunks(4).enumerate() {
        let start = shape[0];
        assert!(close_couple(start.from, before.position));
        assert!(same_heading(direction(start), before.heading + (j as Float) * 72.0));
        assert!(shape.iter().all(|s| s.color == ROSETTE_COLORS[j % 2]));
    }
    assert_restored(&before, r.state());
}

#[test]
fn rosette_preconditions() {
    let mut r = Recorder::new();
    assert_eq!(rosette_helper(&mut r, 4.0, 3, 2, 1), Err(DrawError::InvalidSides(2)));
    assert_eq!(rosette_helper(&mut r, 4.0, 0, 5, 1), Err(DrawError::InvalidCount("k", 0)));
    assert!(r.commands().is_empty());

    rosette(&mut r, 20.0, 6, 3, 0).unwrap();
    assert_eq!(r.forwards().count(), 18);
    assert!(same_heading(r.heading(), 90.0));
    assert!(!r.visible());
}

#[test]
fn two_lines_demo() {
    let mut r = Recorder::new();
    two_lines(&mut r, 7).unwrap();

    let forwards: Vec<_> = r.forwards().collect();
    assert_eq!(forwards.len(), 2);
    assert_eq!(forwards[0].color, Color::GREEN);
    assert_eq!(forwards[1].color, Color::BLUE);
    assert!(close_couple(r.position(), Couple::new(100.0, 200.0)));
}

#[test]
fn base_triangle() {
    let mut r = styled_recorder();
    let before = *r.state();
    subdivide_triangle(&mut r, Couple::new(3.0, 4.0), 10.0, 0).unwrap();

    let fills: Vec<_> = r.fills().collect();
    assert_eq!(fills.len(), 1);
    let (center, side) = fill_geometry(fills[0].0);
    assert!(close_couple(center, Couple::new(3.0, 4.0)));
    assert!(close(side, 10.0));
    // apex up
    assert!(fills[0].0[2].y > fills[0].0[0].y);
    assert_restored(&before, r.state());
    assert!(!r.solid());
}

#[test]
fn depth_two_subdivision() {
    let mut r = Recorder::new();
    subdivide_triangle(&mut r, C_ZERO, 8.0, 2).unwrap();

    let h = |side: Float| (3.0 as Float).sqrt() / 2.0 * side;
    let children = |x: Float, y: Float, side: Float| {
        [
            Couple::new(x, y),
            Couple::new(x + side / 2.0, y),
            Couple::new(x + side / 4.0, y + h(side) / 2.0),
        ]
    };
    let expected: Vec<Couple> = children(0.0, 0.0, 8.0)
        .iter()
        .flat_map(|c| children(c.x, c.y, 4.0))
        .collect();

    let fills: Vec<_> = r.fills().collect();
    assert_eq!(fills.len(), 9);
    for ((vertices, _), want) in fills.iter().zip(expected) {
        let (center, side) = fill_geometry(vertices);
        assert!(close(side, 2.0));
        assert!(close_couple(center, want), "{:?} != {:?}", center, want);
    }
}

#[test]
fn subdivision_counts_and_area() {
    for depth in 0..=5 {
        let mut r = Recorder::new();
        subdivide_triangle(&mut r, Couple::new(-20.0, 7.0), 64.0, depth).unwrap();
        assert_eq!(r.fills().count(), 3usize.pow(depth));

        let area: Float = r.fills().map(|(v, _)| triangle_area(fill_geometry(v).1)).sum();
        let expected = (0.75 as Float).powi(depth as i32) * triangle_area(64.0);
        assert!(close(area, expected), "depth {}: {} != {}", depth, area, expected);
    }
}

#[test]
fn subdivision_preconditions() {
    let mut r = Recorder::new();
    r.set_solid(true);
    assert_eq!(subdivide_triangle(&mut r, C_ZERO, 8.0, 1), Err(DrawError::PenSolid));
    r.set_solid(false);
    assert_eq!(
        subdivide_triangle(&mut r, C_ZERO, 8.0, SUBDIVISION_MAX_DEPTH + 1),
        Err(DrawError::DepthTooLarge(SUBDIVISION_MAX_DEPTH + 1, SUBDIVISION_MAX_DEPTH)),
    );
    assert!(subdivide_triangle(&mut r, Couple::new(Float::NAN, 0.0), 8.0, 1).is_err());
    assert!(r.commands().is_empty());
}

#[test]
fn sierpinski_window() {
    let mut r = Recorder::new();
    sierpinski(&mut r, 200.0, 3, 0).unwrap();

    assert_eq!(r.fills().count(), 27);
    assert!(r.fills().all(|(_, c)| c == Color::MAGENTA));
    assert_eq!(r.flushes(), 1);
    assert!(!r.visible());
}

#[test]
fn fills_keep_pen_mode() {
    let mut r = styled_recorder();
    let before = *r.state();
    fill_rect(&mut r, Couple::new(1.0, 1.0), 4.0, 2.0).unwrap();
    fill_triangle(&mut r, Couple::new(-1.0, 0.0), 3.0).unwrap();

    let fills: Vec<_> = r.fills().collect();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].0[0], Couple::new(-1.0, 0.0));
    assert_eq!(fills[0].0[2], Couple::new(3.0, 2.0));
    assert_restored(&before, r.state());
}

#[test]
fn edge_base_case() {
    let mut r = Recorder::new();
    island_edge(&mut r, 42.0, 0).unwrap();
    assert_eq!(r.commands().len(), 1);
    assert_eq!(r.forwards().next().unwrap().distance, 42.0);
}

#[test]
fn edge_counts_and_length() {
    for depth in 0..=4 {
        let mut r = styled_recorder();
        let before = *r.state();
        island_edge(&mut r, 256.0, depth).unwrap();

        let step = 256.0 / (4.0 as Float).powi(depth as i32);
        assert_eq!(r.forwards().count(), 8usize.pow(depth));
        assert!(r.forwards().all(|s| close(s.distance, step)));
        // six turns per motif
        assert_eq!(r.turns().count(), 6 * (8usize.pow(depth) - 1) / 7);
        assert!(close(r.path_length(), (2.0 as Float).powi(depth as i32) * 256.0));

        // net displacement of one side along the heading
        let (sin, cos) = before.heading.to_radians().sin_cos();
        let end = before.position + Couple::new(256.0 * cos, 256.0 * sin);
        assert!(close_couple(r.position(), end));
        assert!(same_heading(r.heading(), before.heading));
    }
}

#[test]
fn island_closes() {
    let mut r = Recorder::new();
    island(&mut r, 100.0, 2, 0).unwrap();

    assert_eq!(r.forwards().count(), 4 * 64);
    assert!(r.forwards().all(|s| s.color == Color::GREEN && s.drawn));
    assert!(close_couple(r.position(), Couple::new(50.0, -50.0)));
    assert!(same_heading(r.heading(), 90.0));
    r.log_commands();
    assert_eq!(r.color(), Color::BLACK);
    assert!(!r.visible());
    assert_eq!(r.flushes(), 1);

    assert_eq!(
        island(&mut r, 100.0, ISLAND_MAX_DEPTH + 1, 0),
        Err(DrawError::DepthTooLarge(ISLAND_MAX_DEPTH + 1, ISLAND_MAX_DEPTH)),
    );
}

#[test]
fn guard_restores_on_early_return() {
    fn bail<C: Cursor>(cursor: &mut C) -> DrawResult<()> {
        let mut pen = StyleGuard::new(cursor);
        pen.set_color(Color::ORANGE);
        pen.set_speed(0);
        pen.set_visible(false);
        pen.set_draw_mode(false);
        pen.set_solid(true);
        polygon(&mut *pen, 10.0, 3)?;
        unreachable!()
    }

    let mut r = styled_recorder();
    let before = r.state().style();
    assert_eq!(StyleGuard::new(&mut r).saved(), before);
    assert_eq!(bail(&mut r), Err(DrawError::PenUp));
    assert_eq!(r.state().style(), before);
}

#[test]
fn colors() {
    assert_eq!(Color::named("Cyan"), Some(Color::CYAN));
    assert_eq!(Color::named("#ff8000"), Some(Color::Rgba(rgb::RGBA8::new(255, 128, 0, 255))));
    assert_eq!(Color::named("#ff80"), None);
    assert_eq!(Color::named("chartreuse-ish"), None);

    assert_eq!(Color::Hsv(Hsv::new(0.0, 1.0, 1.0)).to_rgba(), Some(rgb::RGBA8::new(255, 0, 0, 255)));
    assert_eq!(Color::Hsv(Hsv::new(120.0, 1.0, 1.0)).to_rgba(), Some(rgb::RGBA8::new(0, 255, 0, 255)));
    assert_eq!(Color::Hsv(Hsv::new(0.0, 2.0, 1.0)).to_rgba(), None);
    assert_eq!(Color::ORANGE.to_rgba(), Some(rgb::RGBA8::new(255, 165, 0, 255)));
}

#[test]
fn error_messages() {
    assert_eq!(
        format!("{}", DrawError::InvalidLength("side", -1.0)),
        "side is not a valid length: -1",
    );
    assert_eq!(
        format!("{}", DrawError::InvalidColor(Color::Named("bleu"))),
        "invalid color: 'bleu'",
    );
}

#[test]
fn canvas_fill() {
    let white = rgb::RGBA8::new(255, 255, 255, 255);
    let mut canvas = Canvas::new(64, 64);
    canvas.set_color(Color::RED);
    fill_triangle(&mut canvas, C_ZERO, 40.0).unwrap();

    assert_eq!(canvas.pending(), 1);
    assert_eq!(canvas.pixel_at(C_ZERO), Some(white));

    canvas.flush();
    assert_eq!(canvas.pending(), 0);
    let inside = canvas.pixel_at(C_ZERO).unwrap();
    assert!(inside.r > 200 && inside.g < 60 && inside.b < 60, "{:?}", inside);
    assert_eq!(canvas.pixel_at(Couple::new(-28.0, 28.0)), Some(white));
    assert_eq!(canvas.pixel_at(Couple::new(100.0, 0.0)), None);

    canvas.clear();
    assert_eq!(canvas.pixel_at(C_ZERO), Some(white));
}

#[test]
fn canvas_strokes() {
    let white = rgb::RGBA8::new(255, 255, 255, 255);
    let mut canvas = Canvas::new(120, 120);
    canvas.set_stroke_width(3.0);
    island(&mut canvas, 60.0, 1, 0).unwrap();

    // speed 0 flushed everything
    assert_eq!(canvas.pending(), 0);
    let touched = canvas.pixels().iter().filter(|p| **p != white).count();
    assert!(touched > 0);
    assert!(canvas.pixels().iter().all(|p| p.r <= p.g));

    canvas.set_draw_mode(false);
    canvas.forward(10.0);
    assert_eq!(canvas.pending(), 0);
}
