use itertools::Itertools;
use svg::node::element::path::Data;
use svg::node::element::{Line, LinearGradient, Path, Polygon, Stop};
use svg::node::Value;

/// A two-stop (or more) gradient running corner to corner, the fill used by
/// almost every artwork in the set.
pub(crate) fn diagonal_gradient(id: &str, stops: &[(&str, &str)]) -> LinearGradient {
    let mut gradient = LinearGradient::new()
        .set("id", id)
        .set("x1", "0%")
        .set("y1", "0%")
        .set("x2", "100%")
        .set("y2", "100%");
    for &(offset, color) in stops {
        gradient = gradient.add(
            Stop::new()
                .set("offset", offset)
                .set("stop-color", color)
                .set("stop-opacity", 1),
        );
    }
    gradient
}

pub(crate) fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

// offsets trace the star clockwise from the top point
const STAR_OFFSETS: [(i32, i32); 10] = [
    (0, 0),
    (2, 6),
    (8, 6),
    (3, 10),
    (5, 16),
    (0, 12),
    (-5, 16),
    (-3, 10),
    (-8, 6),
    (-2, 6),
];

/// Five-point star with its top point at `(cx, cy)`. Shared between the
/// trophy topper and the rating strip.
pub(crate) fn five_point_star<T: Into<Value>>(cx: i32, cy: i32, fill: T) -> Polygon {
    let points = STAR_OFFSETS
        .iter()
        .map(|(dx, dy)| format!("{},{}", cx + dx, cy + dy))
        .join(" ");
    Polygon::new().set("points", points).set("fill", fill)
}

/// One white seam curve of a tennis ball.
pub(crate) fn ball_seam(
    from: (i32, i32),
    control: (i32, i32),
    to: (i32, i32),
    width: i32,
) -> Path {
    let data = Data::new().move_to(from).quadratic_curve_to((
        control.0, control.1, to.0, to.1,
    ));
    Path::new()
        .set("d", data)
        .set("stroke", "white")
        .set("stroke-width", width)
        .set("fill", "none")
}
