use svg::node::element::{Definitions, Group, Pattern, Rectangle};
use svg::Document;

use crate::shapes::line;

/// Top-down court diagram with surface pattern, markings and net.
pub fn tennis_court() -> Document {
    let surface = Pattern::new()
        .set("id", "courtPattern")
        .set("patternUnits", "userSpaceOnUse")
        .set("width", 10)
        .set("height", 10)
        .add(
            Rectangle::new()
                .set("width", 10)
                .set("height", 10)
                .set("fill", "#2E7D32"),
        )
        .add(
            Rectangle::new()
                .set("width", 5)
                .set("height", 5)
                .set("fill", "#388E3C"),
        );

    let court = Rectangle::new()
        .set("x", 20)
        .set("y", 20)
        .set("width", 260)
        .set("height", 160)
        .set("fill", "url(#courtPattern)")
        .set("stroke", "#fff")
        .set("stroke-width", 3);

    let markings = Group::new()
        .set("stroke", "white")
        .set("stroke-width", 2)
        .add(line(150, 20, 150, 180))
        .add(line(20, 80, 280, 80))
        .add(line(20, 120, 280, 120))
        .add(line(150, 80, 150, 120));

    let net = Rectangle::new()
        .set("x", 145)
        .set("y", 20)
        .set("width", 10)
        .set("height", 160)
        .set("fill", "#333")
        .set("opacity", 0.8);
    let top_post = Rectangle::new()
        .set("x", 140)
        .set("y", 15)
        .set("width", 20)
        .set("height", 10)
        .set("fill", "#654321");
    let bottom_post = Rectangle::new()
        .set("x", 140)
        .set("y", 175)
        .set("width", 20)
        .set("height", 10)
        .set("fill", "#654321");

    let mut mesh = Group::new()
        .set("stroke", "white")
        .set("stroke-width", 0.5)
        .set("opacity", 0.6);
    // skip the rows where the service lines cross the net
    for y in (25..=165).step_by(10).filter(|y| *y != 75 && *y != 115) {
        mesh = mesh.add(line(145, y, 155, y + 10));
    }

    Document::new()
        .set("width", 300)
        .set("height", 200)
        .set("viewBox", (0, 0, 300, 200))
        .add(Definitions::new().add(surface))
        .add(court)
        .add(markings)
        .add(net)
        .add(top_post)
        .add(bottom_post)
        .add(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_leaves_gaps_at_the_service_lines() {
        let rendered = tennis_court().to_string();
        // 4 marking lines + 13 mesh diagonals
        assert_eq!(rendered.matches("<line x").count(), 17);
        assert!(!rendered.contains("y1=\"75\""));
        assert!(!rendered.contains("y1=\"115\""));
    }

    #[test]
    fn surface_pattern_is_referenced() {
        let rendered = tennis_court().to_string();
        assert!(rendered.contains("id=\"courtPattern\""));
        assert!(rendered.contains("fill=\"url(#courtPattern)\""));
    }
}
