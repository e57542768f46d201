use svg::node::element::{Circle, Definitions, Ellipse, Group, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use crate::shapes::{ball_seam, diagonal_gradient, line};

/// The site logo: a racket leaning against a tennis ball, captioned.
pub fn tennis_logo() -> Document {
    let defs = Definitions::new()
        .add(diagonal_gradient(
            "ballGradient",
            &[("0%", "#FFE135"), ("100%", "#FFC107")],
        ))
        .add(diagonal_gradient(
            "racketGradient",
            &[("0%", "#8B4513"), ("100%", "#A0522D")],
        ));

    let head = Ellipse::new()
        .set("cx", 100)
        .set("cy", 80)
        .set("rx", 45)
        .set("ry", 60)
        .set("fill", "none")
        .set("stroke", "url(#racketGradient)")
        .set("stroke-width", 8);

    let mut strings = Group::new()
        .set("stroke", "#333")
        .set("stroke-width", 1)
        .set("opacity", 0.7);
    for y in (50..=110).step_by(15) {
        strings = strings.add(line(70, y, 130, y));
    }
    // the outer vertical strings stop short of the frame
    strings = strings
        .add(line(85, 35, 85, 125))
        .add(line(100, 30, 100, 130))
        .add(line(115, 35, 115, 125));

    let grip = Rectangle::new()
        .set("x", 95)
        .set("y", 140)
        .set("width", 10)
        .set("height", 40)
        .set("fill", "url(#racketGradient)")
        .set("rx", 5);
    let butt = Rectangle::new()
        .set("x", 92)
        .set("y", 175)
        .set("width", 16)
        .set("height", 8)
        .set("fill", "#654321")
        .set("rx", 4);

    let ball = Circle::new()
        .set("cx", 150)
        .set("cy", 50)
        .set("r", 20)
        .set("fill", "url(#ballGradient)");

    let caption = Text::new()
        .set("x", 100)
        .set("y", 25)
        .set("text-anchor", "middle")
        .set("font-family", "Arial, sans-serif")
        .set("font-size", 16)
        .set("font-weight", "bold")
        .set("fill", "#333")
        .add(TextNode::new("TENNIS"));

    Document::new()
        .set("width", 200)
        .set("height", 200)
        .set("viewBox", (0, 0, 200, 200))
        .add(defs)
        .add(head)
        .add(strings)
        .add(grip)
        .add(butt)
        .add(ball)
        .add(ball_seam((135, 45), (150, 35), (165, 45), 2))
        .add(ball_seam((135, 55), (150, 65), (165, 55), 2))
        .add(caption)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racket_has_a_full_string_bed() {
        let rendered = tennis_logo().to_string();
        // 5 horizontal + 3 vertical strings ("<line " would also hit the gradients)
        assert_eq!(rendered.matches("<line x").count(), 8);
        assert!(rendered.contains("TENNIS"));
        assert!(rendered.contains("url(#racketGradient)"));
    }
}
