use svg::node::element::path::Data;
use svg::node::element::{Circle, Definitions, Ellipse, Path, Rectangle};
use svg::Document;

use crate::shapes::{ball_seam, diagonal_gradient, five_point_star, line};

fn rounded(x: i32, y: i32, width: i32, height: i32, rx: i32, fill: &str) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("rx", rx)
        .set("fill", fill)
}

/// Coach figure with cap, whistle and racket.
pub fn coach_icon() -> Document {
    let defs = Definitions::new().add(diagonal_gradient(
        "personGradient",
        &[("0%", "#667eea"), ("100%", "#764ba2")],
    ));
    let person = "url(#personGradient)";

    let head = Circle::new()
        .set("cx", 75)
        .set("cy", 40)
        .set("r", 20)
        .set("fill", person);

    let racket_head = Ellipse::new()
        .set("cx", 110)
        .set("cy", 75)
        .set("rx", 12)
        .set("ry", 15)
        .set("fill", "none")
        .set("stroke", "#8B4513")
        .set("stroke-width", 3);
    let racket_grip = line(110, 90, 110, 105)
        .set("stroke", "#8B4513")
        .set("stroke-width", 3);

    let whistle = Circle::new()
        .set("cx", 75)
        .set("cy", 65)
        .set("r", 3)
        .set("fill", "#FFD700");
    let lanyard = line(75, 68, 75, 75)
        .set("stroke", "#333")
        .set("stroke-width", 1);

    let cap_brim = Ellipse::new()
        .set("cx", 75)
        .set("cy", 30)
        .set("rx", 22)
        .set("ry", 8)
        .set("fill", "#333");

    Document::new()
        .set("width", 150)
        .set("height", 150)
        .set("viewBox", (0, 0, 150, 150))
        .add(defs)
        .add(head)
        .add(rounded(60, 55, 30, 40, 15, person))
        .add(rounded(40, 60, 15, 25, 7, person))
        .add(rounded(95, 60, 15, 25, 7, person))
        .add(rounded(65, 90, 8, 30, 4, person))
        .add(rounded(77, 90, 8, 30, 4, person))
        .add(racket_head)
        .add(racket_grip)
        .add(whistle)
        .add(lanyard)
        .add(cap_brim)
        .add(rounded(53, 25, 44, 10, 5, "#333"))
}

/// Trophy cup with handles and a star topper.
pub fn trophy_icon() -> Document {
    let defs = Definitions::new().add(diagonal_gradient(
        "trophyGradient",
        &[("0%", "#FFD700"), ("50%", "#FFA000"), ("100%", "#FF8F00")],
    ));
    let gold = "url(#trophyGradient)";

    let cup_outline = Data::new()
        .move_to((45, 70))
        .line_to((45, 40))
        .quadratic_curve_to((45, 30, 60, 30))
        .quadratic_curve_to((75, 30, 75, 40))
        .line_to((75, 70))
        .close();
    let cup = Path::new().set("d", cup_outline).set("fill", gold);

    let handle = |cx: i32| {
        Ellipse::new()
            .set("cx", cx)
            .set("cy", 50)
            .set("rx", 8)
            .set("ry", 12)
            .set("fill", "none")
            .set("stroke", gold)
            .set("stroke-width", 4)
    };

    let stem = Rectangle::new()
        .set("x", 55)
        .set("y", 70)
        .set("width", 10)
        .set("height", 20)
        .set("fill", gold);

    Document::new()
        .set("width", 120)
        .set("height", 120)
        .set("viewBox", (0, 0, 120, 120))
        .add(defs)
        .add(rounded(40, 85, 40, 15, 3, gold))
        .add(rounded(35, 95, 50, 8, 4, "#B8860B"))
        .add(stem)
        .add(cup)
        .add(handle(35))
        .add(handle(85))
        .add(rounded(50, 45, 20, 3, 1, "#B8860B"))
        .add(rounded(52, 52, 16, 2, 1, "#B8860B"))
        .add(five_point_star(60, 25, "#FFD700"))
}

/// Map pin with a tennis ball at its center.
pub fn location_icon() -> Document {
    let defs = Definitions::new().add(diagonal_gradient(
        "pinGradient",
        &[("0%", "#FF6B6B"), ("100%", "#EE5A52")],
    ));
    let red = "url(#pinGradient)";

    let pin_outline = Data::new()
        .move_to((50, 20))
        .cubic_curve_to((35, 20, 25, 30, 25, 45))
        .cubic_curve_to((25, 65, 50, 80, 50, 80))
        .cubic_curve_to((50, 80, 75, 65, 75, 45))
        .cubic_curve_to((75, 30, 65, 20, 50, 20))
        .close();
    let pin = Path::new().set("d", pin_outline).set("fill", red);

    let dot = |r: i32, fill: &str| {
        Circle::new()
            .set("cx", 50)
            .set("cy", 45)
            .set("r", r)
            .set("fill", fill)
    };

    Document::new()
        .set("width", 100)
        .set("height", 100)
        .set("viewBox", (0, 0, 100, 100))
        .add(defs)
        .add(pin)
        .add(dot(12, "white"))
        .add(dot(8, red))
        .add(dot(6, "#FFE135"))
        .add(ball_seam((46, 42), (50, 40), (54, 42), 1))
        .add(ball_seam((46, 48), (50, 50), (54, 48), 1))
}

/// Five gold stars in a row.
pub fn star_rating() -> Document {
    let defs = Definitions::new().add(diagonal_gradient(
        "starGradient",
        &[("0%", "#FFD700"), ("100%", "#FFA000")],
    ));

    let mut document = Document::new()
        .set("width", 150)
        .set("height", 30)
        .set("viewBox", (0, 0, 150, 30))
        .add(defs);
    for cx in (15..150).step_by(30) {
        document = document.add(five_point_star(cx, 5, "url(#starGradient)"));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_strip_holds_five_stars() {
        let rendered = star_rating().to_string();
        assert_eq!(rendered.matches("<polygon").count(), 5);
        // top points of the first and last star
        assert!(rendered.contains("15,5"));
        assert!(rendered.contains("135,5"));
    }

    #[test]
    fn trophy_and_rating_share_the_star_shape() {
        let trophy = trophy_icon().to_string();
        assert!(trophy.contains("60,25 62,31 68,31"));
        let rating = star_rating().to_string();
        assert!(rating.contains("15,5 17,11 23,11"));
    }

    #[test]
    fn pin_wraps_a_tennis_ball() {
        let rendered = location_icon().to_string();
        assert_eq!(rendered.matches("<circle").count(), 3);
        assert!(rendered.contains("#FFE135"));
        assert!(rendered.contains("url(#pinGradient)"));
    }

    #[test]
    fn coach_is_drawn_from_rounded_parts() {
        let rendered = coach_icon().to_string();
        // body, two arms, two legs, cap band
        assert_eq!(rendered.matches("<rect").count(), 6);
        assert!(rendered.contains("url(#personGradient)"));
    }
}
