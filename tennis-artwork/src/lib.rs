mod court;
mod icons;
mod logo;
mod shapes;

pub use court::tennis_court;
pub use icons::{coach_icon, location_icon, star_rating, trophy_icon};
pub use logo::tennis_logo;

use svg::Document;

/// Every artwork of the site, keyed by its output filename.
///
/// The order is fixed so that generated output is reproducible run to run.
pub fn catalog() -> Vec<(&'static str, Document)> {
    vec![
        ("tennis-logo.svg", tennis_logo()),
        ("coach-icon.svg", coach_icon()),
        ("tennis-court.svg", tennis_court()),
        ("trophy-icon.svg", trophy_icon()),
        ("location-icon.svg", location_icon()),
        ("star-rating.svg", star_rating()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn catalog_names_are_unique() {
        let names = catalog().iter().map(|(name, _)| *name).collect_vec();
        assert_eq!(names.len(), 6);
        assert_eq!(names.iter().unique().count(), names.len());
        assert!(names.iter().all(|name| name.ends_with(".svg")));
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = catalog()
            .into_iter()
            .map(|(name, document)| (name, document.to_string()))
            .collect_vec();
        let second = catalog()
            .into_iter()
            .map(|(name, document)| (name, document.to_string()))
            .collect_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn documents_declare_their_canvas() {
        for (name, expected) in [
            ("tennis-logo.svg", "viewBox=\"0 0 200 200\""),
            ("coach-icon.svg", "viewBox=\"0 0 150 150\""),
            ("tennis-court.svg", "viewBox=\"0 0 300 200\""),
            ("trophy-icon.svg", "viewBox=\"0 0 120 120\""),
            ("location-icon.svg", "viewBox=\"0 0 100 100\""),
            ("star-rating.svg", "viewBox=\"0 0 150 30\""),
        ] {
            let (_, document) = catalog()
                .into_iter()
                .find(|(n, _)| *n == name)
                .unwrap();
            let rendered = document.to_string();
            assert!(rendered.contains(expected), "{name}: {rendered}");
            assert!(rendered.contains("<svg"), "{name} has no svg root");
        }
    }
}
