use crate::Asset;

/// The fixed asset set of the site.
///
/// Each artwork is rendered to its string form exactly once, here; from this
/// point on the emitter treats every asset as opaque bytes.
pub fn standard_assets() -> Vec<Asset> {
    tennis_artwork::catalog()
        .into_iter()
        .map(|(name, document)| Asset::new(name, document.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_is_complete_and_stable() {
        let assets = standard_assets();
        let names: Vec<&str> = assets.iter().map(|asset| asset.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "tennis-logo.svg",
                "coach-icon.svg",
                "tennis-court.svg",
                "trophy-icon.svg",
                "location-icon.svg",
                "star-rating.svg",
            ]
        );
        assert!(assets.iter().all(|asset| asset.content.contains("<svg")));
    }
}
