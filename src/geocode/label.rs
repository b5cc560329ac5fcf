use super::types::ReversePlace;

pub const UNKNOWN_LOCATION: &str = "an unknown location";

/// Checked in order against the lower-cased display name.
const OCEANS: [(&str, &str); 5] = [
    ("pacific", "the Pacific Ocean"),
    ("atlantic", "the Atlantic Ocean"),
    ("indian", "the Indian Ocean"),
    ("arctic", "the Arctic Ocean"),
    ("southern", "the Southern Ocean"),
];

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Picks a single human label for a reverse-geocoded place:
/// country, ocean, sea, an ocean named in the display name, the display
/// name's first segment, and finally [`UNKNOWN_LOCATION`].
/// Without an `address` object nothing is read and the result is unknown.
pub fn resolve_label(place: &ReversePlace) -> String {
    let Some(address) = &place.address else {
        return UNKNOWN_LOCATION.to_string();
    };

    if let Some(country) = present(&address.country) {
        return country.to_string();
    }
    if let Some(ocean) = present(&address.ocean) {
        return format!("the {}", ocean);
    }
    if let Some(sea) = present(&address.sea) {
        return format!("the {}", sea);
    }

    let Some(display_name) = present(&place.display_name) else {
        return UNKNOWN_LOCATION.to_string();
    };

    let lowered = display_name.to_lowercase();
    if let Some((_, label)) = OCEANS.iter().find(|(needle, _)| lowered.contains(*needle)) {
        return label.to_string();
    }

    display_name
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::types::Address;

    fn place(
        country: Option<&str>,
        ocean: Option<&str>,
        sea: Option<&str>,
        display_name: Option<&str>,
    ) -> ReversePlace {
        ReversePlace {
            address: Some(Address {
                country: country.map(String::from),
                ocean: ocean.map(String::from),
                sea: sea.map(String::from),
            }),
            display_name: display_name.map(String::from),
        }
    }

    #[test]
    fn country_wins_over_ocean() {
        let p = place(Some("Chile"), Some("Pacific Ocean"), None, Some("Chile"));
        assert_eq!(resolve_label(&p), "Chile");
    }

    #[test]
    fn ocean_then_sea() {
        assert_eq!(
            resolve_label(&place(None, Some("Indian Ocean"), Some("Arabian Sea"), None)),
            "the Indian Ocean"
        );
        assert_eq!(
            resolve_label(&place(None, None, Some("Coral Sea"), None)),
            "the Coral Sea"
        );
    }

    #[test]
    fn ocean_named_in_display_name() {
        let p = place(None, None, None, Some("North Atlantic, somewhere"));
        assert_eq!(resolve_label(&p), "the Atlantic Ocean");
    }

    #[test]
    fn ocean_list_order_decides_ties() {
        let p = place(None, None, None, Some("Southern Pacific boundary"));
        assert_eq!(resolve_label(&p), "the Pacific Ocean");
    }

    #[test]
    fn first_display_segment_as_fallback() {
        let p = place(None, None, None, Some("Kalaallit Nunaat, Greenland"));
        assert_eq!(resolve_label(&p), "Kalaallit Nunaat");
    }

    #[test]
    fn nothing_usable_is_unknown() {
        assert_eq!(resolve_label(&ReversePlace::default()), UNKNOWN_LOCATION);
        assert_eq!(
            resolve_label(&place(Some(" "), None, None, Some(""))),
            UNKNOWN_LOCATION
        );
    }

    #[test]
    fn display_name_without_address_is_unknown() {
        let p = ReversePlace {
            address: None,
            display_name: Some("Arctic Ocean".into()),
        };
        assert_eq!(resolve_label(&p), UNKNOWN_LOCATION);
    }
}
