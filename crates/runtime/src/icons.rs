//! Display glyphs for WMO weather interpretation codes.

use std::collections::BTreeMap;

const WEATHER_ICONS: &[(u16, &str)] = &[
    (0, "☀️"),   // clear sky
    (1, "🌤️"),   // mainly clear
    (2, "⛅"),   // partly cloudy
    (3, "☁️"),   // overcast
    (45, "🌫️"),  // fog
    (48, "🌫️"),  // depositing rime fog
    (51, "🌦️"),  // light drizzle
    (53, "🌦️"),  // moderate drizzle
    (55, "🌧️"),  // dense drizzle
    (61, "🌧️"),  // slight rain
    (63, "🌧️"),  // moderate rain
    (65, "🌧️"),  // heavy rain
    (71, "🌨️"),  // slight snow
    (73, "🌨️"),  // moderate snow
    (75, "🌨️"),  // heavy snow
    (77, "🌨️"),  // snow grains
    (80, "🌦️"),  // slight rain showers
    (81, "🌧️"),  // moderate rain showers
    (82, "🌧️"),  // violent rain showers
    (85, "🌨️"),  // slight snow showers
    (86, "🌨️"),  // heavy snow showers
    (95, "⛈️"),  // thunderstorm
    (96, "⛈️"),  // thunderstorm with slight hail
    (99, "⛈️"),  // thunderstorm with heavy hail
];

/// Build the code-to-glyph lookup table.
pub(crate) fn weather_icons() -> BTreeMap<u16, String> {
    WEATHER_ICONS
        .iter()
        .map(|(code, glyph)| (*code, (*glyph).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_known_codes() {
        let icons = weather_icons();
        assert_eq!(icons.len(), WEATHER_ICONS.len());
        assert_eq!(icons.get(&0).map(String::as_str), Some("☀️"));
        assert_eq!(icons.get(&99).map(String::as_str), Some("⛈️"));
        assert!(icons.get(&4).is_none());
    }
}
