use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees. Serializes as `[lat, lng]`, the shape
/// Leaflet accepts anywhere it wants a `LatLng`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(c: LatLng) -> Self {
        [c.lat, c.lng]
    }
}

/// One favourite circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub coords: LatLng,
    pub image: Option<&'static str>,
    /// CSS hex colour used for the marker pill and list accent.
    pub accent: Option<&'static str>,
}

/// Favourite circuits in ranked order. Position in this slice is the rank.
pub const TRACKS: &[Track] = &[
    Track {
        id: "monaco",
        title: "Circuit de Monaco",
        location: "Monte Carlo, Monaco",
        description: "The legendary street circuit winding through the harbour, packed with tight corners and glamour.",
        coords: LatLng::new(43.7347, 7.4206),
        image: None,
        accent: Some("#ef4444"),
    },
    Track {
        id: "silverstone",
        title: "Silverstone Circuit",
        location: "Silverstone, United Kingdom",
        description: "The birthplace of Formula 1 and the long-time home of the British Grand Prix.",
        coords: LatLng::new(52.0733, -1.014),
        image: None,
        accent: Some("#60a5fa"),
    },
    Track {
        id: "monza",
        title: "Autodromo Nazionale Monza",
        location: "Monza, Italy",
        description: "Known as \"The Temple of Speed\", the fastest track on the calendar and host of the Italian Grand Prix.",
        coords: LatLng::new(45.6156, 9.2811),
        image: None,
        accent: Some("#34d399"),
    },
    Track {
        id: "suzuka",
        title: "Suzuka International Racing Course",
        location: "Suzuka, Japan",
        description: "The only figure-eight circuit in F1, famous for the Esses and the 130R corner.",
        coords: LatLng::new(34.8431, 136.541),
        image: None,
        accent: Some("#fbbf24"),
    },
    Track {
        id: "montreal",
        title: "Circuit Gilles-Villeneuve",
        location: "Montréal, Canada",
        description: "A mix of long straights and tight chicanes on Île Notre-Dame, home of the \"Wall of Champions\".",
        coords: LatLng::new(45.5014, -73.5229),
        image: None,
        accent: Some("#a855f7"),
    },
    Track {
        id: "cota",
        title: "Circuit of the Americas",
        location: "Austin, United States",
        description: "A modern US track with huge elevation changes and a steep climb into turn one.",
        coords: LatLng::new(30.1328, -97.6411),
        image: None,
        accent: Some("#f97316"),
    },
    Track {
        id: "red-bull-ring",
        title: "Red Bull Ring",
        location: "Spielberg, Austria",
        description: "Fast straights, sharp inclines, and alpine backdrops in the Styrian hills.",
        coords: LatLng::new(47.2196, 14.7646),
        image: None,
        accent: Some("#38bdf8"),
    },
    Track {
        id: "zandvoort",
        title: "Circuit Zandvoort",
        location: "Zandvoort, Netherlands",
        description: "Recently reintroduced with steep banking and seaside winds near Amsterdam.",
        coords: LatLng::new(52.388, 4.5409),
        image: None,
        accent: Some("#f472b6"),
    },
    Track {
        id: "bahrain",
        title: "Bahrain International Circuit",
        location: "Sakhir, Bahrain",
        description: "A desert venue under floodlights that regularly opens the season with dramatic racing.",
        coords: LatLng::new(26.0325, 50.5106),
        image: None,
        accent: Some("#14b8a6"),
    },
    Track {
        id: "singapore",
        title: "Marina Bay Street Circuit",
        location: "Singapore",
        description: "The first ever night race, carving through downtown Singapore with dozens of corners.",
        coords: LatLng::new(1.2914, 103.8644),
        image: None,
        accent: Some("#e879f9"),
    },
    Track {
        id: "las-vegas",
        title: "Las Vegas Street Circuit",
        location: "Las Vegas, United States",
        description: "A neon-soaked sprint down the Strip featuring long straights and late-night racing.",
        coords: LatLng::new(36.1206, -115.1746),
        image: None,
        accent: Some("#fb7185"),
    },
    Track {
        id: "qatar",
        title: "Losail International Circuit",
        location: "Lusail, Qatar",
        description: "A smooth, sweeping layout in the Middle East that shines under the lights.",
        coords: LatLng::new(25.4889, 51.4542),
        image: None,
        accent: Some("#facc15"),
    },
];

pub fn find_track<'a>(tracks: &'a [Track], id: &str) -> Option<&'a Track> {
    tracks.iter().find(|t| t.id == id)
}

/// Badge text for the track at `index` (0-based), e.g. `#1`.
pub fn rank_label(index: usize) -> String {
    format!("#{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = TRACKS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TRACKS.len());
    }

    #[test]
    fn catalog_coords_are_on_the_globe() {
        for t in TRACKS {
            assert!((-90.0..=90.0).contains(&t.coords.lat), "{}", t.id);
            assert!((-180.0..=180.0).contains(&t.coords.lng), "{}", t.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_track(TRACKS, "suzuka").map(|t| t.title), Some("Suzuka International Racing Course"));
        assert!(find_track(TRACKS, "nurburgring").is_none());
        assert!(find_track(&[], "monaco").is_none());
    }

    #[test]
    fn rank_labels_are_one_based() {
        assert_eq!(rank_label(0), "#1");
        assert_eq!(rank_label(11), "#12");
    }

    #[test]
    fn latlng_serializes_as_pair() {
        let json = serde_json::to_string(&LatLng::new(43.7347, 7.4206)).unwrap();
        assert_eq!(json, "[43.7347,7.4206]");
        let back: LatLng = serde_json::from_str("[1.5,-2.25]").unwrap();
        assert_eq!(back, LatLng::new(1.5, -2.25));
    }
}
