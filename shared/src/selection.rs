//! Selection state shared by the sidebar list, the marker popups and the map
//! viewport. The coordinator only decides *what* should happen; the client
//! applies the resulting [`SelectionChange`] to the DOM and to Leaflet.

use std::fmt;

use crate::track::{LatLng, Track, find_track};

/// Zoom level used when flying to a selected track.
pub const FLY_TO_ZOOM: f64 = 14.0;
/// Fly-to animation duration in seconds.
pub const FLY_TO_DURATION_SECS: f64 = 1.25;
pub const FLY_TO_EASE_LINEARITY: f64 = 0.25;

/// Where a selection request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Startup default; never animates and never opens a popup.
    Initial,
    List,
    Marker,
}

impl SelectionSource {
    pub fn is_user(self) -> bool {
        matches!(self, Self::List | Self::Marker)
    }
}

/// Viewport animation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub target: LatLng,
    pub zoom: f64,
    pub duration_secs: f64,
    pub ease_linearity: f64,
}

impl FlyTo {
    pub fn to(target: LatLng) -> Self {
        Self {
            target,
            zoom: FLY_TO_ZOOM,
            duration_secs: FLY_TO_DURATION_SECS,
            ease_linearity: FLY_TO_EASE_LINEARITY,
        }
    }
}

/// Effects of an accepted selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub previous: Option<&'static str>,
    pub current: &'static str,
    pub fly_to: Option<FlyTo>,
    pub open_popup: bool,
}

impl SelectionChange {
    pub fn changed(&self) -> bool {
        self.previous != Some(self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownTrack(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTrack(id) => write!(f, "unknown track id: {id}"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// The single piece of mutable UI state.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    tracks: &'static [Track],
    active: Option<&'static str>,
}

impl Selection {
    /// Starts with the first track active (or nothing for an empty catalog).
    pub fn initial(tracks: &'static [Track]) -> Self {
        Self {
            tracks,
            active: tracks.first().map(|t| t.id),
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    /// Makes `id` the active track.
    ///
    /// The viewport only flies for user-initiated changes to a *different*
    /// track. Popups open for every user-initiated request, reselection
    /// included, so a closed popup can be reopened by clicking again.
    pub fn select(
        &mut self,
        id: &str,
        source: SelectionSource,
    ) -> Result<SelectionChange, SelectionError> {
        let track = find_track(self.tracks, id)
            .ok_or_else(|| SelectionError::UnknownTrack(id.to_string()))?;

        let previous = self.active.replace(track.id);
        let changed = previous != Some(track.id);
        let fly_to = (source.is_user() && changed).then(|| FlyTo::to(track.coords));

        Ok(SelectionChange {
            previous,
            current: track.id,
            fly_to,
            open_popup: source.is_user(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TRACKS;

    #[test]
    fn initial_selects_first_without_effects() {
        let sel = Selection::initial(TRACKS);
        assert_eq!(sel.active(), Some("monaco"));
        assert!(sel.is_active("monaco"));
        assert!(!sel.is_active("silverstone"));
    }

    #[test]
    fn initial_on_empty_catalog_selects_nothing() {
        let sel = Selection::initial(&[]);
        assert_eq!(sel.active(), None);
        assert!(!sel.is_active("monaco"));
    }

    #[test]
    fn initial_source_never_flies() {
        let mut sel = Selection::initial(TRACKS);
        let change = sel.select("monaco", SelectionSource::Initial).unwrap();
        assert_eq!(change.fly_to, None);
        assert!(!change.open_popup);

        let change = sel.select("monza", SelectionSource::Initial).unwrap();
        assert_eq!(change.fly_to, None);
        assert!(!change.open_popup);
        assert_eq!(sel.active(), Some("monza"));
    }

    #[test]
    fn list_selection_flies_to_track() {
        let mut sel = Selection::initial(TRACKS);
        let change = sel.select("suzuka", SelectionSource::List).unwrap();
        assert_eq!(change.previous, Some("monaco"));
        assert_eq!(change.current, "suzuka");
        assert!(change.changed());
        assert!(change.open_popup);
        let fly = change.fly_to.expect("fly-to on change");
        assert_eq!(fly.target, LatLng::new(34.8431, 136.541));
        assert_eq!(fly.zoom, FLY_TO_ZOOM);
        assert_eq!(fly.duration_secs, 1.25);
        assert_eq!(fly.ease_linearity, 0.25);
    }

    #[test]
    fn reselection_does_not_fly_again() {
        let mut sel = Selection::initial(TRACKS);
        let first = sel.select("monza", SelectionSource::List).unwrap();
        assert!(first.fly_to.is_some());

        let again = sel.select("monza", SelectionSource::List).unwrap();
        assert!(!again.changed());
        assert_eq!(again.fly_to, None);
        assert!(again.open_popup);

        let via_marker = sel.select("monza", SelectionSource::Marker).unwrap();
        assert_eq!(via_marker.fly_to, None);
    }

    #[test]
    fn selecting_initial_track_from_list_does_not_fly() {
        let mut sel = Selection::initial(TRACKS);
        let change = sel.select("monaco", SelectionSource::List).unwrap();
        assert_eq!(change.fly_to, None);
        assert!(change.open_popup);
    }

    #[test]
    fn marker_and_list_clicks_agree() {
        for track in TRACKS {
            let mut from_list = Selection::initial(TRACKS);
            let mut from_marker = Selection::initial(TRACKS);
            let a = from_list.select(track.id, SelectionSource::List).unwrap();
            let b = from_marker.select(track.id, SelectionSource::Marker).unwrap();
            assert_eq!(a, b);
            assert_eq!(from_list.active(), from_marker.active());
        }
    }

    #[test]
    fn unknown_id_leaves_state_untouched() {
        let mut sel = Selection::initial(TRACKS);
        let err = sel.select("imola", SelectionSource::Marker).unwrap_err();
        assert_eq!(err, SelectionError::UnknownTrack("imola".into()));
        assert_eq!(err.to_string(), "unknown track id: imola");
        assert_eq!(sel.active(), Some("monaco"));
    }

    #[test]
    fn exactly_one_track_is_active() {
        let mut sel = Selection::initial(TRACKS);
        for track in TRACKS {
            sel.select(track.id, SelectionSource::List).unwrap();
            let active: Vec<_> = TRACKS.iter().filter(|t| sel.is_active(t.id)).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, track.id);
        }
    }
}
