use crate::track::{Track, rank_label};

/// View model for one sidebar row.
///
/// Carries no selection state: rows are keyed by `id` and read the highlight
/// reactively, so moving the selection never rebuilds a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub rank: String,
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub accent: Option<&'static str>,
}

/// One entry per track, in catalog order, with rank taken from the catalog
/// position so filtering never renumbers rows.
pub fn list_entries(tracks: &'static [Track]) -> Vec<ListEntry> {
    tracks.iter().enumerate().map(|(i, t)| entry(i, t)).collect()
}

/// Like [`list_entries`] but keeps only tracks matching `query`.
pub fn filtered_entries(tracks: &'static [Track], query: &str) -> Vec<ListEntry> {
    if query.trim().is_empty() {
        return list_entries(tracks);
    }
    filter_tracks(tracks, query)
        .into_iter()
        .map(|(i, t)| entry(i, t))
        .collect()
}

fn entry(index: usize, t: &'static Track) -> ListEntry {
    ListEntry {
        rank: rank_label(index),
        id: t.id,
        title: t.title,
        location: t.location,
        description: t.description,
        image: t.image,
        accent: t.accent,
    }
}

/// Case-insensitive substring match over title, location and description.
/// A blank query matches everything.
pub fn filter_tracks<'a>(tracks: &'a [Track], query: &str) -> Vec<(usize, &'a Track)> {
    let query = query.trim().to_lowercase();
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            query.is_empty()
                || t.title.to_lowercase().contains(&query)
                || t.location.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Selection, SelectionSource};
    use crate::track::TRACKS;

    #[test]
    fn one_entry_per_track_with_matching_text() {
        let entries = list_entries(TRACKS);
        assert_eq!(entries.len(), TRACKS.len());
        for (entry, track) in entries.iter().zip(TRACKS) {
            assert_eq!(entry.id, track.id);
            assert_eq!(entry.title, track.title);
            assert_eq!(entry.location, track.location);
            assert_eq!(entries.iter().filter(|e| e.id == track.id).count(), 1);
        }
        assert_eq!(entries[0].rank, "#1");
        assert_eq!(entries[11].rank, "#12");
    }

    #[test]
    fn selection_changes_leave_row_keys_alone() {
        let keys = |q: &str| -> Vec<&'static str> {
            filtered_entries(TRACKS, q).iter().map(|e| e.id).collect()
        };
        let mut sel = Selection::initial(TRACKS);
        let before = (list_entries(TRACKS), keys(""), keys("italy"));
        for track in TRACKS.iter().rev() {
            sel.select(track.id, SelectionSource::List).unwrap();
            assert_eq!(list_entries(TRACKS), before.0);
            assert_eq!(keys(""), before.1);
            assert_eq!(keys("italy"), before.2);
        }
    }

    #[test]
    fn blank_query_lists_the_whole_catalog() {
        assert_eq!(filtered_entries(TRACKS, ""), list_entries(TRACKS));
        assert_eq!(filtered_entries(TRACKS, " \t"), list_entries(TRACKS));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert_eq!(filter_tracks(TRACKS, "").len(), TRACKS.len());
        assert_eq!(filter_tracks(TRACKS, "   ").len(), TRACKS.len());
    }

    #[test]
    fn query_matches_title_location_and_description() {
        let ids = |q: &str| -> Vec<&'static str> {
            filter_tracks(TRACKS, q).iter().map(|(_, t)| t.id).collect()
        };
        assert_eq!(ids("SUZUKA"), vec!["suzuka"]);
        assert_eq!(ids("united states"), vec!["cota", "las-vegas"]);
        assert_eq!(ids("temple of speed"), vec!["monza"]);
        assert!(ids("nordschleife").is_empty());
    }

    #[test]
    fn filtered_entries_keep_catalog_rank() {
        let entries = filtered_entries(TRACKS, "zandvoort");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rank, "#8");
        assert_eq!(entries[0].id, "zandvoort");
    }
}
