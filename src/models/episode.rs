//! Ordered episodes of a series and previous/next navigation between them.

use super::object::Listing;

/// Object keys sharing a series prefix, in store order.
#[derive(Clone, Debug)]
pub struct EpisodeSequence {
    pub series: String,
    pub episodes: Vec<String>,
}

/// Where a requested key sits within its series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Key that should be played.
    pub current: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl EpisodeSequence {
    pub fn new(series: impl Into<String>, episodes: Vec<String>) -> Self {
        Self {
            series: series.into(),
            episodes,
        }
    }

    /// Build a sequence from the listing of a series prefix.
    /// Sub-directories are not episodes.
    pub fn from_listing(listing: Listing) -> Self {
        Self {
            series: listing.prefix,
            episodes: listing.objects.into_iter().map(|o| o.key).collect(),
        }
    }

    /// Position of `key` by exact key equality.
    ///
    /// A bare series root (`key` equal to the series prefix) resolves to the
    /// first episode.
    pub fn locate(&self, key: &str) -> Option<usize> {
        if key == self.series || key.is_empty() {
            return if self.episodes.is_empty() { None } else { Some(0) };
        }
        self.episodes.iter().position(|e| e == key)
    }

    pub fn previous(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.episodes.get(i))
            .map(String::as_str)
    }

    pub fn next(&self, index: usize) -> Option<&str> {
        self.episodes.get(index + 1).map(String::as_str)
    }

    /// Resolve navigation for `key`. Unknown keys keep both links inert.
    pub fn navigation(&self, key: &str) -> Navigation {
        match self.locate(key) {
            Some(index) => Navigation {
                current: self.episodes[index].clone(),
                previous: self.previous(index).map(str::to_string),
                next: self.next(index).map(str::to_string),
            },
            None => Navigation {
                current: key.to_string(),
                previous: None,
                next: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> EpisodeSequence {
        EpisodeSequence::new(
            "show/",
            vec!["show/e0.mp4".into(), "show/e1.mp4".into(), "show/e2.mp4".into()],
        )
    }

    #[test]
    fn middle_episode_links_both_neighbours() {
        let nav = sequence().navigation("show/e1.mp4");
        assert_eq!(nav.current, "show/e1.mp4");
        assert_eq!(nav.previous.as_deref(), Some("show/e0.mp4"));
        assert_eq!(nav.next.as_deref(), Some("show/e2.mp4"));
    }

    #[test]
    fn sequence_ends_are_clamped() {
        let seq = sequence();
        let first = seq.navigation("show/e0.mp4");
        assert_eq!(first.previous, None);
        assert_eq!(first.next.as_deref(), Some("show/e1.mp4"));

        let last = seq.navigation("show/e2.mp4");
        assert_eq!(last.previous.as_deref(), Some("show/e1.mp4"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn series_root_starts_at_first_episode() {
        assert_eq!(sequence().navigation("show/").current, "show/e0.mp4");
    }

    #[test]
    fn suffix_collisions_do_not_match() {
        let seq = EpisodeSequence::new(
            "show/",
            vec!["show/NewEp1.mp4".into(), "show/Ep1.mp4".into()],
        );
        assert_eq!(seq.locate("show/Ep1.mp4"), Some(1));
    }

    #[test]
    fn unknown_key_has_inert_navigation() {
        let nav = sequence().navigation("show/missing.mp4");
        assert_eq!(nav.current, "show/missing.mp4");
        assert_eq!(nav.previous, None);
        assert_eq!(nav.next, None);
    }

    #[test]
    fn empty_series_has_no_position() {
        let seq = EpisodeSequence::new("show/", Vec::new());
        assert_eq!(seq.locate("show/"), None);
    }
}
