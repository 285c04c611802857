//! Search counters and the end-of-run summary.

use serde::Serialize;

use crate::media::LinkCategory;

/// Counters kept while walking one listing.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Posts pulled from the listing, readable or not.
    pub seen: u64,
    /// Posts skipped because required fields were unreadable.
    pub skipped: u64,
    /// Posts classified as media, in encounter order.
    pub classified: u64,
    pub gfycat_count: u64,
    pub imgur_count: u64,
    pub direct_count: u64,
}

impl SearchState {
    /// Count one pulled post and return its 1-based position.
    pub fn increment_seen(&mut self) -> u64 {
        self.seen += 1;
        self.seen
    }

    /// Count a post that could not be read.
    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Count a classified post and return the running classified count.
    ///
    /// Unclassified links leave every counter untouched.
    pub fn record_category(&mut self, category: LinkCategory) -> u64 {
        match category {
            LinkCategory::Gfycat => self.gfycat_count += 1,
            LinkCategory::Imgur => self.imgur_count += 1,
            LinkCategory::Direct => self.direct_count += 1,
            LinkCategory::Unclassified => return self.classified,
        }
        self.classified += 1;
        self.classified
    }

    /// Freeze the counters.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seen: self.seen,
            skipped: self.skipped,
            classified: self.classified,
            gfycat: self.gfycat_count,
            imgur: self.imgur_count,
            direct: self.direct_count,
        }
    }
}

/// Final counts for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    pub seen: u64,
    pub skipped: u64,
    pub classified: u64,
    pub gfycat: u64,
    pub imgur: u64,
    pub direct: u64,
}

impl RunSummary {
    /// Posts written to the posts log.
    pub fn logged(&self) -> u64 {
        self.seen - self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_category() {
        let mut state = SearchState::default();
        assert_eq!(state.record_category(LinkCategory::Imgur), 1);
        assert_eq!(state.record_category(LinkCategory::Unclassified), 1);
        assert_eq!(state.record_category(LinkCategory::Direct), 2);
        assert_eq!(state.record_category(LinkCategory::Gfycat), 3);

        let summary = state.summary();
        assert_eq!(summary.classified, 3);
        assert_eq!(summary.gfycat + summary.imgur + summary.direct, 3);
    }

    #[test]
    fn test_logged_excludes_skipped() {
        let mut state = SearchState::default();
        for _ in 0..5 {
            state.increment_seen();
        }
        state.increment_skipped();
        assert_eq!(state.summary().logged(), 4);
    }
}
