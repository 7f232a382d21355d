// Search over the catalog by title or tag
// Flagged videos never show up; results are numbered from 1 for the follow-up pick

use std::sync::Arc;

use tracing::debug;

use crate::library::{Video, VideoCatalog, TAG_MARKER};
use crate::moderation::FlagRegistry;

/// One search hit with its rendered line, which doubles as the sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video: Arc<Video>,
    pub rendered: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    hits: Vec<SearchHit>,
}

impl SearchResults {
    fn collect(
        query: &str,
        videos: impl Iterator<Item = Arc<Video>>,
        flags: &FlagRegistry,
        matches: impl Fn(&Video) -> bool,
    ) -> Self {
        let mut hits: Vec<SearchHit> = videos
            .filter(|v| !flags.is_flagged(&v.id) && matches(v.as_ref()))
            .map(|video| SearchHit {
                rendered: video.render(),
                video,
            })
            .collect();
        hits.sort_by(|a, b| a.rendered.cmp(&b.rendered));

        debug!("Search '{}' matched {} videos", query, hits.len());
        Self {
            query: query.to_string(),
            hits,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Numbered listing plus the selection prompt, or the no-results line
    pub fn lines(&self) -> Vec<String> {
        if self.hits.is_empty() {
            return vec![format!("No search results for {}", self.query)];
        }

        let mut lines = vec![format!("Here are the results for {}:", self.query)];
        lines.extend(
            self.hits
                .iter()
                .enumerate()
                .map(|(i, hit)| format!("{}) {}", i + 1, hit.rendered)),
        );
        lines.push(
            "Would you like to play any of the above? If yes, specify the number of the video."
                .to_string(),
        );
        lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
        lines
    }

    /// Resolve the user's follow-up answer. Anything that isn't a number in
    /// `1..=len` is a decline.
    pub fn choose(&self, answer: &str) -> Option<&Arc<Video>> {
        let n: usize = answer.trim().parse().ok()?;
        let idx = n.checked_sub(1)?;
        self.hits.get(idx).map(|hit| &hit.video)
    }
}

/// Case-insensitive substring match on titles
pub fn by_title(catalog: &dyn VideoCatalog, flags: &FlagRegistry, term: &str) -> SearchResults {
    SearchResults::collect(term, catalog.all().into_iter(), flags, |v| v.title_contains(term))
}

/// Case-insensitive exact tag match. Queries without the `#` marker find nothing.
pub fn by_tag(catalog: &dyn VideoCatalog, flags: &FlagRegistry, tag: &str) -> SearchResults {
    if !tag.starts_with(TAG_MARKER) {
        return SearchResults::collect(tag, std::iter::empty(), flags, |_| false);
    }
    SearchResults::collect(tag, catalog.all().into_iter(), flags, |v| v.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::VideoLibrary;

    fn catalog() -> VideoLibrary {
        VideoLibrary::from_videos([
            Video::new("v2", "Another Cat Video", vec!["#cat".into()]),
            Video::new("v1", "Amazing Cat Video", vec!["#cat".into(), "#funny".into()]),
            Video::new("d1", "Funny Dogs", vec!["#dog".into(), "#funny".into()]),
        ])
    }

    fn rendered(results: &SearchResults) -> Vec<&str> {
        results.hits().iter().map(|h| h.rendered.as_str()).collect()
    }

    #[test]
    fn title_search_sorts_by_rendered_line() {
        let catalog = catalog();
        let results = by_title(&catalog, &FlagRegistry::new(), "CAT");

        assert_eq!(
            rendered(&results),
            [
                "Amazing Cat Video (v1) [#cat #funny]",
                "Another Cat Video (v2) [#cat]",
            ]
        );
    }

    #[test]
    fn sort_key_includes_id_not_just_title() {
        let catalog = VideoLibrary::from_videos([
            Video::new("b", "Same", Vec::new()),
            Video::new("a", "Same", Vec::new()),
        ]);
        let results = by_title(&catalog, &FlagRegistry::new(), "same");
        assert_eq!(rendered(&results), ["Same (a) []", "Same (b) []"]);
    }

    #[test]
    fn flagged_videos_are_hidden() {
        let catalog = catalog();
        let mut flags = FlagRegistry::new();
        flags.flag(&catalog, "v1", None).unwrap();

        let results = by_title(&catalog, &flags, "cat");
        assert_eq!(results.len(), 1);
        assert_eq!(results.hits()[0].video.id, "v2");

        let results = by_tag(&catalog, &flags, "#funny");
        assert_eq!(rendered(&results), ["Funny Dogs (d1) [#dog #funny]"]);
    }

    #[test]
    fn tag_search_needs_marker_and_exact_tag() {
        let catalog = catalog();
        let flags = FlagRegistry::new();

        assert!(by_tag(&catalog, &flags, "cat").is_empty());
        assert!(by_tag(&catalog, &flags, "#ca").is_empty());
        assert_eq!(by_tag(&catalog, &flags, "#CAT").len(), 2);
        assert_eq!(by_tag(&catalog, &flags, "cat").query(), "cat");
    }

    #[test]
    fn lines_number_results_from_one() {
        let catalog = catalog();
        let lines = by_tag(&catalog, &FlagRegistry::new(), "#cat").lines();

        assert_eq!(lines[0], "Here are the results for #cat:");
        assert_eq!(lines[1], "1) Amazing Cat Video (v1) [#cat #funny]");
        assert_eq!(lines[2], "2) Another Cat Video (v2) [#cat]");
        assert_eq!(lines.len(), 5);

        let none = by_title(&catalog, &FlagRegistry::new(), "blah").lines();
        assert_eq!(none, ["No search results for blah"]);
    }

    #[test]
    fn choose_accepts_only_in_range_numbers() {
        let catalog = catalog();
        let results = by_title(&catalog, &FlagRegistry::new(), "cat");

        assert_eq!(results.choose("2").unwrap().id, "v2");
        assert_eq!(results.choose(" 1 ").unwrap().id, "v1");
        for answer in ["abc", "", "0", "3", "-1", "1.5"] {
            assert!(results.choose(answer).is_none(), "{answer:?} should decline");
        }
    }
}
