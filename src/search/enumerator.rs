//! Post enumeration: classify every post of a listing and keep the media ones.

use crate::api::{PostFields, PostSource, Title};
use crate::error::Result;
use crate::fs::PostsLog;
use crate::media::{classify, LinkCategory, PostDetail, DELETED_SUBMITTER, UNNAMED_TITLE};
use crate::output::{print_run_summary, print_submission};
use crate::search::state::{RunSummary, SearchState};

/// Outcome of walking one listing.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Media posts in the order they were listed.
    pub posts: Vec<PostDetail>,
    pub summary: RunSummary,
}

/// Walk `source` to the end, classifying and logging each post.
///
/// Posts with unreadable required fields are counted as seen and skipped.
/// Errors from the source or the log end the walk; entries already logged
/// stay on disk.
pub async fn enumerate_posts<S>(
    source: &mut S,
    log: &mut PostsLog,
    show_progress: bool,
) -> Result<SearchResult>
where
    S: PostSource + ?Sized,
{
    let mut state = SearchState::default();
    let mut posts = Vec::new();

    while let Some(record) = source.next_post().await? {
        let position = state.increment_seen();

        let fields = match record.read() {
            Ok(fields) => fields,
            Err(e) => {
                state.increment_skipped();
                tracing::warn!("Skipping post #{} ({}): {}", position, record.kind, e);
                continue;
            }
        };

        let category = classify(&fields.url, &fields.domain);
        let detail = build_detail(&fields, category);

        if category.is_classified() {
            let classified = state.record_category(category);
            if show_progress {
                print_submission(
                    position,
                    classified,
                    &detail.permalink(),
                    readable_title(&fields.title),
                    &fields.url,
                );
            }
            posts.push(detail.clone());
        }

        log.record(position, &detail)?;
    }

    let summary = state.summary();
    print_run_summary(&summary);

    tracing::info!(
        "Search complete: {} of {} posts classified, {} skipped",
        summary.classified,
        summary.seen,
        summary.skipped
    );

    Ok(SearchResult { posts, summary })
}

fn readable_title(title: &Title) -> Option<&str> {
    match title {
        Title::Readable(title) => Some(title.as_str()),
        Title::Unreadable => None,
    }
}

/// Normalize a post's fields into a detail record.
fn build_detail(fields: &PostFields, category: LinkCategory) -> PostDetail {
    PostDetail {
        post_id: fields.id.clone(),
        post_title: readable_title(&fields.title)
            .unwrap_or(UNNAMED_TITLE)
            .to_string(),
        post_submitter: fields
            .author
            .clone()
            .unwrap_or_else(|| DELETED_SUBMITTER.to_string()),
        post_type: category.post_type(),
        post_url: fields.url.clone(),
        post_subreddit: fields.subreddit.clone(),
    }
}
