//! Sequential episode player page.
//!
//! Playback behaviour (resume, auto-advance, keyboard shortcuts) lives in
//! `player.js`, inlined into every page.

use super::{html_escape, page_footer, page_header};
use crate::models::{
    episode::{EpisodeSequence, Navigation},
    object::{encode_key, last_segment},
};

const PLAYER_SCRIPT: &str = include_str!("player.js");

const PLAYER_STYLE: &str = "\
body { background: #111; color: #ddd; font-family: sans-serif; }
a { color: #8cf; }
video { width: 100%; max-height: 80vh; background: #000; }
nav a { margin-right: 1em; }
li.current a { font-weight: bold; }";

fn watch_href(key: &str) -> String {
    format!("/_watch/{}", encode_key(key))
}

/// Previous/next link; the sequence ends get an inert `#` placeholder.
fn nav_link(id: &str, label: &str, target: Option<&str>) -> String {
    match target {
        Some(key) => format!("<a id=\"{}\" href=\"{}\">{}</a>", id, watch_href(key), label),
        None => format!("<a id=\"{}\" href=\"#\" data-inert=\"true\">{}</a>", id, label),
    }
}

/// Render the player for `nav.current` with links to every episode in `sequence`.
pub fn render_player(sequence: &EpisodeSequence, nav: &Navigation) -> String {
    let title = last_segment(&nav.current);
    // The script keys resume state by the series root.
    let body_attrs = format!(" data-series-root=\"{}\"", watch_href(&sequence.series));
    let mut html = page_header(title, PLAYER_STYLE, &body_attrs);

    if sequence.series.is_empty() {
        html.push_str("<h3><a href=\"/\">Home</a></h3>\n");
    } else {
        html.push_str(&format!(
            "<h3><a href=\"/\">Home</a> / <a href=\"/{}\">{}</a></h3>\n",
            encode_key(&sequence.series),
            html_escape(&sequence.series)
        ));
    }
    html.push_str(&format!(
        "<h2><a id=\"current\" href=\"{}\">{}</a></h2>\n",
        watch_href(&nav.current),
        html_escape(title)
    ));
    html.push_str("<video id=\"player\" controls autoplay></video>\n");
    html.push_str(&format!(
        "<nav>{} {}</nav>\n",
        nav_link("prev", "Previous", nav.previous.as_deref()),
        nav_link("next", "Next", nav.next.as_deref())
    ));
    html.push_str("<p>Space: play/pause &middot; f: fullscreen &middot; j/l: back/forward 10s</p>\n");

    html.push_str("<ol id=\"episodes\">\n");
    for episode in &sequence.episodes {
        let class = if *episode == nav.current { " class=\"current\"" } else { "" };
        html.push_str(&format!(
            "<li{}><a href=\"{}\">{}</a></li>\n",
            class,
            watch_href(episode),
            html_escape(last_segment(episode))
        ));
    }
    html.push_str("</ol>\n");

    html.push_str("<script>\n");
    html.push_str(PLAYER_SCRIPT);
    html.push_str("</script>\n");
    html.push_str(&page_footer());
    html
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
    fn middle_episode_links_neighbours() {
        let seq = sequence();
        let html = render_player(&seq, &seq.navigation("show/e1.mp4"));
        assert!(html.contains("<a id=\"prev\" href=\"/_watch/show/e0.mp4\">Previous</a>"));
        assert!(html.contains("<a id=\"next\" href=\"/_watch/show/e2.mp4\">Next</a>"));
        assert!(html.contains("<a id=\"current\" href=\"/_watch/show/e1.mp4\">e1.mp4</a>"));
        assert!(html.contains("<li class=\"current\"><a href=\"/_watch/show/e1.mp4\">e1.mp4</a></li>"));
    }

    #[test]
    fn ends_get_inert_placeholders() {
        let seq = sequence();
        let first = render_player(&seq, &seq.navigation("show/e0.mp4"));
        assert!(first.contains("<a id=\"prev\" href=\"#\" data-inert=\"true\">Previous</a>"));

        let last = render_player(&seq, &seq.navigation("show/e2.mp4"));
        assert!(last.contains("<a id=\"next\" href=\"#\" data-inert=\"true\">Next</a>"));
    }

    #[test]
    fn page_carries_series_root_and_script() {
        let seq = sequence();
        let html = render_player(&seq, &seq.navigation("show/e0.mp4"));
        assert!(html.contains("<body data-series-root=\"/_watch/show/\">"));
        assert!(html.contains("last-watched:"));
        assert!(html.contains("/_redirect/"));
        assert_eq!(html.matches("<body").count(), 1);
    }

    #[test]
    fn bucket_root_series_has_no_empty_crumb() {
        let seq = EpisodeSequence::new("", vec!["readme.txt".into()]);
        let html = render_player(&seq, &seq.navigation(""));
        assert!(html.contains("<h3><a href=\"/\">Home</a></h3>"));
        assert!(!html.contains("<a href=\"/\"></a>"));

        let series = sequence();
        let nested = render_player(&series, &series.navigation("show/e0.mp4"));
        assert!(nested.contains("<h3><a href=\"/\">Home</a> / <a href=\"/show/\">show/</a></h3>"));
    }
}
