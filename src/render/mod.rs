//! Server-side HTML for directory listings and the episode player.

pub mod listing;
pub mod player;

pub use listing::render_listing;
pub use player::render_player;

/// Opening markup shared by every page. `body_attrs` is inserted verbatim.
fn page_header(title: &str, style: &str, body_attrs: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{}</title>\n",
            "<style>\n{}\n</style>\n",
            "</head>\n<body{}>\n"
        ),
        html_escape(title),
        style,
        body_attrs
    )
}

fn page_footer() -> String {
    String::from("</body>\n</html>\n")
}

pub fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
