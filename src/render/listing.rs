//! HTML table for one directory level of the bucket.

use super::{html_escape, page_footer, page_header};
use crate::models::object::{DELIMITER, Listing, ObjectEntry, encode_key, last_segment};

/// Render `listing` as a browsable page titled with the bucket name.
pub fn render_listing(bucket: &str, listing: &Listing) -> String {
    let mut html = page_header(bucket, "td { padding: 5px 10px; }", "");
    html.push_str(&breadcrumbs(&listing.prefix));
    html.push_str(concat!(
        "<table border=\"1\">\n<thead>\n<tr>",
        "<td>Last Modified</td><td>Size</td><td>Download</td>",
        "<td>View</td><td>Watch</td><td>Name</td>",
        "</tr>\n</thead>\n<tbody>\n"
    ));

    for prefix in &listing.directories {
        html.push_str(&directory_row(prefix));
    }
    for object in &listing.objects {
        html.push_str(&object_row(object));
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(&page_footer());
    html
}

/// `Home / a / b` links, one per level of `prefix`.
fn breadcrumbs(prefix: &str) -> String {
    let mut out = String::from("<h3><a href=\"/\">Home</a>");
    let mut walked = String::new();
    for segment in prefix.split(DELIMITER).filter(|s| !s.is_empty()) {
        walked.push_str(segment);
        walked.push(DELIMITER);
        out.push_str(&format!(
            " / <a href=\"/{}\">{}</a>",
            encode_key(&walked),
            html_escape(segment)
        ));
    }
    out.push_str("</h3>\n");
    out
}

fn directory_row(prefix: &str) -> String {
    let href = encode_key(prefix);
    format!(
        concat!(
            "<tr class=\"directory\">",
            "<td></td><td></td><td></td>",
            "<td><a href=\"/{href}\">View</a></td>",
            "<td><a href=\"/_watch/{href}\">Watch</a></td>",
            "<td>{name}/</td>",
            "</tr>\n"
        ),
        href = href,
        name = html_escape(last_segment(prefix)),
    )
}

fn object_row(object: &ObjectEntry) -> String {
    let href = encode_key(&object.key);
    format!(
        concat!(
            "<tr class=\"object\">",
            "<td>{modified}</td><td>{size}</td>",
            "<td><a target=\"_blank\" href=\"/_redirect/{href}\">Download</a></td>",
            "<td><a target=\"_blank\" href=\"/{href}\">View</a></td>",
            "<td><a href=\"/_watch/{href}\">Watch</a></td>",
            "<td>{name}</td>",
            "</tr>\n"
        ),
        modified = object.last_modified.format("%Y-%m-%d %H:%M:%S UTC"),
        size = object.size,
        href = href,
        name = html_escape(object.name()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing() -> Listing {
        Listing {
            prefix: "shows/".into(),
            directories: vec!["shows/Season 1/".into()],
            objects: vec![ObjectEntry {
                key: "shows/a&b.mp4".into(),
                size: 2048,
                last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            }],
        }
    }

    #[test]
    fn directory_rows_link_to_nested_listing_and_player() {
        let html = render_listing("media", &listing());
        assert!(html.contains("<a href=\"/shows/Season%201/\">View</a>"));
        assert!(html.contains("<a href=\"/_watch/shows/Season%201/\">Watch</a>"));
        assert!(html.contains("<td>Season 1/</td>"));
    }

    #[test]
    fn object_rows_link_view_download_and_watch() {
        let html = render_listing("media", &listing());
        assert!(html.contains("href=\"/_redirect/shows/a%26b.mp4\">Download</a>"));
        assert!(html.contains("href=\"/shows/a%26b.mp4\">View</a>"));
        assert!(html.contains("href=\"/_watch/shows/a%26b.mp4\">Watch</a>"));
        assert!(html.contains("<td>a&amp;b.mp4</td>"));
        assert!(html.contains("<td>2024-05-01 12:30:00 UTC</td><td>2048</td>"));
    }

    #[test]
    fn breadcrumbs_walk_each_level() {
        let crumbs = breadcrumbs("a/b c/");
        assert_eq!(
            crumbs,
            "<h3><a href=\"/\">Home</a> / <a href=\"/a/\">a</a> / <a href=\"/a/b%20c/\">b c</a></h3>\n"
        );
    }

    #[test]
    fn title_is_the_bucket_name() {
        let html = render_listing("my<bucket>", &Listing::default());
        assert!(html.contains("<title>my&lt;bucket&gt;</title>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }
}
