use crate::model::Bookmark;

/// Neutralizes embedded markup in the free-text fields of an outbound
/// bookmark. Titles are plain text, so every HTML-significant character is
/// escaped to a literal. Descriptions may carry benign inline markup, so they
/// go through ammonia's allow-list instead: `<strong>` survives, script
/// content and event-bearing attributes like `onerror` do not.
///
/// Runs on every read path and on the create echo, never before persistence.
/// `id`, `url`, and `rating` pass through unchanged.
pub fn sanitize_bookmark(bookmark: Bookmark) -> Bookmark {
    Bookmark {
        title: html_escape::encode_text(&bookmark.title).into_owned(),
        description: ammonia::clean(&bookmark.description),
        ..bookmark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malicious_bookmark() -> Bookmark {
        Bookmark {
            id: "3e450003-4e58-4283-8527-8c61166fdaba".to_string(),
            title: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.to_string(),
            url: "http://maliciouswebsite.com".to_string(),
            description: r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#.to_string(),
            rating: 2,
        }
    }

    #[test]
    fn title_markup_is_escaped_to_literals() {
        let clean = sanitize_bookmark(malicious_bookmark());
        assert_eq!(
            clean.title,
            r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
    }

    #[test]
    fn description_keeps_benign_tags_and_drops_event_attributes() {
        let clean = sanitize_bookmark(malicious_bookmark());
        assert!(clean.description.contains("<strong>all</strong>"));
        assert!(!clean.description.contains("onerror"));
        assert!(!clean.description.contains("alert(document.cookie)"));
        assert!(
            clean
                .description
                .contains(r#"<img src="https://url.to.file.which/does-not.exist">"#)
        );
    }

    #[test]
    fn id_url_and_rating_pass_through() {
        let original = malicious_bookmark();
        let clean = sanitize_bookmark(original.clone());
        assert_eq!(clean.id, original.id);
        assert_eq!(clean.url, original.url);
        assert_eq!(clean.rating, original.rating);
    }

    #[test]
    fn plain_text_fields_are_untouched() {
        let bookmark = Bookmark {
            id: "54e8f551-4387-4239-85cd-c6bef50f7dad".to_string(),
            title: "Thinkful".to_string(),
            url: "https://www.thinkful.com".to_string(),
            description: "Think outside the classroom".to_string(),
            rating: 5,
        };
        assert_eq!(sanitize_bookmark(bookmark.clone()), bookmark);
    }

    #[test]
    fn sanitizing_twice_is_stable_for_plain_text() {
        let bookmark = Bookmark {
            id: "fef98b65-f9a1-4e9a-82de-14b47574a202".to_string(),
            title: "MDN".to_string(),
            url: "https://developer.mozilla.org".to_string(),
            description: "The only place to find web documentation".to_string(),
            rating: 5,
        };
        let once = sanitize_bookmark(bookmark.clone());
        let twice = sanitize_bookmark(once.clone());
        assert_eq!(once, twice);
    }
}
