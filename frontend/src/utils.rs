use std::sync::OnceLock;

use ammonia::Builder;
use blogdesk_shared::text::strip_html;

/// Shown when an article has no thumbnail.
pub const IMAGE_FALLBACK: &str = "/static/placeholder-thumbnail.svg";

fn sanitizer() -> &'static Builder<'static> {
    static SANITIZER: OnceLock<Builder<'static>> = OnceLock::new();
    SANITIZER.get_or_init(|| {
        let mut builder = Builder::default();
        builder
            .add_generic_attributes(&["class", "style"])
            .add_tag_attributes("img", &["width", "height", "loading"])
            .link_rel(Some("noopener noreferrer"));
        builder
    })
}

/// Clean untrusted article HTML so it can be written with `set_inner_html`.
pub fn sanitize_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    sanitizer().clean(html).to_string()
}

/// Thumbnail source, falling back to the placeholder for empty URLs.
pub fn image_src(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        IMAGE_FALLBACK.to_string()
    } else {
        url.to_string()
    }
}

/// Words in the visible text of an HTML fragment.
pub fn word_count(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_scripts_and_handlers() {
        let dirty = r#"<p onclick="steal()">Hi<script>alert(1)</script></p>"#;
        let clean = sanitize_html(dirty);
        assert!(clean.contains("<p>Hi</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
    }

    #[test]
    fn sanitize_keeps_formatting_classes() {
        let clean = sanitize_html(r#"<p class="ql-align-center"><strong>Bold</strong></p>"#);
        assert!(clean.contains(r#"class="ql-align-center""#));
        assert!(clean.contains("<strong>Bold</strong>"));
    }

    #[test]
    fn empty_image_uses_fallback() {
        assert_eq!(image_src("  "), IMAGE_FALLBACK);
        assert_eq!(image_src("https://cdn.test/a.png"), "https://cdn.test/a.png");
    }

    #[test]
    fn counts_words_in_markup() {
        assert_eq!(word_count("<p>one <b>two</b></p><p>three</p>"), 3);
        assert_eq!(word_count("<p><br></p>"), 0);
    }
}
