//! HTML-to-text extraction.

use scraper::{ElementRef, Html};

/// Tags whose entire subtree is invisible and must be dropped.
const SKIPPED_TAGS: [&str; 2] = ["script", "style"];

/// Extracts the visible text of an HTML document.
///
/// `<script>` and `<style>` subtrees are removed entirely; the remaining text
/// nodes are joined and all runs of whitespace collapse to single spaces. The
/// result is trimmed, so a page with no visible text yields an empty string.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);
    let words: Vec<&str> = raw.split_whitespace().collect();
    words.join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if SKIPPED_TAGS
        .iter()
        .any(|skipped| name.eq_ignore_ascii_case(skipped))
    {
        return;
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push(' ');
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_content() {
        let html = "<html><body><script>evil()</script><p>Hello world</p></body></html>";
        assert_eq!(extract_text(html), "Hello world");
    }

    #[test]
    fn strips_style_content() {
        let html = "<html><head><style>body { color: red; }</style></head>\
                    <body><p>Visible</p></body></html>";
        assert_eq!(extract_text(html), "Visible");
    }

    #[test]
    fn strips_nested_script_subtrees() {
        let html = "<div><script><span>hidden</span></script><em>shown</em></div>";
        assert_eq!(extract_text(html), "shown");
    }

    #[test]
    fn collapses_whitespace_between_elements() {
        let html = "<body><h1>Title</h1>\n\n  <p>One\n two</p> <p>three</p></body>";
        assert_eq!(extract_text(html), "Title One two three");
    }

    #[test]
    fn page_without_visible_text_is_empty() {
        let html = "<html><body><script>x()</script></body></html>";
        assert_eq!(extract_text(html), "");
    }
}
