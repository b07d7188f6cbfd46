// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector `{css}`: {e}")))
}

pub fn compile_all(list: &[&str]) -> Result<Vec<Selector>> {
    list.iter().map(|css| compile(css)).collect()
}

/// Direct text children of `el`, in order. Whitespace-only nodes included.
pub fn own_text_nodes(el: ElementRef<'_>) -> impl Iterator<Item = String> + '_ {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| String::from(&**t)))
}

/// First direct text node under any element matching `sel`, document order.
pub fn first_own_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).flat_map(own_text_nodes).next()
}

/// Try each selector in turn; the first one that yields a text node wins.
pub fn first_own_text_any(doc: &Html, candidates: &[Selector]) -> Option<String> {
    candidates.iter().find_map(|sel| first_own_text(doc, sel))
}

/// Try each selector in turn; the first one matching any element wins.
pub fn first_match<'a>(doc: &'a Html, candidates: &[Selector]) -> Option<ElementRef<'a>> {
    candidates.iter().find_map(|sel| doc.select(sel).next())
}

/// Flattened text of the whole subtree.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> Html {
        Html::parse_document(s)
    }

    #[test]
    fn own_text_skips_nested_elements() {
        let d = doc("<h1>BSc <span>ignored</span> Maths</h1>");
        let sel = compile("h1").unwrap();
        let h1 = d.select(&sel).next().unwrap();
        let parts: Vec<String> = own_text_nodes(h1).collect();
        assert_eq!(parts, vec!["BSc ", " Maths"]);
        assert_eq!(first_own_text(&d, &sel).as_deref(), Some("BSc "));
    }

    #[test]
    fn first_own_text_moves_past_empty_elements() {
        let d = doc("<h1><img src=x></h1><h1>Second</h1>");
        let sel = compile("h1").unwrap();
        assert_eq!(first_own_text(&d, &sel).as_deref(), Some("Second"));
    }

    #[test]
    fn candidates_are_tried_in_order() {
        let d = doc("<html><head><title>From title</title></head><body><h1>From h1</h1></body></html>");
        let list = compile_all(&["#missing h1", "h1", "title"]).unwrap();
        assert_eq!(first_own_text_any(&d, &list).as_deref(), Some("From h1"));

        let list = compile_all(&["#missing", "title"]).unwrap();
        let el = first_match(&d, &list).unwrap();
        assert_eq!(text_content(el), "From title");
    }

    #[test]
    fn bad_selector_is_a_parse_error() {
        assert!(matches!(compile("div[["), Err(ScrapeError::Parse(_))));
    }
}
