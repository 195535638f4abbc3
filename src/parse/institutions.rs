use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use super::InstitutionName;

/// Link targets of listing entries. Nav, footer and promo links never start with it.
pub const INSTITUTION_LINK_PREFIX: &str = "/in/uni/";

/// Decides whether an anchor's `href` points at a university listing entry.
pub fn is_institution_link(href: &str) -> bool {
    href.starts_with(INSTITUTION_LINK_PREFIX)
}

/// Every non-empty institution name on the page in document order, duplicates included.
pub fn institution_names(html: &str) -> Vec<InstitutionName> {
    let document = Html::parse_document(html);
    names_from_html_element(document.root_element())
}

fn names_from_html_element(element: ElementRef) -> Vec<InstitutionName> {
    static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();
    let links = LINK_SELECTOR
        .get_or_init(|| Selector::parse("a[href]").expect("link selector should be valid"));

    element
        .select(links)
        .filter(|link| link.attr("href").is_some_and(is_institution_link))
        .filter_map(|link| InstitutionName::new(&rendered_text(link)))
        .collect()
}

fn rendered_text(element: ElementRef) -> String {
    element.text().collect()
}
