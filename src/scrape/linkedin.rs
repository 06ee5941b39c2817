use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{JobPostingExtractor, ScrapedPosting};

const TITLE_CLASS: &str = "top-card-layout__title";
const COMPANY_CLASS: &str = "topcard__org-name-link";
const LOCATION_CLASS: &str = "topcard__flavor--bullet";

static H1: LazyLock<Selector> = LazyLock::new(|| tag_selector("h1"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| tag_selector("a"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| tag_selector("span"));

fn tag_selector(tag: &str) -> Selector {
    Selector::parse(tag).expect("plain tag names are valid selectors")
}

/// Reads the public (logged-out) LinkedIn job page.
pub struct LinkedInExtractor;

impl JobPostingExtractor for LinkedInExtractor {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn handles(&self, url: &str) -> bool {
        url.contains("linkedin.com")
    }

    fn extract(&self, html: &str) -> ScrapedPosting {
        let document = Html::parse_document(html);

        ScrapedPosting {
            job_title: first_text_with_class(&document, &H1, TITLE_CLASS),
            company_name: first_text_with_class(&document, &ANCHOR, COMPANY_CLASS),
            job_location: first_text_with_class(&document, &SPAN, LOCATION_CLASS),
        }
    }
}

fn first_text_with_class(document: &Html, selector: &Selector, class: &str) -> String {
    document
        .select(selector)
        .find(|element| element.value().classes().any(|c| c == class))
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
