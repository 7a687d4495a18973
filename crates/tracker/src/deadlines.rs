//! Deadline extraction from the ca.gov landing page.

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::extract::normalize_whitespace;

/// A dated deadline published on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct Deadline {
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Parses deadline cards out of the landing page.
///
/// Each card is a `div.col-lg-3` with an `h3.font-size-20` date and a
/// `p` description; cards missing either part are skipped. Output is
/// sorted ascending by parsed date, unparseable dates last in page
/// order.
#[must_use]
pub fn parse_deadlines(html: &str) -> Vec<Deadline> {
    let document = Html::parse_document(html);
    let (Ok(card_sel), Ok(date_sel), Ok(desc_sel)) = (
        Selector::parse("div.col-lg-3"),
        Selector::parse("h3.font-size-20"),
        Selector::parse("p"),
    ) else {
        return Vec::new();
    };

    let mut entries: Vec<(Option<NaiveDate>, Deadline)> = document
        .select(&card_sel)
        .filter_map(|card| {
            let date_el = card.select(&date_sel).next()?;
            let desc_el = card.select(&desc_sel).next()?;
            let date = normalize_whitespace(&date_el.text().collect::<String>());
            let (description, link) = extract_description(desc_el);
            if date.is_empty() || description.is_empty() {
                return None;
            }
            let sort_key = parse_display_date(&date);
            Some((sort_key, Deadline { date, description, link }))
        })
        .collect();

    // None sorts after every real date, preserving page order among
    // unparseable entries.
    entries.sort_by_key(|(key, _)| key.unwrap_or(NaiveDate::MAX));
    entries.into_iter().map(|(_, deadline)| deadline).collect()
}

/// Flattens the description paragraph, inlining link text and capturing
/// the first href. The decorative external-link-icon span is dropped.
fn extract_description(desc_el: ElementRef<'_>) -> (String, Option<String>) {
    let Ok(icon_sel) = Selector::parse("span.external-link-icon") else {
        return (normalize_whitespace(&desc_el.text().collect::<String>()), None);
    };

    let mut link = None;
    let mut parts: Vec<String> = Vec::new();
    for child in desc_el.children() {
        if let Some(text) = child.value().as_text() {
            parts.push(text.to_string());
        } else if let Some(el) = ElementRef::wrap(child) {
            if el.value().name() == "a" {
                if link.is_none() {
                    link = el.value().attr("href").map(str::to_owned);
                }
                let mut text = el.text().collect::<String>();
                if let Some(icon) = el.select(&icon_sel).next() {
                    let icon_text = icon.text().collect::<String>();
                    text = text.replace(&icon_text, "");
                }
                parts.push(text);
            } else {
                parts.push(el.text().collect::<String>());
            }
        }
    }
    (normalize_whitespace(&parts.join(" ")), link)
}

/// "March 10, 2025" → date; anything else → `None`.
fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%B %d, %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="col-lg-3">
            <h3 class="font-size-20">March 31, 2025</h3>
            <p>Deadline to apply for <a href="https://sba.gov/apply">SBA loans
               <span class="external-link-icon">(opens new window)</span></a> assistance.</p>
          </div>
          <div class="col-lg-3">
            <h3 class="font-size-20">March 10, 2025</h3>
            <p>FEMA assistance registration closes.</p>
          </div>
          <div class="col-lg-3">
            <h3 class="font-size-20">Ongoing</h3>
            <p>Debris removal right-of-entry forms accepted.</p>
          </div>
          <div class="col-lg-3">
            <h3 class="font-size-20">April 1, 2025</h3>
          </div>
        </body></html>"#;

    #[test]
    fn parses_and_sorts_by_date_ascending() {
        let deadlines = parse_deadlines(PAGE);
        assert_eq!(deadlines.len(), 3);
        assert_eq!(deadlines[0].date, "March 10, 2025");
        assert_eq!(deadlines[1].date, "March 31, 2025");
        // unparseable date sorts last
        assert_eq!(deadlines[2].date, "Ongoing");
    }

    #[test]
    fn inlines_link_text_and_strips_icon() {
        let deadlines = parse_deadlines(PAGE);
        let sba = &deadlines[1];
        assert_eq!(sba.link.as_deref(), Some("https://sba.gov/apply"));
        assert!(sba.description.contains("SBA loans"));
        assert!(!sba.description.contains("opens new window"));
    }

    #[test]
    fn card_without_description_is_skipped() {
        let deadlines = parse_deadlines(PAGE);
        assert!(deadlines.iter().all(|d| d.date != "April 1, 2025"));
    }

    #[test]
    fn empty_page_yields_no_deadlines() {
        assert!(parse_deadlines("<html><body></body></html>").is_empty());
    }
}
