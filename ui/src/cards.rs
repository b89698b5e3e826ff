//! Card content for the swipe deck.

use api::MatchCandidate;
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

/// Format a date as "Mar 3rd".
pub fn format_short_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = if (4..=20).contains(&day) {
        "th"
    } else {
        match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{} {}{}", date.format("%b"), day, suffix)
}

fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!(
            "{} to {}",
            format_short_date(start),
            format_short_date(end)
        )),
        (Some(start), None) => Some(format!("From {}", format_short_date(start))),
        _ => None,
    }
}

fn beds_and_baths(bedrooms: Option<i32>, bathrooms: Option<i32>) -> Option<String> {
    match (bedrooms, bathrooms) {
        (Some(beds), Some(baths)) => Some(format!("{beds} bed · {baths} bath")),
        (Some(beds), None) => Some(format!("{beds} bed")),
        (None, Some(baths)) => Some(format!("{baths} bath")),
        (None, None) => None,
    }
}

/// What a renter sees: the listing side of a candidate.
#[component]
pub fn ListingCardContent(candidate: MatchCandidate) -> Element {
    let price = candidate
        .asking_price
        .map(|price| format!("${price:.0}/month"));
    let dates = date_range(candidate.start_date, candidate.end_date);
    let rooms = beds_and_baths(candidate.num_bedrooms, candidate.num_bathrooms);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; overflow: hidden;",
            if let Some(url) = &candidate.photo_url {
                img {
                    src: "{url}",
                    style: "width: 100%; height: 16rem; object-fit: cover; border-radius: 1rem;",
                }
            }
            if let Some(address) = &candidate.address {
                h2 { style: "margin: 0; font-size: 1.25rem; color: #1f2937;", "{address}" }
            }
            if let Some(price) = price {
                p { style: "margin: 0; font-size: 1.125rem; font-weight: 600; color: #10b981;", "{price}" }
            }
            if let Some(rooms) = rooms {
                p { style: "margin: 0; color: #6b7280;", "{rooms}" }
            }
            if let Some(dates) = dates {
                p { style: "margin: 0; color: #6b7280;", "{dates}" }
            }
            if let Some(name) = &candidate.lister_name {
                p { style: "margin: 0; color: #9ca3af; font-size: 0.875rem;", "Listed by {name}" }
            }
            if let Some(bio) = &candidate.bio {
                p { style: "margin: 0; color: #4b5563;", "{bio}" }
            }
        }
    }
}

/// What a lister sees: the renter side of a candidate.
#[component]
pub fn RenterCardContent(candidate: MatchCandidate) -> Element {
    let budget = candidate.budget.map(|budget| format!("Budget ${budget:.0}/month"));
    let dates = date_range(candidate.start_date, candidate.end_date);
    let rooms = beds_and_baths(candidate.num_bedrooms, candidate.num_bathrooms);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; overflow: hidden;",
            if let Some(url) = &candidate.photo_url {
                img {
                    src: "{url}",
                    style: "width: 100%; height: 16rem; object-fit: cover; border-radius: 1rem;",
                }
            }
            if let Some(name) = &candidate.first_name {
                h2 { style: "margin: 0; font-size: 1.25rem; color: #1f2937;", "{name}" }
            }
            if let Some(budget) = budget {
                p { style: "margin: 0; font-size: 1.125rem; font-weight: 600; color: #10b981;", "{budget}" }
            }
            if let Some(rooms) = rooms {
                p { style: "margin: 0; color: #6b7280;", "Looking for {rooms}" }
            }
            if let Some(dates) = dates {
                p { style: "margin: 0; color: #6b7280;", "{dates}" }
            }
            if let Some(bio) = &candidate.bio {
                p { style: "margin: 0; color: #4b5563;", "{bio}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date_suffixes() {
        let date = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        assert_eq!(format_short_date(date(1)), "Mar 1st");
        assert_eq!(format_short_date(date(2)), "Mar 2nd");
        assert_eq!(format_short_date(date(3)), "Mar 3rd");
        assert_eq!(format_short_date(date(4)), "Mar 4th");
        assert_eq!(format_short_date(date(11)), "Mar 11th");
        assert_eq!(format_short_date(date(21)), "Mar 21st");
        assert_eq!(format_short_date(date(22)), "Mar 22nd");
        assert_eq!(format_short_date(date(30)), "Mar 30th");
    }

    #[test]
    fn test_date_range_requires_start() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1);
        assert_eq!(
            date_range(start, NaiveDate::from_ymd_opt(2025, 8, 31)),
            Some("May 1st to Aug 31st".to_string())
        );
        assert_eq!(date_range(start, None), Some("From May 1st".to_string()));
        assert_eq!(date_range(None, NaiveDate::from_ymd_opt(2025, 8, 31)), None);
    }
}
