use serde::Serialize;

const ON_EACH_SIDE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// One page of a length-aware listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub path: String,
    pub first_page_url: String,
    pub last_page_url: String,
    pub prev_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub links: Vec<PageLink>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, current_page: u32, per_page: u32, path: &str) -> Self {
        let per_page = per_page.max(1);
        let current_page = current_page.max(1);
        let last_page = last_page(total, per_page);

        let offset = i64::from(current_page - 1) * i64::from(per_page);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(offset + 1), Some(offset + data.len() as i64))
        };

        let url = |page: u32| page_url(path, page);
        let prev_page_url = (current_page > 1).then(|| url(current_page - 1));
        let next_page_url = (current_page < last_page).then(|| url(current_page + 1));
        let links = links(path, current_page, last_page);

        Self {
            data,
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
            path: path.to_string(),
            first_page_url: url(1),
            last_page_url: url(last_page),
            prev_page_url,
            next_page_url,
            links,
        }
    }

    pub fn offset(page: u32, per_page: u32) -> i64 {
        i64::from(page.max(1) - 1) * i64::from(per_page.max(1))
    }
}

fn last_page(total: i64, per_page: u32) -> u32 {
    let pages = (total.max(0) + i64::from(per_page) - 1) / i64::from(per_page);
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

fn page_url(path: &str, page: u32) -> String {
    format!("{}?page={}", path, page)
}

enum Slot {
    Number(u32),
    Gap,
}

/// Page numbers to show, with gaps, for `current` out of `last`.
fn window(current: u32, last: u32) -> Vec<Slot> {
    let numbers = |range: std::ops::RangeInclusive<u32>| range.map(Slot::Number);

    if last < ON_EACH_SIDE * 2 + 8 {
        return numbers(1..=last).collect();
    }

    let window = ON_EACH_SIDE + 4;
    let mut slots = Vec::new();

    if current <= window {
        slots.extend(numbers(1..=window + ON_EACH_SIDE));
        slots.push(Slot::Gap);
        slots.extend(numbers(last - 1..=last));
    } else if current > last - window {
        slots.extend(numbers(1..=2));
        slots.push(Slot::Gap);
        slots.extend(numbers(last - (window + ON_EACH_SIDE - 1)..=last));
    } else {
        slots.extend(numbers(1..=2));
        slots.push(Slot::Gap);
        slots.extend(numbers(current - ON_EACH_SIDE..=current + ON_EACH_SIDE));
        slots.push(Slot::Gap);
        slots.extend(numbers(last - 1..=last));
    }

    slots
}

fn links(path: &str, current: u32, last: u32) -> Vec<PageLink> {
    let mut links = Vec::new();

    links.push(PageLink {
        url: (current > 1).then(|| page_url(path, current - 1)),
        label: "&laquo; Previous".to_string(),
        active: false,
    });

    for slot in window(current, last) {
        links.push(match slot {
            Slot::Number(n) => PageLink {
                url: Some(page_url(path, n)),
                label: n.to_string(),
                active: n == current,
            },
            Slot::Gap => PageLink {
                url: None,
                label: "...".to_string(),
                active: false,
            },
        });
    }

    links.push(PageLink {
        url: (current < last).then(|| page_url(path, current + 1)),
        label: "Next &raquo;".to_string(),
        active: false,
    });

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<T>(page: &Page<T>) -> Vec<&str> {
        page.links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn empty_listing_has_one_page() {
        let page: Page<u8> = Page::new(vec![], 0, 1, 12, "/products");
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
        assert_eq!(labels(&page), vec!["&laquo; Previous", "1", "Next &raquo;"]);
        assert!(page.prev_page_url.is_none());
        assert!(page.next_page_url.is_none());
    }

    #[test]
    fn middle_page_positions_and_urls() {
        let page = Page::new(vec![0u8; 12], 30, 2, 12, "/products");
        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, Some(13));
        assert_eq!(page.to, Some(24));
        assert_eq!(page.prev_page_url.as_deref(), Some("/products?page=1"));
        assert_eq!(page.next_page_url.as_deref(), Some("/products?page=3"));
        assert_eq!(page.last_page_url, "/products?page=3");

        let active: Vec<&str> = page
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["2"]);
    }

    #[test]
    fn past_the_end_is_empty_but_keeps_total() {
        let page: Page<u8> = Page::new(vec![], 30, 9, 12, "/products");
        assert_eq!(page.total, 30);
        assert_eq!(page.current_page, 9);
        assert!(page.data.is_empty());
        assert!(page.next_page_url.is_none());
    }

    #[test]
    fn small_listings_show_every_page() {
        let page: Page<u8> = Page::new(vec![0], 13 * 12, 1, 12, "/p");
        assert_eq!(page.last_page, 13);
        assert_eq!(page.links.len(), 13 + 2);
        assert!(!labels(&page).contains(&"..."));
    }

    #[test]
    fn window_near_start() {
        let page: Page<u8> = Page::new(vec![0], 20 * 12, 2, 12, "/p");
        assert_eq!(
            labels(&page),
            vec![
                "&laquo; Previous", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "...",
                "19", "20", "Next &raquo;"
            ]
        );
    }

    #[test]
    fn window_in_the_middle() {
        let page: Page<u8> = Page::new(vec![0], 20 * 12, 10, 12, "/p");
        assert_eq!(
            labels(&page),
            vec![
                "&laquo; Previous", "1", "2", "...", "7", "8", "9", "10", "11", "12", "13",
                "...", "19", "20", "Next &raquo;"
            ]
        );
        let gap = page.links.iter().find(|l| l.label == "...").map(|l| l.url.clone());
        assert_eq!(gap, Some(None));
    }

    #[test]
    fn window_near_end() {
        let page: Page<u8> = Page::new(vec![0], 20 * 12, 19, 12, "/p");
        assert_eq!(
            labels(&page),
            vec![
                "&laquo; Previous", "1", "2", "...", "11", "12", "13", "14", "15", "16", "17",
                "18", "19", "20", "Next &raquo;"
            ]
        );
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Page::<u8>::offset(1, 12), 0);
        assert_eq!(Page::<u8>::offset(3, 12), 24);
        assert_eq!(Page::<u8>::offset(0, 12), 0);
    }
}
