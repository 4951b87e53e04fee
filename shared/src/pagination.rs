//! Page arithmetic for server-paged lists.

/// One entry of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(usize),
    /// A gap of two or more pages; the payload is a stable render key.
    Ellipsis(&'static str),
}

/// Number of pages needed for `total` items; never less than one so an empty
/// list still has a page to sit on.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if total == 0 {
        1
    } else {
        let numerator = total.saturating_add(per_page - 1);
        usize::max(numerator / per_page, 1)
    }
}

/// `page` moved into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Compact page list: everything up to seven pages, otherwise the first and
/// last page plus a window around `current` with ellipses in the gaps.
pub fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = clamp_page(current, total);
    let mut slots = vec![PageSlot::Page(1)];

    let (mut start, mut end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 1, current + 1)
    };
    // An ellipsis never hides a single page.
    if start == 3 {
        start = 2;
    }
    if end + 2 == total {
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(slots: &[PageSlot]) -> String {
        slots
            .iter()
            .map(|slot| match slot {
                PageSlot::Page(n) => n.to_string(),
                PageSlot::Ellipsis(_) => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn total_pages_rounds_up_and_has_a_floor() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(render(&visible_slots(2, 5)), "1 2 3 4 5");
    }

    #[test]
    fn long_lists_collapse_around_current() {
        assert_eq!(render(&visible_slots(1, 20)), "1 2 3 4 5 … 20");
        assert_eq!(render(&visible_slots(10, 20)), "1 … 9 10 11 … 20");
        assert_eq!(render(&visible_slots(19, 20)), "1 … 16 17 18 19 20");
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_an_ellipsis() {
        assert_eq!(render(&visible_slots(4, 8)), "1 2 3 4 5 … 8");
        assert_eq!(render(&visible_slots(5, 8)), "1 … 4 5 6 7 8");
        assert_eq!(render(&visible_slots(4, 9)), "1 2 3 4 5 … 9");
        assert_eq!(render(&visible_slots(5, 9)), "1 … 4 5 6 … 9");
    }
}
