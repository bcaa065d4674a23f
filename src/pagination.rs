//! Pagination Window
//!
//! Pure helper computing which page buttons the pagination control shows.

/// One slot in the pagination control: a page button or an elided gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Number(u32),
    Ellipsis,
}

/// Display sequence for a 1-based `current_page` out of `total_pages`.
///
/// Page 1 and the last page are always shown. Between them sits a window of
/// neighbors around the current page, widened near either edge so the
/// control keeps a stable width, with an ellipsis for each elided run.
/// Callers don't render the control at all when `total_pages <= 1`.
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let mut tokens = vec![PageToken::Number(1)];

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = (current_page + 1).min(total_pages.saturating_sub(1));
    if current_page <= 3 {
        end = 4.min(total_pages.saturating_sub(1));
    }
    if current_page + 2 >= total_pages {
        start = total_pages.saturating_sub(3).max(2);
    }

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    for page in start..=end {
        tokens.push(PageToken::Number(page));
    }
    if end + 1 < total_pages {
        tokens.push(PageToken::Ellipsis);
    }

    if total_pages > 1 {
        tokens.push(PageToken::Number(total_pages));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Number};

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            page_tokens(1, 10),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            page_tokens(5, 10),
            vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            page_tokens(10, 10),
            vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn single_page_is_just_page_one() {
        assert_eq!(page_tokens(1, 1), vec![Number(1)]);
    }

    #[test]
    fn small_totals_have_no_ellipsis() {
        assert_eq!(page_tokens(1, 2), vec![Number(1), Number(2)]);
        assert_eq!(page_tokens(2, 3), vec![Number(1), Number(2), Number(3)]);
        assert_eq!(
            page_tokens(3, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn near_front_widens_the_window() {
        assert_eq!(
            page_tokens(3, 10),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn near_back_widens_the_window() {
        assert_eq!(
            page_tokens(8, 10),
            vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn bounds_and_ordering_hold_everywhere() {
        for total in 2..=40u32 {
            for current in 1..=total {
                let tokens = page_tokens(current, total);
                assert_eq!(tokens.first(), Some(&Number(1)), "({current}, {total})");
                assert_eq!(tokens.last(), Some(&Number(total)), "({current}, {total})");

                let numbers: Vec<u32> = tokens
                    .iter()
                    .filter_map(|token| match token {
                        Number(page) => Some(*page),
                        Ellipsis => None,
                    })
                    .collect();
                // Strictly increasing implies no duplicates.
                assert!(
                    numbers.windows(2).all(|pair| pair[0] < pair[1]),
                    "({current}, {total}): {numbers:?}"
                );
                assert!(numbers.contains(&current), "({current}, {total})");
            }
        }
    }
}
