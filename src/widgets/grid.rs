//! Card grid layout.

use crate::core::text::slice::fit_to_width;

const GUTTER: usize = 2;

/// Number of columns that fit `width` when each card needs at least `min_card_width`.
pub fn column_count(width: usize, min_card_width: usize, max_columns: usize) -> usize {
    let min_card_width = min_card_width.max(1);
    let mut columns = max_columns.max(1);
    while columns > 1 && columns * min_card_width + (columns - 1) * GUTTER > width {
        columns -= 1;
    }
    columns
}

/// Lays cards out left to right in rows of `columns`.
///
/// `render_card` receives the card index and the card width. Cards in one row are padded to
/// the tallest card; rows are separated by one blank line.
pub fn grid<F>(count: usize, columns: usize, width: usize, mut render_card: F) -> Vec<String>
where
    F: FnMut(usize, usize) -> Vec<String>,
{
    let columns = columns.max(1);
    let card_width = width.saturating_sub((columns - 1) * GUTTER) / columns;
    let gutter = " ".repeat(GUTTER);
    let mut rows = Vec::new();

    let mut start = 0;
    while start < count {
        let end = (start + columns).min(count);
        let cards: Vec<Vec<String>> = (start..end)
            .map(|index| render_card(index, card_width))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        if start > 0 {
            rows.push(String::new());
        }
        for line in 0..height {
            let mut row = String::new();
            for (slot, card) in cards.iter().enumerate() {
                if slot > 0 {
                    row.push_str(&gutter);
                }
                let cell = card.get(line).map(String::as_str).unwrap_or("");
                row.push_str(&fit_to_width(cell, card_width));
            }
            rows.push(row);
        }
        start = end;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::{column_count, grid};
    use crate::core::text::ansi::strip_ansi;

    #[test]
    fn column_count_shrinks_to_fit() {
        assert_eq!(column_count(120, 34, 3), 3);
        assert_eq!(column_count(80, 34, 3), 2);
        assert_eq!(column_count(40, 34, 3), 1);
        assert_eq!(column_count(10, 34, 3), 1);
    }

    #[test]
    fn grid_pads_short_cards_and_separates_rows() {
        let rows = grid(3, 2, 12, |index, width| {
            assert_eq!(width, 5);
            if index == 0 {
                vec!["a".into(), "b".into()]
            } else {
                vec![format!("c{index}")]
            }
        });

        let plain: Vec<String> = rows.iter().map(|row| strip_ansi(row)).collect();
        assert_eq!(plain, vec!["a      c1   ", "b           ", "", "c2   "]);
    }
}
