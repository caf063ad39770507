// Column rows: fixed-width cells inside a light frame
//
// │ 05/03/2025 14:02:11 │ DEPOSITO           │     R$ 150,00 │
//
// Each cell is justified to its own width; cells are separated by " │ " and
// the row has one column of margin on each side.

use super::Border;
use crate::text::{justify, Align};

const SEPARATOR: &str = " │ ";

/// One cell of a column row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub text: &'a str,
    pub width: usize,
    pub align: Align,
}

impl<'a> Column<'a> {
    pub fn new(text: &'a str, width: usize) -> Self {
        Self {
            text,
            width,
            align: Align::Start,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Interior width of a row made of cells with these widths
pub fn columns_interior_width(widths: &[usize]) -> usize {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.chars().count();
    widths.iter().sum::<usize>() + separators + 2
}

/// Render one framed row of cells.
///
/// The row is as wide as `columns_interior_width` of the cell widths plus the
/// two border columns, so it lines up with a frame of that interior.
pub fn render_columns(cells: &[Column<'_>], border_style: &str) -> String {
    let body = cells
        .iter()
        .map(|cell| justify(cell.text, cell.width, cell.align))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    Border::LIGHT.framed(border_style, &format!(" {} ", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Sgr;
    use crate::text::measure;

    #[test]
    fn test_interior_width() {
        assert_eq!(columns_interior_width(&[19, 18, 23]), 68);
        assert_eq!(columns_interior_width(&[5]), 7);
        assert_eq!(columns_interior_width(&[]), 2);
    }

    #[test]
    fn test_row_width_matches_frame() {
        let widths = [19, 18, 23];
        let value = format!("{}R$ 150,00{}", Sgr::GREEN, Sgr::RESET);
        let row = render_columns(
            &[
                Column::new("\x1b[2m05/03/2025 14:02:11\x1b[0m", widths[0]),
                Column::new("TRANSF.ENTRADA", widths[1]),
                Column::new(&value, widths[2]).align(Align::End),
            ],
            Sgr::CYAN,
        );
        assert_eq!(measure(&row), columns_interior_width(&widths) + 2);
        let top = Border::LIGHT.top(Sgr::CYAN, columns_interior_width(&widths));
        assert_eq!(measure(&row), measure(&top));
    }

    #[test]
    fn test_right_aligned_cell() {
        let row = render_columns(&[Column::new("7", 3).align(Align::End)], "");
        assert_eq!(row, "│\x1b[0m   7 │\x1b[0m");
    }
}
