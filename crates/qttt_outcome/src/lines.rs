//! Winning-line geometry
//!
//! Gantree: L3_Outcome → Lines
//!
//! Lines are lists of row-major cell positions. Scan order is every row,
//! then every column, then the main and anti diagonals.

/// Row-major positions of a single line
pub type Line = Vec<usize>;

/// All rows, top to bottom
pub fn rows(d: usize) -> Vec<Line> {
    (0..d).map(|r| (0..d).map(|c| r * d + c).collect()).collect()
}

/// All columns, left to right
pub fn columns(d: usize) -> Vec<Line> {
    (0..d).map(|c| (0..d).map(|r| r * d + c).collect()).collect()
}

/// Main diagonal followed by the anti-diagonal
pub fn diagonals(d: usize) -> Vec<Line> {
    vec![
        (0..d).map(|i| i * d + i).collect(),
        (0..d).map(|i| i * d + (d - i - 1)).collect(),
    ]
}

/// Every line checked by the classifier, in scan order
pub fn all_lines(d: usize) -> Vec<Line> {
    let mut lines = rows(d);
    lines.extend(columns(d));
    lines.extend(diagonals(d));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3x3_lines() {
        assert_eq!(rows(3)[1], vec![3, 4, 5]);
        assert_eq!(columns(3)[2], vec![2, 5, 8]);
        assert_eq!(diagonals(3), vec![vec![0, 4, 8], vec![2, 4, 6]]);
        assert_eq!(all_lines(3).len(), 8);
    }

    #[test]
    fn test_single_cell_board() {
        // 1x1: the lone cell is every line
        let lines = all_lines(1);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l == &vec![0]));
    }

    #[test]
    fn test_line_count() {
        for d in 1..=4 {
            assert_eq!(all_lines(d).len(), 2 * d + 2);
            assert!(all_lines(d).iter().all(|l| l.len() == d));
        }
    }
}
