// src/combinatorics/pascal.rs

use num::BigInt;

/// Generates the first `rows` rows of Pascal's triangle.
///
/// Row `i` (0-indexed) holds the binomial coefficients `C(i, k)` for
/// `k in 0..=i`. Rows are built additively from the previous row via
/// Pascal's rule, so no factorials are evaluated.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::combinatorics::pascals_triangle;
///
/// let triangle = pascals_triangle(3);
/// assert_eq!(triangle.len(), 3);
/// assert_eq!(triangle[2], vec![BigInt::from(1), BigInt::from(2), BigInt::from(1)]);
/// ```
pub fn pascals_triangle(rows: usize) -> Vec<Vec<BigInt>> {
    let mut triangle: Vec<Vec<BigInt>> = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut row = vec![BigInt::from(1)];
        if let Some(prev) = triangle.last() {
            for k in 1..i {
                row.push(&prev[k - 1] + &prev[k]);
            }
            row.push(BigInt::from(1));
        }
        triangle.push(row);
    }
    triangle
}

/// Renders Pascal's triangle as a multi-line string, each row centered to
/// the printed width of the longest (last) row.
///
/// Rows are space-joined; padding never trails a line. Zero rows renders
/// as the empty string.
pub fn format_pascals_triangle(rows: usize) -> String {
    let triangle = pascals_triangle(rows);

    let row_strings: Vec<String> = triangle
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let max_width = row_strings.iter().map(|s| s.len()).max().unwrap_or(0);

    row_strings
        .iter()
        .map(|s| {
            let pad = (max_width - s.len()) / 2;
            format!("{}{}", " ".repeat(pad), s)
        })
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use num::BigInt;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn row_n_sums_to_two_to_the_n(rows in 1usize..64) {
            let triangle = pascals_triangle(rows);
            for (n, row) in triangle.iter().enumerate() {
                let sum: BigInt = row.iter().sum();
                prop_assert_eq!(sum, BigInt::from(1) << n);
            }
        }

        #[test]
        fn rows_are_palindromic(rows in 1usize..64) {
            let triangle = pascals_triangle(rows);
            for row in &triangle {
                let mut reversed = row.clone();
                reversed.reverse();
                prop_assert_eq!(row, &reversed);
            }
        }
    }
}
