//! Column width computation for property/value tables.
//!
//! A row is `buffer_left | property | pad sep pad | value | buffer_right`
//! and always spans the full line width. `budget` below is the space left
//! for the two columns once the separator and its padding are taken out.
//!
//! Body alignment picks one of three algorithms:
//!
//! - **left**: the property column is sized to its content, the value
//!   column takes the rest.
//! - **right**: the mirror image, driven by the values.
//! - **center**: both columns are sized to content and positioned around
//!   the natural midpoint of the line; content alignment decides where the
//!   remaining space goes.

use crate::error::LayoutError;
use crate::types::{Align, WIDTH_MIN};

/// Resolved geometry of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub property: usize,
    pub value: usize,
    /// Blank cells before the property column.
    pub buffer_left: usize,
    /// Blank cells after the value column.
    pub buffer_right: usize,
}

impl ColumnWidths {
    /// Row width these columns produce with `padding` around a one-cell separator.
    pub fn line_width(&self, padding: usize) -> usize {
        self.buffer_left + self.property + 2 * padding + 1 + self.value + self.buffer_right
    }
}

/// Natural central column widths for a line with no content bias.
///
/// Their sum is always `line_width - 2 * padding - 1`. On even widths the
/// property side is one cell narrower.
pub fn central_widths(line_width: usize, padding: usize) -> (usize, usize) {
    let half = line_width / 2;
    let even = usize::from(line_width % 2 == 0);
    (half - padding - even, half - padding)
}

/// Offset of the split from the natural midpoint for a width difference.
///
/// Half the difference, truncated toward zero; on odd line widths an odd
/// difference rounds away from zero instead.
pub fn center_shift(diff: isize, line_width: usize) -> isize {
    let odd_width = (line_width % 2) as isize;
    diff / 2 + diff.signum() * odd_width * (diff.abs() % 2)
}

/// Compute column widths.
///
/// `content` holds, per rendered pair, the width of its widest property line
/// and its widest value line.
pub fn compute_columns(
    content: &[(usize, usize)],
    body: Align,
    content_align: Align,
    padding: usize,
    line_width: usize,
) -> Result<ColumnWidths, LayoutError> {
    let budget = line_width as isize - 2 * padding as isize - 1;
    let width_max = budget - WIDTH_MIN as isize;
    if width_max < WIDTH_MIN as isize {
        let required = line_width as isize + (WIDTH_MIN as isize - width_max);
        return Err(LayoutError::InsufficientWidth {
            required: required as usize,
        });
    }
    let budget = budget as usize;
    let width_max = width_max as usize;

    let widest_property = content.iter().map(|&(p, _)| p).max().unwrap_or(0);
    let widest_value = content.iter().map(|&(_, v)| v).max().unwrap_or(0);

    let columns = match body {
        Align::Left => {
            let property = widest_property.clamp(WIDTH_MIN, width_max);
            ColumnWidths {
                property,
                value: budget - property,
                buffer_left: 0,
                buffer_right: 0,
            }
        }
        Align::Right => {
            let value = widest_value.clamp(WIDTH_MIN, width_max);
            ColumnWidths {
                property: budget - value,
                value,
                buffer_left: 0,
                buffer_right: 0,
            }
        }
        Align::Center => {
            center_columns(content, content_align, padding, line_width, budget, width_max)
        }
    };

    tracing::debug!(
        ?columns,
        body = %body,
        content = %content_align,
        line_width,
        padding,
        "computed column widths"
    );
    Ok(columns)
}

fn center_columns(
    content: &[(usize, usize)],
    content_align: Align,
    padding: usize,
    line_width: usize,
    budget: usize,
    width_max: usize,
) -> ColumnWidths {
    let (prop_central, val_central) = central_widths(line_width, padding);

    let (pa, va) = scan(content, width_max, budget, true);
    let (pb, vb) = scan(content, width_max, budget, false);

    let (property, value) = if (pa, va) == (pb, vb) {
        (pa, va)
    } else if pa <= prop_central {
        (pa, va)
    } else if vb <= val_central {
        (pb, vb)
    } else {
        (prop_central, val_central)
    };

    let natural = prop_central as isize;
    let split = match content_align {
        Align::Center => natural + center_shift(property as isize - value as isize, line_width),
        Align::Left | Align::Right => natural,
    };
    // A column wider than its natural half pulls the split toward it.
    let split = split.clamp(property as isize, (budget - value) as isize) as usize;

    match content_align {
        Align::Left => ColumnWidths {
            property,
            value: budget - split,
            buffer_left: split - property,
            buffer_right: 0,
        },
        Align::Right => ColumnWidths {
            property: split,
            value,
            buffer_left: 0,
            buffer_right: budget - split - value,
        },
        Align::Center => ColumnWidths {
            property,
            value,
            buffer_left: split - property,
            buffer_right: budget - split - value,
        },
    }
}

/// One biased scan over all pairs.
///
/// The favored column grows first under the `width_max` ceiling; the other
/// one then grows under whatever the favored column left of the budget,
/// never past `width_max` either.
fn scan(
    content: &[(usize, usize)],
    width_max: usize,
    budget: usize,
    property_first: bool,
) -> (usize, usize) {
    let pick = |&(p, v): &(usize, usize)| if property_first { (p, v) } else { (v, p) };

    let mut favored = 0;
    for pair in content {
        favored = favored.max(pick(pair).0.min(width_max));
    }

    let ceiling = (budget - favored).min(width_max);
    let mut other = 0;
    for pair in content {
        other = other.max(pick(pair).1.min(ceiling));
    }

    if property_first { (favored, other) } else { (other, favored) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(
        content: &[(usize, usize)],
        body: Align,
        align: Align,
        padding: usize,
        width: usize,
    ) -> ColumnWidths {
        compute_columns(content, body, align, padding, width).unwrap()
    }

    #[test]
    fn too_narrow_reports_required_width() {
        let err = compute_columns(&[(4, 5)], Align::Left, Align::Left, 2, 10).unwrap_err();
        assert_eq!(err.required_width(), Some(35));
        assert!(err.to_string().contains("minimum is 35"));

        // 35 is exactly enough.
        assert!(compute_columns(&[(4, 5)], Align::Left, Align::Left, 2, 35).is_ok());
        assert!(compute_columns(&[(4, 5)], Align::Left, Align::Left, 2, 34).is_err());
    }

    #[test]
    fn left_body_floors_property_column() {
        let c = cols(&[(4, 5), (3, 2)], Align::Left, Align::Left, 2, 40);
        assert_eq!((c.property, c.value), (15, 20));
        assert_eq!(c.line_width(2), 40);
    }

    #[test]
    fn left_body_caps_property_column() {
        // budget 35, width_max 20
        let c = cols(&[(50, 5)], Align::Left, Align::Left, 2, 40);
        assert_eq!((c.property, c.value), (20, 15));
    }

    #[test]
    fn right_body_is_driven_by_values() {
        let c = cols(&[(4, 18)], Align::Right, Align::Left, 2, 40);
        assert_eq!((c.property, c.value), (17, 18));
        let c = cols(&[(4, 2)], Align::Right, Align::Right, 1, 40);
        assert_eq!((c.property, c.value), (22, 15));
    }

    #[test]
    fn central_widths_sum_to_budget() {
        for width in 35..50 {
            for padding in 1..4 {
                let (p, v) = central_widths(width, padding);
                assert_eq!(p + v, width - 2 * padding - 1);
            }
        }
        assert_eq!(central_widths(40, 4), (15, 16));
        assert_eq!(central_widths(41, 4), (16, 16));
    }

    #[test]
    fn shift_table() {
        // (diff, width, shift)
        let cases = [
            (0, 40, 0),
            (0, 41, 0),
            (1, 40, 0),
            (1, 41, 1),
            (-1, 40, 0),
            (-1, 41, -1),
            (2, 41, 1),
            (3, 40, 1),
            (3, 41, 2),
            (-3, 41, -2),
            (-4, 41, -2),
        ];
        for (diff, width, shift) in cases {
            assert_eq!(center_shift(diff, width), shift, "diff {diff} width {width}");
        }
    }

    #[test]
    fn center_balanced_content_stays_on_midpoint() {
        for align in [Align::Left, Align::Center, Align::Right] {
            let c = cols(&[(1, 1)], Align::Center, align, 4, 40);
            assert_eq!(c.line_width(4), 40);
            // Separator index = buffer_left + property + padding.
            assert_eq!(c.buffer_left + c.property + 4, 19, "{align}");
        }
    }

    #[test]
    fn center_left_content_moves_slack_to_left_buffer() {
        let c = cols(&[(4, 6)], Align::Center, Align::Left, 2, 41);
        // budget 36, natural split 18
        assert_eq!(c, ColumnWidths { property: 4, value: 18, buffer_left: 14, buffer_right: 0 });
    }

    #[test]
    fn center_right_content_moves_slack_to_right_buffer() {
        let c = cols(&[(4, 6)], Align::Center, Align::Right, 2, 41);
        assert_eq!(c, ColumnWidths { property: 18, value: 6, buffer_left: 0, buffer_right: 12 });
    }

    #[test]
    fn center_content_shifts_toward_wider_column() {
        // diff = 3 on odd width: shift 2
        let c = cols(&[(5, 2)], Align::Center, Align::Center, 2, 41);
        assert_eq!(c, ColumnWidths { property: 5, value: 2, buffer_left: 15, buffer_right: 14 });
        assert_eq!(c.line_width(2), 41);
    }

    #[test]
    fn center_overflowing_property_pulls_split() {
        // budget 36, width_max 21, prop_central 18: property 21 exceeds it.
        let c = cols(&[(30, 3)], Align::Center, Align::Left, 2, 41);
        assert_eq!(c.property, 21);
        assert_eq!(c.buffer_left, 0);
        assert_eq!(c.value, 15);
    }

    #[test]
    fn center_both_overflowing_fall_back_to_halves() {
        let c = cols(&[(30, 30)], Align::Center, Align::Center, 2, 41);
        assert_eq!(c, ColumnWidths { property: 18, value: 18, buffer_left: 0, buffer_right: 0 });
    }

    #[test]
    fn center_columns_are_capped_at_width_max() {
        // width_max 21; diff 11 on odd width shifts the split by 6
        let c = cols(&[(30, 10)], Align::Center, Align::Center, 2, 41);
        assert_eq!(c, ColumnWidths { property: 21, value: 10, buffer_left: 3, buffer_right: 2 });
    }

    #[test]
    fn every_combination_fills_the_line() {
        let contents: [&[(usize, usize)]; 5] = [
            &[(1, 1)],
            &[(3, 40)],
            &[(40, 3)],
            &[(12, 9), (2, 30)],
            &[],
        ];
        for width in [35, 36, 40, 41, 80, 81] {
            for padding in 1..=2 {
                for body in [Align::Left, Align::Center, Align::Right] {
                    for align in [Align::Left, Align::Center, Align::Right] {
                        for content in contents {
                            let c = cols(content, body, align, padding, width);
                            assert_eq!(c.line_width(padding), width);
                        }
                    }
                }
            }
        }
    }
}
