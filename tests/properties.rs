//! Property tests for validation and grid building

use multab::{build, validate, BoundMode, TableOptions};
use proptest::prelude::*;

fn options(bounds: BoundMode) -> TableOptions {
    TableOptions {
        bounds,
        max_cells: None,
    }
}

proptest! {
    /// Any finite number survives formatting, padding and validation.
    #[test]
    fn validate_accepts_formatted_finite_numbers(
        value in -1.0e12f64..1.0e12,
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let text = format!("{}{}{}", left, value, right);
        prop_assert_eq!(validate(text.as_str()), Some(value));
    }

    /// Integer literals parse to themselves.
    #[test]
    fn validate_accepts_integers(value in any::<i32>()) {
        prop_assert_eq!(validate(value.to_string().as_str()), Some(f64::from(value)));
    }

    /// Text starting with a letter is never a number.
    #[test]
    fn validate_rejects_words(word in "[a-zA-Z][a-zA-Z0-9]{0,6}") {
        prop_assert_eq!(validate(word.as_str()), None);
    }

    /// Swapping the endpoints of either axis does not change the grid.
    #[test]
    fn build_is_symmetric_under_swaps(
        c0 in -40i64..40, c1 in -40i64..40,
        r0 in -40i64..40, r1 in -40i64..40,
        inclusive in any::<bool>(),
    ) {
        let mode = if inclusive { BoundMode::Inclusive } else { BoundMode::Exclusive };
        let opts = options(mode);
        let (c0, c1, r0, r1) = (c0 as f64, c1 as f64, r0 as f64, r1 as f64);
        let forward = build(c0, c1, r0, r1, &opts).unwrap();
        prop_assert_eq!(&forward, &build(c1, c0, r0, r1, &opts).unwrap());
        prop_assert_eq!(&forward, &build(c0, c1, r1, r0, &opts).unwrap());
        prop_assert_eq!(&forward, &build(c1, c0, r1, r0, &opts).unwrap());
    }

    /// Header counts follow the bound mode and every cell is `r × c`.
    #[test]
    fn build_counts_and_products(
        col_min in -30i64..30, col_span in 0i64..20,
        row_min in -30i64..30, row_span in 0i64..20,
        inclusive in any::<bool>(),
    ) {
        let mode = if inclusive { BoundMode::Inclusive } else { BoundMode::Exclusive };
        let extra = if inclusive { 1 } else { 0 };
        let grid = build(
            col_min as f64,
            (col_min + col_span) as f64,
            row_min as f64,
            (row_min + row_span) as f64,
            &options(mode),
        )
        .unwrap();

        prop_assert_eq!(grid.column_count() as i64, col_span + extra);
        prop_assert_eq!(grid.row_count() as i64, row_span + extra);

        for row in grid.rows() {
            prop_assert_eq!(row.cells.len(), grid.column_count());
            for (cell, col) in row.cells.iter().zip(grid.column_headers()) {
                prop_assert_eq!(*cell, i128::from(row.label) * i128::from(*col));
            }
        }
    }

    /// Fractional bounds behave like their truncations.
    #[test]
    fn build_truncates_fractions(
        c in -50.0f64..50.0, span in 0.0f64..10.0, r in -50.0f64..50.0,
    ) {
        let opts = options(BoundMode::Inclusive);
        prop_assert_eq!(
            build(c, c + span, r, r, &opts).unwrap(),
            build(c.trunc(), (c + span).trunc(), r.trunc(), r.trunc(), &opts).unwrap()
        );
    }
}
