//! `Display` formatting for [`Matrix`].
//!
//! Rows are printed one per line with right-aligned columns:
//!
//! ```text
//! matrix([[ 1,  2],
//!         [-3, 40]])
//! ```

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| format!("{v}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        write!(f, "matrix([")?;
        for (i, row) in cells.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, ",\n        ")?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "])")
    }
}
