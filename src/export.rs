//! Plain-text export of paths.
//!
//! Each path is written as two newline-terminated lines of space-separated
//! flat cell indices `x * n + y`: the path in order, then the path reversed.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::path::Coord;
use crate::GridPath;

/// Formats `path` as a forward line followed by a reverse line.
pub fn to_export_string(path: &GridPath) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    write_record(&mut out, path);
    out
}

/// Concatenates the export records of every path in `paths`.
pub fn export_batch(paths: &[GridPath]) -> String {
    let mut out = String::new();
    for path in paths {
        write_record(&mut out, path);
    }
    out
}

fn write_record(out: &mut String, path: &GridPath) {
    let n = path.n();
    write_line(out, path.cells().iter().map(|c| c.flat_index(n)));
    write_line(out, path.cells().iter().rev().map(|c| c.flat_index(n)));
}

fn write_line(out: &mut String, indices: impl Iterator<Item = usize>) {
    for (i, idx) in indices.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{idx}");
    }
    out.push('\n');
}

/// Reads one export record for an `n x n` grid back into a validated path.
///
/// The reverse line is optional; when present it must mirror the forward
/// line. Any further non-blank line is an error: use one call per record.
pub fn parse_export(n: usize, text: &str) -> Result<GridPath> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let forward = lines
        .next()
        .ok_or_else(|| Error::InvalidArgument("empty export record".to_string()))?;
    let cells = parse_line(n, forward)?;

    if let Some(reverse) = lines.next() {
        let back = parse_line(n, reverse)?;
        if !back.iter().rev().eq(cells.iter()) {
            return Err(Error::InvalidArgument(
                "reverse line does not mirror forward line".to_string(),
            ));
        }
    }
    if lines.next().is_some() {
        return Err(Error::InvalidArgument(
            "export text holds more than one record".to_string(),
        ));
    }
    GridPath::from_cells(n, cells)
}

fn parse_line(n: usize, line: &str) -> Result<Vec<Coord>> {
    if n == 0 {
        return Err(Error::InvalidArgument("grid size must be positive".to_string()));
    }
    line.split_whitespace()
        .map(|tok| {
            let idx: usize = tok.parse().map_err(|_| {
                Error::InvalidArgument(format!("not a cell index: {tok:?}"))
            })?;
            if idx >= n * n {
                return Err(Error::InvalidArgument(format!(
                    "cell index {idx} out of range for a {n}x{n} grid"
                )));
            }
            Ok(Coord::new(idx / n, idx % n))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_path;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn snake_of_order_two() {
        let path = GridPath::snake(2).unwrap();
        assert_eq!(to_export_string(&path), "0 1 3 2\n2 3 1 0\n");
    }

    #[test]
    fn snake_of_order_three() {
        let path = GridPath::snake(3).unwrap();
        assert_eq!(
            to_export_string(&path),
            "0 1 2 5 4 3 6 7 8\n8 7 6 3 4 5 2 1 0\n"
        );
    }

    #[test]
    fn batch_concatenates_records() {
        let a = GridPath::snake(2).unwrap();
        let b = GridPath::snake(3).unwrap();
        let text = export_batch(&[a.clone(), b.clone()]);
        assert_eq!(text, to_export_string(&a) + &to_export_string(&b));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(export_batch(&[]), "");
    }

    #[test]
    fn parse_reads_generated_path() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let path = generate_path(7, 0.5, &mut rng).unwrap();
        let parsed = parse_export(7, &to_export_string(&path)).unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn parse_accepts_forward_line_alone() {
        let parsed = parse_export(2, "0 1 3 2").unwrap();
        assert_eq!(parsed, GridPath::snake(2).unwrap());
    }

    #[test]
    fn parse_rejects_bad_records() {
        assert!(parse_export(2, "").is_err());
        assert!(parse_export(2, "0 1 x 2\n").is_err());
        assert!(parse_export(2, "0 1 3 4\n").is_err());
        // Diagonal step 1 -> 2
        assert!(parse_export(2, "0 1 2 3\n").is_err());
        // Mismatched reverse line
        assert!(parse_export(2, "0 1 3 2\n0 1 3 2\n").is_err());
    }

    #[test]
    fn parse_rejects_trailing_records() {
        let record = to_export_string(&GridPath::snake(2).unwrap());
        assert!(parse_export(2, &record).is_ok());
        assert!(parse_export(2, &format!("{record}\n\n")).is_ok());

        let two = export_batch(&[GridPath::snake(2).unwrap(), GridPath::snake(2).unwrap()]);
        assert!(matches!(
            parse_export(2, &two),
            Err(Error::InvalidArgument(_))
        ));
        assert!(parse_export(2, &format!("{record}0 1\n")).is_err());
    }
}
