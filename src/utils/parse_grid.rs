use crate::{Error, Grid, Result};
use std::path::Path;
use tracing::debug;

/// A token stands for an alive cell iff it is `#`; everything else is dead.
pub fn is_alive(token: &str) -> bool {
    token == "#"
}

/// Cells of one line, separated by single spaces. Trailing empty tokens are
/// dropped, so a line written by `Grid`'s `Display` reads back unchanged.
fn parse_row(line: &str) -> Vec<bool> {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens.into_iter().map(is_alive).collect()
}

/// Parses a universe written one row per line.
///
/// Blank lines at the end are ignored. All other rows must have the same
/// number of cells.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<bool>> = text.lines().map(parse_row).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    let grid = Grid::from_rows(&rows)?;
    debug!(rows = grid.rows(), cols = grid.cols(), "parsed universe");
    Ok(grid)
}

/// Reads and parses a universe file.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grid(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lookup_life_{}_{}.txt",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_plus_sign() {
        let text = "_ _ _ _ _ \n_ _ # _ _ \n_ # # # _ \n_ _ # _ _ \n_ _ _ _ _ \n";
        let grid = parse_grid(text).unwrap();
        let (o, x) = (false, true);
        let expected = Grid::from_rows(&[
            [o, o, o, o, o],
            [o, o, x, o, o],
            [o, x, x, x, o],
            [o, o, x, o, o],
            [o, o, o, o, o],
        ])
        .unwrap();
        assert_eq!(grid, expected);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_any_other_token_is_dead() {
        let grid = parse_grid("# . x O\n0 # ## -").unwrap();
        assert_eq!(grid.row(0), &[true, false, false, false]);
        assert_eq!(grid.row(1), &[false, true, false, false]);
    }

    #[test]
    fn test_trailing_blank_lines_and_crlf() {
        let grid = parse_grid("# _\r\n_ #\r\n\r\n\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.get(0, 0) && grid.get(1, 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_grid(""), Err(Error::EmptyUniverse)));
        assert!(matches!(parse_grid("\n\n"), Err(Error::EmptyUniverse)));
    }

    #[test]
    fn test_ragged_rows() {
        match parse_grid("# _ #\n_ #\n# # #\n") {
            Err(Error::RaggedRow {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (2, 3, 2)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_grid("# _\n\n_ #"),
            Err(Error::RaggedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_grid() {
        let path = temp_file("read_grid", "_ # _\n_ # _\n_ # _\n");
        let grid = read_grid(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("lookup_life_definitely_missing.txt");
        assert!(matches!(read_grid(&path), Err(Error::Io { .. })));
    }
}
