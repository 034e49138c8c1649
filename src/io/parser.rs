//! Text puzzle format: `Tile <id>:` headers followed by rows of `#` and `.`

use std::path::Path;

use crate::io::configuration::{CLEAR_PIXEL, SET_PIXEL, TILE_HEADER_PREFIX};
use crate::io::error::{PuzzleError, Result, parse_error};
use crate::spatial::tiles::{Tile, TileId, TileStore};

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are malformed
pub fn load_tiles(path: &Path) -> Result<TileStore> {
    let text = std::fs::read_to_string(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source: e,
    })?;
    parse_tiles(&text)
}

/// Parse puzzle text into a validated tile store
///
/// Blank lines separate tiles; surrounding whitespace on each line is
/// ignored. Board-level checks (equal sides, unique ids, square count) are
/// applied by [`TileStore::new`].
///
/// # Errors
///
/// Returns an error if:
/// - A header line is missing or malformed
/// - A pixel row contains characters other than `#` and `.`
/// - A tile's rows do not form a square
/// - The resulting tiles violate the tile store invariants
pub fn parse_tiles(text: &str) -> Result<TileStore> {
    let mut tiles = Vec::new();
    let mut current: Option<(TileId, usize, Vec<Vec<bool>>)> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            if let Some(pending) = current.take() {
                tiles.push(finish_tile(pending)?);
            }
            continue;
        }

        match current.as_mut() {
            None => current = Some((parse_header(line, line_number)?, line_number, Vec::new())),
            Some((_, _, rows)) => {
                if line.starts_with(TILE_HEADER_PREFIX) {
                    return Err(parse_error(
                        line_number,
                        &"tile header without a blank line before it",
                    ));
                }
                rows.push(parse_row(line, line_number)?);
            }
        }
    }

    if let Some(pending) = current.take() {
        tiles.push(finish_tile(pending)?);
    }

    TileStore::new(tiles)
}

fn parse_header(line: &str, line_number: usize) -> Result<TileId> {
    line.strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| {
            parse_error(
                line_number,
                &format!("expected '{TILE_HEADER_PREFIX}<id>:', found {line:?}"),
            )
        })?
        .trim()
        .parse::<TileId>()
        .map_err(|e| parse_error(line_number, &format!("invalid tile id: {e}")))
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .map(|glyph| match glyph {
            SET_PIXEL => Ok(true),
            CLEAR_PIXEL => Ok(false),
            other => Err(parse_error(
                line_number,
                &format!("unexpected pixel character {other:?}"),
            )),
        })
        .collect()
}

fn finish_tile((id, header_line, rows): (TileId, usize, Vec<Vec<bool>>)) -> Result<Tile> {
    if rows.is_empty() {
        return Err(parse_error(header_line, &format!("tile {id} has no pixel rows")));
    }
    Tile::from_rows(id, &rows)
}

/// Write a tile store back in the puzzle text format
pub fn format_tiles(store: &TileStore) -> String {
    let mut text = String::new();
    for (index, tile) in store.tiles().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(&format!("{TILE_HEADER_PREFIX}{}:\n", tile.id()));
        for row in tile.pixels().rows() {
            text.extend(row.iter().map(|&set| if set { SET_PIXEL } else { CLEAR_PIXEL }));
            text.push('\n');
        }
    }
    text
}
