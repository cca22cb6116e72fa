// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read and write the plain-text portable pixmap dialect.
//!
//! The accepted input is deliberately narrow: a `P3` magic token, a
//! width and a height of at least one, a channel ceiling of exactly
//! 255, then one decimal value per channel, row-major, and nothing
//! else; trailing junk is an error, not a shrug.  Any amount of
//! whitespace may separate tokens.
//!
//! The writer emits the same dialect, token for token, over the
//! buffer's declared width; columns carved off the image come out as
//! the black pixels they were repainted with.

use std::io::{self, Read, Write};

use failure::Fail;

use crate::pixel::{PixelGrid, Rgb};

/// Everything that can go wrong while reading a pixmap.
#[derive(Debug, Fail)]
pub enum PixmapError {
    #[fail(display = "{}", _0)]
    Io(#[fail(cause)] io::Error),
    #[fail(display = "not a plain pixmap: expected the magic token P3, found {:?}", _0)]
    BadMagic(String),
    #[fail(display = "malformed number {:?}", _0)]
    BadToken(String),
    #[fail(display = "bad pixmap dimensions {} x {}", _0, _1)]
    BadDimensions(i64, i64),
    #[fail(display = "unsupported channel ceiling {:?}, expected 255", _0)]
    BadDepth(String),
    #[fail(display = "channel value {} out of range at sample {}", value, index)]
    BadChannel { value: i64, index: usize },
    #[fail(display = "pixmap ends after {} of {} channel values", _0, _1)]
    Truncated(usize, usize),
    #[fail(display = "trailing data after the last pixel")]
    TrailingData,
}

impl From<io::Error> for PixmapError {
    fn from(err: io::Error) -> PixmapError {
        PixmapError::Io(err)
    }
}

/// Read a whole pixmap out of `reader`.
pub fn read_pixmap<R: Read>(mut reader: R) -> Result<PixelGrid, PixmapError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_pixmap(&text)
}

/// Parse pixmap text into a fully-populated pixel grid.
pub fn parse_pixmap(text: &str) -> Result<PixelGrid, PixmapError> {
    let mut tokens = text.split_ascii_whitespace();

    match tokens.next() {
        Some("P3") => {}
        other => return Err(PixmapError::BadMagic(other.unwrap_or("").to_string())),
    }

    let width = next_number(&mut tokens)?;
    let height = next_number(&mut tokens)?;
    let ceiling = i64::from(u32::max_value());
    if width < 1 || height < 1 || width > ceiling || height > ceiling {
        return Err(PixmapError::BadDimensions(width, height));
    }
    let (width, height) = (width as u32, height as u32);

    match tokens.next() {
        Some("255") => {}
        other => return Err(PixmapError::BadDepth(other.unwrap_or("").to_string())),
    }

    let expected = width as usize * height as usize * 3;
    let mut consumed = 0;
    let mut grid = PixelGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            // Argument order is also read order: red, green, blue.
            grid[(x, y)] = Rgb::new(
                next_channel(&mut tokens, &mut consumed, expected)?,
                next_channel(&mut tokens, &mut consumed, expected)?,
                next_channel(&mut tokens, &mut consumed, expected)?,
            );
        }
    }

    if tokens.next().is_some() {
        return Err(PixmapError::TrailingData);
    }
    Ok(grid)
}

fn next_number<'a, I>(tokens: &mut I) -> Result<i64, PixmapError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| PixmapError::BadToken(String::new()))?;
    token
        .parse()
        .map_err(|_| PixmapError::BadToken(token.to_string()))
}

fn next_channel<'a, I>(
    tokens: &mut I,
    consumed: &mut usize,
    expected: usize,
) -> Result<u8, PixmapError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or(PixmapError::Truncated(*consumed, expected))?;
    let value: i64 = token
        .parse()
        .map_err(|_| PixmapError::BadToken(token.to_string()))?;
    if value < 0 || value > 255 {
        return Err(PixmapError::BadChannel {
            value,
            index: *consumed,
        });
    }
    *consumed += 1;
    Ok(value as u8)
}

/// Write `grid` to `writer` in the same dialect the reader accepts,
/// at the grid's declared width.
pub fn write_pixmap<W: Write>(mut writer: W, grid: &PixelGrid) -> io::Result<()> {
    writeln!(writer, "P3 ")?;
    writeln!(writer, "{} {} ", grid.width, grid.height)?;
    writeln!(writer, "255")?;
    for pixel in grid.as_slice() {
        writeln!(writer, "{} {} {} ", pixel.r, pixel.g, pixel.b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_pixmap() {
        let grid = parse_pixmap("P3 2 1 255 1 2 3 4 5 6").unwrap();
        assert_eq!((grid.width, grid.height), (2, 1));
        assert_eq!(grid[(0, 0)], Rgb::new(1, 2, 3));
        assert_eq!(grid[(1, 0)], Rgb::new(4, 5, 6));
    }

    #[test]
    fn any_whitespace_between_tokens_is_fine() {
        let text = "P3\n  2\t2\n255\n0 0 0\n 10  20\t30 \n\n0 0 0 1 1 1\n";
        let grid = parse_pixmap(text).unwrap();
        assert_eq!(grid[(1, 0)], Rgb::new(10, 20, 30));
        assert_eq!(grid[(1, 1)], Rgb::new(1, 1, 1));
    }

    #[test]
    fn rejects_the_wrong_magic() {
        match parse_pixmap("P6 1 1 255 0 0 0") {
            Err(PixmapError::BadMagic(token)) => assert_eq!(token, "P6"),
            other => panic!("expected BadMagic, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        match parse_pixmap("") {
            Err(PixmapError::BadMagic(token)) => assert_eq!(token, ""),
            other => panic!("expected BadMagic, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_and_negative_dimensions() {
        match parse_pixmap("P3 0 4 255") {
            Err(PixmapError::BadDimensions(0, 4)) => {}
            other => panic!("expected BadDimensions, got {:?}", other),
        }
        match parse_pixmap("P3 2 -1 255") {
            Err(PixmapError::BadDimensions(2, -1)) => {}
            other => panic!("expected BadDimensions, got {:?}", other),
        }
    }

    #[test]
    fn rejects_any_channel_ceiling_but_255() {
        match parse_pixmap("P3 1 1 65535 0 0 0") {
            Err(PixmapError::BadDepth(token)) => assert_eq!(token, "65535"),
            other => panic!("expected BadDepth, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_channels() {
        match parse_pixmap("P3 1 1 255 0 256 0") {
            Err(PixmapError::BadChannel { value: 256, index: 1 }) => {}
            other => panic!("expected BadChannel, got {:?}", other),
        }
    }

    #[test]
    fn rejects_short_files() {
        match parse_pixmap("P3 2 2 255 0 0 0 0 0") {
            Err(PixmapError::Truncated(5, 12)) => {}
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn rejects_trailing_garbage() {
        match parse_pixmap("P3 1 1 255 0 0 0 junk") {
            Err(PixmapError::TrailingData) => {}
            other => panic!("expected TrailingData, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unparsable_numbers() {
        match parse_pixmap("P3 one 1 255") {
            Err(PixmapError::BadToken(token)) => assert_eq!(token, "one"),
            other => panic!("expected BadToken, got {:?}", other),
        }
    }

    #[test]
    fn writes_the_exact_dialect() {
        let grid = PixelGrid::from_raw(2, 1, vec![Rgb::new(1, 2, 3), Rgb::new(0, 0, 0)]).unwrap();
        let mut out = Vec::new();
        write_pixmap(&mut out, &grid).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3 \n2 1 \n255\n1 2 3 \n0 0 0 \n"
        );
    }

    #[test]
    fn written_pixmaps_read_back_identically() {
        let cells = vec![
            Rgb::new(1, 2, 3),
            Rgb::new(250, 0, 7),
            Rgb::new(0, 255, 0),
            Rgb::new(9, 9, 9),
            Rgb::new(100, 101, 102),
            Rgb::new(0, 0, 0),
        ];
        let grid = PixelGrid::from_raw(3, 2, cells).unwrap();
        let mut out = Vec::new();
        write_pixmap(&mut out, &grid).unwrap();
        let back = read_pixmap(&out[..]).unwrap();
        assert_eq!(back.as_slice(), grid.as_slice());
    }
}
