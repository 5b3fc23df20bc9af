use std::fmt;
use std::io::{self, Write};

use crossterm::terminal::{Clear, ClearType};
use crossterm::{Command, cursor, queue};

use crate::cursor::{CursorPosition, ScreenGeometry};
use crate::error::{Error, Result};
use crate::lines::LineStore;

pub const BANNER: &str = concat!("Kilo Editor -- version ", env!("CARGO_PKG_VERSION"));

/// `ESC[H`: cursor to the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "cursor home needs an ANSI terminal",
        ))
    }
}

/// Builds one complete frame. Without content only the cursor is placed.
pub fn render_frame(
    lines: &LineStore,
    geometry: ScreenGeometry,
    cursor: CursorPosition,
    with_content: bool,
) -> io::Result<Vec<u8>> {
    let mut frame = Vec::new();
    queue!(frame, cursor::Hide, CursorHome)?;

    if with_content {
        draw_rows(&mut frame, lines, geometry)?;
        queue!(frame, CursorHome)?;
    }

    queue!(frame, cursor::MoveTo(cursor.x, cursor.y), cursor::Show)?;
    Ok(frame)
}

/// Writes a frame with a single `write_all`; nothing reaches `out` if
/// assembly fails.
pub fn refresh<W: Write + ?Sized>(
    out: &mut W,
    lines: &LineStore,
    geometry: ScreenGeometry,
    cursor: CursorPosition,
    with_content: bool,
) -> Result<()> {
    let frame = render_frame(lines, geometry, cursor, with_content).map_err(Error::Render)?;
    out.write_all(&frame).map_err(Error::Render)?;
    out.flush().map_err(Error::Render)
}

fn draw_rows(frame: &mut Vec<u8>, lines: &LineStore, geometry: ScreenGeometry) -> io::Result<()> {
    let rows = usize::from(geometry.rows());
    let cols = usize::from(geometry.cols());

    for row in 0..rows {
        if let Some(line) = lines.get(row) {
            frame.extend_from_slice(&line[..line.len().min(cols)]);
        } else if lines.is_empty() && row == rows / 3 {
            draw_banner(frame, cols);
        } else {
            frame.push(b'~');
        }

        queue!(frame, Clear(ClearType::UntilNewLine))?;
        if row + 1 < rows {
            frame.extend_from_slice(b"\r\n");
        }
    }
    Ok(())
}

fn draw_banner(frame: &mut Vec<u8>, cols: usize) {
    let banner = &BANNER.as_bytes()[..BANNER.len().min(cols)];
    let mut padding = (cols - banner.len()) / 2;
    if padding > 0 {
        frame.push(b'~');
        padding -= 1;
    }
    frame.resize(frame.len() + padding, b' ');
    frame.extend_from_slice(banner);
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{BANNER, refresh, render_frame};
    use crate::cursor::{CursorPosition, ScreenGeometry};
    use crate::error::Error;
    use crate::lines::LineStore;

    fn geometry(rows: u16, cols: u16) -> ScreenGeometry {
        ScreenGeometry::new(rows, cols).expect("geometry")
    }

    fn frame_text(lines: &LineStore, g: ScreenGeometry, cursor: CursorPosition) -> String {
        let frame = render_frame(lines, g, cursor, true).expect("frame");
        String::from_utf8(frame).expect("utf8")
    }

    fn body_rows(frame: &str) -> Vec<&str> {
        let body = frame.strip_prefix("\x1b[?25l\x1b[H").expect("frame prefix");
        let end = body.rfind("\x1b[H").expect("home after rows");
        body[..end].split("\r\n").collect()
    }

    #[test]
    fn frame_without_content_only_places_cursor() {
        let cursor = CursorPosition::new(4, 2);
        let frame =
            render_frame(&LineStore::new(), geometry(24, 80), cursor, false).expect("frame");
        assert_eq!(frame, b"\x1b[?25l\x1b[H\x1b[3;5H\x1b[?25h");
    }

    #[test]
    fn empty_store_draws_tildes_and_banner() {
        let g = geometry(24, 80);
        let frame = frame_text(&LineStore::new(), g, CursorPosition::default());
        let rows = body_rows(&frame);
        assert_eq!(rows.len(), 24);

        let padding = (80 - BANNER.len()) / 2;
        let expected_banner = format!("~{}{BANNER}\x1b[K", " ".repeat(padding - 1));
        assert_eq!(rows[8], expected_banner);
        for (i, row) in rows.iter().enumerate() {
            if i != 8 {
                assert_eq!(*row, "~\x1b[K", "row {i}");
            }
        }
        assert!(frame.ends_with("\x1b[H\x1b[1;1H\x1b[?25h"));
    }

    #[test]
    fn banner_is_cut_to_narrow_screens() {
        let g = geometry(3, 10);
        let frame = frame_text(&LineStore::new(), g, CursorPosition::default());
        let rows = body_rows(&frame);
        assert_eq!(rows[1], format!("{}\x1b[K", &BANNER[..10]));
    }

    #[test]
    fn stored_lines_fill_rows_then_tildes() {
        let store = LineStore::from_bytes(b"alpha\nbeta\n");
        let g = geometry(4, 20);
        let frame = frame_text(&store, g, CursorPosition::new(1, 1));
        let rows = body_rows(&frame);
        assert_eq!(rows, vec!["alpha\x1b[K", "beta\x1b[K", "~\x1b[K", "~\x1b[K"]);
        assert!(!frame.contains(BANNER));
        assert!(frame.ends_with("\x1b[2;2H\x1b[?25h"));
    }

    #[test]
    fn lines_beyond_screen_are_not_drawn() {
        let store = LineStore::from_bytes(b"one\ntwo\nthree\nfour\n");
        let frame = frame_text(&store, geometry(2, 3), CursorPosition::default());
        let rows = body_rows(&frame);
        assert_eq!(rows, vec!["one\x1b[K", "two\x1b[K"]);
        assert!(!frame.contains("three"));
    }

    #[test]
    fn refresh_writes_one_frame_and_propagates_failures() {
        let mut out = Vec::new();
        refresh(&mut out, &LineStore::new(), geometry(5, 40), CursorPosition::default(), true)
            .expect("refresh");
        assert!(out.starts_with(b"\x1b[?25l\x1b[H~\x1b[K\r\n"));

        struct FailWriter;
        impl io::Write for FailWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("write fail"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = refresh(
            &mut FailWriter,
            &LineStore::new(),
            geometry(5, 40),
            CursorPosition::default(),
            true,
        )
        .expect_err("render err");
        assert!(matches!(err, Error::Render(ref source) if source.to_string() == "write fail"));
    }

    #[test]
    fn refresh_issues_a_single_write() {
        struct CountingWriter {
            writes: usize,
        }
        impl io::Write for CountingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.writes += 1;
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut out = CountingWriter { writes: 0 };
        let store = LineStore::from_bytes(b"x\ny\nz\n");
        refresh(&mut out, &store, geometry(10, 10), CursorPosition::default(), true)
            .expect("refresh");
        assert_eq!(out.writes, 1);
    }
}
