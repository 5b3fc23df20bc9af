//! Terminal attribute handling on top of termios.
//!
//! `RawMode` owns the attributes captured at startup and puts them back
//! when restored explicitly or dropped, whichever comes first.

use std::io;
use std::mem;
use std::os::unix::io::{AsRawFd, RawFd};

use kilo_core::{Error, ScreenGeometry};

/// Tenths of a second a read waits before returning with no bytes.
const READ_TIMEOUT_DECISECONDS: libc::cc_t = 1;

pub struct RawMode {
    fd: RawFd,
    original: Option<libc::termios>,
}

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        Self::enable_on(io::stdin().as_raw_fd())
    }

    pub fn enable_on(fd: RawFd) -> io::Result<Self> {
        let original = get_attributes(fd)?;
        set_attributes(fd, &raw_attributes(original))?;
        tracing::debug!(fd, "raw mode enabled");
        Ok(Self {
            fd,
            original: Some(original),
        })
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.release()
    }

    fn release(&mut self) -> io::Result<()> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        set_attributes(self.fd, &original)?;
        tracing::debug!(fd = self.fd, "terminal attributes restored");
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::error!(%err, "failed to restore terminal attributes");
        }
    }
}

/// Unbuffered, unechoed, 8-bit input with no signal keys, flow control or
/// CR/NL translation, and reads that give up after a short timeout.
pub fn raw_attributes(original: libc::termios) -> libc::termios {
    let mut raw = original;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = READ_TIMEOUT_DECISECONDS;
    raw
}

pub fn query_screen_geometry() -> Result<ScreenGeometry, Error> {
    geometry_of(io::stdout().as_raw_fd())
}

fn geometry_of(fd: RawFd) -> Result<ScreenGeometry, Error> {
    // SAFETY: winsize is plain data; TIOCGWINSZ fills it in or fails.
    let mut ws: libc::winsize = unsafe { mem::zeroed() };
    if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws as *mut libc::winsize) } == -1 {
        return Err(Error::SizeQuery(io::Error::last_os_error()));
    }

    let geometry = ScreenGeometry::new(ws.ws_row, ws.ws_col).ok_or_else(|| {
        Error::SizeQuery(io::Error::other(format!(
            "terminal reported {}x{} cells",
            ws.ws_row, ws.ws_col
        )))
    })?;
    tracing::debug!(rows = ws.ws_row, cols = ws.ws_col, "screen geometry");
    Ok(geometry)
}

fn get_attributes(fd: RawFd) -> io::Result<libc::termios> {
    // SAFETY: termios is plain data and tcgetattr only writes into it.
    let mut termios: libc::termios = unsafe { mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_attributes(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // TCSAFLUSH drops pending input so no stray bytes cross the mode switch.
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
