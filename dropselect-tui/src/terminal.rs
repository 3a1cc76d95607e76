use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};

use crate::draw::{Line, truncate_to_width};

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Block until the next input event.
    pub fn read_event(&self) -> io::Result<Event> {
        event::read()
    }

    /// Redraw the whole screen. Lines past the bottom edge are dropped.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if line.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if line.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if line.reverse {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.stdout,
                Print(truncate_to_width(&line.text, width as usize)),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
