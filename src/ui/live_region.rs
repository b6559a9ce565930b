//! A block of terminal lines redrawn in place.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: u16,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erase whatever the region last drew
    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.update(out, "")
    }

    /// Replace the previously drawn lines with `content`
    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        if self.last_lines > 0 {
            out.queue(cursor::MoveUp(self.last_lines))?;
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        out.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;

        let lines = content.lines().count();
        self.last_lines = lines.min(u16::MAX as usize) as u16;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_writes_content_without_cursor_moves() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "Hashing 1/2").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hashing 1/2\n");
    }

    #[test]
    fn second_update_moves_up_over_previous_lines() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "one\ntwo").unwrap();
        out.clear();
        region.update(&mut out, "three").unwrap();

        let written = String::from_utf8(out).unwrap();
        // CSI 2 A moves the cursor up two lines.
        assert!(written.starts_with("\u{1b}[2A"), "{written:?}");
        assert!(written.ends_with("three\n"));
    }

    #[test]
    fn clear_leaves_nothing_to_erase_next_time() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "progress").unwrap();
        region.clear(&mut out).unwrap();
        out.clear();
        region.update(&mut out, "done").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "done\n");
    }
}
