use super::formatter::format_bullet;
use std::io::{self, Write};

pub struct View {}

impl View {
    /// Writes one Markdown bullet per task name; nothing for an empty list.
    pub fn tasks<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
        for name in names {
            writeln!(out, "{}", format_bullet(name))?;
        }
        Ok(())
    }
}
