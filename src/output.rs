use std::io::{self, Write};

/// Prints a status line to stdout and mirrors it into `writer` when one is given.
///
/// A failed stdout write is reported on stderr and otherwise ignored; a failed
/// write to `writer` is returned.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        eprintln!("Failed to write to stdout: {e}");
    }
    mirror(message, writer)
}

/// Prints a fatal error as `Error: <message>` on stderr, mirrored like [`println`].
pub fn eprintln(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    let line = format!("Error: {message}");
    // Nowhere left to report a stderr failure.
    let _ = writeln!(io::stderr(), "{line}");
    mirror(&line, writer)
}

fn mirror(line: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    match writer {
        Some(w) => writeln!(w, "{line}"),
        None => Ok(()),
    }
}
