//! Colored output macros for the process boundary.
//!
//! ERROR HANDLING STRATEGY FOR DECORATIVE I/O:
//! All termcolor operations use `let _ =` to deliberately ignore errors.
//! Colored output is decorative and non-essential. If stderr is unavailable
//! (broken pipe, no TTY, etc.), the program continues gracefully without
//! colors.

/// Macro for printing errors with red color
///
/// Note: All termcolor operations use `let _ =` to deliberately ignore errors.
/// Colored output is decorative and non-essential. If stderr is unavailable
/// (broken pipe, no TTY, etc.), the program continues gracefully.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use std::io::Write;
        use termcolor::WriteColor;
        let bufwtr = termcolor::BufferWriter::stderr(termcolor::ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();
        let _ = buffer.set_color(termcolor::ColorSpec::new().set_fg(Some(termcolor::Color::Red)));
        let _ = write!(&mut buffer, "❌ ");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, $($arg)*);
        let _ = bufwtr.print(&buffer);
    }};
}
