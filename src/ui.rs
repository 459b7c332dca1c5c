/// Console output for the reporter
///
/// Status lines go to stdout behind a `tabletest-reporter: ` prefix; errors go
/// to stderr with a bold red `error` label when the terminal supports color.
use std::io::Write;

const STATUS_PREFIX: &str = "tabletest-reporter: ";

fn status_line(s: &str) -> String {
    format!("{}{}", STATUS_PREFIX, s)
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

pub fn status(s: &str) {
    println!("{}", status_line(s));
}

/// Print an error message with colored "error" label
pub fn print_error(msg: &str) {
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_prefix() {
        assert_eq!(status_line("Generated 3 documentation file(s)"), "tabletest-reporter: Generated 3 documentation file(s)");
    }
}
