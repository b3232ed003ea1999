//! Passphrase acquisition.

use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

/// Reads the cipher key.
///
/// On a terminal the key is read without echo. Otherwise one line is read
/// from stdin, so the key can be piped in.
pub fn read(prompt: &str) -> io::Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        return rpassword::prompt_password(prompt).map(Zeroizing::new);
    }

    let mut line = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut line)?;
    strip_line_ending(&mut line);
    Ok(line)
}

fn strip_line_ending(line: &mut String) {
    let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(len);
}
