//! Shell rendering of commands, for printed scripts and debug logs

use std::ffi::OsStr;
use std::process::Command;
use tracing::debug;

/// Single-quote a word for POSIX shells when it contains anything special
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@+=%,~".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Join a program and its arguments into one copy-pastable shell line
pub fn shell_line<'a, I>(program: &'a OsStr, args: I) -> String
where
    I: IntoIterator<Item = &'a OsStr>,
{
    std::iter::once(program)
        .chain(args)
        .map(|word| shell_quote(&word.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Log a child process just before it is spawned.
///
/// Shows up with `--verbose` or `RUST_LOG=repokit::exec=debug`.
pub fn log_cmd(cmd: &Command) {
    let line = shell_line(cmd.get_program(), cmd.get_args());
    match cmd.get_current_dir() {
        Some(dir) => debug!(target: "repokit::exec", cwd = %dir.display(), "{}", line),
        None => debug!(target: "repokit::exec", "{}", line),
    }
}
