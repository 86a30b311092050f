use std::ffi::OsString;
use std::io::{self, ErrorKind, Read, Write};

use crate::error::Result;

/// Read all of stdin
pub(crate) fn read_input() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Write the whole output to stdout
///
/// A closed pipe on the reading side is not an error.
pub(crate) fn write_output(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(Into::into),
    }
}

/// Rewrite single-dash long flags to the double-dash form clap expects
///
/// `-yaml2json` becomes `--yaml2json` and `-version=true` becomes
/// `--version=true`. Short flags such as `-h` and everything after `--`
/// are left alone.
pub(crate) fn long_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut rewritten: Vec<OsString> = args.next().into_iter().collect();
    let mut rest_verbatim = false;

    for arg in args {
        if rest_verbatim {
            rewritten.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                rest_verbatim = true;
                rewritten.push(arg);
            }
            Some(s) if s.len() > 2 && s.starts_with('-') && !s.starts_with("--") => {
                rewritten.push(format!("-{s}").into());
            }
            _ => rewritten.push(arg),
        }
    }

    rewritten
}
