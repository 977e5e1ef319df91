//! Where the CLI's output goes.
//!
//! Output is split into channels, and each channel is routed by a [`Policy`].
//! Query results and checksums are the `result` channel; progress lines are
//! `notice`; error reports are `failure`.

use std::io::{Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    Stdout,
    Stderr,
    Silent,
}

#[derive(Debug, PartialEq)]
pub struct Policies {
    pub result: Policy,
    pub notice: Policy,
    pub failure: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            result: Policy::Stdout,
            notice: Policy::Stderr,
            failure: Policy::Stderr,
        }
    }
}

impl Policies {
    /// Keep results and failures, drop progress chatter.
    pub fn quiet() -> Self {
        Self {
            notice: Policy::Silent,
            ..Self::default()
        }
    }
}

/// One routed channel. A silenced channel swallows everything.
pub struct Channel<'a>(Option<&'a mut dyn Write>);

impl Write for Channel<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match &mut self.0 {
            Some(w) => w.write(bytes),
            None => Ok(bytes.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.0.as_mut().map_or(Ok(()), |w| w.flush())
    }
}

pub struct Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub stdout: &'a mut OUT,
    pub stderr: &'a mut ERR,
    pub pol: Policies,
}

impl<'a, OUT, ERR> Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub fn new(stdout: &'a mut OUT, stderr: &'a mut ERR) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    fn route(&mut self, pol: Policy) -> Channel<'_> {
        Channel(match pol {
            Policy::Stdout => Some(&mut *self.stdout as &mut dyn Write),
            Policy::Stderr => Some(&mut *self.stderr as &mut dyn Write),
            Policy::Silent => None,
        })
    }

    pub fn result(&mut self) -> Channel<'_> {
        self.route(self.pol.result)
    }

    pub fn notice(&mut self) -> Channel<'_> {
        self.route(self.pol.notice)
    }

    pub fn failure(&mut self) -> Channel<'_> {
        self.route(self.pol.failure)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type VecLogger<'a> = Logger<'a, Vec<u8>, Vec<u8>>;

    fn captured(
        pol: Policies,
        f: impl FnOnce(&mut VecLogger) -> Result<()>,
    ) -> Result<(String, String)> {
        let (mut stdout, mut stderr) = (vec![], vec![]);
        let mut log = Logger::new(&mut stdout, &mut stderr);
        log.pol = pol;
        f(&mut log)?;
        Ok((
            String::from_utf8_lossy(&stdout).into_owned(),
            String::from_utf8_lossy(&stderr).into_owned(),
        ))
    }

    fn every_channel(log: &mut VecLogger) -> Result<()> {
        writeln!(log.result(), "3ec99867  file_at_root.txt")?;
        writeln!(log.notice(), "Copied a to b")?;
        writeln!(log.failure(), "Failed to execute: nope")?;
        log.notice().flush()
    }

    #[test]
    fn results_apart_from_chatter() -> Result<()> {
        let (out, err) = captured(Policies::default(), every_channel)?;
        assert_eq!(out, "3ec99867  file_at_root.txt\n");
        assert_eq!(err, "Copied a to b\nFailed to execute: nope\n");
        Ok(())
    }

    #[test]
    fn quiet_drops_notices_only() -> Result<()> {
        let (out, err) = captured(Policies::quiet(), every_channel)?;
        assert_eq!(out, "3ec99867  file_at_root.txt\n");
        assert_eq!(err, "Failed to execute: nope\n");
        Ok(())
    }

    #[test]
    fn everything_to_one_stream() -> Result<()> {
        let pol = Policies {
            result: Policy::Stderr,
            notice: Policy::Stderr,
            failure: Policy::Stderr,
        };
        let (out, err) = captured(pol, every_channel)?;
        assert_eq!(out, "");
        assert_eq!(err.lines().count(), 3);
        Ok(())
    }
}
