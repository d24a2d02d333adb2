use std::{
    io::Write,
    time::{Duration, Instant},
};

use anyhow::Context;
use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::fib::fib;

/// Fibonacci values for indices `1..=n`, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(pub Vec<u64>);

#[derive(Debug)]
pub struct Outcome {
    pub sequence: Sequence,
    pub elapsed: Duration,
}

/// Computes every index in `1..=n`, writing one progress line per value to
/// `out` as soon as it is known. Only the loop itself is timed.
pub fn run(n: u32, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let mut values = Vec::with_capacity(n as usize);
    let start = Instant::now();
    for index in 1..=n {
        let value = fib(index).context("fibonacci index starts at 1")?;
        values.push(value);
        tracing::debug!(index, value, "computed");
        writeln!(out, "{index}. fibonacci: {value}")
            .and_then(|()| out.flush())
            .with_context(|| format!("failed to report fibonacci {index}"))?;
    }
    let elapsed = start.elapsed();
    Ok(Outcome {
        sequence: Sequence(values),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn lines_follow_sequence() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let outcome = run(10, &mut out)?;
        assert_eq!(*outcome.sequence, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);

        let out = String::from_utf8(out)?;
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1. fibonacci: 1");
        assert_eq!(lines[9], "10. fibonacci: 55");
        for (i, (line, value)) in lines.iter().zip(outcome.sequence.iter()).enumerate() {
            assert_eq!(*line, format!("{}. fibonacci: {value}", i + 1))
        }
        Ok(())
    }

    #[test]
    fn empty_run() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let outcome = run(0, &mut out)?;
        assert!(outcome.sequence.is_empty());
        assert!(out.is_empty());
        Ok(())
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let err = run(3, &mut Broken).unwrap_err();
        assert!(err.to_string().contains("fibonacci 1"), "{err}")
    }
}
