//! Sending keystrokes.
//!
//! Every stroke goes out as a press report followed by a release report.  A
//! release is never dropped: if it can't be delivered it is held, and sent
//! before anything else the next time the emitter is used.  That way a failed
//! send never leaves a key down on the host.

use crate::log::{debug, warn};
use crate::{Config, Consumer, HidSink, Keyboard, Mods, Report, Result, Stroke};

pub struct Emitter<S> {
    sink: S,
    retry_limit: u8,

    // A release that has not been delivered yet.
    held: Option<Report>,
}

impl<S: HidSink> Emitter<S> {
    pub fn new(sink: S, config: &Config) -> Self {
        Emitter {
            sink,
            retry_limit: config.retry_limit,
            held: None,
        }
    }

    /// Send each stroke in order.  Stops at the first failure, which leaves
    /// the rest of the strokes unsent.
    pub fn emit(&mut self, strokes: &[Stroke]) -> Result<()> {
        self.flush()?;
        for stroke in strokes {
            let [press, release] = stroke.events();
            self.send(press.report())?;
            self.held = Some(release.report());
            self.flush()?;
        }
        Ok(())
    }

    /// Try to deliver a held release.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(report) = self.held {
            self.send(report)?;
            self.held = None;
        }
        Ok(())
    }

    /// Release everything, even if nothing is known to be held.  Used on
    /// shutdown.
    pub fn release_all(&mut self) -> Result<()> {
        self.flush()?;
        self.send(Report::Keyboard { mods: Mods::empty(), key: Keyboard::NoEventIndicated })?;
        self.send(Report::Consumer(Consumer::Unassigned))?;
        Ok(())
    }

    /// Is there no undelivered release.
    pub fn is_clear(&self) -> bool {
        self.held.is_none()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    fn send(&mut self, report: Report) -> Result<()> {
        let mut tries = 0;
        loop {
            match self.sink.send(report) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_transient() && tries < self.retry_limit => {
                    tries += 1;
                    debug!("Retrying report ({}): {:?}", tries, report);
                }
                Err(err) => {
                    warn!("Failed to send report: {:?}: {:?}", err, report);
                    return Err(err.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SinkError};

    /// Records reports.  After `skip` good sends, fails the next `fail`
    /// sends with `error`.
    struct Flaky {
        sent: Vec<Report>,
        skip: usize,
        fail: usize,
        error: SinkError,
        attempts: usize,
    }

    impl Flaky {
        fn new(fail: usize, error: SinkError) -> Flaky {
            Flaky { sent: Vec::new(), skip: 0, fail, error, attempts: 0 }
        }
    }

    impl HidSink for Flaky {
        fn send(&mut self, report: Report) -> core::result::Result<(), SinkError> {
            self.attempts += 1;
            if self.skip > 0 {
                self.skip -= 1;
            } else if self.fail > 0 {
                self.fail -= 1;
                return Err(self.error);
            }
            self.sent.push(report);
            Ok(())
        }
    }

    fn config(retry_limit: u8) -> Config {
        Config { retry_limit, ..Config::default() }
    }

    const RELEASE: Report = Report::Keyboard { mods: Mods::empty(), key: Keyboard::NoEventIndicated };

    #[test]
    fn press_then_release() {
        crate::testlog::setup();
        let mut emitter = Emitter::new(Flaky::new(0, SinkError::Busy), &config(0));
        let strokes = [
            Stroke::key(Mods::LSHIFT, Keyboard::Keyboard9),
            Stroke::media(Consumer::PlayPause),
        ];
        emitter.emit(&strokes).unwrap();
        assert_eq!(
            emitter.sink().sent,
            vec![
                Report::Keyboard { mods: Mods::LSHIFT, key: Keyboard::Keyboard9 },
                RELEASE,
                Report::Consumer(Consumer::PlayPause),
                Report::Consumer(Consumer::Unassigned),
            ]
        );
        assert!(emitter.is_clear());
    }

    #[test]
    fn busy_is_retried() {
        crate::testlog::setup();
        let mut emitter = Emitter::new(Flaky::new(3, SinkError::Busy), &config(3));
        emitter.emit(&[Stroke::key(Mods::empty(), Keyboard::A)]).unwrap();
        assert_eq!(emitter.sink().sent.len(), 2);
        assert_eq!(emitter.sink().attempts, 5);
    }

    #[test]
    fn retries_are_bounded() {
        crate::testlog::setup();
        let mut emitter = Emitter::new(Flaky::new(100, SinkError::Busy), &config(2));
        assert_eq!(
            emitter.emit(&[Stroke::key(Mods::empty(), Keyboard::A)]),
            Err(Error::Sink(SinkError::Busy))
        );
        assert_eq!(emitter.sink().attempts, 3);
        assert!(emitter.sink().sent.is_empty());
    }

    #[test]
    fn other_errors_are_not_retried() {
        let mut emitter = Emitter::new(Flaky::new(1, SinkError::Disconnected), &config(8));
        assert_eq!(
            emitter.emit(&[Stroke::key(Mods::empty(), Keyboard::A)]),
            Err(Error::Sink(SinkError::Disconnected))
        );
        assert_eq!(emitter.sink().attempts, 1);
    }

    #[test]
    fn failed_release_is_held() {
        crate::testlog::setup();
        let sink = Flaky { skip: 1, ..Flaky::new(1, SinkError::Rejected) };
        let mut emitter = Emitter::new(sink, &config(0));

        let result = emitter.emit(&[Stroke::key(Mods::LCTRL, Keyboard::C)]);
        assert_eq!(result, Err(Error::Sink(SinkError::Rejected)));
        assert!(!emitter.is_clear());

        // The release goes out before the next press.
        emitter.emit(&[Stroke::key(Mods::empty(), Keyboard::B)]).unwrap();
        assert!(emitter.is_clear());
        assert_eq!(
            emitter.sink().sent,
            vec![
                Report::Keyboard { mods: Mods::LCTRL, key: Keyboard::C },
                RELEASE,
                Report::Keyboard { mods: Mods::empty(), key: Keyboard::B },
                RELEASE,
            ]
        );
    }

    #[test]
    fn release_all() {
        let mut emitter = Emitter::new(Flaky::new(0, SinkError::Busy), &config(0));
        emitter.release_all().unwrap();
        let sent = emitter.into_inner().sent;
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(Report::is_release));
    }
}
