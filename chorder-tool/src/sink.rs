//! Console stand-ins for the HID transport and the BLE side.

use chorder::{HidSink, Keyboard, Report, Signal, SinkError, SystemHandler};

/// Prints each report as it is sent.
#[derive(Default)]
pub struct PrintSink {
    pub reports: usize,
    // Fail every send, to exercise the retry path.
    busy: bool,
}

impl PrintSink {
    pub fn busy() -> PrintSink {
        PrintSink { reports: 0, busy: true }
    }
}

impl HidSink for PrintSink {
    fn send(&mut self, report: Report) -> Result<(), SinkError> {
        if self.busy {
            return Err(SinkError::Busy);
        }
        self.reports += 1;
        match report {
            _ if report.is_release() => println!("  release"),
            Report::Keyboard { mods, key } if mods.is_empty() => println!("key {:?}", key),
            Report::Keyboard { mods, key: Keyboard::NoEventIndicated } => println!("mods {}", mods),
            Report::Keyboard { mods, key } => println!("key {} {:?}", mods, key),
            Report::Consumer(code) => println!("media {:?}", code),
        }
        Ok(())
    }
}

/// Prints the signals meant for the BLE side.
#[derive(Default)]
pub struct Console {
    pub signals: Vec<Signal>,
}

impl SystemHandler for Console {
    fn signal(&mut self, signal: Signal) {
        println!("signal {:?}", signal);
        self.signals.push(signal);
    }
}
