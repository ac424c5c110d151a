//! USB HID transport.
//!
//! Presents the chorder to the host as two HID interfaces: a boot keyboard
//! and a consumer control device for the media keys.

use core::iter::once;

use frunk::{HCons, HNil};
use usb_device::class_prelude::{UsbBus, UsbBusAllocator, UsbClass};
use usb_device::prelude::{UsbDevice, UsbDeviceBuilder, UsbDeviceState, UsbVidPid};
use usb_device::UsbError;
use usbd_human_interface_device::device::DeviceClass;
use usbd_human_interface_device::device::consumer::{
    ConsumerControl, ConsumerControlConfig, MultipleConsumerReport,
};
use usbd_human_interface_device::device::keyboard::{NKROBootKeyboard, NKROBootKeyboardConfig};
use usbd_human_interface_device::page::Consumer;
use usbd_human_interface_device::usb_class::{UsbHidClass, UsbHidClassBuilder};
use usbd_human_interface_device::UsbHidError;

use crate::log::{info, warn};
use crate::{HidSink, Report, SinkError};

type KeyboardList<'a, Bus> = HCons<NKROBootKeyboard<'a, Bus>, HNil>;
type ConsumerList<'a, Bus> = HCons<ConsumerControl<'a, Bus>, HNil>;

pub struct UsbSink<'a, Bus: UsbBus> {
    dev: UsbDevice<'a, Bus>,
    keyboard: UsbHidClass<'a, Bus, KeyboardList<'a, Bus>>,
    consumer: UsbHidClass<'a, Bus, ConsumerList<'a, Bus>>,
    state: Option<UsbDeviceState>,
}

impl<'a, Bus: UsbBus> UsbSink<'a, Bus> {
    pub fn new(usb_bus: &'a UsbBusAllocator<Bus>) -> Self {
        let keyboard = UsbHidClassBuilder::new()
            .add_device(NKROBootKeyboardConfig::default())
            .build(usb_bus);
        let consumer = UsbHidClassBuilder::new()
            .add_device(ConsumerControlConfig::default())
            .build(usb_bus);
        let dev = UsbDeviceBuilder::new(usb_bus, UsbVidPid(0x1209, 0x0003))
            .manufacturer("chorder")
            .product("Seven button chorder")
            .serial_number("development")
            .device_class(0)
            .max_power(500)
            .build();
        UsbSink {
            dev,
            keyboard,
            consumer,
            state: None,
        }
    }

    /// Perform the 1khz keyboard tick.
    pub fn tick(&mut self) {
        if self.keyboard.device().tick().is_err() {
            info!("tick error");
        }
    }

    /// Service the bus.  Needs to be called often, or from the USB
    /// interrupt.
    pub fn poll(&mut self) {
        let classes: &mut [&mut dyn UsbClass<Bus>] = &mut [&mut self.keyboard, &mut self.consumer];
        if self.dev.poll(classes) {
            // Keyboard LEDs aren't used.
            let _ = self.keyboard.device().read_report();
        }

        let new_state = self.dev.state();
        if self.state != Some(new_state) {
            match new_state {
                UsbDeviceState::Addressed => info!("State: Addressed"),
                UsbDeviceState::Configured => info!("State: Configured"),
                UsbDeviceState::Default => info!("State: Default"),
                UsbDeviceState::Suspend => info!("State: Suspend"),
            }
            self.state = Some(new_state);
        }
    }

    pub fn is_configured(&self) -> bool {
        self.dev.state() == UsbDeviceState::Configured
    }
}

impl<'a, Bus: UsbBus> HidSink for UsbSink<'a, Bus> {
    fn send(&mut self, report: Report) -> Result<(), SinkError> {
        if !self.is_configured() {
            return Err(SinkError::Disconnected);
        }
        match report {
            Report::Keyboard { mods, key } => self
                .keyboard
                .device()
                .write_report(mods.usages().chain(once(key)))
                .to_sink(),
            Report::Consumer(code) => {
                let report = MultipleConsumerReport {
                    codes: [code, Consumer::Unassigned, Consumer::Unassigned, Consumer::Unassigned],
                };
                self.consumer.device().write_report(&report).map(|_| ()).to_sink()
            }
        }
    }
}

/// Map the USB stack's errors onto the sink's.
trait ToSinkError {
    fn to_sink(self) -> Result<(), SinkError>;
}

impl ToSinkError for Result<(), UsbHidError> {
    fn to_sink(self) -> Result<(), SinkError> {
        match self {
            Ok(()) => Ok(()),
            Err(UsbHidError::WouldBlock) => Err(SinkError::Busy),
            // The host already has this exact report.
            Err(UsbHidError::Duplicate) => Ok(()),
            Err(UsbHidError::UsbError(err)) => Err(usb_error(err)),
            Err(UsbHidError::SerializationError) => {
                warn!("SerializationError");
                Err(SinkError::Rejected)
            }
        }
    }
}

impl ToSinkError for Result<(), UsbError> {
    fn to_sink(self) -> Result<(), SinkError> {
        self.map_err(usb_error)
    }
}

fn usb_error(err: UsbError) -> SinkError {
    match err {
        UsbError::WouldBlock => SinkError::Busy,
        _ => {
            warn!("USB error");
            SinkError::Rejected
        }
    }
}
