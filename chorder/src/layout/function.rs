//! Function keys and media controls.

use super::short::*;
use crate::macros;
use crate::{Action, Consumer, Keyboard};

#[rustfmt::skip]
pub static FUNCTION: [Action; 128] = [
    ___,                                     // --- ----  0x00
    k(Keyboard::F5),                         // --- ---P  0x01
    k(Keyboard::F4),                         // --- --R-  0x02
    media(Consumer::VolumeIncrement),        // --- --RP  0x03
    k(Keyboard::F3),                         // --- -M--  0x04
    ___,                                     // --- -M-P  0x05
    ___,                                     // --- -MR-  0x06
    media(Consumer::Stop),                   // --- -MRP  0x07

    k(Keyboard::F2),                         // --- I---  0x08
    media(Consumer::ScanPreviousTrack),      // --- I--P  0x09
    ___,                                     // --- I-R-  0x0a
    ___,                                     // --- I-RP  0x0b
    media(Consumer::VolumeDecrement),        // --- IM--  0x0c
    ___,                                     // --- IM-P  0x0d
    ___,                                     // --- IMR-  0x0e
    ___,                                     // --- IMRP  0x0f

    ___,                                     // --N ----  0x10
    RESET,                                   // --N ---P  0x11
    ___,                                     // --N --R-  0x12
    ___,                                     // --N --RP  0x13
    ___,                                     // --N -M--  0x14
    ___,                                     // --N -M-P  0x15
    ___,                                     // --N -MR-  0x16
    LALT,                                    // --N -MRP  0x17

    ___,                                     // --N I---  0x18
    ___,                                     // --N I--P  0x19
    LGUI,                                    // --N I-R-  0x1a
    LCTRL,                                   // --N I-RP  0x1b
    ___,                                     // --N IM--  0x1c
    ___,                                     // --N IM-P  0x1d
    ___,                                     // --N IMR-  0x1e
    ___,                                     // --N IMRP  0x1f

    k(Keyboard::F1),                         // -C- ----  0x20
    k(Keyboard::F9),                         // -C- ---P  0x21
    k(Keyboard::F8),                         // -C- --R-  0x22
    k(Keyboard::F12),                        // -C- --RP  0x23
    k(Keyboard::F7),                         // -C- -M--  0x24
    ___,                                     // -C- -M-P  0x25
    k(Keyboard::F11),                        // -C- -MR-  0x26
    ___,                                     // -C- -MRP  0x27

    k(Keyboard::F6),                         // -C- I---  0x28
    ___,                                     // -C- I--P  0x29
    ___,                                     // -C- I-R-  0x2a
    ___,                                     // -C- I-RP  0x2b
    k(Keyboard::F10),                        // -C- IM--  0x2c
    ___,                                     // -C- IM-P  0x2d
    ___,                                     // -C- IMR-  0x2e
    ___,                                     // -C- IMRP  0x2f

    NUM_SHIFT,                               // -CN ----  0x30
    ___,                                     // -CN ---P  0x31
    ___,                                     // -CN --R-  0x32
    ___,                                     // -CN --RP  0x33
    mac(&macros::ANDROID_DPAD_CENTER),       // -CN -M--  0x34
    ___,                                     // -CN -M-P  0x35
    mac(&macros::ANDROID_HOME),              // -CN -MR-  0x36
    RALT,                                    // -CN -MRP  0x37

    ___,                                     // -CN I---  0x38
    mac(&macros::ANDROID_BACK),              // -CN I--P  0x39
    RGUI,                                    // -CN I-R-  0x3a
    RCTRL,                                   // -CN I-RP  0x3b
    mac(&macros::ANDROID_MENU),              // -CN IM--  0x3c
    ___,                                     // -CN IM-P  0x3d
    mac(&macros::ANDROID_SEARCH),            // -CN IMR-  0x3e
    ___,                                     // -CN IMRP  0x3f

    LSHIFT,                                  // F-- ----  0x40
    ___,                                     // F-- ---P  0x41
    ___,                                     // F-- --R-  0x42
    ___,                                     // F-- --RP  0x43
    ___,                                     // F-- -M--  0x44
    ___,                                     // F-- -M-P  0x45
    media(Consumer::PlayPause),              // F-- -MR-  0x46
    media(Consumer::ScanNextTrack),          // F-- -MRP  0x47

    media(Consumer::ScanPreviousTrack),      // F-- I---  0x48
    ___,                                     // F-- I--P  0x49
    ___,                                     // F-- I-R-  0x4a
    ___,                                     // F-- I-RP  0x4b
    ___,                                     // F-- IM--  0x4c
    ___,                                     // F-- IM-P  0x4d
    ___,                                     // F-- IMR-  0x4e
    ___,                                     // F-- IMRP  0x4f

    ___,                                     // F-N ----  0x50
    ___,                                     // F-N ---P  0x51
    ___,                                     // F-N --R-  0x52
    ___,                                     // F-N --RP  0x53
    ___,                                     // F-N -M--  0x54
    ___,                                     // F-N -M-P  0x55
    ___,                                     // F-N -MR-  0x56
    ___,                                     // F-N -MRP  0x57

    ___,                                     // F-N I---  0x58
    ___,                                     // F-N I--P  0x59
    ___,                                     // F-N I-R-  0x5a
    ___,                                     // F-N I-RP  0x5b
    ___,                                     // F-N IM--  0x5c
    ___,                                     // F-N IM-P  0x5d
    ___,                                     // F-N IMR-  0x5e
    ___,                                     // F-N IMRP  0x5f

    RSHIFT,                                  // FC- ----  0x60
    ___,                                     // FC- ---P  0x61
    ___,                                     // FC- --R-  0x62
    ___,                                     // FC- --RP  0x63
    ___,                                     // FC- -M--  0x64
    ___,                                     // FC- -M-P  0x65
    ___,                                     // FC- -MR-  0x66
    ___,                                     // FC- -MRP  0x67

    ___,                                     // FC- I---  0x68
    ___,                                     // FC- I--P  0x69
    ___,                                     // FC- I-R-  0x6a
    ___,                                     // FC- I-RP  0x6b
    ___,                                     // FC- IM--  0x6c
    ___,                                     // FC- IM-P  0x6d
    ___,                                     // FC- IMR-  0x6e
    ___,                                     // FC- IMRP  0x6f

    RESET,                                   // FCN ----  0x70
    ___,                                     // FCN ---P  0x71
    ___,                                     // FCN --R-  0x72
    ___,                                     // FCN --RP  0x73
    ___,                                     // FCN -M--  0x74
    ___,                                     // FCN -M-P  0x75
    ___,                                     // FCN -MR-  0x76
    ___,                                     // FCN -MRP  0x77

    ___,                                     // FCN I---  0x78
    ___,                                     // FCN I--P  0x79
    ___,                                     // FCN I-R-  0x7a
    ___,                                     // FCN I-RP  0x7b
    ___,                                     // FCN IM--  0x7c
    ___,                                     // FCN IM-P  0x7d
    ___,                                     // FCN IMR-  0x7e
    ___,                                     // FCN IMRP  0x7f
];
