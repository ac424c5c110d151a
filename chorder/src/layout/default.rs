//! The default layer: letters, navigation, and the media keys.

use super::short::*;
use crate::macros;
use crate::{Action, Consumer, Keyboard};

#[rustfmt::skip]
pub static DEFAULT: [Action; 128] = [
    ___,                                     // --- ----  0x00
    k(Keyboard::W),                          // --- ---P  0x01
    k(Keyboard::Y),                          // --- --R-  0x02
    k(Keyboard::U),                          // --- --RP  0x03
    k(Keyboard::R),                          // --- -M--  0x04
    mac(&macros::OPEN_PAREN),                // --- -M-P  0x05
    k(Keyboard::H),                          // --- -MR-  0x06
    k(Keyboard::S),                          // --- -MRP  0x07

    k(Keyboard::I),                          // --- I---  0x08
    k(Keyboard::B),                          // --- I--P  0x09
    k(Keyboard::K),                          // --- I-R-  0x0a
    k(Keyboard::Z),                          // --- I-RP  0x0b
    k(Keyboard::D),                          // --- IM--  0x0c
    mac(&macros::CLOSE_PAREN),               // --- IM-P  0x0d
    k(Keyboard::E),                          // --- IMR-  0x0e
    k(Keyboard::T),                          // --- IMRP  0x0f

    NUM,                                     // --N ----  0x10
    FUNC,                                    // --N ---P  0x11
    k(Keyboard::Escape),                     // --N --R-  0x12
    k(Keyboard::Semicolon),                  // --N --RP  0x13
    k(Keyboard::Comma),                      // --N -M--  0x14
    mac(&macros::CLOSE_CURLY),               // --N -M-P  0x15
    k(Keyboard::Dot),                        // --N -MR-  0x16
    LALT,                                    // --N -MRP  0x17

    ___,                                     // --N I---  0x18
    k(Keyboard::Insert),                     // --N I--P  0x19
    LGUI,                                    // --N I-R-  0x1a
    LCTRL,                                   // --N I-RP  0x1b
    k(Keyboard::F9),                         // --N IM--  0x1c
    mac(&macros::OPEN_CURLY),                // --N IM-P  0x1d
    k(Keyboard::Apostrophe),                 // --N IMR-  0x1e
    NUM_LOCK,                                // --N IMRP  0x1f

    k(Keyboard::Space),                      // -C- ----  0x20
    k(Keyboard::F),                          // -C- ---P  0x21
    k(Keyboard::G),                          // -C- --R-  0x22
    k(Keyboard::V),                          // -C- --RP  0x23
    k(Keyboard::C),                          // -C- -M--  0x24
    k(Keyboard::RightBrace),                 // -C- -M-P  0x25
    k(Keyboard::P),                          // -C- -MR-  0x26
    k(Keyboard::N),                          // -C- -MRP  0x27

    k(Keyboard::L),                          // -C- I---  0x28
    k(Keyboard::X),                          // -C- I--P  0x29
    k(Keyboard::J),                          // -C- I-R-  0x2a
    k(Keyboard::Q),                          // -C- I-RP  0x2b
    k(Keyboard::M),                          // -C- IM--  0x2c
    k(Keyboard::LeftBrace),                  // -C- IM-P  0x2d
    k(Keyboard::A),                          // -C- IMR-  0x2e
    k(Keyboard::O),                          // -C- IMRP  0x2f

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
    k(Keyboard::KeypadNumLockAndClear),      // -CN IMRP  0x3f

    LSHIFT,                                  // F-- ----  0x40
    k(Keyboard::ReturnEnter),                // F-- ---P  0x41
    k(Keyboard::RightArrow),                 // F-- --R-  0x42
    k(Keyboard::DownArrow),                  // F-- --RP  0x43
    k(Keyboard::DeleteBackspace),            // F-- -M--  0x44
    k(Keyboard::PrintScreen),                // F-- -M-P  0x45
    k(Keyboard::DeleteForward),              // F-- -MR-  0x46
    k(Keyboard::PageDown),                   // F-- -MRP  0x47

    k(Keyboard::LeftArrow),                  // F-- I---  0x48
    k(Keyboard::End),                        // F-- I--P  0x49
    k(Keyboard::Tab),                        // F-- I-R-  0x4a
    k(Keyboard::Home),                       // F-- I-RP  0x4b
    k(Keyboard::UpArrow),                    // F-- IM--  0x4c
    k(Keyboard::ScrollLock),                 // F-- IM-P  0x4d
    k(Keyboard::PageUp),                     // F-- IMR-  0x4e
    k(Keyboard::CapsLock),                   // F-- IMRP  0x4f

    k(Keyboard::Pause),                      // F-N ----  0x50
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
    k(Keyboard::KeypadEnter),                // FC- ---P  0x61
    k(Keyboard::Keypad6),                    // FC- --R-  0x62
    media(Consumer::VolumeIncrement),        // FC- --RP  0x63
    media(Consumer::Stop),                   // FC- -M--  0x64
    k(Keyboard::KeypadMultiply),             // FC- -M-P  0x65
    media(Consumer::PlayPause),              // FC- -MR-  0x66
    media(Consumer::ScanNextTrack),          // FC- -MRP  0x67

    k(Keyboard::Keypad4),                    // FC- I---  0x68
    media(Consumer::ScanPreviousTrack),      // FC- I--P  0x69
    k(Keyboard::KeypadSubtract),             // FC- I-R-  0x6a
    k(Keyboard::Keypad7),                    // FC- I-RP  0x6b
    media(Consumer::VolumeDecrement),        // FC- IM--  0x6c
    k(Keyboard::KeypadDivide),               // FC- IM-P  0x6d
    media(Consumer::ScanPreviousTrack),      // FC- IMR-  0x6e
    k(Keyboard::Keypad0),                    // FC- IMRP  0x6f

    MASTER_RESET,                            // FCN ----  0x70
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
