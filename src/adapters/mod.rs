//! Adapters, concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements    | Connects to                    |
//! |------------|---------------|--------------------------------|
//! | `hardware` | ClockPort     | RTC (via any `ClockPort`)      |
//! |            | ActuatorPort  | lights relay + indicator GPIO  |
//! |            | AlertPort     | piezo buzzer                   |
//! | `rtc`      | ClockPort     | software RTC on `Instant`      |
//! | `eeprom`   | ByteStore     | in-memory or file EEPROM image |
//! | `serial`   | LineTransport | stdin / stdout                 |
//! | `time`     | (uptime)      | `std::time::Instant`           |

pub mod eeprom;
pub mod hardware;
pub mod rtc;
pub mod serial;
pub mod time;
