pub use crate::time::MonotonicClock as _led_widget_time_MonotonicClock;
pub use embedded_hal::digital::OutputPin as _embedded_hal_digital_OutputPin;
pub use embedded_hal::digital::StatefulOutputPin as _embedded_hal_digital_StatefulOutputPin;
pub use fugit::ExtU32 as _fugit_ExtU32;
pub use fugit::ExtU64 as _fugit_ExtU64;
