use embedded_hal::delay::DelayNs;

/// Time source.
///
/// Blocking pauses use the [DelayNs] methods, like `delay_ms`.
pub trait Clock: DelayNs {
    /// Returns a monotonic time, in milliseconds. The value may wrap.
    fn now_ms(&mut self) -> u32;
}
