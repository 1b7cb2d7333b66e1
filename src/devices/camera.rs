/// Camera trigger driver.
pub trait Camera {
    /// Triggers the shutter and blocks until the exposure is done.
    ///
    /// # Parameters
    ///
    /// - `duration_ms`: Exposure duration, in milliseconds.
    /// - `bulb`: `true` to hold the shutter open for the whole duration
    ///   (bulb / long exposure mode).
    fn shutter(&mut self, duration_ms: u32, bulb: bool);

    /// Returns `true` if a shutter cable is connected.
    fn is_shutter_connected(&self) -> bool;

    /// Returns `true` if a focus cable is connected.
    fn is_focus_connected(&self) -> bool;
}
