/// Motion (vibration) sensor.
pub trait MotionSensor {
    /// Blocks until the rig is still, or a timeout elapses.
    ///
    /// # Parameters
    ///
    /// - `settle_ms`: How long the rig must stay still, in milliseconds.
    /// - `timeout_ms`: Maximum time to wait, in milliseconds.
    ///
    /// # Returns
    ///
    /// - `true` if the rig settled before the timeout.
    /// - `false` if the timeout elapsed first.
    fn zero_motion_wait(&mut self, settle_ms: u32, timeout_ms: u32) -> bool;
}

/// Battery voltage sensor.
pub trait Battery {
    /// Returns the battery voltage, in volts.
    fn voltage(&mut self) -> f32;
}
