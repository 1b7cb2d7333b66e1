use crate::motion::Rotation;

/// Motion profile used by the actuator for its moves.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SpeedProfile {
    /// Constant speed for the whole move.
    Constant,
    /// Linear acceleration and deceleration, in actuator units per second
    /// squared.
    Accelerated { accel: u16, decel: u16 },
}

/// Two-axis actuator driver.
///
/// Rotations are in actuator units; see [crate::GearRatios]. The interpreter
/// treats [Actuator::rotate] as synchronous: once it returns, the rig is
/// assumed to be at the new position.
pub trait Actuator {
    /// Powers the motors.
    fn enable(&mut self);

    /// Releases the motors.
    fn disable(&mut self);

    /// Rotates both axes by a combined amount.
    ///
    /// # Parameters
    ///
    /// - `rotation`: Signed rotation for each axis.
    fn rotate(&mut self, rotation: Rotation);

    /// Selects the profile for subsequent moves.
    fn set_speed_profile(&mut self, profile: SpeedProfile);
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Call made on a [TestActuator].
    #[derive(Debug, PartialEq, Copy, Clone)]
    pub enum ActuatorCall {
        Enable,
        Disable,
        Rotate(Rotation),
        SpeedProfile(SpeedProfile),
    }

    /// Actuator to use for testing purposes.
    ///
    /// This just records the calls made on it. If the `TestActuator` is
    /// cloned then the record is shared, so a test can keep a handle while
    /// the interpreter owns the other.
    #[derive(Clone, Default)]
    pub struct TestActuator {
        calls: Arc<Mutex<Vec<ActuatorCall>>>,
    }
    impl TestActuator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns every call made so far.
        pub fn calls(&self) -> Vec<ActuatorCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Returns only the rotations made so far.
        pub fn rotations(&self) -> Vec<Rotation> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    ActuatorCall::Rotate(rotation) => Some(rotation),
                    _ => None,
                })
                .collect()
        }

        /// Forgets the calls made so far.
        pub fn clear(&mut self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&mut self, call: ActuatorCall) {
            self.calls.lock().unwrap().push(call);
        }
    }
    impl Actuator for TestActuator {
        fn enable(&mut self) {
            self.record(ActuatorCall::Enable);
        }

        fn disable(&mut self) {
            self.record(ActuatorCall::Disable);
        }

        fn rotate(&mut self, rotation: Rotation) {
            self.record(ActuatorCall::Rotate(rotation));
        }

        fn set_speed_profile(&mut self, profile: SpeedProfile) {
            self.record(ActuatorCall::SpeedProfile(profile));
        }
    }

    #[test]
    fn test_shared_record() {
        let handle = TestActuator::new();
        let mut actuator = handle.clone();
        actuator.enable();
        actuator.rotate(Rotation::new(8.0, -32.0));
        actuator.set_speed_profile(SpeedProfile::Constant);
        assert_eq!(
            vec![
                ActuatorCall::Enable,
                ActuatorCall::Rotate(Rotation::new(8.0, -32.0)),
                ActuatorCall::SpeedProfile(SpeedProfile::Constant),
            ],
            handle.calls()
        );
        assert_eq!(vec![Rotation::new(8.0, -32.0)], handle.rotations());
    }
}
