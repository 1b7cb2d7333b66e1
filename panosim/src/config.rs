use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub rig: pano_gcode::Config,
    pub devices: DeviceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub battery_volts: f32,
    pub shutter_connected: bool,
    pub focus_connected: bool,
    /// How long the rig keeps moving after a rotation.
    pub residual_motion_ms: u32,
    /// Sleep on delays instead of advancing a virtual clock.
    pub realtime: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            battery_volts: 12.6,
            shutter_connected: true,
            focus_connected: false,
            residual_motion_ms: 250,
            realtime: false,
        }
    }
}

impl SimConfig {
    /// Loads the configuration from a TOML file, or falls back to the
    /// defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let config_content = fs::read_to_string(path)?;
                let config: SimConfig = toml::from_str(&config_content)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("Using default configuration");
                Ok(SimConfig::default())
            }
        }
    }
}
