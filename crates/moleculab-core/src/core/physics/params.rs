use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid simulation parameter '{name}': {value} ({reason})")]
pub struct InvalidParamError {
    pub name: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

/// Environmental inputs to the simulation.
///
/// Only `temperature` and `time_scale` influence the physics; `pressure` and
/// `ph` are carried through to snapshots for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParams {
    /// Bath temperature in Kelvin.
    pub temperature: f64,
    /// Pressure in atmospheres.
    pub pressure: f64,
    pub ph: f64,
    /// Multiplier applied to every elapsed time passed to `tick`.
    pub time_scale: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            temperature: 298.15,
            pressure: 1.0,
            ph: 7.0,
            time_scale: 1.0,
        }
    }
}

/// A partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationParamsUpdate {
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub ph: Option<f64>,
    pub time_scale: Option<f64>,
}

impl SimulationParamsUpdate {
    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = Some(value);
        self
    }
    pub fn pressure(mut self, value: f64) -> Self {
        self.pressure = Some(value);
        self
    }
    pub fn ph(mut self, value: f64) -> Self {
        self.ph = Some(value);
        self
    }
    pub fn time_scale(mut self, value: f64) -> Self {
        self.time_scale = Some(value);
        self
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), InvalidParamError> {
        let check_non_negative = |name: &'static str, value: f64| {
            if !value.is_finite() {
                Err(InvalidParamError {
                    name,
                    value,
                    reason: "must be finite",
                })
            } else if value < 0.0 {
                Err(InvalidParamError {
                    name,
                    value,
                    reason: "must not be negative",
                })
            } else {
                Ok(())
            }
        };

        check_non_negative("temperature", self.temperature)?;
        check_non_negative("pressure", self.pressure)?;
        check_non_negative("time_scale", self.time_scale)?;
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(InvalidParamError {
                name: "ph",
                value: self.ph,
                reason: "must lie within 0..=14",
            });
        }
        Ok(())
    }

    /// Returns the merged parameters, or an error without applying anything.
    pub fn merged(&self, update: &SimulationParamsUpdate) -> Result<Self, InvalidParamError> {
        let merged = Self {
            temperature: update.temperature.unwrap_or(self.temperature),
            pressure: update.pressure.unwrap_or(self.pressure),
            ph: update.ph.unwrap_or(self.ph),
            time_scale: update.time_scale.unwrap_or(self.time_scale),
        };
        merged.validate()?;
        Ok(merged)
    }
}
