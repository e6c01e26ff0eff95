use moleculab::core::physics::params::SimulationParams;
use moleculab::engine::config::DEFAULT_PLACEMENT_DISTANCE;

pub struct DefaultsConfig {
    pub temperature: f64,
    pub pressure: f64,
    pub ph: f64,
    pub time_scale: f64,
    pub placement_distance: f64,
    pub ticks: u64,
    pub dt: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let params = SimulationParams::default();
        Self {
            temperature: params.temperature,
            pressure: params.pressure,
            ph: params.ph,
            time_scale: params.time_scale,
            placement_distance: DEFAULT_PLACEMENT_DISTANCE,
            ticks: 100,
            dt: 1.0 / 60.0,
        }
    }
}
