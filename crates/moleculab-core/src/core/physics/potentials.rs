/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314462618;

/// Coefficient of the flat thermal bath term, the gas constant in kJ/(mol·K).
pub const THERMAL_BATH_COEFFICIENT: f64 = GAS_CONSTANT / 1000.0;

/// Scales RMS molecular speeds (m/s with masses in g/mol) down to sandbox units per second.
pub const THERMAL_SPEED_SCALE: f64 = 0.01;

#[inline]
pub fn kinetic(mass: f64, speed_squared: f64) -> f64 {
    0.5 * mass * speed_squared
}

/// Harmonic penalty for deviating from an equilibrium length.
#[inline]
pub fn harmonic_deviation(distance: f64, equilibrium_length: f64, strength: f64) -> f64 {
    let deviation = (distance - equilibrium_length).abs();
    strength * deviation * deviation
}

/// Bath energy for the whole workspace. Independent of the atom count.
#[inline]
pub fn thermal_bath(temperature: f64) -> f64 {
    temperature * THERMAL_BATH_COEFFICIENT
}

/// Scaled root-mean-square speed `sqrt(3RT/m)` for an atom of the given molar mass.
#[inline]
pub fn thermal_speed(temperature: f64, mass: f64) -> f64 {
    if mass <= 0.0 || temperature <= 0.0 {
        return 0.0;
    }
    (3.0 * GAS_CONSTANT * temperature / mass).sqrt() * THERMAL_SPEED_SCALE
}
