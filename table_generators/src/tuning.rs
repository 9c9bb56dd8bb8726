use crate::TableError;

/// Multiplier applied to the audio sample rate before rounding periods.
pub const SAMPLE_RATE_OVERSAMPLE: u32 = 128;

/// Audio output rate of the player in Hz.
pub const BASE_SAMPLE_RATE: u32 = 44100;

/// Pitch of C7 in Hz. Every other note is derived from it.
pub const REFERENCE_FREQUENCY: f64 = 1046.5;

/// Discrete phase positions in one oscillator cycle.
pub const PHASE_STEPS_PER_CYCLE: u32 = 32;

/// Twelve-tone equal temperament, 2^(1/12).
pub fn equal_temperament_ratio() -> f64 {
    2.0_f64.powf(1.0 / 12.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningConstants {
    pub sample_rate_oversample: u32,
    pub base_sample_rate: u32,
    pub reference_frequency: f64,
    pub semitone_ratio: f64,
    pub phase_steps_per_cycle: u32,
}

impl Default for TuningConstants {
    fn default() -> Self {
        Self {
            sample_rate_oversample: SAMPLE_RATE_OVERSAMPLE,
            base_sample_rate: BASE_SAMPLE_RATE,
            reference_frequency: REFERENCE_FREQUENCY,
            semitone_ratio: equal_temperament_ratio(),
            phase_steps_per_cycle: PHASE_STEPS_PER_CYCLE,
        }
    }
}

impl TuningConstants {
    /// Clock the periods are counted in, in ticks per second.
    pub fn internal_sample_rate(&self) -> f64 {
        self.base_sample_rate as f64 * self.sample_rate_oversample as f64
    }

    pub fn phase_steps(&self) -> f64 {
        self.phase_steps_per_cycle as f64
    }

    pub fn validate(&self) -> Result<(), TableError> {
        check_nonzero("sample_rate_oversample", self.sample_rate_oversample)?;
        check_nonzero("base_sample_rate", self.base_sample_rate)?;
        check_nonzero("phase_steps_per_cycle", self.phase_steps_per_cycle)?;
        check_positive("reference_frequency", self.reference_frequency)?;
        check_positive("semitone_ratio", self.semitone_ratio)?;
        Ok(())
    }
}

fn check_nonzero(name: &'static str, value: u32) -> Result<(), TableError> {
    if value == 0 {
        return Err(TableError::InvalidConstant { name, value: 0.0 });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), TableError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TableError::InvalidConstant { name, value });
    }
    Ok(())
}
