use crate::{TableError, TuningConstants};

pub const OCTAVE_COUNT: usize = 8;
pub const SEMITONES_PER_OCTAVE: usize = 12;
pub const NOTE_COUNT: usize = OCTAVE_COUNT * SEMITONES_PER_OCTAVE;

/// Tracker-style note names, two characters each.
const NOTE_NAMES: [&str; SEMITONES_PER_OCTAVE] = [
    "C-", "C#", "D-", "D#", "E-", "F-", "F#", "G-", "G#", "A-", "A#", "B-",
];

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NoteEntry {
    /// How many octaves below the reference note, 7 for the first block.
    pub octave_shift: u8,
    pub semitone: u8,
    pub frequency: f64,
    pub period: u16,
}

impl NoteEntry {
    fn compute(index: usize, tuning: &TuningConstants) -> Result<Self, TableError> {
        let octave_shift = (OCTAVE_COUNT - 1 - index / SEMITONES_PER_OCTAVE) as u8;
        let semitone = (index % SEMITONES_PER_OCTAVE) as u8;

        let frequency = tuning.reference_frequency
            * tuning.semitone_ratio.powf(semitone as f64)
            * 2.0_f64.powi(-(octave_shift as i32));

        let wave_step = frequency * tuning.phase_steps();
        let period = (tuning.internal_sample_rate() / wave_step).round();

        if period.is_nan() || period < 1.0 {
            return Err(TableError::NonPositivePeriod {
                index,
                value: period,
            });
        }
        if period > u16::MAX as f64 {
            return Err(TableError::PeriodOverflow {
                index,
                value: period,
            });
        }

        Ok(Self {
            octave_shift,
            semitone,
            frequency,
            period: period as u16,
        })
    }

    pub fn musical_octave(&self) -> u8 {
        (OCTAVE_COUNT - 1) as u8 - self.octave_shift
    }

    /// Position of this note in the emitted table.
    pub fn index(&self) -> usize {
        self.musical_octave() as usize * SEMITONES_PER_OCTAVE + self.semitone as usize
    }

    pub fn name(&self) -> String {
        format!(
            "{}{}",
            NOTE_NAMES[self.semitone as usize],
            self.musical_octave()
        )
    }

    /// Frequency the oscillator actually plays when driven at `period`.
    pub fn rounded_frequency(&self, tuning: &TuningConstants) -> f64 {
        tuning.internal_sample_rate() / self.period as f64 / tuning.phase_steps()
    }

    pub fn relative_error_percent(&self, tuning: &TuningConstants) -> f64 {
        let wave_step = self.frequency * tuning.phase_steps();
        ((tuning.internal_sample_rate() / self.period as f64 - wave_step) / wave_step).abs() * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticLine {
    pub rounded_frequency: f64,
    pub frequency: f64,
    /// Largest error seen up to and including this entry.
    pub running_error_percent: f64,
}

/// Oscillator periods for 96 notes, lowest pitch first.
///
/// Entries are laid out in blocks of twelve semitones. The first block is the
/// reference pitch shifted down seven octaves, the last is unshifted. The
/// player addresses this table by note number, so the order is part of the
/// output format.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTable {
    entries: [NoteEntry; NOTE_COUNT],
    max_error_percent: f64,
}

impl NoteTable {
    pub fn generate(tuning: &TuningConstants) -> Result<Self, TableError> {
        tuning.validate()?;

        let mut entries = [NoteEntry::default(); NOTE_COUNT];
        for (index, entry) in entries.iter_mut().enumerate() {
            *entry = NoteEntry::compute(index, tuning)?;
        }

        let max_error_percent = entries
            .iter()
            .map(|entry| entry.relative_error_percent(tuning))
            .fold(0.0, f64::max);

        Ok(Self {
            entries,
            max_error_percent,
        })
    }

    pub fn entries(&self) -> &[NoteEntry; NOTE_COUNT] {
        &self.entries
    }

    pub fn periods(&self) -> [u16; NOTE_COUNT] {
        core::array::from_fn(|index| self.entries[index].period)
    }

    pub fn max_error_percent(&self) -> f64 {
        self.max_error_percent
    }

    pub fn min_period(&self) -> u16 {
        self.entries.iter().map(|entry| entry.period).min().unwrap_or(0)
    }

    pub fn max_period(&self) -> u16 {
        self.entries.iter().map(|entry| entry.period).max().unwrap_or(0)
    }

    pub fn diagnostics(&self, tuning: &TuningConstants) -> Vec<DiagnosticLine> {
        self.entries
            .iter()
            .scan(0.0_f64, |running, entry| {
                *running = running.max(entry.relative_error_percent(tuning));
                Some(DiagnosticLine {
                    rounded_frequency: entry.rounded_frequency(tuning),
                    frequency: entry.frequency,
                    running_error_percent: *running,
                })
            })
            .collect()
    }
}
