//! Text rendering for CLI reports. The engine hands back raw seconds; this
//! is where they become something a person reads.

use crate::engine::practice::{PracticeResult, StepEntry, SweepOutcome, SweepPoint};

/// `3723.4` -> `1h 02m 03.40s`, `95.0` -> `1m 35.00s`, `9.5` -> `9.50s`.
pub fn format_duration(seconds: f64, precision: usize) -> String {
    if !seconds.is_finite() {
        return format!("{}s", seconds);
    }

    let width = if precision > 0 { precision + 3 } else { 2 };
    // round once up front so 59.999 does not render as "60.00s"
    let scale = 10f64.powi(precision as i32);
    let total = (seconds * scale).round() / scale;

    let hours = (total / 3600.0).floor();
    let minutes = ((total - hours * 3600.0) / 60.0).floor();
    let secs = total - hours * 3600.0 - minutes * 60.0;

    if hours >= 1.0 {
        format!(
            "{}h {:02}m {:0width$.precision$}s",
            hours as u64, minutes as u64, secs
        )
    } else if minutes >= 1.0 {
        format!("{}m {:0width$.precision$}s", minutes as u64, secs)
    } else {
        format!("{:.precision$}s", secs)
    }
}

pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:+.precision$}%", value)
}

pub fn format_tempo(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{} BPM", value as i64)
    } else {
        format!("{:.3} BPM", value)
    }
}

pub fn render_summary(result: &PracticeResult, precision: usize) -> Vec<String> {
    let p = &result.parameters;
    let mut lines = vec![
        format!(
            "Ladder: {} -> {} in steps of {}",
            format_tempo(p.start_tempo()),
            format_tempo(p.end_tempo()),
            p.step_size()
        ),
        format!(
            "Steps: {} (last tempo {})",
            result.step_count,
            format_tempo(result.actual_end_tempo)
        ),
        format!(
            "Beats per step: {} ({} beats x {} reps), {} set(s)",
            result.total_beats_per_step,
            p.beats_per_phrase(),
            p.repetitions(),
            p.sets()
        ),
        format!(
            "Exact: {} ({:.precision$} s)",
            format_duration(result.exact_seconds, precision),
            result.exact_seconds
        ),
        format!(
            "Approximation: {} ({:.precision$} s)",
            format_duration(result.approx_seconds, precision),
            result.approx_seconds
        ),
        format!(
            "Error rate: {}",
            format_percent(result.error_rate_percent, precision)
        ),
    ];

    if result.actual_end_tempo < p.end_tempo() {
        lines.push(format!(
            "Target {} is not a whole number of steps away; ladder stops at {}",
            format_tempo(p.end_tempo()),
            format_tempo(result.actual_end_tempo)
        ));
    }
    lines
}

pub fn render_schedule(entries: &[StepEntry], precision: usize) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "#{:<4} {:>12}  {:>14}  total {}",
                entry.index,
                format_tempo(entry.tempo),
                format_duration(entry.seconds, precision),
                format_duration(entry.cumulative_seconds, precision)
            )
        })
        .collect()
}

pub fn render_sweep(points: &[SweepPoint], precision: usize) -> Vec<String> {
    points
        .iter()
        .map(|point| match &point.outcome {
            SweepOutcome::Result(result) => format!(
                "step {:>8}: {:>6} steps, exact {}, approx {}, error {}",
                point.step_size,
                result.step_count,
                format_duration(result.exact_seconds, precision),
                format_duration(result.approx_seconds, precision),
                format_percent(result.error_rate_percent, precision)
            ),
            SweepOutcome::Error { kind, message } => {
                format!("step {:>8}: {} ({})", point.step_size, kind, message)
            }
        })
        .collect()
}
