//! Volume budgets derived from line counts.

use crate::params::LayoutParams;

/// Target volume for each ranked contributor of a zone.
///
/// The top contributor gets `lines / (lines_per_volume * downscale)` capped at
/// `first_volume_cap`, where `downscale = zone_lines / lines_per_volume`.
/// Every following contributor scales the previous target by the ratio of
/// their line counts, so rounding in earlier targets carries forward.
/// A zero denominator yields a zero target.
pub fn contributor_targets(zone_lines: u64, user_lines: &[u64], params: &LayoutParams) -> Vec<f64> {
    let mut targets = Vec::with_capacity(user_lines.len());
    if zone_lines == 0 {
        targets.resize(user_lines.len(), 0.0);
        return targets;
    }

    let downscale = zone_lines as f64 / params.lines_per_volume;
    for (i, &lines) in user_lines.iter().enumerate() {
        let target = if i == 0 {
            (lines as f64 / (params.lines_per_volume * downscale)).min(params.first_volume_cap)
        } else {
            let prev_lines = user_lines[i - 1];
            if prev_lines == 0 {
                0.0
            } else {
                targets[i - 1] * lines as f64 / prev_lines as f64
            }
        };
        targets.push(target);
    }
    targets
}

/// Volume for lines not owned by any ranked contributor.
///
/// Scales the volume the ranked contributors actually received by the ratio
/// of unattributed to attributed lines. Zero when every line is attributed
/// or no line is.
pub fn residual_target(placed_volume: f64, zone_lines: u64, ranked_lines: u64) -> f64 {
    if ranked_lines == 0 {
        return 0.0;
    }
    let unattributed = zone_lines.saturating_sub(ranked_lines);
    placed_volume * unattributed as f64 / ranked_lines as f64
}
