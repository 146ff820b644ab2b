//! Plain-text rendering of pushover analysis results.

use std::fmt::Write;

use crate::analysis::AnalysisSummary;
use crate::response::Regime;

/// Render a textual summary of a pushover analysis.
///
/// The layout follows a hand calculation: inputs first, then the breakpoints of the
/// bilinear-with-plateau law, then what the sweep actually reached. Background on the
/// method is at <https://en.wikipedia.org/wiki/Pushover_analysis>.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();
    let parameters = summary.parameters;

    // State the inputs of the response law before any derived number.
    writeln!(
        &mut output,
        "Pushover analysis (k = {:.1} N/m, Fy = {:.1} N, ductility = {:.2})",
        parameters.k_elastic, parameters.yield_force, parameters.ductility
    )
    .expect("writing to string cannot fail");

    // Below the yield point the frame is linear, so d = F / k.
    // See: https://en.wikipedia.org/wiki/Yield_(engineering)
    let breakpoints = summary.breakpoints;
    writeln!(
        &mut output,
        "Yield point: F = {:.1} N, d = {:.4} m",
        breakpoints.yield_load, breakpoints.yield_displacement
    )
    .expect("writing to string cannot fail");

    // Ductility is the ratio of ultimate to yield displacement. Past yield the stiffness
    // drops to k / ductility until the ultimate load.
    // See: https://en.wikipedia.org/wiki/Ductility
    writeln!(
        &mut output,
        "Ultimate point: F = {:.1} N, d = {:.4} m (post-yield stiffness {:.1} N/m)",
        breakpoints.ultimate_load,
        breakpoints.ultimate_displacement,
        breakpoints.post_yield_stiffness
    )
    .expect("writing to string cannot fail");

    // Regimes are listed in loading order so the counts read like the curve itself.
    let counts = [Regime::Elastic, Regime::Hardening, Regime::Saturated]
        .iter()
        .map(|regime| {
            format!(
                "{} {}",
                summary.regime_counts.get(regime).copied().unwrap_or(0),
                regime.label()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(&mut output, "Samples: {} ({counts})", summary.curve.len())
        .expect("writing to string cannot fail");

    // The peak can exceed the ultimate displacement: the hardening branch overshoots the
    // plateau just before the ultimate load.
    writeln!(&mut output, "Peak displacement: {:.4} m", summary.peak_displacement)
        .expect("writing to string cannot fail");

    // Once the ultimate load is reached the displacement stays on the collapse plateau.
    // See: https://en.wikipedia.org/wiki/Structural_engineering
    if let Some(onset) = summary.collapse_onset {
        writeln!(
            &mut output,
            "Collapse plateau reached at F = {:.1} N (d = {:.4} m)",
            onset.load, onset.displacement
        )
        .expect("writing to string cannot fail");
    } else {
        output.push_str("Collapse plateau: not reached within the load sweep\n");
    }

    output
}
