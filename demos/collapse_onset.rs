use pushover::{loop_area, render_summary, run_analysis, LoadSweep, PushoverConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sweep well past the ultimate load so the report shows where the plateau starts
    let config = PushoverConfig {
        sweep: LoadSweep {
            max_load: 3_000.0,
            samples: 31,
        },
        ..PushoverConfig::default()
    };
    let summary = run_analysis(&config)?;
    print!("{}", render_summary(&summary));

    // Energy dissipated by an idealised elastic-perfectly-plastic cycle between +-2 m
    let deformation = [-2.0, -1.0, 2.0, 1.0];
    let force = [-500.0, 500.0, 500.0, -500.0];
    println!(
        "Dissipated energy per cycle: {:.1} J",
        loop_area(&deformation, &force)?
    );

    Ok(())
}
