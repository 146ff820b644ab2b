use pushover::{linspace, PushoverCurve, PushoverModel, ResponseParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Frame with 1000 N/m stiffness that yields at 500 N and collapses at 4x the yield displacement
    let model = PushoverModel::new(ResponseParameters::new(1_000.0, 500.0, 4.0))?;

    // Push it monotonically from zero to 2500 N
    let curve = PushoverCurve::trace(&model, &linspace(0.0, 2_500.0, 11))?;

    for point in curve.points() {
        println!(
            "F = {:>7.1} N  d = {:.4} m  ({})",
            point.load,
            point.displacement,
            point.regime.label()
        );
    }

    Ok(())
}
