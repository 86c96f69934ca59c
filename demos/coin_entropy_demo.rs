use lzentropy::estimators::approaches::lz78::binary_entropy;
use lzentropy::estimators::entropy::{Entropy, GlobalValue};
use ndarray::Array1;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_coin_sample(size: usize, p: f64, rng: &mut StdRng) -> Array1<i32> {
    Array1::from_iter((0..size).map(|_| if rng.gen_range(0.0..1.0) < p { 1 } else { 0 }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parameters: sample size and probability resolution, overridable from
    // the command line.
    let args: Vec<String> = std::env::args().collect();
    let sample_size: usize = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(100_000);
    let resolution: f64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0.1);

    // Sweep a battery of Bernoulli samples over the bias grid and estimate
    // each entropy rate with the LZ78 estimator.
    let graining = (1.0 / resolution) as usize;
    let mut rng = StdRng::seed_from_u64(20200303);
    let mut estimated = Vec::with_capacity(graining + 1);
    for step in 0..=graining {
        let p = step as f64 * resolution;
        let sample = generate_coin_sample(sample_size, p, &mut rng);
        let h = Entropy::new_lz78(sample).global_value();
        println!(
            "p = {p:.2}  LZ78 estimate = {h:.4}  closed form = {:.4}",
            binary_entropy(p)
        );
        estimated.push((p, h));
    }

    // Plot the estimates against the closed-form binary entropy curve.
    let y_max = estimated.iter().map(|&(_, h)| h).fold(1.0f64, f64::max) * 1.1;
    let root = SVGBackend::new("coin_entropy.svg", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Sample size = {sample_size} outcomes, resolution = {resolution}"),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc("p")
        .y_desc("H (bits/outcome)")
        .draw()?;
    chart
        .draw_series(LineSeries::new(estimated.clone(), &RED))?
        .label("LZ78 estimate")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            (0..=graining).map(|step| {
                let p = step as f64 * resolution;
                (p, binary_entropy(p))
            }),
            &BLUE,
        ))?
        .label("Closed form")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x, y)], &BLUE));
    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;
    println!("Wrote coin_entropy.svg");
    Ok(())
}
