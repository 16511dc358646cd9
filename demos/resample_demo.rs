//! IMF Resampling Example
//!
//! Resamples a synthetic binned stellar population and draws the resolved
//! tail of a bulk population, writing both to CSV

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::Write;
use stellar_imf::{
    resample_stellar_mass, sample_stellar_mass_from_spop, PopulationConfig, ResampleConfig,
    SplitPowerLawDistribution,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running IMF resampling example...\n");

    fs::create_dir_all("out")?;

    let seed = 920_926;
    let mut rng = StdRng::seed_from_u64(seed);

    // Build a synthetic star-by-star population: masses snapped to the bin
    // centers of the original IMF grid, the way the simulation emits them.
    let config = ResampleConfig::default();
    let edges = config.bin_edges();
    let imf = SplitPowerLawDistribution::new(&[config.aimf], &[config.mmin, config.mmax])?;
    let mform: Vec<f64> = imf
        .sample(&mut rng, 20_000)
        .into_iter()
        .map(|m| {
            let bin = ((m - config.mmin) / (edges[1] - edges[0])) as usize;
            let bin = bin.min(edges.len() - 2);
            0.5 * (edges[bin] + edges[bin + 1])
        })
        .collect();

    println!("Configuration:");
    println!("  Mass range: [{}, {}] Msol", config.mmin, config.mmax);
    println!("  IMF bins: {}", config.nimf - 1);
    println!("  Slope: {}", config.aimf);
    println!("  Stars: {}", mform.len());
    println!("  Seed: {}", seed);
    println!();

    let mass = resample_stellar_mass(&mform, &config, &mut rng)?;

    let distinct_before = count_distinct(&mform);
    let distinct_after = count_distinct(&mass);
    println!("RESAMPLING SUMMARY");
    println!("==================");
    println!("  Distinct masses before: {}", distinct_before);
    println!("  Distinct masses after:  {}", distinct_after);
    println!("  Mean mass before: {:.4} Msol", mean(&mform));
    println!("  Mean mass after:  {:.4} Msol", mean(&mass));

    // Resolved tail of a bulk population drawn from the full broken IMF.
    let spop_config = PopulationConfig::default();
    let resolved = sample_stellar_mass_from_spop(50_000.0, &spop_config, &mut rng)?;
    println!("\nPOPULATION SAMPLING");
    println!("===================");
    println!("  Total draws: 50000");
    println!(
        "  Resolved stars (>= {} Msol): {}",
        spop_config.mass_limit,
        resolved.len()
    );
    if !resolved.is_empty() {
        let max = resolved.iter().fold(f64::MIN, |a, &b| a.max(b));
        println!("  Most massive: {:.2} Msol", max);
    }

    let csv_path = "out/resampled_masses.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "mform,mass")?;
    for (mf, m) in mform.iter().zip(mass.iter()) {
        writeln!(file, "{:.6},{:.6}", mf, m)?;
    }

    println!("\nCSV output written to: {}", csv_path);
    println!("Done!");

    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn count_distinct(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}
