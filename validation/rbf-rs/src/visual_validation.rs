//! Combined Visualization Examples for RBF forecasting
//!
//! This script runs multiple scenarios to generate CSV data for visualization.
//! It covers:
//! 1. Chaotic series (rolling one-step forecasts of the Hénon map)
//! 2. Center count comparison (model size on a noisy sine)
//! 3. Drift comparison (center placement with and without relaxation)
//! 4. Horizon comparison (forecast error versus step)

use rbf_rs::prelude::*;
use std::fs::File;
use std::io::Write;

const OUTPUT_DIR: &str = "../output/visual/";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visualization Examples...");
    println!("=====================================");
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    println!("Output directory: {}", OUTPUT_DIR);
    println!();

    run_henon_forecast()?;
    println!();

    run_centers_comparison()?;
    println!();

    run_drift_comparison()?;
    println!();

    run_horizon_comparison()?;
    println!();

    println!("All examples completed successfully.");
    Ok(())
}

fn henon(n: usize) -> Vec<f64> {
    let (mut x, mut y) = (0.1, 0.0);
    (0..n)
        .map(|_| {
            let next = 1.0 - 1.4 * x * x + y;
            y = 0.3 * x;
            x = next;
            x
        })
        .collect()
}

/// Sine wave with deterministic pseudo-noise.
fn noisy_sine(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.15;
            t.sin() + 0.1 * (i as f64 * 12.9898).sin().fract()
        })
        .collect()
}

fn rms(errors: &[f64]) -> f64 {
    if errors.is_empty() {
        return 0.0;
    }
    (errors.iter().map(|e| e * e).sum::<f64>() / errors.len() as f64).sqrt()
}

/// 1. Chaotic series
fn run_henon_forecast() -> Result<(), Box<dyn std::error::Error>> {
    let series = henon(400);

    let mut model = Rbf::new()
        .dimension(2)
        .centers(12)
        .adapter(Online)
        .window_capacity(150)
        .build()?;

    let mut file = File::create(format!("{}henon_forecast.csv", OUTPUT_DIR))?;
    writeln!(file, "index,actual,forecast,fallback")?;

    let mut errors = Vec::new();
    let mut pending: Option<f64> = None;
    for (i, &value) in series.iter().enumerate() {
        if let Some(forecast) = pending.take() {
            errors.push(value - forecast);
        }
        if let Some(output) = model.add_point(value)? {
            if i + 1 < series.len() {
                writeln!(
                    file,
                    "{},{},{},{}",
                    i + 1,
                    series[i + 1],
                    output.prediction,
                    output.used_fallback()
                )?;
            }
            pending = Some(output.prediction);
        }
    }

    println!("1. Hénon map: {} forecasts, RMS error {:.4}", errors.len(), rms(&errors));
    Ok(())
}

/// 2. Center count comparison
fn run_centers_comparison() -> Result<(), Box<dyn std::error::Error>> {
    let series = noisy_sine(300);
    let start = 200;

    let mut file = File::create(format!("{}centers_comparison.csv", OUTPUT_DIR))?;
    writeln!(file, "centers,index,actual,forecast")?;

    println!("2. Center count comparison");
    for centers in [3, 6, 12, 24] {
        let model = Rbf::new()
            .dimension(3)
            .delay(2)
            .centers(centers)
            .adapter(Batch)
            .build()?;

        let mut errors = Vec::new();
        for end in start..series.len() {
            let result = match model.fit(&series[..end]) {
                Ok(result) => result,
                Err(err) => {
                    println!("   centers={} end={}: {}", centers, end, err);
                    continue;
                }
            };
            writeln!(file, "{},{},{},{}", centers, end, series[end], result.prediction)?;
            errors.push(series[end] - result.prediction);
        }
        println!("   centers={:<3} RMS error {:.4}", centers, rms(&errors));
    }
    Ok(())
}

/// 3. Drift comparison
fn run_drift_comparison() -> Result<(), Box<dyn std::error::Error>> {
    let series = henon(200);

    let mut file = File::create(format!("{}drift_centers.csv", OUTPUT_DIR))?;
    writeln!(file, "drift,center,x0,x1")?;

    println!("3. Drift comparison");
    for drift in [false, true] {
        let result = Rbf::new()
            .dimension(2)
            .centers(16)
            .drift(drift)
            .adapter(Batch)
            .build()?
            .fit(&series)?;

        for (i, point) in result.center_points().chunks_exact(2).enumerate() {
            writeln!(file, "{},{},{},{}", drift, i, point[0], point[1])?;
        }
        println!(
            "   drift={:<5} bandwidth {:.4} forecast {:.4}",
            drift,
            result.bandwidth_original(),
            result.prediction
        );
    }
    Ok(())
}

/// 4. Horizon comparison
fn run_horizon_comparison() -> Result<(), Box<dyn std::error::Error>> {
    let series = noisy_sine(300);
    let start = 200;

    let mut file = File::create(format!("{}horizon_comparison.csv", OUTPUT_DIR))?;
    writeln!(file, "step,rms_error")?;

    println!("4. Horizon comparison");
    for step in 1..=8 {
        let model = Rbf::new()
            .dimension(3)
            .delay(2)
            .centers(10)
            .step(step)
            .adapter(Batch)
            .build()?;

        let mut errors = Vec::new();
        for end in start..series.len() - step + 1 {
            if let Ok(result) = model.fit(&series[..end]) {
                errors.push(series[end + step - 1] - result.prediction);
            }
        }
        writeln!(file, "{},{}", step, rms(&errors))?;
        println!("   step={} RMS error {:.4}", step, rms(&errors));
    }
    Ok(())
}
