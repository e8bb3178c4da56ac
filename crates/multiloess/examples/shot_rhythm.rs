//! multiloess Shot Rhythm Example
//!
//! This example walks through a complete request:
//! - Loading a film's shot lengths from a wide-format CSV table
//! - Fitting every span of the default grid
//! - Inspecting per-span diagnostics and the color bar
//! - Exporting the long-form dataset
//!
//! Set `RUST_LOG=multiloess=debug` to see one event per fitted span.

use multiloess::prelude::*;
use std::fmt::Write as _;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multiloess=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=".repeat(80));
    println!("multiloess Shot Rhythm Example");
    println!("{}", "=".repeat(80));
    println!();

    let table = WideTable::from_reader(synthetic_table().as_bytes())?;
    println!("Films in table: {}", table.columns().join(", "));

    example_1_default_grid(&table)?;
    example_2_single_film_export(&table)?;

    Ok(())
}

/// Example 1: Default Grid
/// Fits spans 0.1 to 0.9 with diagnostics and builds the color bar.
fn example_1_default_grid(table: &WideTable) -> Result<()> {
    println!("Example 1: Default Grid");
    println!("{}", "-".repeat(80));

    let durations = table.durations::<f64>("Accelerating")?;

    let start = Instant::now();
    let model = MultiLoessBuilder::new()
        .return_diagnostics() // Attach RMSE, MAE and roughness per span
        .build()?;
    let result = model.fit(&durations)?;

    println!(
        "Fitted {} shots at {} spans in {:?}",
        durations.len(),
        result.spans.len(),
        start.elapsed()
    );
    println!("{}", result);

    let request = RenderRequest::new(&result, model.config().range, 0.2, "Accelerating");
    let bar = request.color_bar()?;
    println!(
        "{}: {} to {} (ticks {:?}), output file {}",
        COLORBAR_LABEL,
        bar.vmin,
        bar.vmax,
        bar.ticks,
        image_file_name(&request.title)
    );

    println!();
    Ok(())
}

/// Example 2: Single Film Export
/// Fits a few spans of a shorter film and writes the long-form CSV to stdout.
fn example_2_single_film_export(table: &WideTable) -> Result<()> {
    println!("Example 2: Long-Form Export");
    println!("{}", "-".repeat(80));

    let durations = table.durations::<f64>("Steady")?;
    let result = MultiLoessBuilder::new()
        .range(0.3, 0.9)
        .step(0.3)
        .iterations(1)
        .build()?
        .fit(&durations)?;

    write_long_form(&result, std::io::stdout().lock())?;

    println!();
    Ok(())
}

/// Two films in wide format; the shorter one leaves trailing cells empty.
fn synthetic_table() -> String {
    let mut csv = String::from("Accelerating,Steady\n");
    for i in 0..120 {
        let t = i as f64;
        // Shots shorten over the film, with a slow-paced passage in the middle
        let accelerating = 9.0 - 0.05 * t + 3.0 * (-((t - 60.0) / 8.0).powi(2)).exp()
            + 0.6 * (t * 2.3).sin().abs();
        let steady = if i < 40 {
            format!("{:.2}", 4.0 + 0.8 * (t * 1.7).cos())
        } else {
            String::new()
        };
        let _ = writeln!(csv, "{:.2},{}", accelerating, steady);
    }
    csv
}
