// Multi-Level Parking Allocator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/multilevel-parking
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/multilevel-parking --config facility.json --traffic --workers 8 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use multilevel_parking::facility::{AvailabilityReport, ParkingFacility};
use multilevel_parking::simulation::{LoggingConfig, TrafficSimulator};
use multilevel_parking::types::config::CliArgs;
use multilevel_parking::types::{FacilityConfig, OutputFormat, Vehicle};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match FacilityConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Held until exit so buffered file logs get flushed
    let _log_guard = match LoggingConfig::from_cli_args(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting multi-level parking allocator");

    if let Err(e) = run(args) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Multi-level parking allocator completed successfully");
}

fn run(args: CliArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let config = FacilityConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no vehicles will be parked.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_configuration_summary(&config);

    let facility = ParkingFacility::shared();
    facility.populate(&config);

    run_demo(facility, format)?;

    if config.traffic.enabled {
        let statistics = TrafficSimulator::new(facility, config.traffic.clone()).run();
        eprintln!("{}", statistics);
        eprintln!();
        eprintln!("Final occupancy: {}", facility.statistics());
    }

    Ok(())
}

/// Park the demo vehicles, show availability, release one and show it again
fn run_demo(facility: &ParkingFacility, format: OutputFormat) -> Result<()> {
    let car = Vehicle::car("ABC123");
    let truck = Vehicle::truck("XYZ789");
    let motorcycle = Vehicle::motorcycle("M1234");

    for vehicle in [&car, &truck, &motorcycle] {
        match facility.allocate(vehicle) {
            Ok(allocation) => eprintln!("Vehicle {} parked at {}.", vehicle.license_plate(), allocation),
            Err(e) => eprintln!("Could not park vehicle {}: {}", vehicle.license_plate(), e),
        }
    }

    print_availability(facility, format)?;

    match facility.release(&motorcycle) {
        Ok(allocation) => eprintln!("Vehicle {} unparked from {}.", motorcycle.license_plate(), allocation),
        Err(e) => eprintln!("{}", e),
    }

    print_availability(facility, format)
}

fn print_availability(facility: &ParkingFacility, format: OutputFormat) -> Result<()> {
    let report = AvailabilityReport::capture(facility);
    let rendered = report.render(format).context("Failed to render availability report")?;
    println!("{}", rendered);
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &FacilityConfig) {
    eprintln!("Configuration:");
    for level in &config.levels {
        let layout: Vec<String> = level
            .capacity
            .iter()
            .map(|entry| format!("{} x{}", entry.vehicle_type, entry.count))
            .collect();
        eprintln!("  Level {}: {} ({} spots)", level.floor, layout.join(", "), level.total_spots());
    }
    eprintln!("  Total Spots: {}", config.total_spots());
    eprintln!("  Output Format: {}", config.output_format);
    if config.traffic.enabled {
        eprintln!(
            "  Traffic: {} workers x {} arrivals, departure probability {:.2}",
            config.traffic.workers,
            config.traffic.arrivals_per_worker,
            config.traffic.departure_probability
        );
        if let Some(seed) = config.traffic.seed {
            eprintln!("  Random Seed: {}", seed);
        }
    }
    eprintln!();
}
