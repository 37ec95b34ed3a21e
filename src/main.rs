use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use court_slot_engine::api::request_dto::{AssignmentRequestDto, AssignmentResponseDto};
use court_slot_engine::loader::parser::parse_json_file;
use court_slot_engine::loader::snapshot::FacilitySnapshot;
use court_slot_engine::{CourtAssignmentService, EngineConfig, logger};

/// Assigns courts to a booking request against a facility snapshot.
#[derive(Debug, Parser)]
#[command(name = "court-assign", version)]
struct Args {
    /// Facility snapshot JSON (courts, time slots, existing bookings).
    #[arg(long)]
    snapshot: String,

    /// Booking request JSON.
    #[arg(long)]
    request: String,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<String>,

    /// Print the response as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path).with_context(|| format!("loading config '{}'", path))?,
        None => EngineConfig::default(),
    };

    logger::init(&config.logging);

    let snapshot = FacilitySnapshot::from_file(&args.snapshot).with_context(|| format!("loading snapshot '{}'", args.snapshot))?;
    let request_dto: AssignmentRequestDto = parse_json_file(&args.request).with_context(|| format!("loading request '{}'", args.request))?;
    let request = snapshot.resolve_request(&request_dto)?;

    let service = CourtAssignmentService::from_config(snapshot.repository.clone(), &config);
    let result = service.assign(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&AssignmentResponseDto::from(&result))?);
    } else if let Ok(assignment) = &result {
        println!("{}", format!("Assignment for facility {} on {}", request.facility_id, request.date).bold());
        for (slot_id, court_id) in assignment.iter() {
            let interval = snapshot
                .get_time_slot(*slot_id)
                .map(|slot| format!("{}-{}", slot.get_start().format("%H:%M"), slot.get_end().format("%H:%M")))
                .unwrap_or_default();
            println!("  slot {:>4} {:<11} -> court {}", slot_id.value, interval, court_id.to_string().green());
        }
    }

    result.map(|_| ()).context("no court assignment possible")
}
