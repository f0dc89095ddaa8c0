use clap::Parser;
use roster_enrich::core::roster::RosterResolver;
use roster_enrich::utils::{logger, validation::Validate};
use roster_enrich::{CliConfig, EnrichmentPipeline, EnrichedStudent, HttpDocumentStore, Settings};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting roster-enrich");

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if settings.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    let store = HttpDocumentStore::new(
        settings.store_endpoint.clone(),
        Duration::from_secs(settings.request_timeout_secs),
    )?;

    let result = match &settings.class_id {
        Some(class_id) => {
            let pipeline = EnrichmentPipeline::with_batch_cap(store, settings.batch_cap);
            run_roster(&pipeline, class_id, &settings).await
        }
        None => {
            // Validation guarantees teacher_id is set when class_id is not.
            let teacher_id = settings.teacher_id.as_deref().unwrap_or_default();
            list_classes(&store, teacher_id).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Run failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_roster(
    pipeline: &EnrichmentPipeline<HttpDocumentStore>,
    class_id: &str,
    settings: &Settings,
) -> roster_enrich::Result<()> {
    let students = pipeline.run(class_id).await?;

    // Presentation-side latency floor, kept out of the pipeline itself.
    if let Some(min_latency_ms) = settings.min_latency_ms {
        tokio::time::sleep(Duration::from_millis(min_latency_ms)).await;
    }

    let rows: Vec<&EnrichedStudent> = match &settings.filter_name {
        Some(needle) => {
            let needle = needle.to_lowercase();
            students
                .iter()
                .filter(|s| s.record.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => students.iter().collect(),
    };

    tracing::info!("Resolved {} students for class {}", students.len(), class_id);
    if rows.is_empty() {
        println!("No students found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<20} {:>4}  {:<12} {:<10} {:<10} {}",
        "ID", "NAME", "AGE", "LEVEL", "BEHAVIOR", "LANGUAGE", "SUBMITTED"
    );
    for student in rows {
        println!(
            "{:<12} {:<20} {:>4}  {:<12} {:<10} {:<10} {}",
            student.record.id,
            student.record.name,
            student.record.age,
            student.record.academic_level,
            student.record.behavior,
            student.record.language,
            if student.has_submitted { "yes" } else { "no" }
        );
    }

    Ok(())
}

async fn list_classes(
    store: &HttpDocumentStore,
    teacher_id: &str,
) -> roster_enrich::Result<()> {
    let resolver = RosterResolver::new(store);
    let classes = resolver.classes_for_teacher(teacher_id).await?;

    tracing::info!("Found {} classes for teacher {}", classes.len(), teacher_id);
    if classes.is_empty() {
        println!("No classes found.");
        return Ok(());
    }

    for class in classes {
        println!("{:<16} {} ({} students)", class.id, class.name, class.students.len());
    }

    Ok(())
}
