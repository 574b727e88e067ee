use regscope_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_output_is_written() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("regscope-file")
        .console(false)
        .json(true)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .max_files(2)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(screening_id = "AML-20240101000000", "screening completed");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("a .log file should exist");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("\"screening_id\":\"AML-20240101000000\""));
    assert!(contents.contains("screening completed"));
    Ok(())
}
