use vinewood_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_writes_no_files() {
    let logger = Logger::builder()
        .name("vinewood-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files());
}
