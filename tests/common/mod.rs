#![allow(dead_code)]

use orderflow::application::engine::OrderFlowEngine;
use orderflow::application::flow::START_TOKEN;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes a transcript CSV with an `action,text` header.
pub fn write_transcript(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["action", "text"]).unwrap();
    for (action, text) in rows {
        wtr.write_record([*action, *text]).unwrap();
    }
    file.write_all(&wtr.into_inner().unwrap()).unwrap();
    file.flush().unwrap();
    file
}

/// Feeds `inputs` after the kickoff token and returns the engine.
pub fn engine_after(platform: &str, service: &str, inputs: &[&str]) -> OrderFlowEngine {
    let mut engine = OrderFlowEngine::new(platform, service);
    engine.process_message(START_TOKEN);
    for input in inputs {
        engine.process_message(input);
    }
    engine
}

/// Parses the JSON lines the CLI writes to stdout.
pub fn parse_responses(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
