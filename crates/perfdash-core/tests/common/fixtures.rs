//! Sample payloads written to temp files.

use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_PAYLOAD: &str = r#"{
    "period": "2024-Q3",
    "projects": [
        { "name": "Atlas", "owner": "ops", "homepage": "atlas.example.com",
          "score": 91.5, "tasksCompleted": 9, "tasksTotal": 12 },
        { "name": "Beacon", "homepage": "JavaScript:alert(document.cookie)",
          "score": 40, "tasksCompleted": 1, "tasksTotal": 10 },
        { "name": "Comet", "homepage": "//comet.example.org/status", "score": 66.25 }
    ]
}"#;

pub fn payload_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(SAMPLE_PAYLOAD.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
