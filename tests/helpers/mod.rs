#![allow(dead_code)]

pub mod mock_transport;

use logdispatch::core::LogRow;

/// A small activity log used across tests.
pub fn sample_rows() -> Vec<LogRow> {
    vec![
        LogRow::new("alice", "login", "2025-07-08T21:03:52+02:00"),
        LogRow::new("bob", "upload report.pdf", "2025-07-08T21:04:10+02:00"),
        LogRow::new("alice", "logout", "2025-07-08T21:30:00+02:00"),
    ]
}
