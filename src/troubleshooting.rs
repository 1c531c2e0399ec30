//! Guidance printed after a failed load.

/// Fixed hints, in the order they are printed.
pub const TROUBLESHOOTING_HINTS: [&str; 4] = [
    "Verify the PostgreSQL server is running and reachable.",
    "Check host and port.",
    "Ensure the destination table exists (`ed-bronze ddl`).",
    "Confirm the authentication mode matches the server's configuration.",
];

/// Render the hints as a numbered block.
pub fn render_hints() -> String {
    let mut out = String::from("Troubleshooting tips:");
    for (i, hint) in TROUBLESHOOTING_HINTS.iter().enumerate() {
        out.push_str(&format!("\n  {}. {hint}", i + 1));
    }
    out
}

/// Text printed for a failed command: the full error chain, then the hints
/// when the failure came from a load.
pub fn failure_report(error: &anyhow::Error, with_hints: bool) -> String {
    let mut out = format!("Error: {error:?}");
    if with_hints {
        out.push_str("\n\n");
        out.push_str(&render_hints());
    }
    out
}
