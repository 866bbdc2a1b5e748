pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every upload.
pub fn user_agent() -> String {
    format!("TestReporter/{} (Code Climate, Inc.)", VERSION)
}

/// Human-readable version line printed by the `version` command.
pub fn formatted() -> String {
    format!("Code Climate Test Reporter {}", VERSION)
}
