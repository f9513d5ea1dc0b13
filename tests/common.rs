use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Edge list used by the standard questions
#[allow(dead_code)]
pub const SAMPLE_TRACES: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

#[allow(dead_code)]
pub fn tracequery() -> Command {
    let mut cmd = cargo_bin_cmd!("tracequery");
    cmd.env_remove("TRACEQUERY_INPUT")
        .env_remove("RUST_LOG")
        .env_remove("TRACEQUERY_LOG");
    cmd
}

/// Command with the sample edge list piped on stdin
#[allow(dead_code)]
pub fn with_sample() -> Command {
    let mut cmd = tracequery();
    cmd.write_stdin(SAMPLE_TRACES);
    cmd
}
