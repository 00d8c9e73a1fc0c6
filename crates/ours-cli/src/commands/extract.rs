use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use ours_filter::{ConflictStyle, OursReader, MARKER_SIZE};

#[derive(Args)]
pub struct ExtractArgs {
    /// File to filter; stdin when absent or "-"
    #[arg(value_name = "file")]
    file: Option<PathBuf>,

    /// Conflict marker style: merge, diff3, or zdiff3
    #[arg(long, default_value = "merge")]
    style: ConflictStyle,

    /// Conflict marker length (git always writes 7)
    #[arg(long, default_value_t = MARKER_SIZE, value_name = "n")]
    marker_size: usize,

    /// Write to <path> instead of stdout
    #[arg(short, long, value_name = "path")]
    output: Option<PathBuf>,
}

pub fn run(args: &ExtractArgs) -> Result<i32> {
    if args.marker_size == 0 {
        bail!("--marker-size must be at least 1");
    }

    let source: Box<dyn Read> = match &args.file {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };
    let mut filtered = OursReader::with_marker_len(source, args.marker_size, args.style);

    match &args.output {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            io::copy(&mut filtered, &mut out)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            io::copy(&mut filtered, &mut out)?;
        }
    }

    Ok(0)
}
