use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use ours_filter::scan::count_regions;
use ours_filter::{ConflictStyle, MARKER_SIZE};

#[derive(Args)]
pub struct CheckArgs {
    /// Files to scan; stdin when none given
    #[arg(value_name = "file")]
    files: Vec<PathBuf>,

    /// Conflict marker length (git always writes 7)
    #[arg(long, default_value_t = MARKER_SIZE, value_name = "n")]
    marker_size: usize,

    /// Suppress per-file output; exit status only
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: &CheckArgs) -> Result<i32> {
    if args.marker_size == 0 {
        bail!("--marker-size must be at least 1");
    }

    let mut found = false;

    if args.files.is_empty() {
        let mut content = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut content)
            .context("cannot read stdin")?;
        found = report(&content, "(standard input)", args);
    } else {
        for path in &args.files {
            let content =
                fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))?;
            found |= report(&content, &path.display().to_string(), args);
        }
    }

    Ok(if found { 1 } else { 0 })
}

fn report(content: &[u8], name: &str, args: &CheckArgs) -> bool {
    let regions = count_regions(content, args.marker_size, ConflictStyle::Merge);
    if regions == 0 {
        return false;
    }
    if !args.quiet {
        println!("{}: {} conflict(s)", name, regions);
    }
    true
}
