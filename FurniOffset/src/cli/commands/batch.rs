//! CLI command for batch conversion

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{LOOKING_GLASS, GEAR, print_done, print_step, simple_bar};
use crate::folder::{FolderLayout, batch_convert, find_furni_folders};

pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    config: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let layout = FolderLayout::load_or_default(config)?;

    if !quiet {
        print_step(1, 2, LOOKING_GLASS, "Finding furniture folders...");
    }
    let folders = find_furni_folders(source, &layout);

    if folders.is_empty() {
        println!("No furniture folders found in: {}", source.display());
        return Ok(());
    }

    if let Some(dest) = destination {
        std::fs::create_dir_all(dest)?;
    }

    if !quiet {
        print_step(2, 2, GEAR, &format!("Converting {} folders...", folders.len()));
    }

    let pb = (!quiet).then(|| simple_bar(folders.len() as u64, "Converting"));
    let result = batch_convert(&folders, &layout, destination, |progress| {
        if let Some(ref pb) = pb {
            pb.set_position(progress.current as u64);
            pb.set_message(progress.folder.clone());
        }
    });
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    println!();
    println!("Conversion complete:");
    println!("  Success: {}", result.success_count);
    println!("  Failed: {}", result.fail_count);

    if result.fail_count > 0 {
        println!();
        println!("Failures:");
        for msg in result.results.iter().filter(|m| m.starts_with("Failed")) {
            println!("  {msg}");
        }
    }

    if !quiet {
        print_done(started.elapsed());
    }

    Ok(())
}
