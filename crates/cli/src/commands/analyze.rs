use anyhow::Result;
use mocha_lens_core::{MochaLens, RunMode};
use std::path::Path;
use tracing::debug;

use crate::display::{determine_file_type, print_command_breakdown, render_block};
use crate::utils::parse_filepath_with_line;

use super::resolve_existing;

pub fn analyze_command(filepath_arg: &str, verbose: bool) -> Result<()> {
    debug!("Analyzing file: {}", filepath_arg);

    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let path = resolve_existing(&filepath)?;
    let runner = MochaLens::with_path(&path)?;

    if verbose {
        println!("{}", runner.analyze(&path)?);
        return Ok(());
    }

    print_formatted_analysis(&runner, &path, &filepath, line)
}

pub fn print_formatted_analysis(
    runner: &MochaLens,
    path: &Path,
    display_path: &str,
    line: Option<u32>,
) -> Result<()> {
    println!(
        "🔍 Analyzing: {}{}",
        display_path,
        line.map(|l| format!(":{}", l + 1)).unwrap_or_default()
    );
    println!("{}", "=".repeat(80));
    println!("   📦 Type: {}", determine_file_type(path, runner.config()));

    println!("\n📄 File-level command:");
    print_command_breakdown(&runner.build_file_command(path, RunMode::Run));

    let blocks = runner.detect_blocks(path)?;
    if blocks.is_empty() {
        println!("\n❌ No describe/it blocks found");
        return Ok(());
    }

    if let Some(line) = line {
        match runner.block_at_line(path, line)? {
            Some(block) => {
                println!("\n🎯 Block at line {}:", line + 1);
                println!("{}", render_block(&block, 1, &blocks.pattern_for(block.id)));
                println!("\n🚀 Command:");
                print_command_breakdown(&runner.build_command(path, Some(line), RunMode::Run)?);
            }
            None => println!("\n❌ No block at line {}", line + 1),
        }
        return Ok(());
    }

    println!(
        "\n✅ Found {} block(s): {} suite(s), {} test(s)",
        blocks.len(),
        blocks.suites().count(),
        blocks.cases().count()
    );
    for block in &blocks {
        let depth = blocks.ancestry(block.id).len();
        println!("{}", render_block(block, depth, &blocks.pattern_for(block.id)));
    }

    Ok(())
}
