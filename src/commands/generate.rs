//! `generate` subcommand: shell completions and man pages.
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write shell completions for `cmd` to `out`.
pub fn write_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    out: &mut W,
) {
    let name = cmd.get_name().to_owned();
    clap_complete::generate(shell, cmd, name, out);
}

/// Render man pages for `cmd` and each of its subcommands into `output_dir`,
/// or the current directory when none is given. Returns the written paths.
///
/// # Errors
///
/// Returns an error if the directory or any page cannot be written.
pub fn write_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("create man page directory {}", output_dir.display())
    })?;

    let mut written = Vec::new();
    render_page(cmd.clone(), &output_dir, &mut written)?;
    render_subcommand_pages(cmd, cmd.get_name(), &output_dir, &mut written)?;
    Ok(written)
}

/// Render a page per subcommand of `cmd`, descending into nested
/// subcommands. Pages are named `<prefix>-<subcommand>.1`.
fn render_subcommand_pages(
    cmd: &clap::Command,
    prefix: &str,
    output_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for sub in cmd.get_subcommands() {
        let name = format!("{prefix}-{}", sub.get_name());
        // clap_mangen takes the page title from the command name, which
        // must be 'static.
        let title: &'static str = Box::leak(name.clone().into_boxed_str());
        let renamed = sub.clone().name(title).disable_help_subcommand(true);
        render_page(renamed, output_dir, written)?;
        if sub.has_subcommands() {
            render_subcommand_pages(sub, &name, output_dir, written)?;
        }
    }
    Ok(())
}

fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = output_dir.join(format!("{}.1", cmd.get_name()));
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    written.push(path);
    Ok(())
}
