mod archive;
mod args;
mod cmd;
mod context;
mod error;
mod manifest;
mod result;
mod sevenzip;

use args::Args;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        project_path,
        internal_name,
    } = Args::parse();

    // Create context
    let ctx = Context::new(project_path, internal_name, verbose);

    // The archive tool does all in-place edits; bail before touching any
    // file if it is not installed
    sevenzip::ensure_available()?;

    // Use cliclack for nice UI
    cliclack::intro("unofficialize")?;

    // Duplicate the official archive
    {
        let spinner = cliclack::spinner();
        spinner.start("Copying official archive...");
        let unofficial = archive::copy_official(&ctx)?;
        spinner.stop(format!("Copied to {}", unofficial.display()));
    }

    // Strip the official manifest entry from the copy. This runs before
    // entry discovery, so the manifest is never among the renamed entries
    // and is re-added separately at the end.
    {
        let spinner = cliclack::spinner();
        spinner.start("Removing official manifest entry...");
        sevenzip::delete_entry(&ctx, &ctx.unofficial_zip(), &ctx.manifest_entry())?;
        spinner.stop("Official manifest entry removed");
    }

    // Rename the plugin's own entries to the unofficial name
    {
        let spinner = cliclack::spinner();
        spinner.start("Renaming plugin entries...");
        let members = archive::plugin_members(&ctx)?;
        let pairs = archive::rename_pairs(&ctx, &members);
        sevenzip::rename_entries(&ctx, &ctx.unofficial_zip(), &pairs)?;
        spinner.stop(format!("Renamed {} entries", pairs.len()));
    }

    // Load the on-disk manifest, rewrite it, and append it to the copy
    let mut manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading plugin manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Loaded manifest for {}", m.name));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    {
        let spinner = cliclack::spinner();
        spinner.start("Appending unofficial manifest...");
        manifest.make_unofficial();
        archive::append_manifest(&ctx, &manifest)?;
        spinner.stop(format!("Appended {}", ctx.unofficial_manifest_entry()));
    }

    cliclack::outro("Unofficial build created successfully!")?;
    Ok(())
}
