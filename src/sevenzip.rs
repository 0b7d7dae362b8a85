use crate::cmd;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::path::Path;

/// External archive tool used for in-place zip edits
pub const TOOL: &str = "7z";

/// Verify the archive tool is reachable before any file is touched
pub fn ensure_available() -> Result<()> {
    which::which(TOOL)
        .map(|_| ())
        .map_err(|_| Error::ToolNotFound(TOOL.to_string()))
}

/// Delete a single entry from the archive by exact name
pub fn delete_entry(ctx: &Context, archive: &Path, entry: &str) -> Result<()> {
    let archive = archive.to_string_lossy();
    cmd::execute(ctx, TOOL, &["d", archive.as_ref(), entry])
}

/// Rename archive entries in place, one invocation for all old/new pairs.
/// Invoking the tool with an empty pair list is an error on its side, so a
/// run that matched nothing skips the call and leaves the archive untouched.
pub fn rename_entries(ctx: &Context, archive: &Path, pairs: &[(String, String)]) -> Result<()> {
    if pairs.is_empty() {
        return Ok(());
    }

    let archive = archive.to_string_lossy();
    let mut args = vec!["rn", archive.as_ref()];
    for (old, new) in pairs {
        args.push(old);
        args.push(new);
    }

    cmd::execute(ctx, TOOL, &args)
}
