use crate::context::Context;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Compression level used for the appended manifest entry
const MANIFEST_COMPRESSION_LEVEL: i64 = 7;

/// Copy the official archive to the unofficial path, overwriting any leftover
/// from a previous run
pub fn copy_official(ctx: &Context) -> Result<PathBuf> {
    let official = ctx.official_zip();
    if !official.exists() {
        return Err(Error::ArchiveNotFound(official.display().to_string()));
    }

    let unofficial = ctx.unofficial_zip();
    fs::copy(&official, &unofficial)?;
    Ok(unofficial)
}

/// Collect the archive entries carrying the plugin's internal name.
///
/// Exactly four names qualify: the assembly, its debug symbols, and the two
/// manifests. The match is exact — entries in subdirectories or with
/// different casing are left alone. The official manifest entry is stripped
/// from the copy before this runs, so it is normally absent here.
pub fn plugin_members(ctx: &Context) -> Result<Vec<String>> {
    let name = &ctx.internal_name;
    let wanted = [
        format!("{name}.dll"),
        format!("{name}.deps.json"),
        format!("{name}.json"),
        format!("{name}.pdb"),
    ];

    let file = File::open(ctx.unofficial_zip())?;
    let archive = ZipArchive::new(file)?;

    Ok(archive
        .file_names()
        .filter(|entry| wanted.iter().any(|w| w == entry))
        .map(str::to_string)
        .collect())
}

/// Derive old/new name pairs for the rename step. Every occurrence of the
/// internal name inside an entry name is substituted, not just a prefix.
pub fn rename_pairs(ctx: &Context, members: &[String]) -> Vec<(String, String)> {
    let unofficial = ctx.unofficial_name();
    members
        .iter()
        .map(|member| {
            (
                member.clone(),
                member.replace(&ctx.internal_name, &unofficial),
            )
        })
        .collect()
}

/// Append the mutated manifest to the unofficial archive under its new entry
/// name. The name is freshly derived, so no existing entry is replaced.
pub fn append_manifest(ctx: &Context, manifest: &Manifest) -> Result<()> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(ctx.unofficial_zip())?;
    let mut zip = ZipWriter::new_append(file)?;

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(MANIFEST_COMPRESSION_LEVEL));

    zip.start_file(ctx.unofficial_manifest_entry(), options)?;
    zip.write_all(manifest.to_pretty_json()?.as_bytes())?;
    zip.finish()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ctx_in(dir: &Path) -> Context {
        Context::new(dir.to_path_buf(), "Foo".to_string(), false)
    }

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_copy_official_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        let err = copy_official(&ctx).unwrap_err();
        assert!(matches!(err, Error::ArchiveNotFound(_)));
        assert!(!ctx.unofficial_zip().exists());
    }

    #[test]
    fn test_copy_official_overwrites_leftover() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        write_zip(&ctx.official_zip(), &[("Foo.dll", "assembly")]);
        fs::write(ctx.unofficial_zip(), b"stale").unwrap();

        let unofficial = copy_official(&ctx).unwrap();
        assert_eq!(entry_names(&unofficial), vec!["Foo.dll"]);
    }

    #[test]
    fn test_plugin_members_exact_match_only() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        write_zip(
            &ctx.unofficial_zip(),
            &[
                ("Foo.dll", ""),
                ("Foo.deps.json", ""),
                ("Foo.pdb", ""),
                ("other.txt", ""),
                ("foo.dll", ""),
                ("lib/Foo.dll", ""),
                ("Foo.xml", ""),
            ],
        );

        let mut members = plugin_members(&ctx).unwrap();
        members.sort();
        assert_eq!(members, vec!["Foo.deps.json", "Foo.dll", "Foo.pdb"]);
    }

    #[test]
    fn test_plugin_members_includes_manifest_when_present() {
        // discovery itself does not special-case the manifest entry; the
        // pipeline only avoids it by deleting it beforehand
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        write_zip(&ctx.unofficial_zip(), &[("Foo.json", "{}")]);

        assert_eq!(plugin_members(&ctx).unwrap(), vec!["Foo.json"]);
    }

    #[test]
    fn test_rename_pairs_substitutes_every_occurrence() {
        let ctx = Context::new(PathBuf::from("."), "Foo".to_string(), false);

        let pairs = rename_pairs(
            &ctx,
            &["Foo.deps.json".to_string(), "Foo.Foo.dll".to_string()],
        );
        assert_eq!(
            pairs,
            vec![
                (
                    "Foo.deps.json".to_string(),
                    "FooUnofficial.deps.json".to_string()
                ),
                (
                    "Foo.Foo.dll".to_string(),
                    "FooUnofficial.FooUnofficial.dll".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_append_manifest_keeps_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        write_zip(
            &ctx.unofficial_zip(),
            &[("FooUnofficial.dll", "assembly"), ("other.txt", "notes")],
        );

        let mut manifest: Manifest = serde_json::from_str(
            r#"{"Name": "Foo Plugin", "Punchline": "Does things.", "InternalName": "Foo"}"#,
        )
        .unwrap();
        manifest.make_unofficial();
        append_manifest(&ctx, &manifest).unwrap();

        let mut names = entry_names(&ctx.unofficial_zip());
        names.sort();
        assert_eq!(
            names,
            vec!["FooUnofficial.dll", "FooUnofficial.json", "other.txt"]
        );
    }

    #[test]
    fn test_append_manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        write_zip(&ctx.unofficial_zip(), &[("other.txt", "notes")]);

        let mut manifest: Manifest = serde_json::from_str(
            r#"{"Name": "Foo Plugin", "Punchline": "Does things.", "InternalName": "Foo"}"#,
        )
        .unwrap();
        manifest.make_unofficial();
        append_manifest(&ctx, &manifest).unwrap();

        let mut archive = ZipArchive::new(File::open(ctx.unofficial_zip()).unwrap()).unwrap();
        let entry = archive.by_name("FooUnofficial.json").unwrap();
        let parsed: Manifest = serde_json::from_reader(entry).unwrap();
        assert_eq!(parsed.internal_name, "FooUnofficial");
        assert_eq!(parsed.name, "Foo Plugin (Unofficial)");
    }
}
