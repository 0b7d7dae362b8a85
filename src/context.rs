use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show command execution details)
    pub verbose: bool,

    /// Internal name of the plugin
    pub internal_name: String,

    /// Release output directory ({project_path}/bin/x64/Release/{internal_name})
    pub release_dir: PathBuf,
}

impl Context {
    pub fn new(project_path: PathBuf, internal_name: String, verbose: bool) -> Self {
        let release_dir = project_path
            .join("bin")
            .join("x64")
            .join("Release")
            .join(&internal_name);

        Self {
            verbose,
            internal_name,
            release_dir,
        }
    }

    /// The official release archive produced by the regular build
    pub fn official_zip(&self) -> PathBuf {
        self.release_dir.join("latest.zip")
    }

    /// The derived unofficial archive this tool produces
    pub fn unofficial_zip(&self) -> PathBuf {
        self.release_dir.join("latestUnofficial.zip")
    }

    /// The on-disk (unzipped) plugin manifest next to the official archive
    pub fn manifest_path(&self) -> PathBuf {
        self.release_dir.join(format!("{}.json", self.internal_name))
    }

    /// Internal name with the unofficial suffix applied
    pub fn unofficial_name(&self) -> String {
        format!("{}Unofficial", self.internal_name)
    }

    /// Archive entry name of the official manifest
    pub fn manifest_entry(&self) -> String {
        format!("{}.json", self.internal_name)
    }

    /// Archive entry name of the appended unofficial manifest
    pub fn unofficial_manifest_entry(&self) -> String {
        format!("{}.json", self.unofficial_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let ctx = Context::new(PathBuf::from("/work/plugin"), "Foo".to_string(), false);

        assert_eq!(
            ctx.official_zip(),
            PathBuf::from("/work/plugin/bin/x64/Release/Foo/latest.zip")
        );
        assert_eq!(
            ctx.unofficial_zip(),
            PathBuf::from("/work/plugin/bin/x64/Release/Foo/latestUnofficial.zip")
        );
        assert_eq!(
            ctx.manifest_path(),
            PathBuf::from("/work/plugin/bin/x64/Release/Foo/Foo.json")
        );
    }

    #[test]
    fn test_derived_names() {
        let ctx = Context::new(PathBuf::from("."), "Foo".to_string(), false);

        assert_eq!(ctx.unofficial_name(), "FooUnofficial");
        assert_eq!(ctx.manifest_entry(), "Foo.json");
        assert_eq!(ctx.unofficial_manifest_entry(), "FooUnofficial.json");
    }
}
