use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Icon location served by the static plugin-index host, keyed by internal name
const ICON_URL_BASE: &str = "https://raw.githubusercontent.com/WorkingRobot/MyDalamudPlugins/main/icons";

/// Plugin manifest as consumed by the distribution index.
///
/// Only the fields this tool rewrites are typed; everything else the build
/// produced is carried through untouched in `rest`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    pub name: String,
    pub punchline: String,
    pub internal_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Load and parse the on-disk manifest next to the official archive
    pub fn load(ctx: &Context) -> Result<Self> {
        let path = ctx.manifest_path();
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Rewrite the descriptive fields to mark this as an uncertified build.
    ///
    /// The punchline reads the original name, so it is rewritten first;
    /// the icon URL encodes the suffixed internal name, so it is derived last.
    pub fn make_unofficial(&mut self) {
        self.punchline = format!(
            "Unofficial/uncertified build of {}. {}",
            self.name, self.punchline
        );
        self.internal_name.push_str("Unofficial");
        self.name.push_str(" (Unofficial)");
        self.icon_url = Some(format!("{}/{}.png", ICON_URL_BASE, self.internal_name));
    }

    /// Serialize with 2-space indentation for the archive entry
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
