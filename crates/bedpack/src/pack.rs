//! Pack assembly and the shared save pipeline.
//!
//! A pack accumulates builder output (manifest, pack-type extras) and copy
//! instructions, then `save()` lays the whole thing out on disk: clear the
//! output directory, copy the included resource folders in order, and write
//! each generated document only where the copy step did not already supply
//! the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::error::PackError;
use crate::fsio;
use crate::manifest::ManifestBuilder;
use crate::recipe::RecipeBuilder;

/// How filesystem failures during `save()` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IoErrorPolicy {
    /// Log the failure and keep going (default).
    #[default]
    BestEffort,
    /// Abort the save on the first filesystem error.
    FailFast,
}

/// Options for a single `save()` call.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Output folder name under `<output_root>/packs/<packName>/`; the pack
    /// name itself when `None`.
    pub folder: Option<String>,
    /// Indented JSON when true, minimal whitespace otherwise.
    pub pretty: bool,
    pub io: IoErrorPolicy,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            folder: None,
            pretty: true,
            io: IoErrorPolicy::BestEffort,
        }
    }
}

impl SaveOptions {
    /// Pretty-printed output into the given folder.
    pub fn in_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Self::default()
        }
    }

    /// Minimal-whitespace output into the default folder.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

/// State common to every pack type: identity, roots, copy instructions, and
/// the captured manifest tree.
#[derive(Debug)]
pub(crate) struct PackBase {
    pub(crate) name: String,
    output_root: PathBuf,
    resource_root: PathBuf,
    includes: Vec<String>,
    manifest: Option<Value>,
}

impl PackBase {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_root: PathBuf::from("out"),
            resource_root: ["src", "resources"].iter().collect(),
            includes: Vec::new(),
            manifest: None,
        }
    }

    pub(crate) fn output_root(&mut self, root: impl Into<PathBuf>) {
        self.output_root = root.into();
    }

    pub(crate) fn resource_root(&mut self, root: impl Into<PathBuf>) {
        self.resource_root = root.into();
    }

    pub(crate) fn include(&mut self, resource_path: impl Into<String>) {
        self.includes.push(resource_path.into());
    }

    pub(crate) fn set_manifest(
        &mut self,
        f: impl FnOnce(&mut ManifestBuilder),
    ) -> Result<(), PackError> {
        let mut builder = ManifestBuilder::new();
        f(&mut builder);
        self.manifest = Some(builder.build()?);
        Ok(())
    }

    /// Runs the shared save pipeline, calling `extras` for the pack-type
    /// specific files once the common ones are in place. Returns the output
    /// directory.
    pub(crate) fn save(
        &self,
        options: &SaveOptions,
        extras: impl FnOnce(&Path, &SaveOptions) -> Result<(), PackError>,
    ) -> Result<PathBuf, PackError> {
        let folder = options.folder.as_deref().unwrap_or(&self.name);
        let out_dir = self
            .output_root
            .join("packs")
            .join(&self.name)
            .join(folder);

        // Clear the previous output so repeated saves start from scratch.
        if let Err(e) = fsio::remove_dir_recursive(&out_dir) {
            report_io(options.io, "remove", &out_dir, e)?;
        }
        if let Err(e) = fs::create_dir_all(&out_dir) {
            report_io(options.io, "create", &out_dir, e)?;
        }

        // Copy the included resource folders; later includes overwrite files
        // from earlier ones.
        for include in &self.includes {
            let source = self.resource_root.join(include);
            if let Err(e) = fsio::copy_dir_recursive(&source, &out_dir) {
                report_io(options.io, "copy", &source, e)?;
            }
        }

        // Write the generated manifest only if an include did not already
        // supply one.
        let manifest_path = out_dir.join("manifest.json");
        if !manifest_path.exists() {
            let manifest = self
                .manifest
                .as_ref()
                .ok_or_else(|| PackError::MissingManifest(self.name.clone()))?;
            write_json(&manifest_path, manifest, options)?;
        }

        extras(&out_dir, options)?;

        info!("saved pack `{}` to {}", self.name, out_dir.display());
        Ok(out_dir)
    }
}

/// Serializes a document tree and writes it, honoring the I/O policy.
pub(crate) fn write_json(path: &Path, tree: &Value, options: &SaveOptions) -> Result<(), PackError> {
    let text = if options.pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    write_text(path, &text, options)
}

/// Writes a text file, honoring the I/O policy.
pub(crate) fn write_text(path: &Path, text: &str, options: &SaveOptions) -> Result<(), PackError> {
    if let Err(e) = fs::write(path, text) {
        report_io(options.io, "write", path, e)?;
    }
    Ok(())
}

/// Logs the failure under [`IoErrorPolicy::BestEffort`], returns it under
/// [`IoErrorPolicy::FailFast`].
pub(crate) fn report_io(
    policy: IoErrorPolicy,
    action: &'static str,
    path: &Path,
    source: std::io::Error,
) -> Result<(), PackError> {
    match policy {
        IoErrorPolicy::BestEffort => {
            warn!("failed to {action} `{}`: {source}", path.display());
            Ok(())
        }
        IoErrorPolicy::FailFast => Err(PackError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A resource pack: a manifest plus copied asset folders.
#[derive(Debug)]
pub struct ResourcePack {
    base: PackBase,
}

impl ResourcePack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: PackBase::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Root the output tree is placed under. Defaults to `out`.
    pub fn output_root(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.base.output_root(root);
        self
    }

    /// Root the include paths are resolved against. Defaults to
    /// `src/resources`.
    pub fn resource_root(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.base.resource_root(root);
        self
    }

    /// Copies the contents of `<resource_root>/<resource_path>` into the pack
    /// on save. Later includes overwrite files from earlier ones.
    pub fn include(&mut self, resource_path: impl Into<String>) -> &mut Self {
        self.base.include(resource_path);
        self
    }

    /// Builds and captures the pack's `manifest.json`.
    pub fn manifest(
        &mut self,
        f: impl FnOnce(&mut ManifestBuilder),
    ) -> Result<&mut Self, PackError> {
        self.base.set_manifest(f)?;
        Ok(self)
    }

    /// Saves pretty-printed to `<output_root>/packs/<name>/<name>`.
    pub fn save(&self) -> Result<PathBuf, PackError> {
        self.save_with(&SaveOptions::default())
    }

    pub fn save_with(&self, options: &SaveOptions) -> Result<PathBuf, PackError> {
        self.base.save(options, |_, _| Ok(()))
    }
}

/// A behaviour pack: a manifest, generated recipes, and copied data folders.
#[derive(Debug)]
pub struct BehaviourPack {
    base: PackBase,
    recipes: Vec<(String, Value)>,
}

impl BehaviourPack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: PackBase::new(name),
            recipes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Root the output tree is placed under. Defaults to `out`.
    pub fn output_root(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.base.output_root(root);
        self
    }

    /// Root the include paths are resolved against. Defaults to
    /// `src/resources`.
    pub fn resource_root(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.base.resource_root(root);
        self
    }

    /// Copies the contents of `<resource_root>/<resource_path>` into the pack
    /// on save. Later includes overwrite files from earlier ones.
    pub fn include(&mut self, resource_path: impl Into<String>) -> &mut Self {
        self.base.include(resource_path);
        self
    }

    /// Builds and captures the pack's `manifest.json`.
    pub fn manifest(
        &mut self,
        f: impl FnOnce(&mut ManifestBuilder),
    ) -> Result<&mut Self, PackError> {
        self.base.set_manifest(f)?;
        Ok(self)
    }

    /// Builds and captures a recipe to be written to `recipes/<name>.json`.
    pub fn recipe(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut RecipeBuilder),
    ) -> Result<&mut Self, PackError> {
        let mut builder = RecipeBuilder::new();
        f(&mut builder);
        self.recipes.push((name.into(), builder.build()?));
        Ok(self)
    }

    /// Saves pretty-printed to `<output_root>/packs/<name>/<name>`.
    pub fn save(&self) -> Result<PathBuf, PackError> {
        self.save_with(&SaveOptions::default())
    }

    pub fn save_with(&self, options: &SaveOptions) -> Result<PathBuf, PackError> {
        self.base.save(options, |out_dir, options| {
            if self.recipes.is_empty() {
                return Ok(());
            }

            let recipes_dir = out_dir.join("recipes");
            if let Err(e) = fs::create_dir_all(&recipes_dir) {
                report_io(options.io, "create", &recipes_dir, e)?;
            }
            for (name, recipe) in &self.recipes {
                let path = recipes_dir.join(format!("{name}.json"));
                if !path.exists() {
                    write_json(&path, recipe, options)?;
                }
            }
            Ok(())
        })
    }
}
