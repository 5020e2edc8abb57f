//! Skin pack assembly.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::PackError;
use crate::lang::LangBuilder;
use crate::manifest::ManifestBuilder;
use crate::pack::{report_io, write_json, write_text, PackBase, SaveOptions};
use crate::skins::SkinBuilder;

/// A skin pack: a manifest, a `skins.json`, per-locale `.lang` tables, and
/// copied asset folders.
#[derive(Debug)]
pub struct SkinPack {
    base: PackBase,
    skins: Option<Value>,
    langs: Vec<LangBuilder>,
}

impl SkinPack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: PackBase::new(name),
            skins: None,
            langs: Vec::new(),
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

    /// Builds and captures the pack's `skins.json`.
    pub fn skins(&mut self, f: impl FnOnce(&mut SkinBuilder)) -> &mut Self {
        let mut builder = SkinBuilder::new(&self.base.name);
        f(&mut builder);
        self.skins = Some(builder.build());
        self
    }

    /// Adds a locale's translation table, written to `texts/<locale>.lang` on
    /// save. Tables are written in the order they were added, so a repeated
    /// locale ends up with the last table.
    pub fn translations(&mut self, locale: &str, f: impl FnOnce(&mut LangBuilder)) -> &mut Self {
        let mut builder = LangBuilder::new(locale);
        f(&mut builder);
        self.langs.push(builder);
        self
    }

    /// Saves pretty-printed to `<output_root>/packs/<name>/<name>`.
    pub fn save(&self) -> Result<PathBuf, PackError> {
        self.save_with(&SaveOptions::default())
    }

    pub fn save_with(&self, options: &SaveOptions) -> Result<PathBuf, PackError> {
        self.base.save(options, |out_dir, options| {
            if !self.langs.is_empty() {
                let texts_dir = out_dir.join("texts");
                if let Err(e) = fs::create_dir_all(&texts_dir) {
                    report_io(options.io, "create", &texts_dir, e)?;
                }
                for lang in &self.langs {
                    let path = texts_dir.join(format!("{}.lang", lang.locale()));
                    write_text(&path, &lang.assemble(), options)?;
                }
            }

            // Same rule as the manifest: an included skins.json wins.
            let skins_path = out_dir.join("skins.json");
            if !skins_path.exists() {
                let skins = self
                    .skins
                    .as_ref()
                    .ok_or_else(|| PackError::MissingSkins(self.base.name.clone()))?;
                write_json(&skins_path, skins, options)?;
            }
            Ok(())
        })
    }
}
