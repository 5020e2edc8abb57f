//! `skins.json` builder.

use serde_json::{Map, Value};

/// Builder for a skin pack's `skins.json`.
#[derive(Debug, Clone)]
pub struct SkinBuilder {
    pack_name: String,
    // TODO: per-skin entries are collected but not yet emitted by `build()`;
    // confirm the expected skins.json shape before wiring them in.
    #[allow(dead_code)]
    skins: Vec<Value>,
}

impl SkinBuilder {
    pub(crate) fn new(pack_name: impl Into<String>) -> Self {
        Self {
            pack_name: pack_name.into(),
            skins: Vec::new(),
        }
    }

    /// Adds a skin whose image is `<name>.png` and whose type is `free`.
    pub fn skin(&mut self, name: &str) -> &mut Self {
        self.skin_with(name, &format!("{name}.png"), "free")
    }

    /// Adds a skin. The skin type only matters for marketplace partners;
    /// everyone else wants `free`.
    pub fn skin_with(&mut self, name: &str, image_name: &str, skin_type: &str) -> &mut Self {
        let mut entry = Map::new();
        entry.insert("localization_name".into(), name.into());
        entry.insert("geometry".into(), "geometry.humanoid.custom".into());
        entry.insert("texture".into(), image_name.into());
        entry.insert("type".into(), skin_type.into());

        self.skins.push(Value::Object(entry));
        self
    }

    pub fn build(self) -> Value {
        let mut root = Map::new();
        root.insert("geometry".into(), "skinpacks/skins.json".into());
        root.insert("serialize_name".into(), self.pack_name.clone().into());
        root.insert("localization_name".into(), self.pack_name.into());

        Value::Object(root)
    }
}
