//! Behaviour pack recipe builder (`recipes/*.json`).

use serde_json::{json, Map, Value};

use crate::error::PackError;
use crate::values::{Identifier, ItemStack};

/// Type of a crafting recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeType {
    Furnace,
    Shaped,
    Shapeless,
}

impl RecipeType {
    /// Wire string; recipes are keyed as `minecraft:<type>` in the file.
    pub fn as_str(self) -> &'static str {
        match self {
            RecipeType::Furnace => "recipe_furnace",
            RecipeType::Shaped => "recipe_shaped",
            RecipeType::Shapeless => "recipe_shapeless",
        }
    }
}

/// Builder for a single recipe file.
///
/// The recipe data carries its `type` while being built; `build()` moves the
/// type out and re-keys the remaining data under `"minecraft:<type>"`.
#[derive(Debug)]
pub struct RecipeBuilder {
    format_version: String,
    data: Option<Map<String, Value>>,
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self {
            format_version: "1.12".into(),
            data: None,
        }
    }
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the format version. Defaults to `"1.12"`.
    pub fn format_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.format_version = version.into();
        self
    }

    /// Sets the required recipe data.
    pub fn data(
        &mut self,
        ty: RecipeType,
        id: Identifier,
        f: impl FnOnce(&mut RecipeDataBuilder),
    ) -> &mut Self {
        let mut data = RecipeDataBuilder::new(ty, id);
        f(&mut data);
        self.data = Some(data.build());
        self
    }

    pub fn build(self) -> Result<Value, PackError> {
        let mut data = self.data.ok_or(PackError::MissingField("recipe data"))?;
        let ty = match data.shift_remove("type") {
            Some(Value::String(ty)) => ty,
            _ => return Err(PackError::MissingField("type")),
        };

        let mut root = Map::new();
        root.insert("format_version".into(), self.format_version.into());
        root.insert(format!("minecraft:{ty}"), Value::Object(data));

        Ok(Value::Object(root))
    }
}

/// Builder for the data section of a recipe. Created by
/// [`RecipeBuilder::data`].
// TODO: shaped recipes also need pattern/key support.
#[derive(Debug)]
pub struct RecipeDataBuilder {
    ty: RecipeType,
    id: Identifier,
    tags: Vec<Value>,
    ingredients: Vec<Value>,
    result: Option<Value>,
    priority: Option<i64>,
}

impl RecipeDataBuilder {
    fn new(ty: RecipeType, id: Identifier) -> Self {
        Self {
            ty,
            id,
            tags: Vec::new(),
            ingredients: Vec::new(),
            result: None,
            priority: None,
        }
    }

    /// Blocks the recipe unlocks on, e.g. `crafting_table`.
    pub fn tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for tag in tags {
            self.tags.push(tag.into());
        }
        self
    }

    pub fn ingredient(&mut self, stack: ItemStack) -> &mut Self {
        self.ingredients.push(json!(stack));
        self
    }

    pub fn result(&mut self, stack: ItemStack) -> &mut Self {
        self.result = Some(json!(stack));
        self
    }

    pub fn priority(&mut self, priority: i64) -> &mut Self {
        self.priority = Some(priority);
        self
    }

    fn build(self) -> Map<String, Value> {
        let mut root = Map::new();
        root.insert("type".into(), self.ty.as_str().into());

        let mut description = Map::new();
        description.insert("identifier".into(), self.id.to_string().into());
        root.insert("description".into(), Value::Object(description));

        if !self.tags.is_empty() {
            root.insert("tags".into(), Value::Array(self.tags));
        }
        if !self.ingredients.is_empty() {
            root.insert("ingredients".into(), Value::Array(self.ingredients));
        }
        if let Some(result) = self.result {
            root.insert("result".into(), result);
        }
        if let Some(priority) = self.priority {
            root.insert("priority".into(), priority.into());
        }

        root
    }
}
