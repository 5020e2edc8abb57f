//! Bedrock add-on pack authoring.
//!
//! Fluent builders for Minecraft Bedrock Edition behaviour, resource, and
//! skin packs: `manifest.json`, `skins.json`, `.lang` locale tables, and
//! recipes, assembled together with copied asset folders into an output
//! directory tree.
//!
//! A pack is not safe to save concurrently: two `save()` calls racing on the
//! same output path will fight over directory deletion and copying.

pub mod error;
pub mod format;
pub mod lang;
pub mod manifest;
pub mod pack;
pub mod recipe;
pub mod skin_pack;
pub mod skins;
pub mod values;

mod fsio;

pub use error::PackError;
pub use lang::LangBuilder;
pub use manifest::{CapabilityType, ManifestBuilder, ModuleType};
pub use pack::{BehaviourPack, IoErrorPolicy, ResourcePack, SaveOptions};
pub use recipe::{RecipeBuilder, RecipeType};
pub use skin_pack::SkinPack;
pub use skins::SkinBuilder;
pub use values::{Identifier, ItemStack, Version};
