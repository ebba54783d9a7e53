//! Item stacks shown in trade slots.

use serde::{Deserialize, Serialize};

/// Material identifiers the host uses for "no item".
const AIR_MATERIALS: [&str; 3] = ["AIR", "CAVE_AIR", "VOID_AIR"];

/// Raw material identifier as reported by the host (e.g. `EMERALD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(String);

impl Material {
    /// Wrap a host material identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this material is one of the air placeholders.
    pub fn is_air(&self) -> bool {
        AIR_MATERIALS.contains(&self.0.as_str())
    }
}

impl core::fmt::Display for Material {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stack of items in an inventory slot.
///
/// `amount` is signed because the host does not guarantee a positive
/// count for transient stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Material of the stack.
    pub material: Material,
    /// Number of items in the stack.
    pub amount: i32,
    /// Custom display name set on the item, if any.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ItemStack {
    /// Create a plain stack with no display name.
    pub fn new(material: impl Into<String>, amount: i32) -> Self {
        Self {
            material: Material::new(material),
            amount,
            display_name: None,
        }
    }

    /// Attach a custom display name.
    #[must_use]
    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Whether the stack holds at least one real item.
    pub fn is_present(&self) -> bool {
        !self.material.is_air() && self.amount > 0
    }

    /// Label for the stack: its display name, else its material identifier.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(self.material.as_str())
    }
}
