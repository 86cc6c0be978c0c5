use crate::{ElementType, ViewError};

/// What to do with a type tag that names none of the known element types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Fall back to `uint8`, matching hosts that never rejected unknown tags.
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, derive_new::new, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub unknown_tags: TagPolicy,
}

impl BinderConfig {
    pub fn strict() -> Self {
        Self::new(TagPolicy::Strict)
    }

    /// Resolves a textual tag by exact match, first match in priority order.
    pub fn resolve_tag(&self, tag: &str) -> Result<ElementType, ViewError> {
        match tag.parse::<ElementType>() {
            Ok(ty) => {
                log::trace!("Resolved tag {:?} to {:?}", tag, ty);
                Ok(ty)
            }
            Err(_) => self.unrecognized_tag(tag),
        }
    }

    /// Applies the policy to a tag that cannot name an element type.
    pub fn unrecognized_tag(&self, tag: &str) -> Result<ElementType, ViewError> {
        match self.unknown_tags {
            TagPolicy::Lenient => {
                log::debug!("Unrecognized element type {:?}, using uint8", tag);
                Ok(ElementType::Uint8)
            }
            TagPolicy::Strict => Err(ViewError::UnknownElementType(tag.to_string())),
        }
    }
}
