//! The shared shape of every request, result and nested value type.
//!
//! Each shape is a flat record of optional fields of four kinds:
//!
//! * `text` - an optional string (`Option<String>`)
//! * `flag` - an optional boolean (`Option<bool>`)
//! * `map(V)` - an optional attribute map (`Option<BTreeMap<String, V>>`)
//! * `list(T)` - an optional ordered list (`Option<Vec<T>>`)
//!
//! Scalar and list fields start out absent; attribute maps start out empty and
//! only become absent through `clear_*_entries`. An absent field is skipped
//! when the shape is serialized, an empty map or list is not, so encoders can
//! tell "cleared" apart from "explicitly empty".
//!
//! The accessor names are listed explicitly at each field:
//!
//! ```text
//! shape! {
//!     pub struct CreateTopicRequest {
//!         name: text = "Name" { set_name, with_name },
//!         attributes: map(String) = "Attributes" {
//!             set_attributes, with_attributes, attributes_mut,
//!             add_attributes_entry, clear_attributes_entries
//!         },
//!         tags: list(Tag) = "Tags" { set_tags, with_tags, tags_mut, push_tags },
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::DuplicateKeyError;

/// Inserts `key` only when it is not already present. The map is left
/// untouched on failure.
pub(crate) fn insert_unique<V>(
    map: &mut BTreeMap<String, V>,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match map.entry(key) {
        Entry::Occupied(entry) => Err(DuplicateKeyError::new(entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

macro_rules! shape {
    (@type text) => { Option<String> };
    (@type flag) => { Option<bool> };
    (@type map ($v:ty)) => { Option<::std::collections::BTreeMap<String, $v>> };
    (@type list ($t:ty)) => { Option<Vec<$t>> };

    (@default map ($v:ty)) => { Some(::std::collections::BTreeMap::new()) };
    (@default $kind:ident $(($inner:ty))?) => { None };

    (@methods text $field:ident [$(#[$doc:meta])*] [$set:ident, $with:ident]) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $set(&mut self, value: Option<String>) -> &mut Self {
            self.$field = value;
            self
        }

        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };

    (@methods flag $field:ident [$(#[$doc:meta])*] [$set:ident, $with:ident]) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<bool> {
            self.$field
        }

        pub fn $set(&mut self, value: Option<bool>) -> &mut Self {
            self.$field = value;
            self
        }

        pub fn $with(mut self, value: bool) -> Self {
            self.$field = Some(value);
            self
        }
    };

    (@methods map ($v:ty) $field:ident [$(#[$doc:meta])*]
        [$set:ident, $with:ident, $get_mut:ident, $add:ident, $clear:ident]) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&::std::collections::BTreeMap<String, $v>> {
            self.$field.as_ref()
        }

        /// The live map, created empty if the field is absent.
        pub fn $get_mut(&mut self) -> &mut ::std::collections::BTreeMap<String, $v> {
            self.$field.get_or_insert_with(::std::collections::BTreeMap::new)
        }

        pub fn $set(&mut self, value: Option<::std::collections::BTreeMap<String, $v>>) -> &mut Self {
            self.$field = value;
            self
        }

        pub fn $with<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
        where
            K: Into<String>,
            V: Into<$v>,
        {
            self.$field = Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            );
            self
        }

        /// Adds one entry, failing if the key is already present.
        pub fn $add(
            &mut self,
            key: impl Into<String>,
            value: impl Into<$v>,
        ) -> Result<&mut Self, $crate::error::DuplicateKeyError> {
            $crate::shape::insert_unique(
                self.$field.get_or_insert_with(::std::collections::BTreeMap::new),
                key.into(),
                value.into(),
            )?;
            Ok(self)
        }

        /// Resets the map to absent, not to empty.
        pub fn $clear(&mut self) -> &mut Self {
            self.$field = None;
            self
        }
    };

    (@methods list ($t:ty) $field:ident [$(#[$doc:meta])*]
        [$set:ident, $with:ident, $get_mut:ident, $push:ident]) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&[$t]> {
            self.$field.as_deref()
        }

        /// The live list, created empty if the field is absent.
        pub fn $get_mut(&mut self) -> &mut Vec<$t> {
            self.$field.get_or_insert_with(Vec::new)
        }

        pub fn $set(&mut self, value: Option<Vec<$t>>) -> &mut Self {
            self.$field = value;
            self
        }

        pub fn $with<I: Into<$t>>(mut self, items: impl IntoIterator<Item = I>) -> Self {
            self.$field = Some(items.into_iter().map(Into::into).collect());
            self
        }

        /// Appends one item, creating the list if it is absent.
        pub fn $push(&mut self, item: impl Into<$t>) -> &mut Self {
            self.$field.get_or_insert_with(Vec::new).push(item.into());
            self
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $(($inner:ty))? = $wire:literal {
                    $($method:ident),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: shape!(@type $kind $(($inner))?),
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: shape!(@default $kind $(($inner))?),)*
                }
            }
        }

        impl $name {
            $(
                shape!(@methods $kind $(($inner))? $field [$(#[$fmeta])*] [$($method),*]);
            )*
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut out = f.debug_struct(stringify!($name));
                $(
                    if let Some(value) = &self.$field {
                        out.field(stringify!($field), value);
                    }
                )*
                out.finish()
            }
        }
    };
}
