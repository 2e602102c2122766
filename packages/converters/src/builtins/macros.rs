//! Macro editor (`macro`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::MACRO_VIEW;
use crate::converter::TypedConverter;
use crate::error::Result;
use crate::raw::{self, RawNode};
use crate::types::Block;
use crate::value::ControlValue;

/// Value of a macro block: the macro alias and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroValue {
    #[serde(rename = "macroAlias")]
    pub alias: String,

    #[serde(rename = "macroParamsDictionary", default)]
    pub parameters: BTreeMap<String, RawNode>,
}

impl ControlValue for MacroValue {
    fn from_raw(_block: &Block, raw: &RawNode) -> Result<Self> {
        raw::deserialize(raw)
    }

    fn is_valid(&self) -> bool {
        !self.alias.trim().is_empty()
    }
}

/// Converter for the `macro` editor.
#[must_use]
pub fn macro_converter() -> TypedConverter {
    TypedConverter::new::<MacroValue>(MACRO_VIEW)
}
