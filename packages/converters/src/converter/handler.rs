//! Converter trait definitions.

use crate::error::Result;
use crate::raw::RawNode;
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::view::ViewId;
use crate::wrapper::ControlWrapper;

/// Capability that turns blocks and editors into typed objects.
///
/// Every operation returns `None` when the converter does not apply to the
/// view identifier. Converters never fail through this interface; a
/// matching converter that cannot build its object also returns `None`.
pub trait Converter: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Convert a block's raw value into a typed value.
    fn try_convert_value(&self, block: &Block, raw: &RawNode) -> Option<Box<dyn ControlValue>>;

    /// Convert an editor's raw config into a typed config.
    fn try_convert_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Option<Box<dyn EditorConfig>>;

    /// Wrap a block for rendering.
    fn try_wrap(&self, block: &Block) -> Option<ControlWrapper>;
}

/// Converter bound to a single view identifier.
///
/// Implementors provide only the construction steps. The blanket
/// [`Converter`] implementation checks [`matches`](Self::matches) first and
/// turns construction errors into a logged `None`.
pub trait ViewConverter: Send + Sync {
    /// The view identifier handled by this converter.
    fn view(&self) -> &ViewId;

    /// Name used in diagnostics.
    ///
    /// Default implementation returns the Rust type name.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Check if this converter handles the given view identifier.
    ///
    /// Default implementation is an exact, case-insensitive comparison.
    fn matches(&self, view: &ViewId) -> bool {
        self.view().matches(view)
    }

    /// Build the typed value.
    ///
    /// # Errors
    /// Returns a `ConvertError` if the payload is malformed.
    fn create_value(&self, block: &Block, raw: &RawNode) -> Result<Box<dyn ControlValue>>;

    /// Build the typed config. `Ok(None)` means the editor has no config type.
    ///
    /// Default implementation has no config type.
    ///
    /// # Errors
    /// Returns a `ConvertError` if the payload is malformed.
    fn create_config(
        &self,
        _editor: &EditorDefinition,
        _raw: &RawNode,
    ) -> Result<Option<Box<dyn EditorConfig>>> {
        Ok(None)
    }

    /// Build the wrapper.
    ///
    /// # Errors
    /// Returns a `ConvertError` if the value or config cannot be built.
    fn create_wrapper(&self, block: &Block) -> Result<ControlWrapper>;
}

/// Turn a construction result into an option, logging the failure.
pub(crate) fn contain<T>(
    converter: &str,
    view: &ViewId,
    target: &'static str,
    result: Result<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                converter,
                view = %view,
                target_kind = target,
                error = %err,
                "Conversion failed, treating block as unsupported"
            );
            None
        }
    }
}

impl<T: ViewConverter> Converter for T {
    fn name(&self) -> &str {
        self.label()
    }

    fn try_convert_value(&self, block: &Block, raw: &RawNode) -> Option<Box<dyn ControlValue>> {
        if !self.matches(block.view()) {
            return None;
        }
        contain(self.label(), block.view(), "value", self.create_value(block, raw))
    }

    fn try_convert_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Option<Box<dyn EditorConfig>> {
        if !self.matches(&editor.view) {
            return None;
        }
        contain(self.label(), &editor.view, "config", self.create_config(editor, raw)).flatten()
    }

    fn try_wrap(&self, block: &Block) -> Option<ControlWrapper> {
        if !self.matches(block.view()) {
            return None;
        }
        contain(self.label(), block.view(), "wrapper", self.create_wrapper(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::TextValue;
    use crate::error::ConvertError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct GalleryConverter {
        view: ViewId,
        calls: AtomicUsize,
    }

    impl GalleryConverter {
        fn new() -> Self {
            Self {
                view: ViewId::new("/App_Plugins/Gallery/gallery.html"),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ViewConverter for GalleryConverter {
        fn view(&self) -> &ViewId {
            &self.view
        }

        fn matches(&self, view: &ViewId) -> bool {
            view.contains_ignore_case("/app_plugins/gallery/")
        }

        fn create_value(&self, block: &Block, raw: &RawNode) -> Result<Box<dyn ControlValue>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(<TextValue as ControlValue>::from_raw(block, raw)?))
        }

        fn create_wrapper(&self, block: &Block) -> Result<ControlWrapper> {
            let value = self.create_value(block, block.value())?;
            Ok(ControlWrapper::new(block.clone(), value, None))
        }
    }

    struct BrokenConverter;

    impl ViewConverter for BrokenConverter {
        fn view(&self) -> &ViewId {
            static VIEW: std::sync::LazyLock<ViewId> =
                std::sync::LazyLock::new(|| ViewId::new("broken"));
            &VIEW
        }

        fn create_value(&self, _block: &Block, _raw: &RawNode) -> Result<Box<dyn ControlValue>> {
            Err(ConvertError::Invalid("always fails".to_string()))
        }

        fn create_config(
            &self,
            _editor: &EditorDefinition,
            _raw: &RawNode,
        ) -> Result<Option<Box<dyn EditorConfig>>> {
            Err(ConvertError::Invalid("always fails".to_string()))
        }

        fn create_wrapper(&self, _block: &Block) -> Result<ControlWrapper> {
            Err(ConvertError::Invalid("always fails".to_string()))
        }
    }

    #[test]
    fn test_no_match_skips_construction() {
        let converter = GalleryConverter::new();
        let block = Block::new("textstring", json!("hello"));

        assert!(converter.try_convert_value(&block, block.value()).is_none());
        assert!(converter.try_wrap(&block).is_none());
        assert_eq!(converter.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_matches() {
        let converter = GalleryConverter::new();
        let block = Block::new("/App_Plugins/Gallery/Gallery.html", json!("hello"));

        let value = converter.try_convert_value(&block, block.value()).unwrap();
        assert_eq!(value.downcast_ref::<TextValue>().map(TextValue::value), Some("hello"));
        assert!(converter.try_wrap(&block).is_some());
    }

    #[test]
    fn test_default_config_is_absent() {
        let converter = GalleryConverter::new();
        let editor = EditorDefinition::new("/App_Plugins/Gallery/gallery.html");
        assert!(converter.try_convert_config(&editor, &json!({})).is_none());
    }

    #[test]
    fn test_construction_failure_is_contained() {
        let converter = BrokenConverter;
        let block = Block::new("BROKEN", json!(null));
        let editor = EditorDefinition::new("broken");

        assert!(converter.try_convert_value(&block, block.value()).is_none());
        assert!(converter.try_convert_config(&editor, &json!({})).is_none());
        assert!(converter.try_wrap(&block).is_none());
    }

    #[test]
    fn test_name_defaults_to_type_name() {
        let converter = BrokenConverter;
        assert!(Converter::name(&converter).ends_with("BrokenConverter"));
    }
}
