//! Generator-facing contracts shared by all target languages.
//!
//! A target language plugs in by implementing [`LanguageGenerator`]; the
//! addressing metadata, script options and signal-map computation here are
//! language-neutral.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, SignalKind};
use crate::value::JsValue;

/// An action plus the page/frame addressing it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInContext {
    /// Identifier of the page the action targets (`page`, `popup1`, ...).
    pub page_alias: String,
    /// Frame name, when the action targets a named subframe.
    #[serde(default)]
    pub frame_name: Option<String>,
    /// Frame URL, when the action targets an unnamed subframe.
    #[serde(default)]
    pub frame_url: Option<String>,
    /// True when the action targets the page's main frame.
    pub is_main_frame: bool,
    /// The recorded action.
    pub action: Action,
}

impl ActionInContext {
    /// An action on the page's main frame.
    #[must_use]
    pub fn main_frame(page_alias: impl Into<String>, action: Action) -> Self {
        Self {
            page_alias: page_alias.into(),
            frame_name: None,
            frame_url: None,
            is_main_frame: true,
            action,
        }
    }

    /// An action on a subframe resolved by name.
    #[must_use]
    pub fn frame_by_name(
        page_alias: impl Into<String>,
        frame_name: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            page_alias: page_alias.into(),
            frame_name: Some(frame_name.into()),
            frame_url: None,
            is_main_frame: false,
            action,
        }
    }

    /// An action on a subframe resolved by URL.
    #[must_use]
    pub fn frame_by_url(
        page_alias: impl Into<String>,
        frame_url: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            page_alias: page_alias.into(),
            frame_name: None,
            frame_url: Some(frame_url.into()),
            is_main_frame: false,
            action,
        }
    }
}

/// Script-level configuration for header synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Browser to launch (`chromium`, `firefox`, `webkit`).
    pub browser_name: String,
    /// Device preset to spread into the context options, when set.
    pub device_name: Option<String>,
    /// Launch options, serialized verbatim into the launch call.
    pub launch_options: JsValue,
    /// Context options, merged with the device preset when one is set.
    pub context_options: JsValue,
}

impl GeneratorOptions {
    /// Options for the given browser with no device and empty option objects.
    #[must_use]
    pub fn new(browser_name: impl Into<String>) -> Self {
        Self {
            browser_name: browser_name.into(),
            device_name: None,
            launch_options: JsValue::empty_object(),
            context_options: JsValue::empty_object(),
        }
    }

    /// Set the device preset name.
    #[must_use]
    pub fn device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    /// Set the launch options.
    #[must_use]
    pub fn launch_options(mut self, options: JsValue) -> Self {
        self.launch_options = options;
        self
    }

    /// Set the context options.
    #[must_use]
    pub fn context_options(mut self, options: JsValue) -> Self {
        self.context_options = options;
        self
    }
}

/// One target-language generator.
///
/// Implementations are stateless across calls: each operation is a pure
/// computation from its inputs to a block of source text, and concatenating
/// header, per-action blocks and footer yields a runnable script.
pub trait LanguageGenerator {
    /// Stable identifier of the target language.
    fn id(&self) -> &'static str;

    /// Display file name for the generated script.
    fn file_name(&self) -> &'static str;

    /// Syntax-highlighter hint for UIs showing the output.
    fn highlighter(&self) -> &'static str;

    /// Generate the statement block for one action.
    fn generate_action(&self, action_in_context: &ActionInContext) -> String;

    /// Generate the script header (imports, launch, context creation).
    fn generate_header(&self, options: &GeneratorOptions) -> String;

    /// Generate the script footer (optional storage persistence, teardown).
    fn generate_footer(&self, save_storage: Option<&str>) -> String;
}

/// Signals of one action, folded by kind.
///
/// At most one signal of each kind is expected per action; when the recorder
/// misbehaves, the last one of a kind wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalMap<'a> {
    /// URL of an asynchronous navigation to wait for.
    pub wait_for_navigation: Option<&'a str>,
    /// URL of a synchronous navigation to assert on.
    pub assert_navigation: Option<&'a str>,
    /// Alias bound to an opened popup page.
    pub popup: Option<&'a str>,
    /// A download was started.
    pub download: bool,
    /// Alias of a raised dialog.
    pub dialog: Option<&'a str>,
    /// The action is one branch of a recorder-arranged combination.
    pub combination: bool,
}

impl SignalMap<'_> {
    /// True when the action call must be grouped with signal waits.
    #[must_use]
    pub fn needs_wait_group(&self) -> bool {
        self.popup.is_some() || self.wait_for_navigation.is_some() || self.download
    }
}

/// Fold an action's signal list into a [`SignalMap`].
#[must_use]
pub fn to_signal_map(action: &Action) -> SignalMap<'_> {
    let mut map = SignalMap::default();
    for signal in &action.signals {
        match &signal.kind {
            SignalKind::Navigation { url } if signal.is_async => {
                map.wait_for_navigation = Some(url);
            }
            SignalKind::Navigation { url } => map.assert_navigation = Some(url),
            SignalKind::Popup { popup_alias } => map.popup = Some(popup_alias),
            SignalKind::Download => map.download = true,
            SignalKind::Dialog { dialog_alias } => map.dialog = Some(dialog_alias),
            SignalKind::Combination => map.combination = true,
        }
    }
    map
}

/// Drop explicit context options that merely repeat the device preset.
///
/// Fields equal to the device descriptor's value are covered by the spread
/// and removed; differing fields stay, listed after the spread so the
/// override wins.
#[must_use]
pub fn sanitize_device_options(device: &JsValue, options: &JsValue) -> JsValue {
    let (JsValue::Object(device_fields), JsValue::Object(option_fields)) = (device, options) else {
        return options.clone();
    };
    let cleaned = option_fields
        .iter()
        .filter(|(key, value)| {
            device_fields
                .iter()
                .find(|(device_key, _)| device_key == key)
                .map_or(true, |(_, device_value)| device_value != value)
        })
        .cloned()
        .collect();
    JsValue::Object(cleaned)
}
