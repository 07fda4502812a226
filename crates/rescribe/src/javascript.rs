//! JavaScript target generator.
//!
//! Translates one [`ActionInContext`] at a time into a commented, indented
//! statement block, and synthesizes the script header and footer around the
//! blocks. All "asynchronous" vocabulary in the output (awaited calls,
//! `Promise.all` groupings) describes the generated script's semantics; the
//! generator itself is synchronous and pure.

use tracing::debug;

use crate::actions::{ActionKind, MouseButton};
use crate::devices::DeviceCatalog;
use crate::format::JsFormatter;
use crate::language::{
    sanitize_device_options, to_signal_map, ActionInContext, GeneratorOptions, LanguageGenerator,
};
use crate::value::{format_options, format_value, format_value_or_empty, quote, JsValue};

/// Generates Playwright-flavored JavaScript from recorded actions.
#[derive(Debug, Default)]
pub struct JavaScriptGenerator {
    devices: DeviceCatalog,
}

/// How a generated call fragment attaches to its subject.
enum CallFragment {
    /// A member call to append after `subject.`.
    Member(String),
    /// A self-contained fragment emitted as-is.
    Standalone(String),
}

impl JavaScriptGenerator {
    /// A generator with an empty device catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator resolving device presets from the given catalog.
    #[must_use]
    pub fn with_devices(devices: DeviceCatalog) -> Self {
        Self { devices }
    }

    fn generate_action_call(&self, kind: &ActionKind, subject: &str) -> CallFragment {
        match kind {
            ActionKind::OpenPage { .. } => {
                unreachable!("openPage is fully emitted before the call stage")
            }
            ActionKind::ClosePage => CallFragment::Member("close()".to_string()),
            ActionKind::Click {
                selector,
                button,
                modifiers,
                click_count,
            } => {
                let method = if *click_count == 2 { "dblclick" } else { "click" };
                let mut options = Vec::new();
                if *button != MouseButton::Left {
                    options.push(("button".to_string(), JsValue::str(button.as_str())));
                }
                let names = modifiers.names();
                if !names.is_empty() {
                    options.push((
                        "modifiers".to_string(),
                        JsValue::Array(names.into_iter().map(JsValue::str).collect()),
                    ));
                }
                if *click_count > 2 {
                    options.push((
                        "clickCount".to_string(),
                        JsValue::Num(f64::from(*click_count)),
                    ));
                }
                CallFragment::Member(format!(
                    "{method}({}{})",
                    quote(selector),
                    format_options(&JsValue::Object(options), true)
                ))
            }
            ActionKind::Mouse {
                button,
                button_state,
                steps,
                position,
                modifiers,
            } => {
                let mut options = Vec::new();
                if *button != MouseButton::Left {
                    options.push(("button".to_string(), JsValue::str(button.as_str())));
                }
                let names = modifiers.names();
                if !names.is_empty() {
                    options.push((
                        "modifiers".to_string(),
                        JsValue::Array(names.into_iter().map(JsValue::str).collect()),
                    ));
                }
                let steps_suffix = match steps {
                    Some(n) if *n != 1 => format!(", {{ steps: {n} }}"),
                    _ => String::new(),
                };
                let move_call = format!("mouse.move({}, {}{steps_suffix})", position.x, position.y);
                let press_call = format!(
                    "await mouse.{}({})",
                    button_state.as_str(),
                    format_options(&JsValue::Object(options), false)
                );
                CallFragment::Member(format!("{move_call}\n{press_call}"))
            }
            ActionKind::Screenshot {
                path,
                full_page,
                selector,
                clip,
            } => {
                let mut options = vec![("path".to_string(), JsValue::str(path))];
                if let Some(clip) = clip {
                    options.push((
                        "clip".to_string(),
                        JsValue::object([
                            ("x", JsValue::Num(clip.x)),
                            ("y", JsValue::Num(clip.y)),
                            ("width", JsValue::Num(clip.width)),
                            ("height", JsValue::Num(clip.height)),
                        ]),
                    ));
                }
                if *full_page {
                    options.push(("fullPage".to_string(), JsValue::Bool(true)));
                }
                let options = JsValue::Object(options);
                if let Some(selector) = selector {
                    let element = screenshot_element_name(path);
                    let binding =
                        format!("const {element} = await {subject}.$({});", quote(selector));
                    let shot = format!(
                        "await {element}.screenshot({})",
                        format_options(&options, false)
                    );
                    CallFragment::Standalone(format!("{binding}\n{shot}"))
                } else {
                    CallFragment::Member(format!(
                        "screenshot({})",
                        format_options(&options, false)
                    ))
                }
            }
            ActionKind::Check { selector } => {
                CallFragment::Member(format!("check({})", quote(selector)))
            }
            ActionKind::Uncheck { selector } => {
                CallFragment::Member(format!("uncheck({})", quote(selector)))
            }
            ActionKind::Fill { selector, text } => {
                CallFragment::Member(format!("fill({}, {})", quote(selector), quote(text)))
            }
            ActionKind::SetInputFiles { selector, files } => {
                let literal = if files.len() == 1 {
                    format_value(&JsValue::str(&files[0]))
                } else {
                    format_value(&JsValue::Array(
                        files.iter().map(JsValue::str).collect(),
                    ))
                };
                CallFragment::Member(format!("setInputFiles({}, {literal})", quote(selector)))
            }
            ActionKind::Press {
                selector,
                key,
                modifiers,
            } => {
                let shortcut = modifiers
                    .names()
                    .into_iter()
                    .chain(std::iter::once(key.as_str()))
                    .collect::<Vec<_>>()
                    .join("+");
                CallFragment::Member(format!(
                    "press({}, {})",
                    quote(selector),
                    quote(&shortcut)
                ))
            }
            ActionKind::Navigate { url } => CallFragment::Member(format!("goto({})", quote(url))),
            ActionKind::Select { selector, options } => {
                let literal = if options.len() == 1 {
                    format_value(&JsValue::str(&options[0]))
                } else {
                    format_value(&JsValue::Array(
                        options.iter().map(JsValue::str).collect(),
                    ))
                };
                CallFragment::Member(format!("selectOption({}, {literal})", quote(selector)))
            }
        }
    }

    fn format_context_options(&self, options: &JsValue, device_name: Option<&str>) -> String {
        let device = device_name.and_then(|name| self.devices.get(name).map(|d| (name, d)));
        let Some((name, device)) = device else {
            return format_value_or_empty(options);
        };
        // Fields covered by the device spread are filtered from the explicit
        // render; explicit overrides stay and are listed after the spread.
        let mut serialized = format_value_or_empty(&sanitize_device_options(device, options));
        if serialized.is_empty() {
            serialized = "{\n}".to_string();
        }
        let mut lines: Vec<String> = serialized.split('\n').map(str::to_string).collect();
        lines.insert(1, format!("...devices['{name}'],"));
        lines.join("\n")
    }
}

impl LanguageGenerator for JavaScriptGenerator {
    fn id(&self) -> &'static str {
        "javascript"
    }

    fn file_name(&self) -> &'static str {
        "<javascript>"
    }

    fn highlighter(&self) -> &'static str {
        "javascript"
    }

    fn generate_action(&self, action_in_context: &ActionInContext) -> String {
        let page_alias = &action_in_context.page_alias;
        let action = &action_in_context.action;
        debug!(title = %action.title(), page = %page_alias, "generating action block");

        let mut formatter = JsFormatter::with_offset(2);
        formatter.new_line();
        formatter.add(&format!("// {}", action.title()));

        if let ActionKind::OpenPage { url } = &action.kind {
            formatter.add(&format!("const {page_alias} = await context.newPage();"));
            if !url.is_empty() && url != "about:blank" && url != "chrome://newtab/" {
                formatter.add(&format!("{page_alias}.goto({});", quote(url)));
            }
            return formatter.format();
        }

        let subject = if action_in_context.is_main_frame {
            page_alias.clone()
        } else if let Some(name) = &action_in_context.frame_name {
            format!(
                "{page_alias}.frame({})",
                format_value(&JsValue::object([("name", JsValue::str(name))]))
            )
        } else {
            let url = action_in_context.frame_url.as_deref().unwrap_or_default();
            format!(
                "{page_alias}.frame({})",
                format_value(&JsValue::object([("url", JsValue::str(url))]))
            )
        };

        let signals = to_signal_map(action);

        if signals.dialog.is_some() {
            formatter.add(&format!(
                "{page_alias}.once('dialog', dialog => {{\n  console.log(`Dialog message: ${{dialog.message()}}`);\n  dialog.dismiss().catch(() => {{}});\n}});"
            ));
        }

        let emit_wait_group = signals.needs_wait_group();
        if emit_wait_group {
            // Either `await Promise.all([...])` or
            // `const [popup1] = await Promise.all([...])`.
            let left_hand_side = if let Some(alias) = signals.popup {
                format!("const [{alias}] = ")
            } else if signals.download {
                "const [download] = ".to_string()
            } else {
                String::new()
            };
            formatter.add(&format!("{left_hand_side}await Promise.all(["));
        }

        if signals.popup.is_some() {
            formatter.add(&format!("{page_alias}.waitForEvent('popup'),"));
        }
        if let Some(url) = signals.wait_for_navigation {
            formatter.add(&format!(
                "{page_alias}.waitForNavigation(/*{{ url: {} }}*/),",
                quote(url)
            ));
        }
        if signals.download {
            formatter.add(&format!("{page_alias}.waitForEvent('download'),"));
        }

        let prefix = if emit_wait_group || signals.combination {
            ""
        } else {
            "await "
        };
        let suffix = if signals.wait_for_navigation.is_some() || emit_wait_group {
            ""
        } else {
            ";"
        };
        match self.generate_action_call(&action.kind, &subject) {
            CallFragment::Member(fragment) if !signals.combination => {
                formatter.add(&format!("{prefix}{subject}.{fragment}{suffix}"));
            }
            // Combination branches were already arranged by the recorder and
            // standalone fragments carry their own subject.
            CallFragment::Member(fragment) | CallFragment::Standalone(fragment) => {
                formatter.add(&format!("{fragment}{suffix}"));
            }
        }

        if emit_wait_group {
            formatter.add("]);");
        } else if let Some(url) = signals.assert_navigation {
            formatter.add(&format!(
                "// assert.equal({page_alias}.url(), {});",
                quote(url)
            ));
        }
        formatter.format()
    }

    fn generate_header(&self, options: &GeneratorOptions) -> String {
        debug!(browser = %options.browser_name, device = ?options.device_name, "generating header");
        let devices_import = if options.device_name.is_some() {
            ", devices"
        } else {
            ""
        };
        let mut formatter = JsFormatter::new();
        formatter.add(&format!(
            "const {{ {browser}{devices_import} }} = require('playwright');\n\n(async () => {{\n  const browser = await {browser}.launch({launch});\n  const context = await browser.newContext({context});",
            browser = options.browser_name,
            launch = format_value_or_empty(&options.launch_options),
            context =
                self.format_context_options(&options.context_options, options.device_name.as_deref()),
        ));
        formatter.format()
    }

    fn generate_footer(&self, save_storage: Option<&str>) -> String {
        let storage_state_line = save_storage
            .map(|path| format!("\n  await context.storageState({{ path: {} }});", quote(path)))
            .unwrap_or_default();
        format!(
            "\n  // ---------------------{storage_state_line}\n  await context.close();\n  await browser.close();\n}})();"
        )
    }
}

/// Derive an element binding identifier from a screenshot path.
///
/// Slashes become underscores, the first `.png` suffix is stripped, and
/// remaining dots are removed.
fn screenshot_element_name(path: &str) -> String {
    path.replace('/', "_").replacen(".png", "", 1).replace('.', "")
}
