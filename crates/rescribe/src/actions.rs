//! Recorded interaction model.
//!
//! Actions are pure data: a closed tagged union describing one interaction
//! plus the asynchronous signals it triggered. They are constructed by an
//! external recorder and consumed read-only by the generators. The only
//! behavior living here is title rendering.

use serde::{Deserialize, Serialize};

/// Keyboard modifier bitmask (Alt=1, Control=2, Meta=4, Shift=8).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(pub u32);

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self(0);
    /// Alt key.
    pub const ALT: Self = Self(1);
    /// Control key.
    pub const CONTROL: Self = Self(2);
    /// Meta key.
    pub const META: Self = Self(4);
    /// Shift key.
    pub const SHIFT: Self = Self(8);

    /// True when no modifier bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Expand the bitmask into modifier names, in the fixed order
    /// Alt, Control, Meta, Shift.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.0 & Self::ALT.0 != 0 {
            names.push("Alt");
        }
        if self.0 & Self::CONTROL.0 != 0 {
            names.push("Control");
        }
        if self.0 & Self::META.0 != 0 {
            names.push("Meta");
        }
        if self.0 & Self::SHIFT.0 != 0 {
            names.push("Shift");
        }
        names
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Mouse button of a click or press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

impl MouseButton {
    /// Name as it appears in generated option literals.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

/// Direction of a raw mouse-button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButtonState {
    /// Button released.
    Up,
    /// Button pressed.
    Down,
}

impl MouseButtonState {
    /// Method name on the generated mouse object (`up`/`down`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A page coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate in CSS pixels.
    pub x: f64,
    /// Vertical coordinate in CSS pixels.
    pub y: f64,
}

/// A clip rectangle for region screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRegion {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

/// An asynchronous side effect attached to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Whether the effect resolves asynchronously relative to the action.
    #[serde(default, rename = "isAsync")]
    pub is_async: bool,
    /// What kind of effect was observed.
    #[serde(flatten)]
    pub kind: SignalKind,
}

impl Signal {
    /// A synchronous signal of the given kind.
    #[must_use]
    pub fn new(kind: SignalKind) -> Self {
        Self {
            is_async: false,
            kind,
        }
    }

    /// An asynchronous signal of the given kind.
    #[must_use]
    pub fn r#async(kind: SignalKind) -> Self {
        Self {
            is_async: true,
            kind,
        }
    }
}

/// Closed set of signal kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SignalKind {
    /// The action caused a navigation.
    Navigation {
        /// Destination URL.
        url: String,
    },
    /// The action opened a new page.
    Popup {
        /// Alias the recorder assigned to the popup page.
        popup_alias: String,
    },
    /// The action started a download.
    Download,
    /// The action raised a dialog.
    Dialog {
        /// Alias the recorder assigned to the dialog.
        dialog_alias: String,
    },
    /// The action is one branch of a recorder-arranged combination.
    Combination,
}

/// One recorded interaction plus the signals it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Signals observed for this action, in recording order.
    #[serde(default)]
    pub signals: Vec<Signal>,
    /// The interaction itself.
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    /// An action with no signals.
    #[must_use]
    pub fn new(kind: ActionKind) -> Self {
        Self {
            signals: Vec::new(),
            kind,
        }
    }

    /// An action carrying the given signals.
    #[must_use]
    pub fn with_signals(kind: ActionKind, signals: Vec<Signal>) -> Self {
        Self { signals, kind }
    }

    /// Short present-tense description of the interaction.
    #[must_use]
    pub fn title(&self) -> String {
        self.kind.title()
    }
}

/// Closed set of recorded interaction kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionKind {
    /// A new page was opened.
    OpenPage {
        /// Initial URL, possibly a blank-tab sentinel.
        url: String,
    },
    /// The page was closed.
    ClosePage,
    /// An element was clicked.
    Click {
        /// Target selector.
        selector: String,
        /// Button used.
        button: MouseButton,
        /// Modifier keys held.
        modifiers: Modifiers,
        /// Consecutive click count (1 = single click).
        click_count: u32,
    },
    /// A raw mouse-button transition at a position.
    Mouse {
        /// Button used.
        button: MouseButton,
        /// Press or release.
        button_state: MouseButtonState,
        /// Intermediate move steps, when recorded.
        #[serde(default)]
        steps: Option<u32>,
        /// Position of the transition.
        position: Point,
        /// Modifier keys held.
        modifiers: Modifiers,
    },
    /// A screenshot was taken.
    Screenshot {
        /// Output path.
        path: String,
        /// Capture the full scrollable page.
        #[serde(default)]
        full_page: bool,
        /// Capture a single element instead of the page.
        #[serde(default)]
        selector: Option<String>,
        /// Capture a region of the page.
        #[serde(default)]
        clip: Option<ClipRegion>,
    },
    /// A checkbox was checked.
    Check {
        /// Target selector.
        selector: String,
    },
    /// A checkbox was unchecked.
    Uncheck {
        /// Target selector.
        selector: String,
    },
    /// A text input was filled.
    Fill {
        /// Target selector.
        selector: String,
        /// Text entered.
        text: String,
    },
    /// The page navigated to a URL.
    Navigate {
        /// Destination URL.
        url: String,
    },
    /// A key was pressed on an element.
    Press {
        /// Target selector.
        selector: String,
        /// Key name.
        key: String,
        /// Modifier keys held.
        modifiers: Modifiers,
    },
    /// Options were selected in a select element.
    Select {
        /// Target selector.
        selector: String,
        /// Selected option values, in order.
        options: Vec<String>,
    },
    /// Files were attached to a file input.
    SetInputFiles {
        /// Target selector.
        selector: String,
        /// File paths, in order; empty clears the selection.
        files: Vec<String>,
    },
}

impl ActionKind {
    /// Short present-tense description of the interaction.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::OpenPage { .. } => "Open new page".to_string(),
            Self::ClosePage => "Close page".to_string(),
            Self::Check { selector } => format!("Check {selector}"),
            Self::Uncheck { selector } => format!("Uncheck {selector}"),
            Self::Click {
                selector,
                click_count,
                ..
            } => match *click_count {
                1 => format!("Click {selector}"),
                2 => format!("Double click {selector}"),
                3 => format!("Triple click {selector}"),
                // Higher counts drop the selector from the message.
                n => format!("{n}\u{d7} click"),
            },
            Self::Mouse {
                button_state,
                position,
                ..
            } => format!(
                "Mouse-{} at Position: {},{}",
                button_state.as_str(),
                position.x,
                position.y
            ),
            Self::Screenshot {
                path,
                full_page,
                clip,
                ..
            } => {
                if *full_page {
                    format!("Screenshot - fullscreen Path: {path}")
                } else if let Some(clip) = clip {
                    format!(
                        "Screenshot - Path: {path} Region:({},{},{},{})",
                        clip.x, clip.y, clip.width, clip.height
                    )
                } else {
                    format!("Screenshot - Path: {path}")
                }
            }
            Self::Fill { selector, .. } => format!("Fill {selector}"),
            Self::SetInputFiles { files, .. } => {
                if files.is_empty() {
                    "Clear selected files".to_string()
                } else {
                    format!("Upload {}", files.join(", "))
                }
            }
            Self::Navigate { url } => format!("Go to {url}"),
            Self::Press { key, modifiers, .. } => {
                if modifiers.is_empty() {
                    format!("Press {key}")
                } else {
                    format!("Press {key} with modifiers")
                }
            }
            Self::Select { options, .. } => format!("Select {}", options.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn click(selector: &str, click_count: u32) -> ActionKind {
        ActionKind::Click {
            selector: selector.to_string(),
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
            click_count,
        }
    }

    #[test]
    fn click_titles_by_count() {
        assert_eq!(click("a", 1).title(), "Click a");
        assert_eq!(click("a", 2).title(), "Double click a");
        assert_eq!(click("a", 3).title(), "Triple click a");
        // Counts above three drop the selector; preserved as recorded behavior.
        assert_eq!(click("a", 4).title(), "4\u{d7} click");
    }

    #[test]
    fn screenshot_title_priority() {
        let full = ActionKind::Screenshot {
            path: "shot.png".to_string(),
            full_page: true,
            selector: None,
            clip: Some(ClipRegion {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }),
        };
        assert_eq!(full.title(), "Screenshot - fullscreen Path: shot.png");

        let clipped = ActionKind::Screenshot {
            path: "shot.png".to_string(),
            full_page: false,
            selector: None,
            clip: Some(ClipRegion {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }),
        };
        assert_eq!(
            clipped.title(),
            "Screenshot - Path: shot.png Region:(1,2,3,4)"
        );

        let plain = ActionKind::Screenshot {
            path: "shot.png".to_string(),
            full_page: false,
            selector: None,
            clip: None,
        };
        assert_eq!(plain.title(), "Screenshot - Path: shot.png");
    }

    #[test]
    fn set_input_files_titles() {
        let clear = ActionKind::SetInputFiles {
            selector: "input".to_string(),
            files: vec![],
        };
        assert_eq!(clear.title(), "Clear selected files");

        let upload = ActionKind::SetInputFiles {
            selector: "input".to_string(),
            files: vec!["a.txt".to_string(), "b.txt".to_string()],
        };
        assert_eq!(upload.title(), "Upload a.txt, b.txt");
    }

    #[test]
    fn press_title_mentions_modifiers_only_when_set() {
        let bare = ActionKind::Press {
            selector: "input".to_string(),
            key: "Enter".to_string(),
            modifiers: Modifiers::NONE,
        };
        assert_eq!(bare.title(), "Press Enter");

        let modified = ActionKind::Press {
            selector: "input".to_string(),
            key: "Enter".to_string(),
            modifiers: Modifiers::CONTROL,
        };
        assert_eq!(modified.title(), "Press Enter with modifiers");
    }

    #[test]
    fn every_variant_has_a_nonempty_title() {
        let variants = vec![
            ActionKind::OpenPage {
                url: "https://example.com".to_string(),
            },
            ActionKind::ClosePage,
            click("a", 1),
            ActionKind::Mouse {
                button: MouseButton::Left,
                button_state: MouseButtonState::Down,
                steps: None,
                position: Point { x: 1.0, y: 2.0 },
                modifiers: Modifiers::NONE,
            },
            ActionKind::Screenshot {
                path: "shot.png".to_string(),
                full_page: false,
                selector: None,
                clip: None,
            },
            ActionKind::Check {
                selector: "a".to_string(),
            },
            ActionKind::Uncheck {
                selector: "a".to_string(),
            },
            ActionKind::Fill {
                selector: "a".to_string(),
                text: "t".to_string(),
            },
            ActionKind::Navigate {
                url: "https://example.com".to_string(),
            },
            ActionKind::Press {
                selector: "a".to_string(),
                key: "Enter".to_string(),
                modifiers: Modifiers::NONE,
            },
            ActionKind::Select {
                selector: "a".to_string(),
                options: vec!["x".to_string()],
            },
            ActionKind::SetInputFiles {
                selector: "a".to_string(),
                files: vec![],
            },
        ];
        for kind in variants {
            assert!(!kind.title().is_empty(), "empty title for {kind:?}");
        }
    }

    #[test]
    fn modifier_names_are_ordered() {
        let all = Modifiers::ALT | Modifiers::CONTROL | Modifiers::META | Modifiers::SHIFT;
        assert_eq!(all.names(), vec!["Alt", "Control", "Meta", "Shift"]);
        assert_eq!(
            (Modifiers::SHIFT | Modifiers::CONTROL).names(),
            vec!["Control", "Shift"]
        );
        assert!(Modifiers::NONE.names().is_empty());
    }

    #[test]
    fn action_round_trips_through_json() {
        let action = Action::with_signals(
            click("text=Open", 1),
            vec![Signal::r#async(SignalKind::Popup {
                popup_alias: "popup1".to_string(),
            })],
        );
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains(r#""name":"click""#));
        assert!(json.contains(r#""popupAlias":"popup1""#));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
