//! Window descriptors.
//!
//! A [`WindowDescriptor`] is the read-only record the window-manager IPC
//! client hands us for one window: its title, class and instance.  Any of
//! the three may be missing (i3 reports containers without a title, some
//! X11 clients never set `WM_CLASS`), so every field is an `Option`.
//!
//! # Wire format
//!
//! Descriptors deserialize from either a flat object or the container shape
//! that i3/sway use in their tree dumps:
//!
//! ```json
//! {"name": "vim", "class": "URxvt", "instance": "urxvt"}
//! {"name": "vim", "window_properties": {"class": "URxvt", "instance": "urxvt"}}
//! ```
//!
//! Serialization always produces the flat shape.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Metadata describing a single window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowDescriptor {
    /// Window title.
    pub name: Option<String>,
    /// `WM_CLASS` class string (e.g. `"Firefox"`).
    #[serde(rename = "class")]
    pub window_class: Option<String>,
    /// `WM_CLASS` instance string (e.g. `"Navigator"`).
    #[serde(rename = "instance")]
    pub window_instance: Option<String>,
}

impl WindowDescriptor {
    /// An empty descriptor with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.window_class = Some(class.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.window_instance = Some(instance.into());
        self
    }

    /// Title as a `&str`, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Class as a `&str`, if present.
    pub fn class(&self) -> Option<&str> {
        self.window_class.as_deref()
    }

    /// Instance as a `&str`, if present.
    pub fn instance(&self) -> Option<&str> {
        self.window_instance.as_deref()
    }

    /// Whether the class equals any of `candidates` (case-sensitive).
    ///
    /// An absent class never matches.
    pub fn class_is_one_of(&self, candidates: &[&str]) -> bool {
        self.class().is_some_and(|c| candidates.contains(&c))
    }
}

impl fmt::Display for WindowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or("");
        match self.class() {
            Some(class) => write!(f, "{:?} ({})", name, class),
            None => write!(f, "{:?}", name),
        }
    }
}

//  Wire format

/// `window_properties` sub-object of an i3/sway container.
#[derive(Deserialize, Default)]
struct WindowPropertiesJson {
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    instance: Option<String>,
}

/// Union of the flat and container shapes.
#[derive(Deserialize)]
struct WindowJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    instance: Option<String>,
    #[serde(default)]
    window_properties: Option<WindowPropertiesJson>,
}

impl<'de> Deserialize<'de> for WindowDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = WindowJson::deserialize(deserializer)?;
        let props = raw.window_properties.unwrap_or_default();
        Ok(WindowDescriptor {
            name: raw.name,
            window_class: raw.class.or(props.class),
            window_instance: raw.instance.or(props.instance),
        })
    }
}
