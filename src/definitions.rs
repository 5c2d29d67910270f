//! Built-in app definitions.
//!
//! Each definition pairs an app name (the key users put under `glyphs` in
//! their config) with a predicate over the window.  To add an application,
//! add another `register` call to [`register_builtins`], or build your own
//! registry with [`RegistryBuilder`] and call it first.
//!
//! All predicates treat a missing class, instance or title as "does not
//! match".

use crate::registry::{DuplicateAppNameError, RegistryBuilder, RuleRegistry};
use crate::window::WindowDescriptor;
use regex::Regex;
use std::sync::OnceLock;

/// Priority of the YouTube rule, which specialises `browser`.
pub const YOUTUBE_PRIORITY: i32 = 5;

/// Titles of YouTube tabs, optionally prefixed with a notification count
/// such as `(3) `.
const YOUTUBE_TITLE: &str = r"^(\(\d+\)\s*)?YouTube|- YouTube";

const BROWSERS: &[&str] = &["Firefox", "Google-chrome", "qutebrowser"];

/// Error building the built-in definitions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DefinitionError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateAppNameError),
    #[error("invalid title pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn class_eq(expected: &'static str) -> impl Fn(&WindowDescriptor) -> bool + Send + Sync {
    move |w| w.class() == Some(expected)
}

fn class_in(candidates: &'static [&'static str]) -> impl Fn(&WindowDescriptor) -> bool + Send + Sync {
    move |w| w.class_is_one_of(candidates)
}

fn is_browser(w: &WindowDescriptor) -> bool {
    w.class_is_one_of(BROWSERS)
}

fn is_android_studio(w: &WindowDescriptor) -> bool {
    w.class() == Some("jetbrains-studio")
        && w.instance() == Some("sun-awt-X11-XFramePeer")
        && w
            .name()
            .and_then(|n| n.rsplit(" - ").next())
            .is_some_and(|project| project.contains("Android Studio"))
}

/// Add every built-in definition to `builder`, in evaluation order for
/// equal priorities.
pub fn register_builtins(builder: &mut RegistryBuilder) -> Result<(), DefinitionError> {
    let youtube_title = Regex::new(YOUTUBE_TITLE)?;

    builder
        .register("download_manager", 0, class_eq("Uget-gtk"))?
        .register("browser", 0, is_browser)?
        .register("youtube", YOUTUBE_PRIORITY, move |w| {
            is_browser(w) && w.name().is_some_and(|n| youtube_title.is_match(n))
        })?
        .register("tor", 0, class_eq("Tor Browser"))?
        .register(
            "pdf_reader",
            0,
            class_in(&["Okular", "Zathura", "Foxit Reader", "MuPDF"]),
        )?
        .register(
            "virtual_machine",
            0,
            class_in(&["Vmplayer", "VirtualBox", "VirtualBox Manager", "VirtualBox Machine"]),
        )?
        .register("media_player", 0, |w| {
            w.class()
                .is_some_and(|c| matches!(c.to_lowercase().as_str(), "vlc" | "mplayer"))
        })?
        .register("wireshark", 0, class_eq("Wireshark"))?
        .register(
            "terminal",
            0,
            class_in(&["Gnome-terminal", "URxvt", "XTerm", "st-256color"]),
        )?
        .register("file_browser", 0, class_eq("Nautilus"))?
        .register("image_viewer", 0, class_in(&["Pinta", "Pqiv", "feh", "Eog"]))?
        .register("fontforge", 0, class_eq("fontforge"))?
        .register("office", 0, |w| {
            w.class().is_some_and(|c| c.starts_with("libreoffice"))
        })?
        .register("gvim", 0, class_eq("Gvim"))?
        .register("editor", 0, class_eq("Gedit"))?
        .register("android_studio", 0, is_android_studio)?
        .register("skype", 0, class_eq("Skype"))?
        .register("ida", 0, class_eq("IDA"))?
        .register("steam", 0, class_eq("Steam"))?
        .register("burp_suite", 0, |w| {
            w.name().is_some_and(|n| n.starts_with("Burp Suite"))
        })?
        .register("gephi", 0, |w| w.class().is_some_and(|c| c.contains("Gephi")))?
        .register("zeal", 0, class_eq("Zeal"))?
        .register("gitk", 0, class_eq("Gitk"))?
        .register("bless", 0, class_eq("Bless"))?
        .register("discord", 0, class_eq("discord"))?
        .register("todoist", 0, class_eq("todoist"))?
        .register("inkscape", 0, class_eq("Inkscape"))?;
    Ok(())
}

/// Build a fresh registry holding only the built-in definitions.
pub fn builtin_registry() -> Result<RuleRegistry, DefinitionError> {
    let mut builder = RegistryBuilder::new();
    register_builtins(&mut builder)?;
    Ok(builder.build())
}

static DEFAULT: OnceLock<Result<RuleRegistry, DefinitionError>> = OnceLock::new();

/// Process-wide built-in registry, built on first use and shared read-only
/// afterwards.
pub fn default_registry() -> Result<&'static RuleRegistry, DefinitionError> {
    DEFAULT
        .get_or_init(builtin_registry)
        .as_ref()
        .map_err(|e| e.clone())
}
