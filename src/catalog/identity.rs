use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Function category declared by an entry's `type` field.
///
/// Known variants drive the fixed document sections; `Other` keeps catalogs
/// with unexpected tags loadable. Entries tagged `Other` never match a
/// rendered section.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Source,
    Sink,
    Validator,
    Generator,
    Transformer,
    Other(String),
}

/// Authoring toolchain referenced by an entry.
///
/// Catalogs point at the producer docs for the toolchain by relative path.
/// Only the three canonical paths get a labeled link in the rendered table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Toolchain {
    GoLibrary,
    TypescriptSdk,
    StarlarkRuntime,
    Other(String),
}

// Canonical toolchain path and the link label it renders with.
const TOOLCHAINS: &[(&str, &str, Toolchain)] = &[
    (
        "../../../producer/functions/golang/",
        "Go Library",
        Toolchain::GoLibrary,
    ),
    (
        "../../../producer/functions/ts/",
        "Typescript SDK",
        Toolchain::TypescriptSdk,
    ),
    (
        "../../../producer/functions/starlark/",
        "Starlark Runtime",
        Toolchain::StarlarkRuntime,
    ),
];

impl Category {
    /// Known categories in the order the catalog page lists them.
    pub const ALL: [Category; 5] = [
        Category::Source,
        Category::Sink,
        Category::Validator,
        Category::Generator,
        Category::Transformer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Source => "source",
            Category::Sink => "sink",
            Category::Validator => "validator",
            Category::Generator => "generator",
            Category::Transformer => "transformer",
            Category::Other(value) => value.as_str(),
        }
    }

    /// Section heading used on the catalog page.
    pub fn heading(&self) -> &str {
        match self {
            Category::Source => "Sources",
            Category::Sink => "Sinks",
            Category::Validator => "Validators",
            Category::Generator => "Generators",
            Category::Transformer => "Transformers",
            Category::Other(value) => value.as_str(),
        }
    }

    /// True for the five categories that have a section on the page.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    fn from_str(value: &str) -> Self {
        match value {
            "source" => Category::Source,
            "sink" => Category::Sink,
            "validator" => Category::Validator,
            "generator" => Category::Generator,
            "transformer" => Category::Transformer,
            other => Category::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_str(&value_text(&value)))
    }
}

impl Toolchain {
    /// Path the entry declared, verbatim.
    pub fn path(&self) -> &str {
        match self {
            Toolchain::Other(value) => value.as_str(),
            known => TOOLCHAINS
                .iter()
                .find(|(_, _, toolchain)| toolchain == known)
                .map(|(path, _, _)| *path)
                .unwrap_or_default(),
        }
    }

    /// Link label for recognized toolchains; `None` for anything else.
    pub fn label(&self) -> Option<&'static str> {
        TOOLCHAINS
            .iter()
            .find(|(_, _, toolchain)| toolchain == self)
            .map(|(_, label, _)| *label)
    }

    /// True when the path is one of the canonical toolchain paths.
    pub fn is_known(&self) -> bool {
        !matches!(self, Toolchain::Other(_))
    }

    fn from_str(value: &str) -> Self {
        TOOLCHAINS
            .iter()
            .find(|(path, _, _)| *path == value)
            .map(|(_, _, toolchain)| toolchain.clone())
            .unwrap_or_else(|| Toolchain::Other(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for Toolchain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_str(&value_text(&value)))
    }
}

// Non-string tags keep their JSON text so they surface as unrecognized
// instead of failing the whole catalog.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
