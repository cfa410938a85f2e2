//! Built-in configuration resources compiled into the library.
//!
//! Mirrors the on-disk layout `assets/bedrockores/config/`: an index naming
//! the built-in descriptor documents, the documents themselves, and the
//! example overlay extracted into the user directory on first run.

/// Name of the index document listing built-in ore listings.
pub(crate) const INDEX_FILE: &str = "_index.json";

/// Name of the example overlay document.
pub(crate) const EXAMPLE_FILE: &str = "_example.json";

const FILES: &[(&str, &str)] = &[
    (
        INDEX_FILE,
        include_str!("../assets/bedrockores/config/_index.json"),
    ),
    (
        "vanilla.json",
        include_str!("../assets/bedrockores/config/vanilla.json"),
    ),
    (
        "nether.json",
        include_str!("../assets/bedrockores/config/nether.json"),
    ),
    (
        EXAMPLE_FILE,
        include_str!("../assets/bedrockores/config/_example.json"),
    ),
];

/// Contents of the embedded resource `name`, if it exists.
pub(crate) fn read(name: &str) -> Option<&'static str> {
    FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, contents)| *contents)
}
