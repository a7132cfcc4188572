//! Packaging of the configuration as the frontend `config.js` artifact.
//!
//! The browser side never probes for a module system at runtime: the deploy
//! pipeline picks a [`Target`] and gets a file that only knows that one way
//! of exposing the value.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::error::{ConfigError, Result};

pub const DEFAULT_GLOBAL_NAME: &str = "CONFIG";

const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_QUALITY: u32 = 9;
const BROTLI_WINDOW: u32 = 22;

const HEADER: &str = "// Chat widget frontend configuration. Generated by widget-config, do not edit.\n";

const DEEP_FREEZE: &str = "\
const deepFreeze = (value) => {
    Object.values(value).forEach((field) => {
        if (typeof field === 'object' && field !== null) {
            deepFreeze(field);
        }
    });
    return Object.freeze(value);
};
";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"));

/// How the rendered artifact exposes the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// CommonJS, `module.exports`
    Module,
    /// Plain `<script>`, a read-only property of `globalThis`
    Global,
    Json,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Module, Target::Global, Target::Json];

    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Module => "module",
            Target::Global => "global",
            Target::Json => "json",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Target::Module | Target::Global => "config.js",
            Target::Json => "config.json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "module" | "commonjs" | "cjs" => Ok(Target::Module),
            "global" | "script" => Ok(Target::Global),
            "json" => Ok(Target::Json),
            _ => Err(ConfigError::UnknownTarget(s.to_string())),
        }
    }
}

pub fn is_valid_global_name(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Renders `config` for `target`. `global_name` is only used by
/// [`Target::Global`] and must be a JavaScript identifier.
///
/// Every target embeds the same JSON payload, so module and script consumers
/// read structurally identical data.
pub fn render(config: &Config, target: Target, global_name: &str) -> Result<String> {
    let payload = config.to_json()?;

    let rendered = match target {
        Target::Json => format!("{payload}\n"),
        Target::Module => {
            format!("{HEADER}'use strict';\n\n{DEEP_FREEZE}\nmodule.exports = deepFreeze({payload});\n")
        }
        Target::Global => {
            if !is_valid_global_name(global_name) {
                return Err(ConfigError::InvalidGlobalName(global_name.to_string()));
            }
            format!(
                "{HEADER}(function (root) {{\n'use strict';\n\n{DEEP_FREEZE}\n\
                 Object.defineProperty(root, '{global_name}', {{\n    value: deepFreeze({payload}),\n    enumerable: true,\n}});\n\
                 }})(globalThis);\n"
            )
        }
    };

    Ok(rendered)
}

/// Brotli-compresses a rendered artifact for serving as `config.js.br`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    {
        let mut compressor = brotli::CompressorWriter::new(
            &mut compressed,
            BROTLI_BUFFER_SIZE,
            BROTLI_QUALITY,
            BROTLI_WINDOW,
        );
        compressor.write_all(data)?;
        compressor.flush()?;
    }

    Ok(compressed)
}
