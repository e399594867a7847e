//! Numbered scaffold errors and process exit statuses

use thiserror::Error;

/// Exit status for a successful run (including help output)
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for unknown error codes and configuration problems
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for bad command line usage (sysexits `EX_USAGE`)
pub const EXIT_USAGE: i32 = 64;

/// Exit status when part of the plugin tree could not be created (sysexits `EX_CANTCREAT`)
pub const EXIT_CANT_CREATE: i32 = 73;

/// Errors reported to the user, each carrying a stable numeric code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// More than one positional argument was given
    #[error("Error #0: unknown arguments passed. Arguments: {}.", json_list(.args))]
    TooManyArguments { args: Vec<String> },

    /// The plugin directories could not be created
    #[error("Error #1: there was an error while creating plugin directories. Plugin name: {plugin}.")]
    Directories { plugin: String },

    /// readme.txt could not be written
    #[error("Error #2: there was an error while creating readme file. Plugin name: {plugin}.")]
    Readme { plugin: String },

    /// One or more source files could not be written
    #[error("Error #3: there was an error while creating default {extension} files. Plugin name: {plugin}.")]
    PluginFiles { plugin: String, extension: String },

    /// Any code outside the known range
    #[error("Unknown error code {code} with arguments: {detail}.")]
    Unknown { code: i32, detail: String },
}

impl ScaffoldError {
    /// Build the error for a raw numeric code
    ///
    /// Codes 1..=3 take `context` as the plugin name. Code 0 treats it as a
    /// single argument. Anything else becomes [`ScaffoldError::Unknown`].
    pub fn from_code(code: i32, context: &str) -> Self {
        match code {
            0 => Self::TooManyArguments {
                args: vec![context.to_string()],
            },
            1 => Self::Directories {
                plugin: context.to_string(),
            },
            2 => Self::Readme {
                plugin: context.to_string(),
            },
            3 => Self::PluginFiles {
                plugin: context.to_string(),
                extension: "php".to_string(),
            },
            _ => Self::Unknown {
                code,
                detail: json_list(&[context.to_string()]),
            },
        }
    }

    /// Numeric code shown in the message
    pub fn code(&self) -> i32 {
        match self {
            Self::TooManyArguments { .. } => 0,
            Self::Directories { .. } => 1,
            Self::Readme { .. } => 2,
            Self::PluginFiles { .. } => 3,
            Self::Unknown { code, .. } => *code,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TooManyArguments { .. } => EXIT_USAGE,
            Self::Directories { .. } | Self::Readme { .. } | Self::PluginFiles { .. } => {
                EXIT_CANT_CREATE
            }
            Self::Unknown { .. } => EXIT_FAILURE,
        }
    }
}

/// Encode a list of strings as a JSON array
fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| format!("{:?}", items))
}
