use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoarError {
    #[error("Category '{0}' doesn't exist.")]
    CategoryNotFound(String),

    #[error("Item '{item}' doesn't exist in category '{category}'.")]
    ItemNotFound { category: String, item: String },

    #[error("An entry named '{0}' already exists.")]
    DuplicateName(String),

    #[error("Item '{0}' already exists in category. You may wish to edit it instead.")]
    DuplicateItemName(String),

    #[error("A category with the short name '{0}' already exists. Consider adding a number at the end.")]
    DuplicateShortCode(String),

    #[error("Invalid short name '{0}': {rule}", rule = SHORT_CODE_RULE)]
    InvalidShortCode(String),

    #[error("Unable to generate a short name from '{0}'. Please enter one manually.")]
    ShortCodeUnavailable(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Carries the notes of sub-field changes that were rejected along the way.
    #[error("No changes made")]
    NoChanges { skipped: Vec<String> },

    #[error("The number of times to undo must be a positive integer (got '{0}').")]
    InvalidDepth(String),

    #[error("The ancient tome called tome{0} seems to be lost somewhere. Try a smaller number.")]
    TomeNotFound(usize),

    #[error("The ancient texts in tome{depth} seem untranslatable: {reason}")]
    TomeCorrupt { depth: usize, reason: String },

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown export theme '{0}', expected 'light' or 'dark'")]
    UnknownTheme(String),

    #[error("Aborted")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub(crate) const SHORT_CODE_RULE: &str = "short names must be composed of alphanumeric characters, can not start with a number and be 2-8 characters long";

pub type Result<T> = std::result::Result<T, BoarError>;
