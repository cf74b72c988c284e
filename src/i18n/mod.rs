mod language;
mod strings;

pub use language::{Language, SUPPORTED_LANGUAGES, print_languages};
pub use strings::{APOLOGY_MESSAGE, QuickActionKind, UiStrings, WELCOME_MESSAGE, strings};
