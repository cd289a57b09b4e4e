/// Parameter kinds known to the tool; a plain registration table rather than
/// a runtime plugin contract. Real kinds could be config-driven.
pub trait ParamKind: Send + Sync {
    /// Aliases accepted in a parameter file's `type` field
    fn symbols(&self) -> &[&'static str];
    /// Name shown when listing parameters
    fn display_name(&self) -> &str;
    /// Path of the help document describing the kind
    fn help_file(&self) -> &str;
}

/// The single built-in kind: a string parameter with optional trimming
pub struct StringKind;

impl ParamKind for StringKind {
    fn symbols(&self) -> &[&'static str] {
        &["string", "stringParam"]
    }

    fn display_name(&self) -> &str {
        "String Parameter"
    }

    fn help_file(&self) -> &str {
        "help/parameter/string.html"
    }
}

/// Registration table consulted by parameter-file validation
pub fn registry() -> Vec<Box<dyn ParamKind>> {
    vec![Box::new(StringKind)]
}

/// Find the kind registered under `symbol`, if any
pub fn lookup(symbol: &str) -> Option<Box<dyn ParamKind>> {
    registry().into_iter().find(|k| k.symbols().iter().any(|s| *s == symbol))
}
