use crate::types::Target;
use regex::Regex;
use std::sync::LazyLock;

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern compiles"));

/// Built-in spellings the native target accepts in addition to plain identifiers.
pub const NATIVE_BUILTIN_TYPES: &[&str] = &[
    "bool",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "double",
    "float",
    "int",
    "int16_t",
    "int32_t",
    "int64_t",
    "int8_t",
    "long",
    "long double",
    "long int",
    "long long",
    "long long int",
    "short",
    "short int",
    "signed char",
    "size_t",
    "std::string",
    "std::wstring",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "uint8_t",
    "unsigned",
    "unsigned char",
    "unsigned int",
    "unsigned long",
    "unsigned long int",
    "unsigned long long",
    "unsigned long long int",
    "unsigned short",
    "unsigned short int",
    "void",
    "wchar_t",
];

/// `[A-Za-z][A-Za-z0-9_]*`
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENT.is_match(name)
}

/// Type names must be identifiers; the native target also accepts its built-in spellings.
#[must_use]
pub fn is_type_name(name: &str, target: Target) -> bool {
    is_identifier(name)
        || (target.accepts_builtin_spellings() && NATIVE_BUILTIN_TYPES.contains(&name))
}
