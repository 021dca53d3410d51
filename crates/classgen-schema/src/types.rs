use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Target
/// Closed set of output languages.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Target {
    /// Native, manual-memory OOP language.
    Cpp,
    /// Managed single-inheritance OOP language.
    CSharp,
    /// Managed single-inheritance OOP language with a distinct syntax.
    Java,
}

impl Target {
    /// Separator placed between package names in a fully-qualified path.
    #[must_use]
    pub const fn package_separator(self) -> &'static str {
        match self {
            Self::Cpp => "::",
            Self::CSharp | Self::Java => ".",
        }
    }

    #[must_use]
    pub const fn inheritance_policy(self) -> InheritancePolicy {
        match self {
            Self::Cpp => InheritancePolicy {
                max_base_classes: None,
                interfaces_may_extend_classes: true,
            },
            Self::CSharp | Self::Java => InheritancePolicy {
                max_base_classes: Some(1),
                interfaces_may_extend_classes: false,
            },
        }
    }

    // Only C# auto-implements interface-declared properties in the implementer.
    #[must_use]
    pub const fn flattens_interface_properties(self) -> bool {
        match self {
            Self::CSharp => true,
            Self::Cpp | Self::Java => false,
        }
    }

    /// Whether built-in multi-word type spellings (`unsigned int`, `std::string`) are accepted.
    #[must_use]
    pub const fn accepts_builtin_spellings(self) -> bool {
        matches!(self, Self::Cpp)
    }

    /// Whether the target needs copy machinery and destructors synthesized.
    #[must_use]
    pub const fn has_manual_memory(self) -> bool {
        matches!(self, Self::Cpp)
    }

    /// Type spelling of a synthesized array-length field.
    #[must_use]
    pub const fn length_type(self) -> &'static str {
        match self {
            Self::Cpp => "unsigned int",
            Self::CSharp => "uint",
            Self::Java => "int",
        }
    }
}

///
/// InheritancePolicy
/// Per-target legality rules for parent edges.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InheritancePolicy {
    /// Maximum number of non-interface parents; `None` means unrestricted.
    pub max_base_classes: Option<usize>,
    pub interfaces_may_extend_classes: bool,
}

///
/// AccessModifier
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    #[display("private")]
    Private,
    #[display("protected")]
    Protected,
    #[default]
    #[display("public")]
    Public,
}

///
/// DataType
///
/// A base type name plus its ownership shape: static array dimensions
/// (outermost) followed by pointer levels.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataType {
    pub name: String,

    #[serde(default)]
    pub is_const: bool,

    #[serde(default, rename = "pointerList")]
    pub pointers: Vec<Pointer>,

    #[serde(default)]
    pub array_dimensions: Vec<ArrayDimension>,
}

impl DataType {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pointer(mut self) -> Self {
        self.pointers.push(Pointer::default());
        self
    }

    #[must_use]
    pub fn with_array_pointer(mut self, length_field: impl Into<String>) -> Self {
        self.pointers.push(Pointer::array(length_field));
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, max_length: u32, length_field: impl Into<String>) -> Self {
        self.array_dimensions.push(ArrayDimension {
            max_length,
            array_length_field_name: length_field.into(),
        });
        self
    }

    /// True when the type has neither pointer levels nor static dimensions.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.pointers.is_empty() && self.array_dimensions.is_empty()
    }

    /// The shape as an ordered list of levels: dimensions first, then pointers.
    #[must_use]
    pub fn levels(&self) -> Vec<Level<'_>> {
        let dimensions = self.array_dimensions.iter().map(|dim| Level::Dimension {
            max_length: dim.max_length,
            length_field: &dim.array_length_field_name,
        });
        let pointers = self.pointers.iter().map(|ptr| {
            if ptr.is_array {
                Level::ArrayPointer {
                    is_const: ptr.is_const,
                    length_field: &ptr.array_length_field_name,
                }
            } else {
                Level::Pointer {
                    is_const: ptr.is_const,
                }
            }
        });

        dimensions.chain(pointers).collect()
    }

    /// Length-field names of every array-shaped level, in shape traversal order.
    pub fn array_length_fields(&self) -> impl Iterator<Item = &str> {
        self.array_dimensions
            .iter()
            .map(|dim| dim.array_length_field_name.as_str())
            .chain(
                self.pointers
                    .iter()
                    .filter(|ptr| ptr.is_array)
                    .map(|ptr| ptr.array_length_field_name.as_str()),
            )
    }

    /// Canonical spelling used for constructor signatures, e.g. `const int* const[4]`.
    #[must_use]
    pub fn signature_spelling(&self) -> String {
        let mut out = String::new();
        if self.is_const {
            out.push_str("const ");
        }
        out.push_str(&self.name);
        for ptr in &self.pointers {
            out.push('*');
            if ptr.is_const {
                out.push_str(" const");
            }
        }
        for dim in &self.array_dimensions {
            out.push_str(&format!("[{}]", dim.max_length));
        }

        out
    }
}

///
/// Pointer
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointer {
    #[serde(default)]
    pub is_const: bool,

    /// The pointer addresses a runtime-length array rather than one instance.
    #[serde(default)]
    pub is_array: bool,

    /// Sibling field holding the array length; meaningful only when `is_array`.
    #[serde(default)]
    pub array_length_field_name: String,
}

impl Pointer {
    #[must_use]
    pub fn array(length_field: impl Into<String>) -> Self {
        Self {
            is_const: false,
            is_array: true,
            array_length_field_name: length_field.into(),
        }
    }
}

///
/// ArrayDimension
/// Static array dimension with a compile-time capacity.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayDimension {
    pub max_length: u32,
    pub array_length_field_name: String,
}

///
/// Level
/// One step of an ownership shape, borrowed from its [`DataType`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level<'a> {
    Dimension {
        max_length: u32,
        length_field: &'a str,
    },
    Pointer {
        is_const: bool,
    },
    ArrayPointer {
        is_const: bool,
        length_field: &'a str,
    },
}

impl Level<'_> {
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer { .. } | Self::ArrayPointer { .. })
    }

    #[must_use]
    pub const fn length_field(&self) -> Option<&str> {
        match *self {
            Self::Dimension { length_field, .. } | Self::ArrayPointer { length_field, .. } => {
                Some(length_field)
            }
            Self::Pointer { .. } => None,
        }
    }
}
