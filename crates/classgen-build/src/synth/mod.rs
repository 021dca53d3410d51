//! Ownership synthesis for the manual-memory target.
//!
//! Copy and release are structural recursions over a field's shape levels.
//! Both build a [`Fragment`] tree first; [`MemoryIdioms`] turns the tree
//! into text through the memory template group.

mod idioms;
mod plan;

pub use idioms::MemoryIdioms;
pub use plan::{CopyPlan, release_plan};

use classgen_schema::types::{DataType, Level};

///
/// Fragment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fragment {
    /// Base-case value copy.
    Assign { target: String, source: String },

    /// One instance of `data_type` for a single owned pointer.
    Allocate { pointer: String, data_type: String },

    /// Array of `data_type` sized by `length`, then a loop over its elements.
    AllocateThenIterate {
        pointer: String,
        data_type: String,
        index: String,
        length: String,
        body: Vec<Self>,
    },

    /// Loop over a static dimension.
    IterateArray {
        index: String,
        length: String,
        body: Vec<Self>,
    },

    /// Loop releasing the elements, then release of the array itself.
    IterateThenDelete {
        pointer: String,
        index: String,
        length: String,
        body: Vec<Self>,
    },

    Delete { pointer: String, is_array: bool },
}

impl Fragment {
    /// Pointers in the order they are allocated (pre-order).
    #[must_use]
    pub fn allocations(fragments: &[Self]) -> Vec<&str> {
        let mut out = Vec::new();
        for fragment in fragments {
            match fragment {
                Self::Allocate { pointer, .. } => out.push(pointer.as_str()),
                Self::AllocateThenIterate { pointer, body, .. } => {
                    out.push(pointer.as_str());
                    out.extend(Self::allocations(body));
                }
                Self::IterateArray { body, .. } => out.extend(Self::allocations(body)),
                Self::Assign { .. } | Self::IterateThenDelete { .. } | Self::Delete { .. } => {}
            }
        }

        out
    }

    /// Pointers in the order they are released (post-order).
    #[must_use]
    pub fn releases(fragments: &[Self]) -> Vec<&str> {
        let mut out = Vec::new();
        for fragment in fragments {
            match fragment {
                Self::Delete { pointer, .. } => out.push(pointer.as_str()),
                Self::IterateThenDelete { pointer, body, .. } => {
                    out.extend(Self::releases(body));
                    out.push(pointer.as_str());
                }
                Self::IterateArray { body, .. } => out.extend(Self::releases(body)),
                Self::Assign { .. } | Self::Allocate { .. } | Self::AllocateThenIterate { .. } => {}
            }
        }

        out
    }
}

/// Deep copy of `source` into `target` for a value of type `ty`.
#[must_use]
pub fn copy_fragments(target: &str, source: &str, ty: &DataType) -> Vec<Fragment> {
    copy_levels(target, source, &ty.name, &ty.levels())
}

/// Release of everything `target` owns; empty for shapes without pointers.
#[must_use]
pub fn release_fragments(target: &str, ty: &DataType) -> Vec<Fragment> {
    release_levels(target, &ty.levels())
}

fn copy_levels(target: &str, source: &str, base: &str, levels: &[Level]) -> Vec<Fragment> {
    let Some((level, rest)) = levels.split_first() else {
        return vec![Fragment::Assign {
            target: target.to_string(),
            source: source.to_string(),
        }];
    };

    match *level {
        Level::Dimension { length_field, .. } => {
            let index = index_name(length_field);
            vec![Fragment::IterateArray {
                body: copy_levels(
                    &format!("{target}[{index}]"),
                    &format!("{source}[{index}]"),
                    base,
                    rest,
                ),
                length: length_field.to_string(),
                index,
            }]
        }
        Level::ArrayPointer { length_field, .. } => {
            let index = index_name(length_field);
            vec![Fragment::AllocateThenIterate {
                pointer: target.to_string(),
                data_type: pointer_type(base, rest.len()),
                body: copy_levels(
                    &format!("{target}[{index}]"),
                    &format!("{source}[{index}]"),
                    base,
                    rest,
                ),
                length: length_field.to_string(),
                index,
            }]
        }
        Level::Pointer { .. } => {
            let mut out = vec![Fragment::Allocate {
                pointer: target.to_string(),
                data_type: pointer_type(base, rest.len()),
            }];
            out.extend(copy_levels(
                &format!("(*{target})"),
                &format!("(*{source})"),
                base,
                rest,
            ));

            out
        }
    }
}

fn release_levels(target: &str, levels: &[Level]) -> Vec<Fragment> {
    let Some((level, rest)) = levels.split_first() else {
        return Vec::new();
    };

    match *level {
        Level::Dimension { length_field, .. } => {
            let index = index_name(length_field);
            let body = release_levels(&format!("{target}[{index}]"), rest);
            if body.is_empty() {
                return Vec::new();
            }

            vec![Fragment::IterateArray {
                index,
                length: length_field.to_string(),
                body,
            }]
        }
        Level::ArrayPointer { .. } if rest.is_empty() => vec![Fragment::Delete {
            pointer: target.to_string(),
            is_array: true,
        }],
        Level::ArrayPointer { length_field, .. } => {
            let index = index_name(length_field);
            vec![Fragment::IterateThenDelete {
                pointer: target.to_string(),
                body: release_levels(&format!("{target}[{index}]"), rest),
                length: length_field.to_string(),
                index,
            }]
        }
        Level::Pointer { .. } => {
            let mut out = release_levels(&format!("(*{target})"), rest);
            out.push(Fragment::Delete {
                pointer: target.to_string(),
                is_array: false,
            });

            out
        }
    }
}

fn index_name(length_field: &str) -> String {
    format!("{length_field}Idx")
}

// `base` followed by one `*` per pointer level still below this one.
fn pointer_type(base: &str, remaining: usize) -> String {
    format!("{base}{}", "*".repeat(remaining))
}
