use crate::{
    render::{RenderError, TemplateGroup},
    synth::Fragment,
    templates::memory,
};

///
/// MemoryIdioms
///
/// Renders fragment trees through the memory-management skeleton. Loop
/// bodies are rendered first and passed in as `LoopContents`, indented one
/// level.
///

#[derive(Debug)]
pub struct MemoryIdioms {
    group: TemplateGroup,
}

impl MemoryIdioms {
    pub fn new(skeleton: &str) -> Result<Self, RenderError> {
        let group = TemplateGroup::new(memory::GROUP, skeleton, memory::INSTANCES)?;

        Ok(Self { group })
    }

    pub fn render(&self, fragments: &[Fragment]) -> Result<String, RenderError> {
        let mut out = String::new();
        for fragment in fragments {
            out.push_str(&self.render_one(fragment)?);
        }

        Ok(out)
    }

    fn render_one(&self, fragment: &Fragment) -> Result<String, RenderError> {
        let text = match fragment {
            Fragment::Assign { target, source } => format!("{target} = {source};"),
            Fragment::Allocate { pointer, data_type } => self
                .group
                .instance(memory::POINTER_ALLOCATE)?
                .bind("PointerName", pointer)?
                .bind("DataType", data_type)?
                .bind("IsArray", &false)?
                .render()?,
            Fragment::AllocateThenIterate {
                pointer,
                data_type,
                index,
                length,
                body,
            } => self
                .group
                .instance(memory::ALLOCATE_THEN_ITERATE)?
                .bind("PointerName", pointer)?
                .bind("DataType", data_type)?
                .bind("IndexName", index)?
                .bind("LengthVariableName", length)?
                .bind("LoopContents", &indent(&self.render(body)?))?
                .render()?,
            Fragment::IterateArray {
                index,
                length,
                body,
            } => self
                .group
                .instance(memory::ITERATE_ARRAY)?
                .bind("IndexName", index)?
                .bind("LengthVariableName", length)?
                .bind("LoopContents", &indent(&self.render(body)?))?
                .render()?,
            Fragment::IterateThenDelete {
                pointer,
                index,
                length,
                body,
            } => self
                .group
                .instance(memory::ITERATE_THEN_DELETE)?
                .bind("PointerName", pointer)?
                .bind("IndexName", index)?
                .bind("LengthVariableName", length)?
                .bind("LoopContents", &indent(&self.render(body)?))?
                .render()?,
            Fragment::Delete { pointer, is_array } => self
                .group
                .instance(memory::POINTER_DELETE)?
                .bind("PointerName", pointer)?
                .bind("IsArray", is_array)?
                .render()?,
        };

        Ok(terminated(text))
    }
}

// Loop bodies sit one level deeper; the skeleton places them between braces.
fn indent(body: &str) -> String {
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Every rendered fragment ends with exactly one newline so fragments concatenate.
fn terminated(text: String) -> String {
    let trimmed = text.trim_end_matches('\n');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}
