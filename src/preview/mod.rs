//! Live draft of the prompt being assembled.

use crate::wizard::FormData;

pub const INSTRUCTIONS_PENDING: &str = "[Will be generated in the final step]";

const TASK_EXCERPT: usize = 150;
const STRUCTURE_EXCERPT: usize = 100;

fn section(out: &mut String, tag: &str, body: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
    out.push_str(body);
    out.push_str("\n</");
    out.push_str(tag);
    out.push('>');
}

/// Draft text for `form`. Once instructions exist they are returned as-is;
/// before that, only the non-empty sections are rendered followed by the
/// pending instructions placeholder.
pub fn assemble(form: &FormData) -> String {
    if !form.instructions.is_empty() {
        return form.instructions.clone();
    }

    let mut out = String::new();
    if !form.task.is_empty() {
        section(&mut out, "Task", &form.task);
        out.push_str("\n\n");
    }
    if !form.inputs.is_empty() {
        let placeholders = form
            .inputs
            .iter()
            .map(|i| placeholder(i))
            .collect::<Vec<_>>()
            .join("\n");
        section(&mut out, "Inputs", &placeholders);
        out.push_str("\n\n");
    }
    if !form.structure.is_empty() {
        section(&mut out, "Instructions Structure", &form.structure);
        out.push_str("\n\n");
    }
    section(&mut out, "Instructions", INSTRUCTIONS_PENDING);
    out
}

/// `{$TOKEN}` form used wherever an input variable is shown.
pub fn placeholder(token: &str) -> String {
    format!("{{${token}}}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewStatus {
    Ready,
    Complete { chars: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    pub task: Option<String>,
    pub inputs: Vec<String>,
    pub structure: Option<String>,
    pub status: PreviewStatus,
}

pub fn summarize(form: &FormData, generated: &str) -> PreviewSummary {
    let final_prompt = if generated.is_empty() { form.instructions.as_str() } else { generated };
    PreviewSummary {
        task: Some(excerpt(&form.task, TASK_EXCERPT)).filter(|s| !s.is_empty()),
        inputs: form.inputs.iter().map(|i| placeholder(i)).collect(),
        structure: Some(excerpt(&form.structure, STRUCTURE_EXCERPT)).filter(|s| !s.is_empty()),
        status: if final_prompt.is_empty() {
            PreviewStatus::Ready
        } else {
            PreviewStatus::Complete { chars: final_prompt.chars().count() }
        },
    }
}

fn excerpt(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING: &str = "<Instructions>\n[Will be generated in the final step]\n</Instructions>";

    fn form(task: &str, inputs: &[&str], structure: &str) -> FormData {
        FormData {
            task: task.into(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            structure: structure.into(),
            instructions: String::new(),
        }
    }

    #[test]
    fn empty_form_renders_only_the_pending_section() {
        assert_eq!(assemble(&FormData::default()), PENDING);
    }

    #[test]
    fn task_only() {
        let out = assemble(&form("Act as a math tutor who guides students", &[], ""));
        assert_eq!(
            out,
            format!("<Task>\nAct as a math tutor who guides students\n</Task>\n\n{PENDING}")
        );
    }

    #[test]
    fn inputs_sit_between_task_and_pending_in_order() {
        let out = assemble(&form("Summarize", &["A", "B"], ""));
        assert_eq!(
            out,
            format!("<Task>\nSummarize\n</Task>\n\n<Inputs>\n{{$A}}\n{{$B}}\n</Inputs>\n\n{PENDING}")
        );
    }

    #[test]
    fn all_sections_in_fixed_order() {
        let out = assemble(&form("T", &["X"], "1. Role"));
        let task = out.find("<Task>").unwrap();
        let inputs = out.find("<Inputs>").unwrap();
        let structure = out.find("<Instructions Structure>").unwrap();
        let pending = out.rfind("<Instructions>").unwrap();
        assert!(task < inputs && inputs < structure && structure < pending);
    }

    #[test]
    fn omitted_sections_leave_no_trace() {
        let out = assemble(&form("", &[], "1. Role"));
        assert!(!out.contains("<Task>"));
        assert!(!out.contains("<Inputs>"));
        assert!(out.starts_with("<Instructions Structure>\n1. Role\n</Instructions Structure>\n\n"));
    }

    #[test]
    fn instructions_win_verbatim() {
        let mut f = form("T", &["X"], "S");
        f.instructions = "final text".into();
        assert_eq!(assemble(&f), "final text");
        assert_eq!(assemble(&f), assemble(&f));
    }

    #[test]
    fn summary_truncates_and_reports_status() {
        let long_task = "t".repeat(200);
        let f = form(&long_task, &["DOC"], "");
        let s = summarize(&f, "");
        assert_eq!(s.task.as_deref().map(str::len), Some(153));
        assert_eq!(s.inputs, vec!["{$DOC}".to_string()]);
        assert_eq!(s.structure, None);
        assert_eq!(s.status, PreviewStatus::Ready);

        let s = summarize(&f, "héllo");
        assert_eq!(s.status, PreviewStatus::Complete { chars: 5 });
    }
}
