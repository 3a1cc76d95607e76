//! User-facing text templates with `{0}`/`{1}` placeholders.

use serde::Deserialize;

/// Replace the first occurrence of `{i}` with `args[i]`, in order.
pub fn format_template(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replacen(&format!("{{{i}}}"), arg, 1)
        })
}

/// Customizable strings shown by the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Texts {
    /// Button text when nothing is selected.
    pub placeholder: String,
    pub search_placeholder: String,
    pub select_all_text: String,
    pub deselect_all_text: String,
    /// `{0}`: the search term.
    pub none_results_text: String,
    /// `{0}`: selected count, `{1}`: total.
    pub count_selected_text: String,
    /// `{0}`: the selection limit.
    pub max_options_text: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            placeholder: "Nothing selected".into(),
            search_placeholder: "Search...".into(),
            select_all_text: "Select All".into(),
            deselect_all_text: "Deselect All".into(),
            none_results_text: "No results match {0}".into(),
            count_selected_text: "{0} of {1} selected".into(),
            max_options_text: "Limit reached ({0} items max)".into(),
        }
    }
}

impl Texts {
    pub fn no_results(&self, term: &str) -> String {
        format_template(&self.none_results_text, &[term])
    }

    pub fn count_selected(&self, count: usize, total: usize) -> String {
        format_template(
            &self.count_selected_text,
            &[&count.to_string(), &total.to_string()],
        )
    }

    pub fn limit_reached(&self, max: usize) -> String {
        format_template(&self.max_options_text, &[&max.to_string()])
    }
}
