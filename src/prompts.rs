pub const SKILL_ANALYSIS: &str = include_str!("../data/prompts/skill_analysis.txt");
pub const JOB_DESCRIPTION: &str = include_str!("../data/job_description.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
