pub const NOUN_LIST_SYSTEM: &str = include_str!("../data/prompts/noun_list_system.txt");
pub const NOUN_LIST_USER: &str = include_str!("../data/prompts/noun_list_user.txt");
pub const IMAGE_PROMPT: &str = include_str!("../data/prompts/image_prompt.txt");
pub const MEANING_SYSTEM: &str = include_str!("../data/prompts/meaning_system.txt");
pub const MEANING_USER: &str = include_str!("../data/prompts/meaning_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
