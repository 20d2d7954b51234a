use serde::Serialize;
use utoipa::ToSchema;

/// Fixed instruction prompt with `{placeholder}` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Prompt {
    pub name: &'static str,
    pub version: &'static str,
    pub template: &'static str,
}

impl Prompt {
    pub const fn new(name: &'static str, version: &'static str, template: &'static str) -> Self {
        Self {
            name,
            version,
            template,
        }
    }

    /// Substitutes every `{key}` occurrence with its value. Unknown
    /// placeholders are left untouched.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        vars.iter()
            .fold(self.template.to_string(), |acc, (key, value)| {
                acc.replace(&format!("{{{}}}", key), value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_occurrences() {
        let prompt = Prompt::new("t", "1", "Eat in {city}. Really, {city}!");
        assert_eq!(
            prompt.render(&[("city", "Chengdu")]),
            "Eat in Chengdu. Really, Chengdu!"
        );
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let prompt = Prompt::new("t", "1", "{city} and {region}");
        assert_eq!(prompt.render(&[("city", "Xi'an")]), "Xi'an and {region}");
    }
}
