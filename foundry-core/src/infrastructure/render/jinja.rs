// foundry-core/src/infrastructure/render/jinja.rs
//
// Bridges "template SQL" (with {{ project_id_src }}, {{ table(...) }}) and
// the SQL that actually lands in the warehouse. Substitution values come
// from the validated deployment config.

use crate::infrastructure::error::InfrastructureError;
use minijinja::Environment;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // table('proj', 'dataset', 'name') -> `proj`.`dataset`.`name`
        // Backtick-quoted per part so the BigQuery parser always agrees.
        env.add_function(
            "table",
            |project: String, dataset: String, name: String| -> String {
                format!("`{project}`.`{dataset}`.`{name}`")
            },
        );

        env.add_filter("upper", |value: &str| Ok(value.to_uppercase()));
        env.add_filter("lower", |value: &str| Ok(value.to_lowercase()));

        Self { env }
    }

    pub fn render(
        &self,
        template_str: &str,
        context: &serde_json::Value,
    ) -> Result<String, InfrastructureError> {
        self.env
            .render_str(template_str, context)
            .map_err(InfrastructureError::TemplateError)
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

use crate::application::ports::TemplateEngine;
use crate::error::FoundryError;

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, FoundryError> {
        JinjaRenderer::render(self, template, context).map_err(FoundryError::Infrastructure)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_render_substitutions() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let result = renderer.render(
            "SELECT * FROM `{{ project_id_src }}.{{ marketing_cm360_datasets_cdc }}.clicks`",
            &json!({ "project_id_src": "src-p", "marketing_cm360_datasets_cdc": "cm_cdc" }),
        )?;
        assert_eq!(result, "SELECT * FROM `src-p.cm_cdc.clicks`");
        Ok(())
    }

    #[test]
    fn test_render_table_function() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let result = renderer.render(
            "SELECT * FROM {{ table(project_id_src, 'cm_cdc', 'clicks') }}",
            &json!({ "project_id_src": "src-p" }),
        )?;
        assert_eq!(result, "SELECT * FROM `src-p`.`cm_cdc`.`clicks`");
        Ok(())
    }

    #[test]
    fn test_render_broken_template_fails() {
        let renderer = JinjaRenderer::new();
        let result = renderer.render("SELECT {{ unclosed", &serde_json::json!({}));
        assert!(matches!(
            result,
            Err(InfrastructureError::TemplateError(_))
        ));
    }
}
