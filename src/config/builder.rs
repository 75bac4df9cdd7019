use crate::config::{merge::Merge, types::*};
use anyhow::{Result, anyhow};

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            render: self.resolve_render(&defaults.render)?,
        })
    }

    fn resolve_render(&self, defaults: &RenderOptions) -> Result<RenderOptions> {
        let render_input = self.config_input.render.as_ref();

        let dialect = render_input
            .and_then(|r| r.dialect.as_ref())
            .map(|d| d.trim().to_lowercase())
            .unwrap_or_else(|| defaults.dialect.clone());
        if dialect.is_empty() {
            return Err(anyhow!(
                "Dialect name cannot be empty. Use 'default' or a dialect such as 'postgresql'"
            ));
        }

        Ok(RenderOptions {
            render_as_batch: render_input
                .and_then(|r| r.render_as_batch)
                .unwrap_or(defaults.render_as_batch),
            sqlalchemy_module_prefix: render_input
                .and_then(|r| r.sqlalchemy_module_prefix.as_ref())
                .cloned()
                .or_else(|| defaults.sqlalchemy_module_prefix.clone()),
            alembic_module_prefix: render_input
                .and_then(|r| r.alembic_module_prefix.as_ref())
                .cloned()
                .or_else(|| defaults.alembic_module_prefix.clone()),
            user_module_prefix: render_input
                .and_then(|r| r.user_module_prefix.as_ref())
                .cloned()
                .or_else(|| defaults.user_module_prefix.clone()),
            strict_dispatch: render_input
                .and_then(|r| r.strict_dispatch)
                .unwrap_or(defaults.strict_dispatch),
            dialect,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
