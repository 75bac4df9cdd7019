use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            render: match (self.render, other.render) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

impl RenderInput {
    pub fn merge_with(self, other: RenderInput) -> RenderInput {
        RenderInput {
            render_as_batch: self.render_as_batch.merge(other.render_as_batch),
            sqlalchemy_module_prefix: self
                .sqlalchemy_module_prefix
                .merge(other.sqlalchemy_module_prefix),
            alembic_module_prefix: self.alembic_module_prefix.merge(other.alembic_module_prefix),
            user_module_prefix: self.user_module_prefix.merge(other.user_module_prefix),
            strict_dispatch: self.strict_dispatch.merge(other.strict_dispatch),
            dialect: self.dialect.merge(other.dialect),
        }
    }
}
