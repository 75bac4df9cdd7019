//! Per-pass rendering state.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::catalog::{Column, Constraint, ServerDefault, TypeDescriptor};
use crate::config::RenderOptions;
use crate::constants::BATCH_OP_PREFIX;
use crate::dialect::{self, DialectImpl};

/// Item kinds offered to the render-item hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Column,
    ServerDefault,
    Type,
    PrimaryKey,
    ForeignKey,
    Unique,
    Check,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Column => "column",
            ItemKind::ServerDefault => "server_default",
            ItemKind::Type => "type",
            ItemKind::PrimaryKey => "primary_key",
            ItemKind::ForeignKey => "foreign_key",
            ItemKind::Unique => "unique",
            ItemKind::Check => "check",
        }
    }
}

/// The object handed to the render-item hook.
#[derive(Debug, Clone, Copy)]
pub enum RenderItem<'a> {
    Column(&'a Column),
    ServerDefault(&'a ServerDefault),
    Type(&'a TypeDescriptor),
    Constraint(&'a Constraint),
}

/// User override for individual items. Returning `None` declines and lets
/// the built-in renderer run.
pub type RenderItemHook =
    Arc<dyn Fn(ItemKind, &RenderItem<'_>, &mut RenderContext) -> Option<String> + Send + Sync>;

/// Mutable state threaded through one script rendering pass: collected
/// imports, options, the dialect implementation and the batch flag.
pub struct RenderContext {
    imports: BTreeSet<String>,
    pub opts: RenderOptions,
    pub render_item: Option<RenderItemHook>,
    pub dialect: Box<dyn DialectImpl>,
    has_batch: bool,
}

impl RenderContext {
    pub fn new(opts: RenderOptions) -> Self {
        let dialect = dialect::impl_for_name(&opts.dialect);
        Self {
            imports: BTreeSet::new(),
            opts,
            render_item: None,
            dialect,
            has_batch: false,
        }
    }

    pub fn with_dialect(mut self, dialect: Box<dyn DialectImpl>) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_render_item(mut self, hook: RenderItemHook) -> Self {
        self.render_item = Some(hook);
        self
    }

    /// Run the render-item hook, if any.
    pub fn user_defined_render(&mut self, kind: ItemKind, item: RenderItem<'_>) -> Option<String> {
        let hook = self.render_item.clone()?;
        hook(kind, &item, self)
    }

    pub fn sqlalchemy_prefix(&self) -> &str {
        self.opts.sqlalchemy_module_prefix.as_deref().unwrap_or("")
    }

    /// Prefix for operation calls; inside a batch block every call goes
    /// through the batch object.
    pub fn alembic_prefix(&self) -> &str {
        if self.has_batch {
            BATCH_OP_PREFIX
        } else {
            self.opts.alembic_module_prefix.as_deref().unwrap_or("")
        }
    }

    /// Prefix for a user type declared in `module`.
    pub fn user_prefix(&self, module: &str) -> String {
        match &self.opts.user_module_prefix {
            Some(prefix) => prefix.clone(),
            None => format!("{}.", module),
        }
    }

    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.insert(import.into());
    }

    /// Imports collected so far, sorted and deduplicated.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn has_batch(&self) -> bool {
        self.has_batch
    }

    /// Mark the context as inside a batch block until the returned guard is
    /// dropped; the previous state is restored on drop.
    pub fn within_batch(&mut self) -> BatchScope<'_> {
        let previous = self.has_batch;
        self.has_batch = true;
        BatchScope {
            ctx: self,
            previous,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("imports", &self.imports)
            .field("opts", &self.opts)
            .field("render_item", &self.render_item.as_ref().map(|_| "<hook>"))
            .field("dialect", &self.dialect.name())
            .field("has_batch", &self.has_batch)
            .finish()
    }
}

/// Guard returned by [`RenderContext::within_batch`].
pub struct BatchScope<'a> {
    ctx: &'a mut RenderContext,
    previous: bool,
}

impl Deref for BatchScope<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for BatchScope<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for BatchScope<'_> {
    fn drop(&mut self) {
        self.ctx.has_batch = self.previous;
    }
}
