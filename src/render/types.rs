//! Type descriptors to constructor-call text.

use crate::catalog::{TypeArg, TypeDescriptor, TypeKind, TypeNamespace};
use crate::constants::DIALECTS_MODULE;
use crate::render::context::{ItemKind, RenderContext, RenderItem};
use crate::render::literal::py_repr;

/// Render a type as Python source.
///
/// Resolution order: the render-item hook, then the dialect implementation,
/// then the type's namespace. Dialect types register an import for their
/// dialect module even when the dialect implementation renders them.
pub fn render_type(ctx: &mut RenderContext, type_: &TypeDescriptor) -> String {
    if let Some(rendered) = ctx.user_defined_render(ItemKind::Type, RenderItem::Type(type_)) {
        return rendered;
    }

    let impl_rendered = ctx.dialect.render_type(type_, &*ctx);

    if let TypeKind::Variant { base, mapping } = &type_.kind {
        if let Some(rendered) = impl_rendered {
            return rendered;
        }
        let mut text = render_type(ctx, base);
        for (dialect, variant) in mapping {
            let rendered = render_type(ctx, variant);
            text.push_str(&format!(
                ".with_variant({}, {})",
                rendered,
                py_repr(dialect)
            ));
        }
        return text;
    }

    match (&type_.namespace, impl_rendered) {
        (TypeNamespace::Dialect(dialect), rendered) => {
            ctx.add_import(format!("from {} import {}", DIALECTS_MODULE, dialect));
            rendered.unwrap_or_else(|| format!("{}.{}", dialect, render_call(ctx, type_)))
        }
        (_, Some(rendered)) => rendered,
        (TypeNamespace::Core, None) => {
            let call = render_call(ctx, type_);
            format!("{}{}", ctx.sqlalchemy_prefix(), call)
        }
        (TypeNamespace::User(module), None) => {
            let call = render_call(ctx, type_);
            format!("{}{}", ctx.user_prefix(module), call)
        }
    }
}

/// `Name(arg, ..., key=value, ...)` without any module prefix. Array types
/// take their item type as the first positional argument.
fn render_call(ctx: &mut RenderContext, type_: &TypeDescriptor) -> String {
    let mut args = Vec::with_capacity(type_.args.len() + type_.kwargs.len() + 1);

    if let TypeKind::Array { item_type } = &type_.kind {
        args.push(render_type(ctx, item_type));
    }
    for arg in &type_.args {
        args.push(render_type_arg(ctx, arg));
    }
    for (key, arg) in &type_.kwargs {
        let rendered = render_type_arg(ctx, arg);
        args.push(format!("{}={}", key, rendered));
    }

    format!("{}({})", type_.name, args.join(", "))
}

fn render_type_arg(ctx: &mut RenderContext, arg: &TypeArg) -> String {
    match arg {
        TypeArg::Type(nested) => render_type(ctx, nested),
        TypeArg::Literal(value) => value.to_string(),
    }
}
