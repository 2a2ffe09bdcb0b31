//! Parameter list decomposition and rendering.
//!
//! A catalog parameter column such as `(CString, uint64_t)` is reduced to a
//! list of type tokens. Each token is paired with a synthesized argument name
//! (`arg0`, `arg1`, ...) and can be rendered back to text in several shapes:
//!
//! | options                          | `(CString, int)` renders as     |
//! |----------------------------------|---------------------------------|
//! | [`RenderOptions::interface`]     | `CString&&, int`                |
//! | [`RenderOptions::call_site`]     | `arg0.data(), arg1`             |
//! | [`RenderOptions::declaration`]   | `CString arg0, int arg1`        |
//!
//! Only the leading word of each comma-separated slot is kept, so
//! `const char*` decomposes to `const`. Slots without any word character are
//! dropped, which shifts the numbering of the arguments after them.

use once_cell::sync::Lazy;
use regex::Regex;

/// The one parameter type that is moved into interface methods and adapted
/// to a pointer at call sites.
pub const DISTINGUISHED_TYPE: &str = "CString";

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Which parts of each parameter to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit the type token.
    pub include_type: bool,
    /// Emit the synthesized `argN` name.
    pub include_name: bool,
    /// Rewrite [`DISTINGUISHED_TYPE`]: `CString&&` when the type is emitted,
    /// `argN.data()` when only the name is.
    pub rewrite_distinguished: bool,
}

impl RenderOptions {
    /// Type-only formal parameters, as used by the generated interface.
    pub const fn interface() -> Self {
        Self {
            include_type: true,
            include_name: false,
            rewrite_distinguished: true,
        }
    }

    /// Argument expressions forwarding each parameter to a C API.
    pub const fn call_site() -> Self {
        Self {
            include_type: false,
            include_name: true,
            rewrite_distinguished: true,
        }
    }

    /// Plain `Type argN` pairs.
    pub const fn declaration() -> Self {
        Self {
            include_type: true,
            include_name: true,
            rewrite_distinguished: false,
        }
    }
}

/// Ordered type tokens of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterList {
    types: Vec<String>,
}

impl ParameterList {
    /// Decomposes the raw text found between a catalog line's parentheses.
    pub fn parse(raw: &str) -> Self {
        let types = raw
            .split(',')
            .filter_map(|slot| WORD.find(slot))
            .map(|word| word.as_str().to_string())
            .collect();
        Self { types }
    }

    /// Type tokens, index-aligned with `arg0, arg1, ...`.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Renders the list as comma-separated text.
    ///
    /// Items are joined with `", "`; when both type and name are requested
    /// they are separated by one space.
    pub fn render(&self, options: RenderOptions) -> String {
        self.types
            .iter()
            .enumerate()
            .map(|(index, ty)| Self::render_one(index, ty, options))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_one(index: usize, ty: &str, options: RenderOptions) -> String {
        let distinguished = options.rewrite_distinguished && ty == DISTINGUISHED_TYPE;
        let mut out = String::new();

        if options.include_type {
            out.push_str(ty);
            if distinguished {
                out.push_str("&&");
            }
        }

        if options.include_name {
            if options.include_type {
                out.push(' ');
            }
            out.push_str(&format!("arg{index}"));
            if distinguished && !options.include_type {
                out.push_str(".data()");
            }
        }

        out
    }
}
