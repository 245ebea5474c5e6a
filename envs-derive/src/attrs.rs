//! Attribute parsing for `#[envs(...)]` annotations.
//!
//! Field attributes carry the annotation string; the struct attribute carries
//! options that apply to every field of the record.

use syn::{Attribute, DeriveInput, Expr, ExprLit, Field, Lit, LitStr, Meta};

const ATTR: &str = "envs";
const SKIP_MARKER: &str = "-";

/// Parsed `envs` annotation of a struct field.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// No `#[envs]` attribute
    Absent,
    /// `#[envs("-")]`
    Skip,
    /// `#[envs]` or `#[envs("")]`
    Empty,
    /// `#[envs("KEY")]` or `#[envs = "KEY"]`
    Key(String),
}

impl FieldAnnotation {
    /// Extract the `envs` annotation from a struct field.
    ///
    /// At most one `#[envs]` attribute is allowed per field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut annotation = Self::Absent;

        for attr in envs_attrs(&field.attrs) {
            if annotation != Self::Absent {
                return Err(syn::Error::new_spanned(attr, "duplicate envs attribute"));
            }
            annotation = Self::classify(raw_annotation(attr)?);
        }

        Ok(annotation)
    }

    fn classify(raw: String) -> Self {
        match raw.as_str() {
            SKIP_MARKER => Self::Skip,
            "" => Self::Empty,
            _ => Self::Key(raw),
        }
    }
}

fn envs_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTR))
}

fn raw_annotation(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        // #[envs]
        Meta::Path(_) => Ok(String::new()),
        // #[envs("KEY")]
        Meta::List(list) if list.tokens.is_empty() => Ok(String::new()),
        Meta::List(list) => list.parse_args::<LitStr>().map(|s| s.value()).map_err(|_| {
            syn::Error::new_spanned(
                &list.tokens,
                "expected a string literal, e.g. #[envs(\"KEY\")]",
            )
        }),
        // #[envs = "KEY"]
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Ok(s.value()),
            other => Err(syn::Error::new_spanned(
                other,
                "expected a string literal, e.g. #[envs = \"KEY\"]",
            )),
        },
    }
}

/// Parsed `#[envs(...)]` attributes on the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every key declared on the struct.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in envs_attrs(&input.attrs) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level envs attribute"))
            })?;
        }

        Ok(attrs)
    }
}
