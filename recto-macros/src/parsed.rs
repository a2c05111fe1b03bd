use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{Attribute, Data, DeriveInput, Error, Expr, Fields, Ident, LitStr, Result, Token, Type};

pub(crate) struct ParsedRecord {
    name: Ident,
    sources: Vec<SourceSpec>,
    fields: Vec<ParsedField>,
}

struct ParsedField {
    name: String,
    ty: Type,
    type_name: String,
    default: Option<DefaultSpec>,
    sources: Vec<SourceSpec>,
}

enum DefaultSpec {
    /// `#[record(default)]`: the field type's `Default` value.
    TypeDefault,
    /// `#[record(default = <expr>)]`.
    Expr(Expr),
}

struct SourceSpec {
    kind: &'static str,
    rename: Option<String>,
}

impl ParsedRecord {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut sources = Vec::new();
        for attr in &input.attrs {
            if attr.path().is_ident("record") {
                Self::parse_container_attr(attr, &mut sources)?;
            }
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        parsed.push(ParsedField::from_field(field)?);
                    }
                    parsed
                }
                _ => return Err(Error::new(input.ident.span(), "RectoRecord requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "RectoRecord can only be derived for structs")),
        };

        Ok(Self {
            name: input.ident.clone(),
            sources,
            fields,
        })
    }

    fn parse_container_attr(attr: &Attribute, sources: &mut Vec<SourceSpec>) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                return Err(meta.error("default applies to fields, not to the struct"));
            }
            match source_kind(&meta.path) {
                Some(kind) => {
                    let rename = parse_rename(&meta)?;
                    sources.push(SourceSpec { kind, rename });
                    Ok(())
                }
                None => Err(meta.error("unknown record attribute; expected from_query, from_body, from_route, or from_input")),
            }
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let name_lit = LitStr::new(&name.to_string(), Span::call_site());
        let class_sources: Vec<_> = self.sources.iter().map(SourceSpec::to_tokens).collect();
        let param_inits: Vec<_> = self.fields.iter().map(ParsedField::to_descriptor_tokens).collect();

        quote! {
            impl ::recto::types::RecordMetadata for #name {
                fn record_descriptor() -> ::recto::types::RecordDescriptor {
                    ::recto::types::RecordDescriptor {
                        name: #name_lit.to_string(),
                        sources: vec![#(#class_sources),*],
                        params: vec![#(#param_inits),*],
                    }
                }

                fn ensure_registered() {
                    static REGISTERED: ::std::sync::Once = ::std::sync::Once::new();
                    REGISTERED.call_once(|| {
                        ::recto::registry::register_descriptor(
                            &<#name as ::recto::types::RecordMetadata>::record_descriptor(),
                        );
                    });
                }
            }

            impl ::recto::record::Record for #name {}

            impl ::recto::resolvers::object::FieldAccess for #name {
                fn read_field(&self, name: &str) -> ::std::option::Option<::recto::serde_json::Value> {
                    match ::recto::serde_json::to_value(self) {
                        ::std::result::Result::Ok(::recto::serde_json::Value::Object(mut map)) => map.remove(name),
                        _ => ::std::option::Option::None,
                    }
                }
            }

            ::recto::inventory::submit! {
                ::recto::registry::RecordRegistration::new(
                    <#name as ::recto::types::RecordMetadata>::record_descriptor,
                )
            }
        }
    }
}

impl ParsedField {
    fn from_field(field: &syn::Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .expect("named fields only, checked by the caller");
        let mut default = None;
        let mut sources = Vec::new();

        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                Self::parse_field_attr(attr, &mut default, &mut sources)?;
            }
        }

        Ok(Self {
            name: ident.to_string(),
            ty: field.ty.clone(),
            type_name: field.ty.to_token_stream().to_string().replace(' ', ""),
            default,
            sources,
        })
    }

    fn parse_field_attr(
        attr: &Attribute,
        default: &mut Option<DefaultSpec>,
        sources: &mut Vec<SourceSpec>,
    ) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                if default.is_some() {
                    return Err(meta.error("duplicate default"));
                }
                *default = Some(if meta.input.peek(Token![=]) {
                    DefaultSpec::Expr(meta.value()?.parse()?)
                } else {
                    DefaultSpec::TypeDefault
                });
                return Ok(());
            }
            match source_kind(&meta.path) {
                Some(kind) => {
                    let rename = parse_rename(&meta)?;
                    sources.push(SourceSpec { kind, rename });
                    Ok(())
                }
                None => Err(meta.error(
                    "unknown record attribute; expected from_query, from_body, from_route, from_input, or default",
                )),
            }
        })
    }

    fn to_descriptor_tokens(&self) -> TokenStream2 {
        let name_lit = LitStr::new(&self.name, Span::call_site());
        let type_lit = LitStr::new(&self.type_name, Span::call_site());
        let sources: Vec<_> = self.sources.iter().map(SourceSpec::to_tokens).collect();

        let default = match &self.default {
            None => quote! { ::std::option::Option::None },
            Some(DefaultSpec::TypeDefault) => {
                let ty = &self.ty;
                quote! { ::recto::serde_json::to_value(<#ty as ::std::default::Default>::default()).ok() }
            }
            Some(DefaultSpec::Expr(expr)) => {
                quote! { ::recto::serde_json::to_value(#expr).ok() }
            }
        };

        quote! {
            ::recto::types::ParamDescriptor {
                name: #name_lit.to_string(),
                type_name: #type_lit.to_string(),
                default: #default,
                sources: vec![#(#sources),*],
            }
        }
    }
}

impl SourceSpec {
    fn to_tokens(&self) -> TokenStream2 {
        let kind = Ident::new(self.kind, Span::call_site());
        let rename = match &self.rename {
            Some(rename) => {
                let lit = LitStr::new(rename, Span::call_site());
                quote! { ::std::option::Option::Some(#lit.to_string()) }
            }
            None => quote! { ::std::option::Option::None },
        };

        quote! {
            ::recto::types::SourceTag {
                kind: ::recto::types::SourceKind::#kind,
                rename: #rename,
            }
        }
    }
}

fn source_kind(path: &syn::Path) -> Option<&'static str> {
    if path.is_ident("from_query") {
        Some("Query")
    } else if path.is_ident("from_body") {
        Some("Body")
    } else if path.is_ident("from_route") {
        Some("Route")
    } else if path.is_ident("from_input") {
        Some("Input")
    } else {
        None
    }
}

fn parse_rename(meta: &syn::meta::ParseNestedMeta) -> Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let lit: LitStr = meta.value()?.parse()?;
        Ok(Some(lit.value()))
    } else {
        Ok(None)
    }
}
