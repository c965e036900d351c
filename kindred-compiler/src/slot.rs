//! `#[derive(Slot)]`: exposing a whole unit to the field accessors, and optionally its successor
//! in a linear chain.

use {
    proc_macro2::{Span, TokenStream},
    quote::{quote, ToTokens},
    syn::{
        spanned::Spanned as _, Attribute, Data, DeriveInput, Fields, Generics, Ident, Index,
        Member, Meta, NestedMeta, Type,
    },
};

use crate::{path::kindred_crate, CompileError};

/// A type deriving `Slot`.
#[derive(Debug, Clone)]
pub struct SlotDef {
    pub ident: Ident,
    pub generics: Generics,
    /// The field marked `#[slot(next)]`, if any.
    pub next: Option<(Member, Type)>,
    span: Span,
}

fn is_next_marker(attr: &Attribute) -> Result<bool, syn::Error> {
    if !attr.path.is_ident("slot") {
        return Ok(false);
    }
    match attr.parse_meta()? {
        Meta::List(list) if list.nested.len() == 1 => match list.nested.first() {
            Some(NestedMeta::Meta(Meta::Path(path))) if path.is_ident("next") => Ok(true),
            _ => Err(CompileError::MalformedSlotAttribute.at(list.nested.span())),
        },
        other => Err(CompileError::MalformedSlotAttribute.at(other.span())),
    }
}

fn marked_fields(fields: &Fields) -> Result<Vec<(Member, Type, Span)>, syn::Error> {
    let mut marked = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        for attr in &field.attrs {
            if is_next_marker(attr)? {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index {
                        index: i as u32,
                        span: field.ty.span(),
                    }),
                };
                marked.push((member, field.ty.clone(), attr.span()));
            }
        }
    }
    Ok(marked)
}

impl SlotDef {
    pub fn from_derive(input: &DeriveInput) -> Result<Self, syn::Error> {
        let next = match &input.data {
            Data::Union(union) => {
                return Err(CompileError::SlotOnUnion.at(union.union_token.span()))
            }
            Data::Enum(data) => {
                for variant in &data.variants {
                    if let Some((_, _, span)) = marked_fields(&variant.fields)?.into_iter().next() {
                        return Err(CompileError::NextOutsideStruct.at(span));
                    }
                }
                None
            }
            Data::Struct(data) => {
                let mut marked = marked_fields(&data.fields)?.into_iter();
                let next = marked.next();
                if let Some((_, _, span)) = marked.next() {
                    return Err(CompileError::DuplicateNext.at(span));
                }
                next.map(|(member, ty, _)| (member, ty))
            }
        };

        Ok(SlotDef {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            next,
            span: input.ident.span(),
        })
    }
}

impl ToTokens for SlotDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = kindred_crate(self.span);
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics #krate::field::Slot for #ident #ty_generics #where_clause {
                type Field = Self;

                fn field(&self) -> &Self {
                    self
                }

                fn field_mut(&mut self) -> &mut Self {
                    self
                }
            }
        }
        .to_tokens(tokens);

        if let Some((member, ty)) = &self.next {
            quote! {
                impl #impl_generics #krate::linear::Chained for #ident #ty_generics #where_clause {
                    type Next = #ty;

                    fn next(&self) -> &#ty {
                        &self.#member
                    }

                    fn next_mut(&mut self) -> &mut #ty {
                        &mut self.#member
                    }
                }
            }
            .to_tokens(tokens);
        }
    }
}
