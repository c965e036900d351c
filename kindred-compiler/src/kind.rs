//! Kind identities: hashing a kind's name into a type-level tree of bits.

use {
    proc_macro2::{Span, TokenStream},
    quote::{quote, ToTokens},
    std::fmt,
    syn::{
        parse::{Parse, ParseStream},
        punctuated::Punctuated,
        spanned::Spanned as _,
        DeriveInput, GenericParam, Generics, Ident, Lit, Meta, NestedMeta, Token, Type,
    },
};

use crate::{path::kindred_crate, CompileError};

/// A 32-bit FNV-1a hash of a kind's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub u32);

impl KindId {
    pub const OFFSET_BASIS: u32 = 0x811c_9dc5;
    pub const PRIME: u32 = 0x0100_0193;
    pub const BITS: usize = 32;

    pub fn of(name: &str) -> Self {
        KindId(name.bytes().fold(Self::OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(Self::PRIME)
        }))
    }

    /// The bits of the hash, most significant first.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..Self::BITS).rev().map(move |i| (self.0 >> i) & 1 == 1)
    }

    /// The identity as a type: a balanced binary tree of `B0`/`B1` leaves, so comparing two
    /// identities recurses only `log2(BITS)` levels deep.
    pub fn to_type(self, krate: &TokenStream) -> TokenStream {
        let bits: Vec<bool> = self.bits().collect();
        bit_tree(&bits, krate)
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

fn bit_tree(bits: &[bool], krate: &TokenStream) -> TokenStream {
    match bits {
        [] => quote!(()),
        [true] => quote!(#krate::kind::B1),
        [false] => quote!(#krate::kind::B0),
        _ => {
            let (left, right) = bits.split_at(bits.len() / 2);
            let left = bit_tree(left, krate);
            let right = bit_tree(right, krate);
            quote!((#left, #right))
        }
    }
}

/// A type deriving `Kind`.
#[derive(Debug, Clone)]
pub struct KindDef {
    pub ident: Ident,
    pub generics: Generics,
    /// The name hashed into the identity: the type's own name unless overridden.
    pub name: String,
    span: Span,
}

impl KindDef {
    pub fn from_derive(input: &DeriveInput) -> Result<Self, syn::Error> {
        let mut name = None;
        for attr in input.attrs.iter().filter(|attr| attr.path.is_ident("kind")) {
            let list = match attr.parse_meta()? {
                Meta::List(list) => list,
                other => return Err(CompileError::MalformedKindAttribute.at(other.span())),
            };
            for nested in list.nested {
                let pair = match nested {
                    NestedMeta::Meta(Meta::NameValue(pair)) => pair,
                    other => return Err(CompileError::MalformedKindAttribute.at(other.span())),
                };
                if !pair.path.is_ident("name") {
                    let key = pair.path.to_token_stream().to_string();
                    return Err(CompileError::UnknownKindAttribute(key).at(pair.path.span()));
                }
                let lit = match &pair.lit {
                    Lit::Str(lit) => lit,
                    other => return Err(CompileError::MalformedKindAttribute.at(other.span())),
                };
                if name.is_some() {
                    return Err(CompileError::DuplicateKindAttribute("name".to_owned())
                        .at(pair.path.span()));
                }
                name = Some(lit.value());
            }
        }

        for param in &input.generics.params {
            match param {
                GenericParam::Lifetime(lifetime) => {
                    return Err(CompileError::LifetimeParameter.at(lifetime.span()))
                }
                GenericParam::Const(constant) => {
                    return Err(CompileError::ConstParameter.at(constant.span()))
                }
                GenericParam::Type(_) => {}
            }
        }

        Ok(KindDef {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            name: name.unwrap_or_else(|| input.ident.to_string()),
            span: input.ident.span(),
        })
    }

    pub fn id(&self) -> KindId {
        KindId::of(&self.name)
    }
}

impl ToTokens for KindDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = kindred_crate(self.span);
        let ident = &self.ident;
        let bits = self.id().to_type(&krate);

        let params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        let mut generics = self.generics.clone();
        {
            let where_clause = generics.make_where_clause();
            for param in &params {
                where_clause
                    .predicates
                    .push(syn::parse_quote!(#param: #krate::kind::Kind));
            }
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let id = if params.is_empty() {
            bits
        } else {
            let args = params.iter().rev().fold(quote!(()), |rest, param| {
                quote!((<#param as #krate::kind::Kind>::Id, #rest))
            });
            quote!((#bits, #args))
        };

        quote! {
            impl #impl_generics #krate::kind::Kind for #ident #ty_generics #where_clause {
                type Id = #id;
            }
        }
        .to_tokens(tokens);
    }
}

/// A comma-separated list of foreign types given identities by `impl_kinds!`.
#[derive(Debug, Clone)]
pub struct ForeignKinds {
    pub types: Vec<Type>,
}

impl ForeignKinds {
    /// The name hashed for a foreign type: its tokens with whitespace removed.
    pub fn name_of(ty: &Type) -> String {
        ty.to_token_stream()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

impl Parse for ForeignKinds {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::<Type, Token![,]>::parse_terminated(input)?;
        Ok(ForeignKinds {
            types: types.into_iter().collect(),
        })
    }
}

impl ToTokens for ForeignKinds {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = kindred_crate(Span::call_site());
        for ty in &self.types {
            let id = KindId::of(&Self::name_of(ty)).to_type(&krate);
            quote! {
                impl #krate::kind::Kind for #ty {
                    type Id = #id;
                }
            }
            .to_tokens(tokens);
        }
    }
}
