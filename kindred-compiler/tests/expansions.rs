use {
    kindred_compiler::{slot::SlotDef, tuples::TupleImpls, unary::UnaryImpls},
    quote::ToTokens,
    syn::{parse_quote, DeriveInput, Item},
};

mod common;

#[test]
fn tuple_impls_cover_every_arity() {
    let impls = TupleImpls { arity: 3 };
    let file: syn::File = syn::parse2(impls.to_token_stream()).unwrap();
    // One `Tuple` and one `List` impl per arity, including zero.
    assert_eq!(file.items.len(), 2 * 4);
    assert!(file.items.iter().all(|item| matches!(item, Item::Impl(_))));
}

#[test]
fn unary_impls_cover_every_number() {
    let impls: UnaryImpls = parse_quote!(5);
    assert_eq!(impls.max, 5);
    let file: syn::File = syn::parse2(impls.to_token_stream()).unwrap();
    assert_eq!(file.items.len(), 2 * 6);
}

#[test]
fn slot_next_marker() {
    let input: DeriveInput = parse_quote! {
        struct Unit<Next> {
            value: u8,
            #[slot(next)]
            rest: Next,
        }
    };
    let def = SlotDef::from_derive(&input).unwrap();
    let (member, ty) = def.next.clone().expect("marked field");
    assert_eq!(member.to_token_stream().to_string(), "rest");
    assert_eq!(ty.to_token_stream().to_string(), "Next");
    let file: syn::File = syn::parse2(def.to_token_stream()).unwrap();
    assert_eq!(file.items.len(), 2);

    let plain: DeriveInput = parse_quote! {
        struct Plain(u8);
    };
    let def = SlotDef::from_derive(&plain).unwrap();
    assert!(def.next.is_none());
    let file: syn::File = syn::parse2(def.to_token_stream()).unwrap();
    assert_eq!(file.items.len(), 1);
}

#[test]
fn slot_rejections() {
    expect_error!(SlotDef, {
        struct Unit(#[slot(next)] u8, #[slot(next)] u16);
    } => CompileError::DuplicateNext);

    expect_error!(SlotDef, { union Bits { a: u32, b: f32 } } => CompileError::SlotOnUnion);

    expect_error!(SlotDef, {
        struct Unit(#[slot(first)] u8);
    } => CompileError::MalformedSlotAttribute);

    expect_error!(SlotDef, {
        enum Either { Left(#[slot(next)] u8) }
    } => CompileError::NextOutsideStruct);
}
