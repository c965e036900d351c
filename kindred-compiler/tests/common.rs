#[macro_export]
macro_rules! expect_error {
    ($def:ty, { $($input:tt)* } => $err:expr) => {{
        use kindred_compiler::CompileError;

        let input: syn::DeriveInput = syn::parse_quote!($($input)*);
        let err = <$def>::from_derive(&input)
            .expect_err("derive should have been rejected")
            .to_string();
        let expected: CompileError = $err;

        assert_eq!(err, expected.to_string(), "unexpected error");
    }};
}
