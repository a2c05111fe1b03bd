use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedRecord;

/// Derive the record metadata and factory surface for a named-field struct.
///
/// Field and struct attributes live under the `record` namespace:
///
/// ```text
/// #[derive(RectoRecord, Serialize, Deserialize)]
/// #[record(from_query)]               // class-level source tag
/// struct Search {
///     #[record(from_route = "id")]    // field-level tag with name override
///     term_id: u64,
///     #[record(default = "relevance")]
///     sort: String,
/// }
/// ```
///
/// Emits `RecordMetadata` (the structural descriptor plus once-only registry
/// insertion), an empty `Record` impl, a `FieldAccess` impl for the
/// generic-object backend, and an `inventory` registration.
#[proc_macro_derive(RectoRecord, attributes(record))]
pub fn derive_recto_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedRecord::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
