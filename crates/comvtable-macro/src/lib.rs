//! Procedural macros for COM interface bindings
//!
//! Provides `#[com_interface("guid")]`, which turns a trait that transcribes a
//! native COM interface into:
//! - `IID_{NAME}` - the interface identifier
//! - `{Name}VTable` - the `#[repr(C)]` function-pointer table
//! - `{Name}` - the one-pointer interface handle with forwarding methods
//! - `{Name}Impl` and `{Name}VTable::new` - what a Rust object needs to be handed
//!   to native code through the same table
//!
//! ## Calling convention
//!
//! Every slot is `extern "system"`: `stdcall` on x86, the platform C ABI on
//! x64 and ARM64. `this` is always the first argument.
//!
//! ## Inheritance
//!
//! `extends(IBase)` embeds `IBaseVTable` as the first field of the table, so the
//! flattened slot list reads base slots first. Without `extends` the interface
//! derives from `IUnknown`. `root` is reserved for `IUnknown` itself.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, FnArg, Ident, ItemTrait, LitStr, Pat, ReturnType, Token, TraitItem, Type,
    parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    spanned::Spanned,
};

/// Returns the path to the comvtable crate.
///
/// `internal` is set when the macro runs inside comvtable itself.
fn crate_path(internal: bool) -> TokenStream2 {
    if internal {
        quote! { crate }
    } else {
        quote! { ::comvtable }
    }
}

// =============================================================================
// Attribute configuration
// =============================================================================

/// Arguments of `#[com_interface(...)]`
struct InterfaceConfig {
    guid: (u32, u16, u16, [u8; 8]),
    /// Explicit base interface; `None` means `IUnknown`
    base: Option<Ident>,
    /// The interface is `IUnknown`: no base table, no generated `Impl` trait
    root: bool,
    /// Use `crate::` instead of `::comvtable::` for runtime paths
    internal: bool,
}

impl Parse for InterfaceConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let guid_lit: LitStr = input.parse()?;
        let guid = parse_guid_string(&guid_lit.value())
            .map_err(|msg| syn::Error::new(guid_lit.span(), msg))?;

        let mut config = InterfaceConfig {
            guid,
            base: None,
            root: false,
            internal: false,
        };

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let option: Ident = input.parse()?;
            match option.to_string().as_str() {
                "extends" => {
                    let content;
                    parenthesized!(content in input);
                    if config.base.is_some() {
                        return Err(syn::Error::new(
                            option.span(),
                            "only single inheritance is supported: a COM table has one base",
                        ));
                    }
                    config.base = Some(content.parse()?);
                }
                "root" => config.root = true,
                "internal" => config.internal = true,
                other => {
                    return Err(syn::Error::new(
                        option.span(),
                        format!(
                            "unknown option '{}'; expected extends(Base), root or internal",
                            other
                        ),
                    ));
                }
            }
        }

        if config.root && config.base.is_some() {
            return Err(syn::Error::new(
                guid_lit.span(),
                "a root interface cannot extend another interface",
            ));
        }

        Ok(config)
    }
}

/// Parse a GUID string "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx" into its four fields
fn parse_guid_string(s: &str) -> Result<(u32, u16, u16, [u8; 8]), String> {
    let s = s.trim().trim_start_matches('{').trim_end_matches('}');
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 5 {
        return Err(format!(
            "invalid GUID format: expected 'xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx', got '{}'",
            s
        ));
    }

    let expected_lens = [8, 4, 4, 4, 12];
    for (part, len) in parts.iter().zip(expected_lens) {
        if part.len() != len || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "invalid GUID group '{}': expected {} hex digits",
                part, len
            ));
        }
    }

    let data1 = u32::from_str_radix(parts[0], 16).map_err(|e| e.to_string())?;
    let data2 = u16::from_str_radix(parts[1], 16).map_err(|e| e.to_string())?;
    let data3 = u16::from_str_radix(parts[2], 16).map_err(|e| e.to_string())?;

    let tail: String = format!("{}{}", parts[3], parts[4]);
    let mut data4 = [0u8; 8];
    for (i, byte) in data4.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&tail[i * 2..i * 2 + 2], 16).map_err(|e| e.to_string())?;
    }

    Ok((data1, data2, data3, data4))
}

// =============================================================================
// Validation helpers for FFI-safety
// =============================================================================

/// Check if a type is known to be non-FFI-safe
fn check_ffi_safe_type(ty: &Type) -> Result<(), String> {
    match ty {
        Type::Path(type_path) => {
            if let Some(segment) = type_path.path.segments.last() {
                let name = segment.ident.to_string();
                match name.as_str() {
                    "String" | "str" => {
                        return Err(format!(
                            "{} is not FFI-safe. Use PCWSTR or *const u16 instead",
                            name
                        ));
                    }
                    "Vec" => {
                        return Err(
                            "Vec<T> is not FFI-safe. Use *const T and a count parameter instead"
                                .into(),
                        );
                    }
                    "Box" => return Err("Box<T> is not FFI-safe. Use *mut T instead".into()),
                    "Rc" | "Arc" => {
                        return Err(format!(
                            "{} is not FFI-safe. Use raw pointers instead",
                            name
                        ));
                    }
                    "ComPtr" => {
                        return Err(
                            "ComPtr<T> owns a reference and cannot cross a vtable. Use *mut T instead"
                                .into(),
                        );
                    }
                    "Result" => {
                        return Err(
                            "Result<T, E> is not FFI-safe. Return HRESULT and use out-parameters"
                                .into(),
                        );
                    }
                    "bool" => {
                        return Err("bool is one byte; native BOOL is four. Use BOOL instead".into());
                    }
                    _ => {}
                }
            }
        }
        Type::Reference(type_ref) => {
            let mutability = if type_ref.mutability.is_some() {
                "&mut "
            } else {
                "&"
            };
            return Err(format!(
                "{}T references are not allowed across a vtable. Use *const T or *mut T: \
                 native callers pass null where a reference cannot be null",
                mutability
            ));
        }
        Type::Slice(_) => {
            return Err(
                "slices [T] are not FFI-safe. Use *const T and a count parameter instead".into(),
            );
        }
        Type::TraitObject(_) => {
            return Err("trait objects (dyn Trait) are not FFI-safe".into());
        }
        Type::ImplTrait(_) => {
            return Err("impl Trait is not FFI-safe".into());
        }
        Type::Tuple(tuple) if !tuple.elems.is_empty() => {
            return Err(
                "non-empty tuples are not FFI-safe. Use a #[repr(C)] struct instead".into(),
            );
        }
        _ => {}
    }
    Ok(())
}

/// Validate a trait method signature for vtable compatibility
fn validate_trait_method(method: &syn::TraitItemFn) -> Result<(), syn::Error> {
    let method_name = &method.sig.ident;
    let span = method_name.span();

    if method.sig.asyncness.is_some() {
        return Err(syn::Error::new(
            span,
            format!("method '{}': async functions cannot occupy a vtable slot", method_name),
        ));
    }

    if method.sig.constness.is_some() || method.sig.unsafety.is_some() {
        return Err(syn::Error::new(
            span,
            format!(
                "method '{}': declare slots as plain `fn`; forwarders are generated unsafe",
                method_name
            ),
        ));
    }

    if !method.sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            span,
            format!("method '{}': generic methods cannot occupy a vtable slot", method_name),
        ));
    }

    if method.default.is_some() {
        return Err(syn::Error::new(
            span,
            format!(
                "method '{}': slots have no default body; implement them through the Impl trait",
                method_name
            ),
        ));
    }

    match method.sig.inputs.first() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new(
                receiver.span(),
                format!(
                    "method '{}': the receiver must be &self (COM objects are shared through raw pointers)",
                    method_name
                ),
            ));
        }
        _ => {
            return Err(syn::Error::new(
                span,
                format!(
                    "method '{}': must take &self (every slot receives the interface pointer)",
                    method_name
                ),
            ));
        }
    }

    for arg in method.sig.inputs.iter().skip(1) {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(pat_ident) = &*pat_type.pat {
                if pat_ident.ident == "this" {
                    return Err(syn::Error::new(
                        pat_ident.span(),
                        "'this' is reserved for the interface pointer",
                    ));
                }
            } else {
                return Err(syn::Error::new(
                    pat_type.pat.span(),
                    format!(
                        "method '{}': parameters must be plain identifiers",
                        method_name
                    ),
                ));
            }
            if let Err(msg) = check_ffi_safe_type(&pat_type.ty) {
                return Err(syn::Error::new(
                    pat_type.ty.span(),
                    format!("method '{}': {}", method_name, msg),
                ));
            }
        }
    }

    if let ReturnType::Type(_, ret) = &method.sig.output
        && let Err(msg) = check_ffi_safe_type(ret)
    {
        return Err(syn::Error::new(
            ret.span(),
            format!("method '{}' return type: {}", method_name, msg),
        ));
    }

    Ok(())
}

/// Validate trait-level properties
fn validate_trait(input: &ItemTrait) -> Result<(), syn::Error> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "generic interfaces are not supported: a COM table has one fixed signature per slot",
        ));
    }
    if !input.supertraits.is_empty() {
        return Err(syn::Error::new(
            input.supertraits.span(),
            "use #[com_interface(\"...\", extends(Base))] instead of supertraits",
        ));
    }
    Ok(())
}

// =============================================================================
// Method collection
// =============================================================================

/// One vtable slot as declared in the trait
struct SlotMethod {
    name: Ident,
    attrs: Vec<Attribute>,
    param_names: Vec<Ident>,
    param_types: Vec<Type>,
    output: ReturnType,
}

fn collect_methods(input: &ItemTrait) -> Result<Vec<SlotMethod>, syn::Error> {
    let mut methods = Vec::new();
    for item in &input.items {
        let TraitItem::Fn(method) = item else {
            return Err(syn::Error::new(
                item.span(),
                "only methods may appear in a COM interface",
            ));
        };
        validate_trait_method(method)?;

        let mut param_names = Vec::new();
        let mut param_types = Vec::new();
        for arg in method.sig.inputs.iter().skip(1) {
            if let FnArg::Typed(pat_type) = arg
                && let Pat::Ident(pat_ident) = &*pat_type.pat
            {
                param_names.push(pat_ident.ident.clone());
                param_types.push((*pat_type.ty).clone());
            }
        }

        methods.push(SlotMethod {
            name: method.sig.ident.clone(),
            attrs: method.attrs.clone(),
            param_names,
            param_types,
            output: method.sig.output.clone(),
        });
    }
    Ok(methods)
}

// =============================================================================
// Code generation
// =============================================================================

fn com_interface_internal(
    config: InterfaceConfig,
    input: ItemTrait,
) -> Result<TokenStream2, syn::Error> {
    validate_trait(&input)?;
    let methods = collect_methods(&input)?;

    let krate = crate_path(config.internal);
    let vis = &input.vis;
    let name = &input.ident;
    let name_str = name.to_string();
    let trait_attrs = &input.attrs;
    let vtable_name = format_ident!("{}VTable", name);
    let impl_trait_name = format_ident!("{}Impl", name);
    let iid_name = format_ident!("IID_{}", name_str.to_uppercase());

    let (d1, d2, d3, d4) = config.guid;
    let d4 = d4.iter();

    // (handle, table, impl trait) of the base, or None for IUnknown itself
    let base = if config.root {
        None
    } else {
        Some(match &config.base {
            Some(base) => {
                let base_vtable = format_ident!("{}VTable", base);
                let base_impl = format_ident!("{}Impl", base);
                (quote! { #base }, quote! { #base_vtable }, quote! { #base_impl })
            }
            None => (
                quote! { #krate::IUnknown },
                quote! { #krate::IUnknownVTable },
                quote! { #krate::IUnknownImpl },
            ),
        })
    };

    // -------------------------------------------------------------------------
    // VTable struct
    // -------------------------------------------------------------------------
    let base_field = base.as_ref().map(|(_, base_vtable, _)| {
        quote! {
            /// Slots inherited from the base interface
            pub base: #base_vtable,
        }
    });

    let slot_fields = methods.iter().map(|m| {
        let method_name = &m.name;
        let param_names = &m.param_names;
        let param_types = &m.param_types;
        let output = &m.output;
        quote! {
            pub #method_name: unsafe extern "system" fn(
                this: *mut ::core::ffi::c_void
                #(, #param_names: #param_types)*
            ) #output
        }
    });

    let vtable_doc = format!("Virtual function table of [`{}`]", name_str);

    // -------------------------------------------------------------------------
    // Forwarding methods on the handle
    // -------------------------------------------------------------------------
    let forwarders = methods.iter().map(|m| {
        let method_name = &m.name;
        let attrs = &m.attrs;
        let param_names = &m.param_names;
        let param_types = &m.param_types;
        let output = &m.output;
        quote! {
            #(#attrs)*
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub unsafe fn #method_name(&self #(, #param_names: #param_types)*) #output {
                unsafe {
                    ((*self.vtable).#method_name)(
                        self.as_raw().cast::<::core::ffi::c_void>()
                        #(, #param_names)*
                    )
                }
            }
        }
    });

    // -------------------------------------------------------------------------
    // Layout metadata
    // -------------------------------------------------------------------------
    let own_slots: Vec<String> = methods.iter().map(|m| m.name.to_string()).collect();
    let own_count = own_slots.len();

    let (base_slot_count, base_slot_names) = match &base {
        Some((base_ty, _, _)) => (
            quote! { <#base_ty as #krate::VTableLayout>::SLOT_COUNT },
            quote! { <#base_ty as #krate::VTableLayout>::slot_names() },
        ),
        None => (quote! { 0 }, quote! { ::std::vec::Vec::new() }),
    };

    let matches_fn = base.as_ref().map(|(base_ty, _, _)| {
        quote! {
            #[inline]
            fn matches(iid: &#krate::GUID) -> bool {
                *iid == #iid_name || <#base_ty as #krate::ComInterface>::matches(iid)
            }
        }
    });

    let deref_impl = base.as_ref().map(|(base_ty, _, _)| {
        quote! {
            impl ::core::ops::Deref for #name {
                type Target = #base_ty;

                #[inline]
                fn deref(&self) -> &#base_ty {
                    // The table starts with the base table, so the handle is
                    // also a valid base handle.
                    unsafe { &*(self as *const Self).cast::<#base_ty>() }
                }
            }
        }
    });

    // -------------------------------------------------------------------------
    // Implementation side: `{Name}Impl` + `{Name}VTable::new`
    // -------------------------------------------------------------------------
    let impl_side = base.as_ref().map(|(_, base_vtable, base_impl)| {
        let impl_methods = methods.iter().map(|m| {
            let method_name = &m.name;
            let attrs = &m.attrs;
            let param_names = &m.param_names;
            let param_types = &m.param_types;
            let output = &m.output;
            quote! {
                #(#attrs)*
                #[allow(clippy::too_many_arguments)]
                fn #method_name(&self #(, #param_names: #param_types)*) #output;
            }
        });

        let thunks = methods.iter().map(|m| {
            let method_name = &m.name;
            let param_names = &m.param_names;
            let param_types = &m.param_types;
            let output = &m.output;
            quote! {
                #[allow(clippy::too_many_arguments)]
                unsafe extern "system" fn #method_name<T: #impl_trait_name, const OFFSET: usize>(
                    this: *mut ::core::ffi::c_void
                    #(, #param_names: #param_types)*
                ) #output {
                    unsafe {
                        let object = &*this.cast::<u8>().sub(OFFSET).cast::<T>();
                        <T as #impl_trait_name>::#method_name(object #(, #param_names)*)
                    }
                }
            }
        });

        let entries = methods.iter().map(|m| {
            let method_name = &m.name;
            quote! { #method_name: #method_name::<T, OFFSET> }
        });

        let impl_doc = format!(
            "Implemented by Rust objects that expose [`{}`] to native code",
            name_str
        );

        quote! {
            #[doc = #impl_doc]
            #[allow(non_snake_case)]
            #vis trait #impl_trait_name: #base_impl {
                #(#impl_methods)*
            }

            impl #vtable_name {
                /// Builds the table for `T`, whose pointer to this table sits
                /// `OFFSET` bytes into the object.
                #[allow(non_snake_case)]
                pub const fn new<T: #impl_trait_name, const OFFSET: usize>() -> Self {
                    #(#thunks)*

                    Self {
                        base: #base_vtable::new::<T, OFFSET>(),
                        #(#entries,)*
                    }
                }
            }
        }
    });

    let size_msg = format!("{}VTable size does not match its slot count", name_str);

    Ok(quote! {
        /// Interface identifier
        #vis const #iid_name: #krate::GUID =
            #krate::GUID::new(#d1, #d2, #d3, [#(#d4),*]);

        #[doc = #vtable_doc]
        #[repr(C)]
        #[allow(non_snake_case)]
        #vis struct #vtable_name {
            #base_field
            #(#slot_fields,)*
        }

        #(#trait_attrs)*
        #[repr(C)]
        #vis struct #name {
            vtable: *const #vtable_name,
        }

        #[allow(non_snake_case)]
        impl #name {
            /// Interface identifier
            #[inline]
            #[must_use]
            pub const fn iid() -> &'static #krate::GUID {
                &#iid_name
            }

            /// The function-pointer table this handle points at
            #[inline]
            #[must_use]
            pub fn vtable(&self) -> &#vtable_name {
                unsafe { &*self.vtable }
            }

            /// Raw interface pointer, as native code sees it
            #[inline]
            #[must_use]
            pub fn as_raw(&self) -> *mut Self {
                self as *const Self as *mut Self
            }

            /// Borrow a handle from a raw interface pointer.
            ///
            /// # Safety
            /// `ptr` must be null or point to a live object implementing this
            /// interface for at least `'a`.
            #[inline]
            pub unsafe fn from_raw<'a>(ptr: *mut Self) -> Option<&'a Self> {
                unsafe { ptr.as_ref() }
            }

            #(#forwarders)*
        }

        #deref_impl

        unsafe impl #krate::ComInterface for #name {
            const IID: #krate::GUID = #iid_name;
            const NAME: &'static str = #name_str;
            #matches_fn
        }

        unsafe impl #krate::VTableLayout for #name {
            type VTable = #vtable_name;
            const SLOT_COUNT: usize = #base_slot_count + #own_count;
            const OWN_SLOTS: &'static [&'static str] = &[#(#own_slots),*];

            fn slot_names() -> ::std::vec::Vec<&'static str> {
                let mut names = #base_slot_names;
                names.extend_from_slice(Self::OWN_SLOTS);
                names
            }
        }

        const _: () = assert!(
            ::core::mem::size_of::<#vtable_name>()
                == <#name as #krate::VTableLayout>::SLOT_COUNT
                    * ::core::mem::size_of::<*const ::core::ffi::c_void>(),
            #size_msg
        );

        #impl_side
    })
}

/// Define a COM interface.
///
/// The trait lists the interface's own methods in native declaration order,
/// named as in the header. Each method takes `&self` and raw FFI types only.
///
/// This generates:
/// - `IID_{NAME}` parsed from the GUID string
/// - `{Name}VTable`, the base table followed by one `extern "system"` slot per method
/// - `{Name}`, the handle (one pointer), with `unsafe` forwarding methods and
///   `Deref` to the base handle
/// - `ComInterface` and `VTableLayout` impls plus a table size assertion
/// - `{Name}Impl` and `{Name}VTable::new::<T, OFFSET>()` for Rust implementations
///
/// # Example
/// ```ignore
/// #[com_interface("b2efe1e7-729f-4102-949f-505fa21bf666")]
/// pub trait ID2D1TransformNode {
///     fn GetInputCount(&self) -> u32;
/// }
///
/// #[com_interface("ef1a287d-342a-4f76-8fdb-da0d6ea9f92b", extends(ID2D1TransformNode))]
/// pub trait ID2D1Transform {
///     fn MapInvalidRect(&self, input_index: u32, rect: RECT, out: *mut RECT) -> HRESULT;
/// }
/// ```
///
/// Options:
/// - `extends(Base)` - base interface (default `IUnknown`); `Base`, `BaseVTable`
///   and `BaseImpl` must be in scope
/// - `root` - the interface has no base table (only `IUnknown`)
/// - `internal` - use `crate::` paths, for use inside comvtable
#[proc_macro_attribute]
pub fn com_interface(attr: TokenStream, item: TokenStream) -> TokenStream {
    let config = parse_macro_input!(attr as InterfaceConfig);
    let input = parse_macro_input!(item as ItemTrait);

    match com_interface_internal(config, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
