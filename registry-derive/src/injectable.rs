//! `#[derive(Injectable)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Attribute, Data, DeriveInput, Error, Field, Index, LitStr, Result, Visibility};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
  let fields = match &input.data {
    Data::Struct(data) => &data.fields,
    Data::Enum(data) => {
      return Err(Error::new_spanned(
        data.enum_token,
        "Injectable can only be derived for structs",
      ))
    }
    Data::Union(data) => {
      return Err(Error::new_spanned(
        data.union_token,
        "Injectable can only be derived for structs",
      ))
    }
  };

  let descriptors = fields
    .iter()
    .enumerate()
    .map(|(index, field)| describe_field(index, field))
    .collect::<Result<Vec<_>>>()?;

  // Slots downcast through `Any`, so every type parameter must be `'static`.
  let mut generics = input.generics.clone();
  let params = generics
    .type_params()
    .map(|param| param.ident.clone())
    .collect::<Vec<_>>();
  let predicates = &mut generics.make_where_clause().predicates;
  for param in params {
    predicates.push(parse_quote!(#param: 'static));
  }

  let ident = &input.ident;
  let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

  Ok(quote! {
    impl #impl_generics ::spindle_registry::Injectable for #ident #ty_generics #where_clause {
      fn reflect_mut(&mut self) -> ::spindle_registry::ReflectMut<'_> {
        ::spindle_registry::ReflectMut::Struct(::std::vec![#(#descriptors),*])
      }
    }
  })
}

fn describe_field(index: usize, field: &Field) -> Result<TokenStream> {
  let tag = inject_tag(&field.attrs)?;

  let (name, member) = match &field.ident {
    Some(ident) => (ident.unraw().to_string(), quote!(#ident)),
    None => {
      let index = Index::from(index);
      (index.index.to_string(), quote!(#index))
    }
  };

  let tag_tokens = match &tag {
    Some(lit) => quote!(::std::option::Option::Some(#lit)),
    None => quote!(::std::option::Option::None),
  };

  // Private fields and empty tags never get a slot, so their types need not implement `Slot`.
  let is_public = matches!(field.vis, Visibility::Public(_));
  let is_site = tag.as_ref().is_some_and(|lit| !lit.value().is_empty());

  if is_public && is_site {
    Ok(quote! {
      ::spindle_registry::FieldMut::writable(#name, #tag_tokens, &mut self.#member)
    })
  } else {
    Ok(quote! {
      ::spindle_registry::FieldMut::read_only(#name, #tag_tokens)
    })
  }
}

fn inject_tag(attrs: &[Attribute]) -> Result<Option<LitStr>> {
  let mut tag = None;

  for attr in attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
    if tag.is_some() {
      return Err(Error::new_spanned(attr, "duplicate #[inject] attribute"));
    }
    let lit = attr
      .parse_args::<LitStr>()
      .map_err(|_| Error::new_spanned(attr, "expected #[inject(\"dependency name\")]"))?;
    tag = Some(lit);
  }

  Ok(tag)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn expand_to_string(input: DeriveInput) -> String {
    expand(&input).unwrap().to_string()
  }

  #[test]
  fn public_tagged_field_gets_a_slot() {
    let output = expand_to_string(parse_quote! {
      struct Service {
        #[inject("Repo")]
        pub repository: Option<Arc<Repository>>,
      }
    });

    assert!(output.contains("FieldMut :: writable (\"repository\""));
    assert!(output.contains("\"Repo\""));
    assert!(output.contains("& mut self . repository"));
  }

  #[test]
  fn private_and_empty_tagged_fields_are_read_only() {
    let output = expand_to_string(parse_quote! {
      struct Service {
        #[inject("Repo")]
        repository: Option<Arc<Repository>>,
        #[inject("")]
        pub storage: Option<Arc<Storage>>,
        count: u32,
      }
    });

    assert!(!output.contains("writable"));
    assert!(output.contains("read_only (\"repository\""));
    assert!(output.contains("read_only (\"storage\""));
    assert!(output.contains("read_only (\"count\" , :: std :: option :: Option :: None)"));
  }

  #[test]
  fn tuple_fields_are_named_by_index() {
    let output = expand_to_string(parse_quote! {
      struct Pair(#[inject("Left")] pub Option<Arc<Left>>, u8);
    });

    assert!(output.contains("writable (\"0\""));
    assert!(output.contains("& mut self . 0"));
    assert!(output.contains("read_only (\"1\""));
  }

  #[test]
  fn raw_identifiers_are_unescaped() {
    let output = expand_to_string(parse_quote! {
      struct Service {
        #[inject("Type")]
        pub r#type: Option<Arc<Kind>>,
      }
    });

    assert!(output.contains("writable (\"type\""));
  }

  #[test]
  fn type_parameters_are_bound_to_static() {
    let output = expand_to_string(parse_quote! {
      struct Holder<T: Clone, const N: usize> where T: Send {
        #[inject("value")]
        pub value: Option<Arc<T>>,
      }
    });

    assert!(output.contains("impl < T : Clone , const N : usize >"));
    assert!(output.contains("for Holder < T , N >"));
    assert!(output.contains("where T : Send , T : 'static"));
  }

  #[test]
  fn enums_are_rejected() {
    let input: DeriveInput = parse_quote! {
      enum Choice { A, B }
    };
    let err = expand(&input).unwrap_err();
    assert_eq!(err.to_string(), "Injectable can only be derived for structs");
  }

  #[test]
  fn malformed_attributes_are_rejected() {
    let input: DeriveInput = parse_quote! {
      struct Service {
        #[inject(Repo)]
        pub repository: Option<Arc<Repository>>,
      }
    };
    let err = expand(&input).unwrap_err();
    assert_eq!(err.to_string(), "expected #[inject(\"dependency name\")]");

    let input: DeriveInput = parse_quote! {
      struct Service {
        #[inject("A")]
        #[inject("B")]
        pub repository: Option<Arc<Repository>>,
      }
    };
    let err = expand(&input).unwrap_err();
    assert_eq!(err.to_string(), "duplicate #[inject] attribute");
  }
}
