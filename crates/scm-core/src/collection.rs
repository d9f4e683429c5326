//! Generated endpoint descriptions for collection resources.
//!
//! Most configuration resources expose the same five endpoints under one
//! collection path: list, create, and get/update/delete by id.
//! [`collection_operations!`](crate::collection_operations) generates the
//! [`Operation`](crate::Operation) inputs for any subset of them, so a
//! namespace only describes its non-standard endpoints by hand.
//!
//! The list filter type must provide `fn to_params(&self) -> QueryParams`.

/// Generate operation inputs for a collection resource.
///
/// ```text
/// scm_core::collection_operations! {
///     resource: Address, id: AddressId, path: "/addresses", query: ListQuery;
///     list ListAddresses;
///     create CreateAddress;
///     get GetAddress;
///     update UpdateAddress;
///     delete DeleteAddress;
/// }
/// ```
#[macro_export]
macro_rules! collection_operations {
    (
        resource: $resource:ty,
        id: $id:ty,
        path: $path:literal,
        query: $query:ty;
        $( $kind:ident $name:ident; )+
    ) => {
        $( $crate::collection_operations!(@$kind $name, $resource, $id, $path, $query); )+
    };

    (@list $name:ident, $resource:ty, $id:ty, $path:literal, $query:ty) => {
        #[doc = concat!("`GET ", $path, "`")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            /// List filters.
            pub query: &'a $query,
        }

        impl $crate::Operation for $name<'_> {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::Get;
            const PATH: &'static str = $path;
            type Body = ();
            type Output = $crate::ListResponse<$resource>;

            fn query(&self) -> $crate::query::QueryParams {
                self.query.to_params()
            }
        }
    };

    (@create $name:ident, $resource:ty, $id:ty, $path:literal, $query:ty) => {
        #[doc = concat!("`POST ", $path, "`")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            /// Object to create.
            pub body: &'a $resource,
        }

        impl $crate::Operation for $name<'_> {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::Post;
            const PATH: &'static str = $path;
            type Body = $resource;
            type Output = $resource;

            fn body(&self) -> ::std::option::Option<&Self::Body> {
                ::std::option::Option::Some(self.body)
            }
        }
    };

    (@get $name:ident, $resource:ty, $id:ty, $path:literal, $query:ty) => {
        #[doc = concat!("`GET ", $path, "/{id}`")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            /// Object id.
            pub id: $id,
        }

        impl $crate::Operation for $name {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::Get;
            const PATH: &'static str = concat!($path, "/{id}");
            type Body = ();
            type Output = $resource;

            fn path_params(&self) -> $crate::path::PathParams {
                $crate::path::PathParams::new().with("id", self.id)
            }
        }
    };

    (@update $name:ident, $resource:ty, $id:ty, $path:literal, $query:ty) => {
        #[doc = concat!("`PUT ", $path, "/{id}`")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            /// Object id.
            pub id: $id,
            /// Replacement object.
            pub body: &'a $resource,
        }

        impl $crate::Operation for $name<'_> {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::Put;
            const PATH: &'static str = concat!($path, "/{id}");
            type Body = $resource;
            type Output = $resource;

            fn path_params(&self) -> $crate::path::PathParams {
                $crate::path::PathParams::new().with("id", self.id)
            }

            fn body(&self) -> ::std::option::Option<&Self::Body> {
                ::std::option::Option::Some(self.body)
            }
        }
    };

    (@delete $name:ident, $resource:ty, $id:ty, $path:literal, $query:ty) => {
        #[doc = concat!("`DELETE ", $path, "/{id}`")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            /// Object id.
            pub id: $id,
        }

        impl $crate::Operation for $name {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::Delete;
            const PATH: &'static str = concat!($path, "/{id}");
            type Body = ();
            type Output = $crate::__private::serde::de::IgnoredAny;

            fn path_params(&self) -> $crate::path::PathParams {
                $crate::path::PathParams::new().with("id", self.id)
            }
        }
    };
}
