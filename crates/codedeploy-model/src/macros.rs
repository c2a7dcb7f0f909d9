// ── Shape generators ──
//
// The catalog in `shapes` is pure data: each record, enum, and union is a
// single macro invocation. These macros expand it into the struct or enum,
// accessors, a consuming builder, serde impls, `Display`, and `Validate`.
//
// Field kinds decide storage and accessor shape:
//
//   copy    Option<T>                  getter -> Option<T>
//   string  Option<String>             getter -> Option<&str>
//   value   Option<T>                  getter -> Option<&T>
//   list    Option<Vec<T>>             getter -> Option<&[T]>, builder appends
//   map     Option<KeyedCollection<T>> getter -> Option<&KeyedCollection<T>>,
//                                      builder inserts and rejects duplicates

/// Storage type for a field of the given kind.
macro_rules! shape_storage {
    (copy, $ty:ty) => { ::std::option::Option<$ty> };
    (string, $ty:ty) => { ::std::option::Option<$ty> };
    (value, $ty:ty) => { ::std::option::Option<$ty> };
    (list, $ty:ty) => { ::std::option::Option<::std::vec::Vec<$ty>> };
    (map, $ty:ty) => { ::std::option::Option<$crate::keyed::KeyedCollection<$ty>> };
}

/// Read accessor on the record.
macro_rules! shape_getter {
    ($(#[$attr:meta])* copy $field:ident : $ty:ty) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::std::option::Option<$ty> {
            self.$field
        }
    };
    ($(#[$attr:meta])* string $field:ident : $ty:ty) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    ($(#[$attr:meta])* value $field:ident : $ty:ty) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    ($(#[$attr:meta])* list $field:ident : $ty:ty) => {
        $(#[$attr])*
        ///
        /// `None` when never set; `Some(&[])` when explicitly set to empty.
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
    ($(#[$attr:meta])* map $field:ident : $ty:ty) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::std::option::Option<&$crate::keyed::KeyedCollection<$ty>> {
            self.$field.as_ref()
        }
    };
}

/// Fluent and `set_` mutators on the builder.
macro_rules! shape_setter {
    (copy $field:ident $setter:ident : $ty:ty) => {
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.inner.$field = ::std::option::Option::Some(input.into());
            self
        }

        pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
            self.inner.$field = input;
            self
        }
    };
    (string $field:ident $setter:ident : $ty:ty) => {
        pub fn $field(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.inner.$field = ::std::option::Option::Some(input.into());
            self
        }

        pub fn $setter(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.inner.$field = input;
            self
        }
    };
    (value $field:ident $setter:ident : $ty:ty) => {
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.inner.$field = ::std::option::Option::Some(input.into());
            self
        }

        pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
            self.inner.$field = input;
            self
        }
    };
    (list $field:ident $setter:ident : $ty:ty) => {
        /// Appends to the list, creating it on first use.
        pub fn $field<I>(mut self, items: I) -> Self
        where
            I: ::std::iter::IntoIterator,
            I::Item: ::std::convert::Into<$ty>,
        {
            self.inner
                .$field
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(items.into_iter().map(::std::convert::Into::into));
            self
        }

        /// Replaces the whole list.
        pub fn $setter(mut self, input: ::std::option::Option<::std::vec::Vec<$ty>>) -> Self {
            self.inner.$field = input;
            self
        }
    };
    (map $field:ident $setter:ident : $ty:ty) => {
        /// Adds one entry; a key that is already present is rejected.
        pub fn $field(
            mut self,
            key: impl ::std::convert::Into<::std::string::String>,
            value: impl ::std::convert::Into<$ty>,
        ) -> ::std::result::Result<Self, $crate::error::ModelError> {
            self.inner
                .$field
                .get_or_insert_with($crate::keyed::KeyedCollection::new)
                .try_insert(key, value.into())?;
            ::std::result::Result::Ok(self)
        }

        /// Replaces the whole collection.
        pub fn $setter(
            mut self,
            input: ::std::option::Option<$crate::keyed::KeyedCollection<$ty>>,
        ) -> Self {
            self.inner.$field = input;
            self
        }
    };
}

/// Constraint checks for one field, driven by its rule list.
macro_rules! shape_rules {
    ($value:expr, $path:expr, $out:expr; ) => {};
    ($value:expr, $path:expr, $out:expr; required $(, $($rest:tt)*)?) => {
        $crate::validate::check_required($value.is_some(), $path, $out);
        shape_rules!($value, $path, $out; $($($rest)*)?);
    };
    ($value:expr, $path:expr, $out:expr; length $min:literal ..= $max:literal $(, $($rest:tt)*)?) => {
        $crate::validate::check_length($value.as_deref(), $min, $max, $path, $out);
        shape_rules!($value, $path, $out; $($($rest)*)?);
    };
    ($value:expr, $path:expr, $out:expr; items ..= $max:literal $(, $($rest:tt)*)?) => {
        $crate::validate::check_items($value.as_ref().map(|v| v.len()), 0, $max, $path, $out);
        shape_rules!($value, $path, $out; $($($rest)*)?);
    };
    ($value:expr, $path:expr, $out:expr; items $min:literal ..= $max:literal $(, $($rest:tt)*)?) => {
        $crate::validate::check_items($value.as_ref().map(|v| v.len()), $min, $max, $path, $out);
        shape_rules!($value, $path, $out; $($($rest)*)?);
    };
    ($value:expr, $path:expr, $out:expr; range $min:literal ..= $max:literal $(, $($rest:tt)*)?) => {
        $crate::validate::check_range($value.map(i64::from), $min, $max, $path, $out);
        shape_rules!($value, $path, $out; $($($rest)*)?);
    };
}

// ── Records ─────────────────────────────────────────────────────────

/// Declare a record shape.
///
/// ```ignore
/// shape! {
///     pub struct Tag {
///         string key: String => "Key" [length 1..=128],
///         string value: String => "Value",
///     }
/// }
/// ```
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $kind:ident $field:ident : $ty:ty => $wire:literal $([ $($rule:tt)+ ])?
            ),* $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(
                Debug,
                Clone,
                Default,
                PartialEq,
                Eq,
                Hash,
                ::serde::Serialize,
                ::serde::Deserialize,
            )]
            pub struct $name {
                $(
                    #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                    $field: shape_storage!($kind, $ty),
                )*
            }

            impl $name {
                /// Start an empty builder.
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// Reopen a copy of this value for editing.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] { inner: self.clone() }
                }

                $(
                    shape_getter!($(#[doc = $doc])* $kind $field : $ty);
                )*
            }

            #[doc = concat!("Consuming builder for [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct [<$name Builder>] {
                inner: $name,
            }

            impl [<$name Builder>] {
                $(
                    shape_setter!($kind $field [<set_ $field>] : $ty);
                )*

                pub fn build(self) -> $name {
                    self.inner
                }
            }

            impl ::std::convert::From<[<$name Builder>]> for $name {
                fn from(builder: [<$name Builder>]) -> Self {
                    builder.build()
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    #[allow(unused_mut)]
                    let mut writer = $crate::render::FieldWriter::new(f)?;
                    $(
                        writer.field($wire, self.$field.as_ref())?;
                    )*
                    writer.finish()
                }
            }

            impl $crate::render::Render for $name {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }

            impl $crate::validate::Validate for $name {
                #[allow(unused_variables)]
                fn collect_violations(
                    &self,
                    path: &str,
                    out: &mut ::std::vec::Vec<$crate::validate::Violation>,
                ) {
                    $(
                        let field_path = $crate::validate::join_path(path, $wire);
                        $( shape_rules!(self.$field, &field_path, out; $($rule)+); )?
                        if let ::std::option::Option::Some(value) = &self.$field {
                            $crate::validate::Validate::collect_violations(value, &field_path, out);
                        }
                    )*
                }
            }
        }
    };
}

// ── Enums ───────────────────────────────────────────────────────────

/// Declare a string enum with a forward-compatible `Unknown` variant.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not know, kept verbatim.
            Unknown($crate::enumeration::UnknownValue),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown($crate::enumeration::UnknownValue::new(other)),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(raw: ::std::string::String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                let value = Self::from(raw.as_str());
                if !value.is_known() {
                    ::tracing::debug!(kind = stringify!($name), value = %raw, "unknown enum value");
                }
                ::std::result::Result::Ok(value)
            }
        }

        impl $crate::enumeration::StringEnum for $name {
            fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl $crate::render::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::validate::Validate for $name {}
    };
}

// ── Unions ──────────────────────────────────────────────────────────

/// Declare a tagged union: a tag field plus exactly one payload field.
///
/// Union variant names must match the tag enum's variant names.
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            tag $tag_fn:ident : $tag_ty:ident => $tag_wire:literal;
            $( $variant:ident ( $payload:ty ) => $accessor:ident = $field_wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $( $variant($payload), )+
            /// A tag this client does not know, with every other field kept as JSON.
            Unknown {
                tag: $tag_ty,
                fields: ::serde_json::Map<::std::string::String, ::serde_json::Value>,
            },
        }

        impl $name {
            /// The discriminator, always consistent with the payload.
            pub fn $tag_fn(&self) -> $tag_ty {
                match self {
                    $( Self::$variant(_) => $tag_ty::$variant, )+
                    Self::Unknown { tag, .. } => tag.clone(),
                }
            }

            $(
                pub fn $accessor(&self) -> ::std::option::Option<&$payload> {
                    match self {
                        Self::$variant(payload) => ::std::option::Option::Some(payload),
                        _ => ::std::option::Option::None,
                    }
                }
            )+

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown { .. })
            }
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }
        )+

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                match self {
                    $(
                        Self::$variant(payload) => {
                            ::std::hash::Hash::hash(&$tag_ty::$variant, state);
                            ::std::hash::Hash::hash(payload, state);
                        }
                    )+
                    Self::Unknown { tag, fields } => {
                        ::std::hash::Hash::hash(tag, state);
                        let mut entries: ::std::vec::Vec<_> = fields.iter().collect();
                        entries.sort_by(|a, b| a.0.cmp(b.0));
                        for (key, value) in entries {
                            ::std::hash::Hash::hash(key, state);
                            ::std::hash::Hash::hash(&value.to_string(), state);
                        }
                    }
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeMap as _;
                match self {
                    $(
                        Self::$variant(payload) => {
                            let mut map = serializer.serialize_map(::std::option::Option::Some(2))?;
                            map.serialize_entry($tag_wire, &$tag_ty::$variant)?;
                            map.serialize_entry($field_wire, payload)?;
                            map.end()
                        }
                    )+
                    Self::Unknown { tag, fields } => {
                        let mut map =
                            serializer.serialize_map(::std::option::Option::Some(fields.len() + 1))?;
                        map.serialize_entry($tag_wire, tag)?;
                        for (key, value) in fields {
                            map.serialize_entry(key, value)?;
                        }
                        map.end()
                    }
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                use ::serde::de::Error as _;

                let mut fields = <::serde_json::Map<::std::string::String, ::serde_json::Value>
                    as ::serde::Deserialize>::deserialize(deserializer)?;

                let tag = match fields.remove($tag_wire) {
                    ::std::option::Option::Some(::serde_json::Value::String(raw)) => ::std::option::Option::Some(
                        <$tag_ty as $crate::enumeration::StringEnum>::parse_lenient(&raw),
                    ),
                    ::std::option::Option::Some(::serde_json::Value::Null)
                    | ::std::option::Option::None => ::std::option::Option::None,
                    ::std::option::Option::Some(other) => {
                        return ::std::result::Result::Err(D::Error::custom(format!(
                            "{}: expected a string, found {other}",
                            $tag_wire
                        )));
                    }
                };

                match tag {
                    $(
                        ::std::option::Option::Some($tag_ty::$variant) => {
                            let payload = fields
                                .remove($field_wire)
                                .filter(|value| !value.is_null())
                                .ok_or_else(|| {
                                    D::Error::custom(format!(
                                        "{} is {} but {} is missing",
                                        $tag_wire,
                                        $tag_ty::$variant.as_str(),
                                        $field_wire
                                    ))
                                })?;
                            <$payload as ::serde::Deserialize>::deserialize(payload)
                                .map(Self::$variant)
                                .map_err(D::Error::custom)
                        }
                    )+
                    ::std::option::Option::Some(tag) => {
                        ::tracing::debug!(
                            union = stringify!($name),
                            tag = %tag,
                            "unknown union tag, keeping raw fields"
                        );
                        ::std::result::Result::Ok(Self::Unknown { tag, fields })
                    }
                    ::std::option::Option::None => {
                        let mut found = ::std::vec::Vec::new();
                        $(
                            if let ::std::option::Option::Some(payload) =
                                fields.remove($field_wire).filter(|value| !value.is_null())
                            {
                                found.push(
                                    <$payload as ::serde::Deserialize>::deserialize(payload)
                                        .map(Self::$variant)
                                        .map_err(D::Error::custom)?,
                                );
                            }
                        )+
                        if found.len() > 1 {
                            return ::std::result::Result::Err(D::Error::custom(format!(
                                "{} is missing and {} payloads are present",
                                $tag_wire,
                                found.len()
                            )));
                        }
                        found.pop().ok_or_else(|| {
                            D::Error::custom(format!("{} is missing and no payload is present", $tag_wire))
                        })
                    }
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut writer = $crate::render::FieldWriter::new(f)?;
                match self {
                    $(
                        Self::$variant(payload) => {
                            writer.field($tag_wire, ::std::option::Option::Some(&$tag_ty::$variant))?;
                            writer.field($field_wire, ::std::option::Option::Some(payload))?;
                        }
                    )+
                    Self::Unknown { tag, fields } => {
                        writer.field($tag_wire, ::std::option::Option::Some(tag))?;
                        for (key, value) in fields {
                            writer.field(key, ::std::option::Option::Some(value))?;
                        }
                    }
                }
                writer.finish()
            }
        }

        impl $crate::render::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::validate::Validate for $name {
            fn collect_violations(
                &self,
                path: &str,
                out: &mut ::std::vec::Vec<$crate::validate::Violation>,
            ) {
                match self {
                    $(
                        Self::$variant(payload) => $crate::validate::Validate::collect_violations(
                            payload,
                            &$crate::validate::join_path(path, $field_wire),
                            out,
                        ),
                    )+
                    Self::Unknown { .. } => {}
                }
            }
        }
    };
}

// ── Operations ──────────────────────────────────────────────────────

macro_rules! operation_flag {
    (paginated, $op:ident) => {
        impl $crate::operation::Paginated for $op {
            fn next_token(output: &Self::Output) -> ::std::option::Option<&str> {
                output.next_token()
            }

            fn with_next_token(input: &Self::Input, token: &str) -> Self::Input {
                input.to_builder().next_token(token).build()
            }
        }
    };
}

macro_rules! operation_is_paginated {
    () => {
        false
    };
    (paginated) => {
        true
    };
}

/// Declare operation markers and the registry that lists them.
macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            $op:ident : $input:ident => $output:ident $(, $flag:ident)? ;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $op;

            impl $crate::operation::Operation for $op {
                const NAME: &'static str = stringify!($op);
                type Input = $input;
                type Output = $output;
            }

            $( operation_flag!($flag, $op); )?
        )+

        /// Every operation this crate models, in declaration order.
        pub static REGISTRY: &[$crate::operation::OperationInfo] = &[
            $(
                $crate::operation::OperationInfo {
                    name: stringify!($op),
                    paginated: operation_is_paginated!($($flag)?),
                    inspect_input: $crate::operation::inspect::<$input>,
                    inspect_output: $crate::operation::inspect::<$output>,
                },
            )+
        ];
    };
}
