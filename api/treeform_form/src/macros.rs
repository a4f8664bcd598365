// Copyright 2015-2024 Treeform developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Creates an [`Accessor::Field`](crate::Accessor::Field) that projects a named field of a
/// struct.
///
/// ```
/// use treeform_form::{field, Accessor, FieldAccessor};
///
/// struct Person {
///     name: String,
/// }
///
/// let accessor: Accessor<Person, String> = field!(Person, name);
/// let name = FieldAccessor::new("name", accessor);
///
/// let mut person = Person { name: "Ada".to_string() };
/// name.set(&mut person, "Grace".to_string());
/// assert_eq!(name.get(&person), "Grace");
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty, $name:ident) => {
        $crate::Accessor::Field {
            get: |owner: &$owner| &owner.$name,
            get_mut: |owner: &mut $owner| &mut owner.$name,
        }
    };
}

/// Creates an [`Accessor`](crate::Accessor) from the name of a field or the names of accessor
/// methods on a type. This is the syntax used by [`mapped_form!`](crate::mapped_form):
///
/// * `field(name)`: the field `name`.
/// * `reference(name, name_mut)`: methods returning `&F` and `&mut F`.
/// * `read_only(name)`: a method returning `F`.
/// * `get_set(name, set_name)`: methods returning `F` and taking `F`.
#[macro_export]
macro_rules! accessor {
    ($owner:ty, field($name:ident)) => {
        $crate::field!($owner, $name)
    };
    ($owner:ty, reference($get:ident, $get_mut:ident)) => {
        $crate::Accessor::Reference {
            get: <$owner>::$get,
            get_mut: <$owner>::$get_mut,
        }
    };
    ($owner:ty, read_only($get:ident)) => {
        $crate::Accessor::ReadOnly(<$owner>::$get)
    };
    ($owner:ty, get_set($get:ident, $set:ident)) => {
        $crate::Accessor::GetSet {
            get: <$owner>::$get,
            set: <$owner>::$set,
        }
    };
}

/// Declares the fields of a composite type. This builds a single, shared
/// [`Mapper`](crate::Mapper) for the type, on first use, and implements
/// [`Mapped`](crate::Mapped), [`ToTree`](crate::ToTree) and [`FromTree`](crate::FromTree) for
/// it. Each field is declared with its name in the value tree and an accessor (see
/// [`accessor!`](crate::accessor)).
///
/// Declaring two fields with the same name is an error which is reported, as a panic, the first
/// time that the mapper is used.
///
/// ```
/// use treeform_form::{mapped_form, ToTree};
/// use treeform_model::object;
///
/// #[derive(Default)]
/// struct Temperature {
///     celsius: f64,
///     station: String,
/// }
///
/// impl Temperature {
///     fn fahrenheit(&self) -> f64 {
///         self.celsius * 1.8 + 32.0
///     }
///
///     fn station(&self) -> &String {
///         &self.station
///     }
///
///     fn station_mut(&mut self) -> &mut String {
///         &mut self.station
///     }
/// }
///
/// mapped_form! {
///     Temperature {
///         "celsius" => field(celsius),
///         "fahrenheit" => read_only(fahrenheit),
///         "station" => reference(station, station_mut),
///     }
/// }
///
/// let reading = Temperature { celsius: 100.0, station: "north".to_string() };
/// assert_eq!(reading.to_tree(), object! {
///     "celsius" => 100.0,
///     "fahrenheit" => 212.0,
///     "station" => "north",
/// });
/// ```
#[macro_export]
macro_rules! mapped_form {
    ($owner:ty { $($name:literal => $kind:ident($($arg:ident),+)),* $(,)? }) => {
        impl $crate::Mapped for $owner {
            fn mapper() -> &'static $crate::Mapper<Self> {
                static MAPPER: ::std::sync::OnceLock<$crate::Mapper<$owner>> =
                    ::std::sync::OnceLock::new();
                MAPPER.get_or_init(|| {
                    $crate::MapperBuilder::<$owner>::new()
                        $(.field($name, $crate::accessor!($owner, $kind($($arg),+))))*
                        .build()
                        .expect("Invalid field declarations.")
                })
            }
        }

        impl $crate::ToTree for $owner {
            fn to_tree(&self) -> $crate::model::Value {
                <$owner as $crate::Mapped>::mapper().to_tree(self)
            }
        }

        impl $crate::FromTree for $owner {
            fn from_tree(
                &mut self,
                node: &$crate::model::Value,
            ) -> ::std::result::Result<(), $crate::ReadError> {
                <$owner as $crate::Mapped>::mapper().from_tree(node, self)
            }
        }
    };
}

/// Declares the labels of the constants of a field-less enumeration and implements
/// [`EnumLabels`](crate::EnumLabels), [`ToTree`](crate::ToTree) and
/// [`FromTree`](crate::FromTree) for it. Every constant must be given a label.
///
/// ```
/// use treeform_form::{enum_form, FromTree, ToTree};
/// use treeform_model::Value;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// enum_form! {
///     Level {
///         Low => "low",
///         High => "high",
///     }
/// }
///
/// assert_eq!(Level::High.to_tree(), Value::string("high"));
///
/// let mut level = Level::Low;
/// level.from_tree(&Value::string("high")).unwrap();
/// assert_eq!(level, Level::High);
///
/// level.from_tree(&Value::string("medium")).unwrap();
/// assert_eq!(level, Level::High);
/// ```
#[macro_export]
macro_rules! enum_form {
    ($owner:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $crate::EnumLabels for $owner {
            fn label(&self) -> &'static str {
                match self {
                    $($owner::$variant => $label,)+
                }
            }

            fn labels() -> &'static $crate::LabelMap<Self> {
                static LABELS: ::std::sync::OnceLock<$crate::LabelMap<$owner>> =
                    ::std::sync::OnceLock::new();
                LABELS.get_or_init(|| {
                    $crate::LabelMap::new(::std::vec![$(($owner::$variant, $label)),+])
                })
            }
        }

        impl $crate::ToTree for $owner {
            fn to_tree(&self) -> $crate::model::Value {
                $crate::enumeration::write_label(self)
            }
        }

        impl $crate::FromTree for $owner {
            fn from_tree(
                &mut self,
                node: &$crate::model::Value,
            ) -> ::std::result::Result<(), $crate::ReadError> {
                $crate::enumeration::read_label(node, self)
            }
        }
    };
}
