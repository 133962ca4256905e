/// An enum with two string forms: the label shown to the user and the
/// lowercase token sent to the controller.
pub trait Labelled: Copy + Eq + Sized + 'static {
    /// Value used when a display label isn't recognised.
    const FALLBACK: Self;

    fn display(self) -> &'static str;

    fn wire(self) -> &'static str;

    fn from_display(label: &str) -> Option<Self>;

    fn from_wire(token: &str) -> Option<Self>;

    /// All display labels, in table order.
    fn display_labels() -> Vec<&'static str>;

    fn from_display_or_fallback(label: &str) -> Self {
        Self::from_display(label).unwrap_or(Self::FALLBACK)
    }
}


/// Define an enum together with its display/wire table.
///
/// Both lookup directions are generated from the single list of
/// `Variant => ("Display", "wire")` entries so they can't drift apart.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:ident, default = $default:ident {
            $($variant:ident => ($display:literal, $wire:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::strum_macros::EnumIter)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            const TABLE: &'static [($name, &'static str, &'static str)] = &[
                $(($name::$variant, $display, $wire)),+
            ];
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::protocol::labels::Labelled for $name {
            const FALLBACK: Self = Self::$fallback;

            fn display(self) -> &'static str {
                match self {
                    $(Self::$variant => $display),+
                }
            }

            fn wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn from_display(label: &str) -> Option<Self> {
                Self::TABLE.iter()
                    .find(|(_, display, _)| *display == label)
                    .map(|(value, _, _)| *value)
            }

            fn from_wire(token: &str) -> Option<Self> {
                Self::TABLE.iter()
                    .find(|(_, _, wire)| *wire == token)
                    .map(|(value, _, _)| *value)
            }

            fn display_labels() -> Vec<&'static str> {
                Self::TABLE.iter().map(|(_, display, _)| *display).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::protocol::labels::Labelled::display(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> where
                S: ::serde::Serializer
            {
                serializer.serialize_str($crate::protocol::labels::Labelled::wire(*self))
            }
        }
    }
}

pub(crate) use labelled_enum;
