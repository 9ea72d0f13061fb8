/******************************************\
|==========================================|
|      Macro: impl_from_to_primitive       |
|==========================================|
\******************************************/

/// Generates `from_unchecked` and `index` for a fieldless enum backed by `u8`.
///
/// The second arm targets enums with a different backing type (`i8` for directions,
/// `u16` for move flags) and only generates `from_unchecked`.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts a raw u8 into a ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be the discriminant of an existing variant (`index < Self::NUM`)
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Returns the discriminant of the ", stringify!($enum_name), " as a usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };

    ($enum_name:ident, $type_name:ty) => {
        impl $enum_name {
            #[doc=concat!("Converts a raw ", stringify!($type_name), " into a ", stringify!($enum_name))]
            /// ## Safety
            /// - `value` must be the discriminant of an existing variant
            #[inline]
            pub const unsafe fn from_unchecked(value: $type_name) -> Self {
                unsafe { std::mem::transmute(value) }
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates `iter()` over every variant of an enum that has `NUM` and `from_unchecked`.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns an iterator over every ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|             Macro: impl_op               |
|==========================================|
\******************************************/

/// Implements a binary operator for a single-field tuple struct against itself.
#[macro_export]
macro_rules! impl_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            type Output = Self;

            fn $method_name(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }
    };
}

/// Implements the assigning form of an operator already provided by [`impl_op`].
#[macro_export]
macro_rules! impl_assign_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            fn $method_name(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements `&`, `|` and their assigning forms for a flag set.
///
/// No `^` or `!`: flag sets built with this macro only ever gain bits.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_op!($struct_name, BitAnd, bitand, &);
        $crate::impl_op!($struct_name, BitOr, bitor, |);

        $crate::impl_assign_op!($struct_name, BitAndAssign, bitand_assign, &);
        $crate::impl_assign_op!($struct_name, BitOrAssign, bitor_assign, |);
    };
}
