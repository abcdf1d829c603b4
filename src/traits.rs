/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// Division is also available on these, because every primitive has it
    /// (truncating, for integers), and vectors of integers are routinely
    /// halved and quartered.
    ///
    /// You get primitive floats and integers. That's all that this API is
    /// willing to commit to at the moment. This trait is sealed to avoid
    /// accidental commitments.
    pub trait Semiring : Sealed { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, division,
    /// and a square root.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types.
    pub trait Field : Ring + Sealed { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    impl_field!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    impl_ring!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    impl_semiring!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Internal-use marker traits for generic implementations.
///
/// The public traits above say *which* scalars are supported; these say
/// what the implementation is allowed to do with them.
pub(crate) mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default
        + PartialEq + PartialOrd
        + SelfAdd + SelfMul + SelfDiv
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
    {
        fn from_uint(u: u8) -> Self;
        #[inline(always)] fn two() -> Self { Self::from_uint(2) }
    }

    gen_each!{
        @{semiring}
        impl_primitive_semiring!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
            }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    { }

    gen_each!{
        @{ring}
        impl_primitive_ring!({$T:ty})
        => {
            impl PrimitiveRing for $T { }
        };
    }

    pub trait PrimitiveFloat
        : PrimitiveRing
    {
        fn sqrt(self) -> Self;
        fn acos(self) -> Self;
        fn min(self, b: Self) -> Self;
        fn max(self, b: Self) -> Self;
    }

    gen_each!{
        @{float}
        impl_primitive_float!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { <$T>::sqrt(self) }
                #[inline(always)] fn acos(self) -> $T { <$T>::acos(self) }
                #[inline(always)] fn min(self, b: Self) -> $T { <$T>::min(self, b) }
                #[inline(always)] fn max(self, b: Self) -> $T { <$T>::max(self, b) }
            }
        };
    }
}
