use core::{
    fmt::Debug,
    hash::Hash,
    num::{NonZeroU16, NonZeroU32, NonZeroU64},
};

/// Pointer generation information type
///
/// Users should never have to implement this, it is implemented only for a few
/// `NonZeroU...` types and for `()`.
pub trait PtrGen: Debug + Hash + Clone + Copy + PartialEq + Eq + PartialOrd + Ord {
    /// The generation that `Ptr::invalid` uses. Arenas with generation
    /// counters start at `two()`, so this one is never handed out.
    fn one() -> Self;
    /// The starting generation of a new arena
    fn two() -> Self;
    /// Returns `this` incremented by one, panicking on overflow
    fn increment(this: Self) -> Self;
}

macro_rules! impl_gen {
    ($($x: ident)*) => {
        $(
            impl PtrGen for $x {
                #[inline]
                fn one() -> Self {
                    match Self::new(1) {
                        Some(x) => x,
                        None => unreachable!(),
                    }
                }

                #[inline]
                fn two() -> Self {
                    match Self::new(2) {
                        Some(x) => x,
                        None => unreachable!(),
                    }
                }

                #[inline]
                fn increment(this: Self) -> Self {
                    match Self::new(this.get().wrapping_add(1)) {
                        Some(x) => x,
                        None => panic!("generation overflow"),
                    }
                }
            }
        )*
    };
}

impl_gen!(NonZeroU16 NonZeroU32 NonZeroU64);

impl PtrGen for () {
    #[inline]
    fn one() -> Self {}

    #[inline]
    fn two() -> Self {}

    #[inline]
    fn increment(_this: Self) -> Self {}
}

/// A typed index into an [crate::Arena], carrying a generation so that
/// pointers to removed entries are detected.
///
/// Use the [crate::ptr_struct] macro instead of implementing this by hand.
/// Distinct structs for distinct arenas let the type system stop a pointer
/// from one arena being used on another.
pub trait Ptr: Debug + Hash + Clone + Copy + PartialEq + Eq + PartialOrd + Ord {
    /// `NonZeroU64` if generation tracking is wanted, otherwise `()`
    type Gen: PtrGen;

    /// A pointer that no arena will ever consider valid (when generations are
    /// tracked)
    fn invalid() -> Self;

    /// The raw slot index
    fn inx(self) -> usize;

    /// The generation of this `Ptr`
    fn gen(self) -> Self::Gen;

    /// Do not use this unless you are manually managing internal details
    #[doc(hidden)]
    fn _from_raw(inx: usize, gen: Self::Gen) -> Self;
}

/// Makes new structs implementing `Ptr`. By default a `NonZeroU64` generation
/// counter is included. Empty parenthesis after the name leave the generation
/// out, and a path inside the parenthesis picks a different generation type.
/// Attributes can follow as a comma separated list.
///
/// ```
/// use core::num::NonZeroU16;
/// use ord_table::{ptr_struct, Arena, Ptr};
///
/// ptr_struct!(P0 doc="A pointer with a generation counter");
/// // no generation counter
/// ptr_struct!(P1());
/// // smaller generation counter
/// ptr_struct!(P2(NonZeroU16));
/// // several of the same kind at once
/// ptr_struct!(Q0; Q1);
///
/// let mut a: Arena<P0, &str> = Arena::new();
/// let p = a.insert("hello");
/// assert_eq!(a[p], "hello");
/// assert!(a.get(P0::invalid()).is_none());
/// ```
#[macro_export]
macro_rules! ptr_struct {
    ($($struct_name:ident($gen_type:path) $($attributes:meta),*);*) => {
        $(
            $(#[$attributes])*
            #[derive(
                core::hash::Hash,
                core::clone::Clone,
                core::marker::Copy,
                core::cmp::PartialEq,
                core::cmp::Eq,
                core::cmp::PartialOrd,
                core::cmp::Ord
            )]
            pub struct $struct_name {
                #[doc(hidden)]
                _slot: usize,
                #[doc(hidden)]
                _gen: $gen_type,
            }

            impl $crate::Ptr for $struct_name {
                type Gen = $gen_type;

                #[inline]
                fn invalid() -> Self {
                    Self {
                        _slot: usize::MAX,
                        _gen: $crate::utils::PtrGen::one(),
                    }
                }

                #[inline]
                fn inx(self) -> usize {
                    self._slot
                }

                #[inline]
                fn gen(self) -> Self::Gen {
                    self._gen
                }

                #[inline]
                #[doc(hidden)]
                fn _from_raw(_slot: usize, _gen: Self::Gen) -> Self {
                    Self {
                        _slot,
                        _gen,
                    }
                }
            }

            impl core::default::Default for $struct_name {
                #[inline]
                fn default() -> Self {
                    $crate::Ptr::invalid()
                }
            }

            // kept on one line so that `Arena`'s `Debug` output stays compact
            impl core::fmt::Debug for $struct_name {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    f.write_fmt(format_args!(
                        "{}[{}]({:?})",
                        stringify!($struct_name),
                        $crate::Ptr::inx(*self),
                        $crate::Ptr::gen(*self),
                    ))
                }
            }
        )*
    };
    ($($struct_name:ident() $($attributes:meta),*);*) => {
        $(
            $(#[$attributes])*
            #[derive(
                core::hash::Hash,
                core::clone::Clone,
                core::marker::Copy,
                core::cmp::PartialEq,
                core::cmp::Eq,
                core::cmp::PartialOrd,
                core::cmp::Ord
            )]
            pub struct $struct_name {
                #[doc(hidden)]
                _slot: usize,
            }

            impl $crate::Ptr for $struct_name {
                type Gen = ();

                #[inline]
                fn invalid() -> Self {
                    Self {
                        _slot: usize::MAX,
                    }
                }

                #[inline]
                fn inx(self) -> usize {
                    self._slot
                }

                #[inline]
                fn gen(self) -> Self::Gen {}

                #[inline]
                #[doc(hidden)]
                fn _from_raw(_slot: usize, _gen: ()) -> Self {
                    Self { _slot }
                }
            }

            impl core::default::Default for $struct_name {
                #[inline]
                fn default() -> Self {
                    $crate::Ptr::invalid()
                }
            }

            impl core::fmt::Debug for $struct_name {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    f.write_fmt(format_args!(
                        "{}[{}]",
                        stringify!($struct_name),
                        $crate::Ptr::inx(*self),
                    ))
                }
            }
        )*
    };
    ($($struct_name:ident $($attributes:meta),*);*) => {
        $(
            $crate::ptr_struct!(
                $struct_name(core::num::NonZeroU64)
                $($attributes),*
            );
        )*
    };
}
