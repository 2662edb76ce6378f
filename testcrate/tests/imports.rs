//! makes sure all variations of the macro compile and do not require imports
//! other than the macro itself

use std::num::{NonZeroU16, NonZeroU32};

use ord_table::ptr_struct;

ptr_struct!(P0(NonZeroU16));
ptr_struct!(P1());
ptr_struct!(P2);
ptr_struct!(P3(NonZeroU32) doc = "pointer with a 32 bit generation");
ptr_struct!(P4 doc = "documented", allow(dead_code));
ptr_struct!(P5; Q0; Q1);
ptr_struct!(R0(NonZeroU16); R1(NonZeroU16));
