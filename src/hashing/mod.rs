//! Hashing helpers: salted 64-bit digests for single values, and a
//! polynomial [`RollingHash`] over whole sequences.
//!
//! Integer digests are mixed through [`splitmix64`] with a random
//! per-process salt, so the mapping cannot be targeted by adversarial
//! inputs and changes on every run. Composite values (tuples, slices,
//! strings) fold their parts' digests polynomially with [`BASE`] modulo
//! [`MODULUS`].

mod rolling;

pub use rolling::RollingHash;

use std::sync::OnceLock;

/// The polynomial base used to fold digests together.
pub const BASE: u64 = 449;
/// The prime modulus all folded digests live under.
pub const MODULUS: u64 = 998_244_353;

const _: () = assert!(BASE < MODULUS);
// Folding multiplies two reduced values in a u64.
const _: () = assert!(MODULUS <= u64::MAX / MODULUS);

/// The standard 64-bit finalizer of the splitmix64 generator.
pub const fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    value = (value ^ (value >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    value = (value ^ (value >> 27)).wrapping_mul(0x94d049bb133111eb);
    value ^ (value >> 31)
}

// Drawn once per process. Seeding from the RNG rather than the clock keeps
// the digests unpredictable even across runs started in the same instant.
fn process_salt() -> u64 {
    static SALT: OnceLock<u64> = OnceLock::new();
    *SALT.get_or_init(rand::random)
}

/// A 64-bit digest, stable within one run of the process.
///
/// Equal values always produce equal digests; unequal values collide with
/// probability around `1 / MODULUS` for composites (folded values are
/// reduced modulo [`MODULUS`]).
pub trait Digest {
    fn digest(&self) -> u64;
}

/// Folds already-computed digests into one, left to right.
pub fn fold_digests<I: IntoIterator<Item = u64>>(digests: I) -> u64 {
    let mut result: u64 = 0;
    for digest in digests {
        result = (result * BASE % MODULUS + digest % MODULUS) % MODULUS;
    }
    result
}

macro_rules! impl_digest_int {
    ($($t:ty),*) => {$(
        impl Digest for $t {
            fn digest(&self) -> u64 {
                splitmix64(process_salt().wrapping_add(*self as u64))
            }
        }
    )*};
}

impl_digest_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Digest for char {
    fn digest(&self) -> u64 {
        (*self as u32).digest()
    }
}

impl Digest for bool {
    fn digest(&self) -> u64 {
        (*self as u8).digest()
    }
}

impl<T: Digest + ?Sized> Digest for &T {
    fn digest(&self) -> u64 {
        (**self).digest()
    }
}

impl Digest for str {
    fn digest(&self) -> u64 {
        fold_digests(self.bytes().map(|b| b.digest()))
    }
}

impl Digest for String {
    fn digest(&self) -> u64 {
        self.as_str().digest()
    }
}

impl<T: Digest> Digest for [T] {
    fn digest(&self) -> u64 {
        fold_digests(self.iter().map(|item| item.digest()))
    }
}

impl<T: Digest> Digest for Vec<T> {
    fn digest(&self) -> u64 {
        self.as_slice().digest()
    }
}

impl<T: Digest, const N: usize> Digest for [T; N] {
    fn digest(&self) -> u64 {
        self.as_slice().digest()
    }
}

macro_rules! impl_digest_tuple {
    ($($name:ident),+) => {
        impl<$($name: Digest),+> Digest for ($($name,)+) {
            fn digest(&self) -> u64 {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                fold_digests([$($name.digest()),+])
            }
        }
    };
}

impl_digest_tuple!(A);
impl_digest_tuple!(A, B);
impl_digest_tuple!(A, B, C);
impl_digest_tuple!(A, B, C, D);
