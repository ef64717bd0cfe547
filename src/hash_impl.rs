use crate::hash::Hashable;
use std::hash::Hasher;

// Integers are written big-endian so leaf digests do not depend on the host.
macro_rules! impl_write_be {
    ($($ty:ident,)*) => {$(
        impl<H: Hasher> Hashable<H> for $ty {
            fn hash(&self, state: &mut H) {
                state.write(&self.to_be_bytes())
            }
        }
    )*}
}

impl_write_be! {
    u16,
    u32,
    u64,
    u128,
    i16,
    i32,
    i64,
    i128,
}

impl<H: Hasher> Hashable<H> for u8 {
    fn hash(&self, state: &mut H) {
        state.write_u8(*self)
    }

    fn hash_slice(data: &[u8], state: &mut H) {
        state.write(data)
    }
}

impl<H: Hasher> Hashable<H> for bool {
    fn hash(&self, state: &mut H) {
        state.write_u8(*self as u8)
    }
}

impl<H: Hasher> Hashable<H> for str {
    fn hash(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl<H: Hasher> Hashable<H> for String {
    fn hash(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl<H: Hasher, T: Hashable<H>> Hashable<H> for [T] {
    fn hash(&self, state: &mut H) {
        Hashable::hash_slice(self, state)
    }
}

impl<H: Hasher, T: Hashable<H>, const N: usize> Hashable<H> for [T; N] {
    fn hash(&self, state: &mut H) {
        Hashable::hash_slice(&self[..], state)
    }
}

impl<H: Hasher, T: Hashable<H>> Hashable<H> for Vec<T> {
    fn hash(&self, state: &mut H) {
        Hashable::hash_slice(self.as_slice(), state)
    }
}

macro_rules! impl_hash_tuple {
    ( $($name:ident)+) => (
        impl<Z: Hasher, $($name: Hashable<Z>),*> Hashable<Z> for ($($name,)*) {
            #[allow(non_snake_case)]
            fn hash(&self, state: &mut Z) {
                let ($(ref $name,)*) = *self;
                $($name.hash(state);)*
            }
        }
    );
}

impl_hash_tuple! { A }
impl_hash_tuple! { A B }
impl_hash_tuple! { A B C }
impl_hash_tuple! { A B C D }
impl_hash_tuple! { A B C D E }
impl_hash_tuple! { A B C D E F }

impl<'a, H: Hasher, T: ?Sized + Hashable<H>> Hashable<H> for &'a T {
    fn hash(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<'a, H: Hasher, T: ?Sized + Hashable<H>> Hashable<H> for &'a mut T {
    fn hash(&self, state: &mut H) {
        (**self).hash(state);
    }
}
