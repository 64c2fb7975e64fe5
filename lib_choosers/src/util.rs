use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub(crate) fn random_pick<'a, T, R>(choices: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    choices.choose(rng)
}

pub(crate) fn random_choice<T, R>(choices: &[T], rng: &mut R) -> T
where
    T: Copy,
    R: Rng + ?Sized,
{
    *random_pick(choices, rng).expect("Attempted to pick a random choice on an empty slice.")
}

pub(crate) fn get_rng_deterministic(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}
