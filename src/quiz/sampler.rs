//! Round sampling.
//!
//! Each challenge shows a working set of five items drawn from a static
//! pool. Every category is drawn without replacement, the categories are
//! concatenated and the result is shuffled, so the answer can sit anywhere
//! in the round. The random source is passed in so rounds are reproducible
//! under a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::data::{Email, Employee, PasswordEntry, EMAILS, EMPLOYEES, PASSWORDS};

/// Items shown per round.
pub const ROUND_SIZE: usize = 5;

/// Weak passwords per round are drawn uniformly from this range.
pub const WEAK_PASSWORDS: std::ops::RangeInclusive<usize> = 1..=3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("cannot draw {wanted} {category} from a pool of {available}")]
    PoolTooSmall {
        category: &'static str,
        wanted: usize,
        available: usize,
    },
}

/// Draw `count` distinct items from `pool`.
fn draw<'a, T, R>(
    pool: &[&'a T],
    count: usize,
    category: &'static str,
    rng: &mut R,
) -> Result<Vec<&'a T>, SampleError>
where
    R: Rng + ?Sized,
{
    if pool.len() < count {
        return Err(SampleError::PoolTooSmall {
            category,
            wanted: count,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, count).copied().collect())
}

/// Concatenate the drawn categories and shuffle them together.
fn combine<'a, T, R>(mut first: Vec<&'a T>, rest: Vec<&'a T>, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    first.extend(rest);
    first.shuffle(rng);
    first
}

/// One phishing email and four legitimate ones, from `pool`.
pub fn phishing_round_from<'a, R: Rng + ?Sized>(
    pool: &'a [Email],
    rng: &mut R,
) -> Result<Vec<&'a Email>, SampleError> {
    let (phishing, legitimate): (Vec<&Email>, Vec<&Email>) =
        pool.iter().partition(|email| email.is_phishing);
    let bait = draw(&phishing, 1, "phishing emails", rng)?;
    let inbox = draw(&legitimate, ROUND_SIZE - 1, "legitimate emails", rng)?;
    Ok(combine(bait, inbox, rng))
}

/// One to three weak passwords, topped up with strong ones, from `pool`.
pub fn password_round_from<'a, R: Rng + ?Sized>(
    pool: &'a [PasswordEntry],
    rng: &mut R,
) -> Result<Vec<&'a PasswordEntry>, SampleError> {
    let (weak, strong): (Vec<&PasswordEntry>, Vec<&PasswordEntry>) =
        pool.iter().partition(|entry| entry.is_weak());
    let weak_count = rng.gen_range(WEAK_PASSWORDS);
    let weak = draw(&weak, weak_count, "weak passwords", rng)?;
    let strong = draw(&strong, ROUND_SIZE - weak_count, "strong passwords", rng)?;
    Ok(combine(weak, strong, rng))
}

/// One insider threat and four benign profiles, from `pool`.
pub fn insider_round_from<'a, R: Rng + ?Sized>(
    pool: &'a [Employee],
    rng: &mut R,
) -> Result<Vec<&'a Employee>, SampleError> {
    let (threats, benign): (Vec<&Employee>, Vec<&Employee>) =
        pool.iter().partition(|employee| employee.is_threat());
    let threat = draw(&threats, 1, "insider threats", rng)?;
    let staff = draw(&benign, ROUND_SIZE - 1, "benign employees", rng)?;
    Ok(combine(threat, staff, rng))
}

pub fn phishing_round<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<&'static Email>, SampleError> {
    phishing_round_from(&EMAILS, rng)
}

pub fn password_round<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<Vec<&'static PasswordEntry>, SampleError> {
    password_round_from(&PASSWORDS, rng)
}

pub fn insider_round<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<Vec<&'static Employee>, SampleError> {
    insider_round_from(&EMPLOYEES, rng)
}
