//! Round sampling against the shipped pools and custom ones.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use cyberquest::quiz::data::{Email, EMAILS, EMPLOYEES, PASSWORDS};
use cyberquest::quiz::sampler::{
    insider_round, password_round, phishing_round, phishing_round_from, ROUND_SIZE,
};
use cyberquest::quiz::SampleError;

fn email(id: u32, is_phishing: bool) -> Email {
    Email {
        id,
        sender: "someone@example.com",
        subject: "Subject",
        date: "2024-01-01",
        content: "Body",
        is_phishing,
        clues: &[],
    }
}

#[test]
fn shipped_pools_have_expected_mix() {
    assert_eq!(EMAILS.len(), 50);
    assert_eq!(EMAILS.iter().filter(|e| e.is_phishing).count(), 20);
    assert_eq!(PASSWORDS.len(), 55);
    assert_eq!(PASSWORDS.iter().filter(|p| p.is_weak()).count(), 15);
    assert_eq!(EMPLOYEES.len(), 20);
    assert_eq!(EMPLOYEES.iter().filter(|e| e.is_threat()).count(), 10);
}

#[test]
fn rounds_work_with_thread_rng() {
    let mut rng = rand::thread_rng();
    assert_eq!(phishing_round(&mut rng).unwrap().len(), ROUND_SIZE);
    assert_eq!(password_round(&mut rng).unwrap().len(), ROUND_SIZE);
    assert_eq!(insider_round(&mut rng).unwrap().len(), ROUND_SIZE);
}

#[test]
fn exact_size_pool_uses_every_item() {
    let pool: Vec<Email> = (0..5).map(|id| email(id, id == 3)).collect();
    let round = phishing_round_from(&pool, &mut StdRng::seed_from_u64(9)).unwrap();
    let ids: HashSet<u32> = round.iter().map(|e| e.id).collect();
    assert_eq!(ids, (0..5).collect());
}

#[test]
fn pool_without_phishing_is_rejected() {
    let pool: Vec<Email> = (0..10).map(|id| email(id, false)).collect();
    let err = phishing_round_from(&pool, &mut StdRng::seed_from_u64(9)).unwrap_err();
    assert_eq!(
        err,
        SampleError::PoolTooSmall {
            category: "phishing emails",
            wanted: 1,
            available: 0,
        }
    );
    assert_eq!(err.to_string(), "cannot draw 1 phishing emails from a pool of 0");
}

#[test]
fn consecutive_rounds_differ() {
    let mut rng = StdRng::seed_from_u64(2024);
    let rounds: HashSet<Vec<u32>> = (0..10)
        .map(|_| phishing_round(&mut rng).unwrap().iter().map(|e| e.id).collect())
        .collect();
    assert!(rounds.len() > 1);
}
