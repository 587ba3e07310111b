//! `routemap candidates <path>` – list lookup keys in the order they are tried.

use routemap_core::Candidate;

pub fn run_candidates(path: &str) {
    println!("{:<3} {:<20} {:<7} {}", "#", "CANDIDATE", "SUFFIX", "KEY");
    for (i, (candidate, key)) in Candidate::keys(path).enumerate() {
        println!(
            "{:<3} {:<20} {:<7} {:?}",
            i + 1,
            candidate.name(),
            format!("{:?}", candidate.suffix()),
            key
        );
    }
}
