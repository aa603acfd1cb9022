//! Prints an argon2 hash suitable for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash-password <password>`

use std::process::ExitCode;

use donor_club_server::auth::hash_password;

fn main() -> ExitCode {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-password <password>");
        return ExitCode::FAILURE;
    };

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            ExitCode::FAILURE
        }
    }
}
