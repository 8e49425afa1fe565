//! comment-tree - threaded comments with likes
//!
//! Plays the host view for a post's discussion: posts comments and
//! replies as the configured viewer, toggles likes and renders threads.
//!
//! ## Quick Start
//!
//! ```bash
//! # Load the sample discussion
//! comment-tree seed my-post
//!
//! # Read it
//! comment-tree show my-post --format text
//!
//! # Join in
//! comment-tree --user sam comment my-post "Nice write-up"
//! comment-tree like my-post 3f2a
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
