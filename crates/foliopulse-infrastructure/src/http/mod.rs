mod client;

pub use client::{GitHubClient, USER_AGENT};
