//! repo-pager - paged GitHub repository search
//!
//! A host list framework drives a [`paging::PagingSource`] one page at a time;
//! [`github::GithubPagingSource`] answers those loads from the GitHub search API.
//!
//! # Architecture
//! - `paging`: the paging contract (load params, pages, results, snapshots)
//!   and a minimal host driver
//! - `github`: search service collaborator and the GitHub paging source
//! - `config`: Configuration management
//! - `interfaces`: Command-line interface
//! - `system`: Logging initialization

pub mod cli;
pub mod config;
pub mod errors;
pub mod github;
pub mod interfaces;
pub mod paging;
pub mod system;
